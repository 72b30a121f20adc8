use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::client::errors::ClientError;
use crate::domain::client::models::Client;
use crate::domain::client::models::ClientId;
use crate::domain::client::models::CreateClientCommand;
use crate::domain::client::models::NewClient;
use crate::domain::client::models::Page;
use crate::domain::client::ports::ClientRepository;
use crate::domain::client::ports::ClientServicePort;

/// Domain service implementation for client operations.
pub struct ClientService<CR>
where
    CR: ClientRepository,
{
    repository: Arc<CR>,
}

impl<CR> ClientService<CR>
where
    CR: ClientRepository,
{
    pub fn new(repository: Arc<CR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<CR> ClientServicePort for ClientService<CR>
where
    CR: ClientRepository,
{
    async fn create_client(&self, command: CreateClientCommand) -> Result<Client, ClientError> {
        let new_client = NewClient {
            name: command.name,
            email: command.email,
            phone: command.phone,
        };
        self.repository.create(new_client).await
    }

    async fn list_clients(&self, page: Page) -> Result<Vec<Client>, ClientError> {
        self.repository.list(page).await
    }

    async fn get_client(&self, id: ClientId) -> Result<Client, ClientError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ClientError::NotFound(id.0))
    }

    async fn delete_client(&self, id: ClientId) -> Result<(), ClientError> {
        self.repository.delete(id).await
    }
}
