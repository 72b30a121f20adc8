use async_trait::async_trait;

use crate::domain::client::errors::ClientError;
use crate::domain::client::models::Client;
use crate::domain::client::models::ClientId;
use crate::domain::client::models::CreateClientCommand;
use crate::domain::client::models::NewClient;
use crate::domain::client::models::Page;

/// Port for client domain service operations.
#[async_trait]
pub trait ClientServicePort: Send + Sync + 'static {
    /// Create a new client.
    ///
    /// # Errors
    /// * `NameAlreadyExists` - Client name is already taken
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn create_client(&self, command: CreateClientCommand) -> Result<Client, ClientError>;

    /// List clients with offset pagination.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_clients(&self, page: Page) -> Result<Vec<Client>, ClientError>;

    /// Retrieve a client by identifier.
    ///
    /// # Errors
    /// * `NotFound` - Client does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_client(&self, id: ClientId) -> Result<Client, ClientError>;

    /// Delete a client and, through storage cascade, its invoices and
    /// complaints.
    ///
    /// # Errors
    /// * `NotFound` - Client does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete_client(&self, id: ClientId) -> Result<(), ClientError>;
}

/// Persistence operations for clients.
#[async_trait]
pub trait ClientRepository: Send + Sync + 'static {
    /// Persist a new client; storage assigns the id.
    ///
    /// # Errors
    /// * `NameAlreadyExists` - Client name is already taken
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, new_client: NewClient) -> Result<Client, ClientError>;

    /// List clients ordered by id with offset pagination.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list(&self, page: Page) -> Result<Vec<Client>, ClientError>;

    /// Retrieve a client by identifier (None if not found).
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: ClientId) -> Result<Option<Client>, ClientError>;

    /// Remove a client; owned invoices and complaints go with it.
    ///
    /// # Errors
    /// * `NotFound` - Client does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: ClientId) -> Result<(), ClientError>;
}
