use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::client::models::ClientId;
use crate::domain::client::ports::ClientRepository;
use crate::domain::complaint::errors::ComplaintError;
use crate::domain::complaint::models::Complaint;
use crate::domain::complaint::models::ComplaintId;
use crate::domain::complaint::models::ComplaintStatus;
use crate::domain::complaint::models::CreateComplaintCommand;
use crate::domain::complaint::models::NewComplaint;
use crate::domain::complaint::ports::ComplaintRepository;
use crate::domain::complaint::ports::ComplaintServicePort;

/// Domain service implementation for complaint operations.
pub struct ComplaintService<PR, CR>
where
    PR: ComplaintRepository,
    CR: ClientRepository,
{
    complaints: Arc<PR>,
    clients: Arc<CR>,
}

impl<PR, CR> ComplaintService<PR, CR>
where
    PR: ComplaintRepository,
    CR: ClientRepository,
{
    pub fn new(complaints: Arc<PR>, clients: Arc<CR>) -> Self {
        Self {
            complaints,
            clients,
        }
    }

    async fn ensure_client_exists(&self, client_id: ClientId) -> Result<(), ComplaintError> {
        self.clients
            .find_by_id(client_id)
            .await?
            .map(|_| ())
            .ok_or(ComplaintError::ClientNotFound(client_id.0))
    }
}

#[async_trait]
impl<PR, CR> ComplaintServicePort for ComplaintService<PR, CR>
where
    PR: ComplaintRepository,
    CR: ClientRepository,
{
    async fn create_complaint(
        &self,
        client_id: ClientId,
        command: CreateComplaintCommand,
    ) -> Result<Complaint, ComplaintError> {
        self.ensure_client_exists(client_id).await?;

        let new_complaint = NewComplaint {
            subject: command.subject,
            description: command.description,
            opened_on: command.opened_on,
            status: command.status,
            client_id,
        };
        self.complaints.create(new_complaint).await
    }

    async fn list_for_client(
        &self,
        client_id: ClientId,
    ) -> Result<Vec<Complaint>, ComplaintError> {
        self.ensure_client_exists(client_id).await?;
        self.complaints.list_by_client(client_id).await
    }

    async fn update_status(
        &self,
        id: ComplaintId,
        status: ComplaintStatus,
    ) -> Result<Complaint, ComplaintError> {
        self.complaints.update_status(id, status).await
    }
}
