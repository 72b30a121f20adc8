use async_trait::async_trait;

use crate::domain::client::models::ClientId;
use crate::domain::complaint::errors::ComplaintError;
use crate::domain::complaint::models::Complaint;
use crate::domain::complaint::models::ComplaintId;
use crate::domain::complaint::models::ComplaintStatus;
use crate::domain::complaint::models::CreateComplaintCommand;
use crate::domain::complaint::models::NewComplaint;

/// Port for complaint domain service operations.
#[async_trait]
pub trait ComplaintServicePort: Send + Sync + 'static {
    /// File a complaint for an existing client.
    ///
    /// # Errors
    /// * `ClientNotFound` - No client with this id
    /// * `DatabaseError` - Database operation failed
    async fn create_complaint(
        &self,
        client_id: ClientId,
        command: CreateComplaintCommand,
    ) -> Result<Complaint, ComplaintError>;

    /// List an existing client's complaints.
    ///
    /// # Errors
    /// * `ClientNotFound` - No client with this id
    /// * `DatabaseError` - Database operation failed
    async fn list_for_client(&self, client_id: ClientId)
        -> Result<Vec<Complaint>, ComplaintError>;

    /// Update a complaint's handling status.
    ///
    /// # Errors
    /// * `NotFound` - Complaint does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update_status(
        &self,
        id: ComplaintId,
        status: ComplaintStatus,
    ) -> Result<Complaint, ComplaintError>;
}

/// Persistence operations for complaints.
#[async_trait]
pub trait ComplaintRepository: Send + Sync + 'static {
    /// Persist a new complaint; storage assigns the id.
    ///
    /// # Errors
    /// * `ClientNotFound` - Referenced client does not exist
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, new_complaint: NewComplaint) -> Result<Complaint, ComplaintError>;

    /// List a client's complaints ordered by id.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_by_client(&self, client_id: ClientId)
        -> Result<Vec<Complaint>, ComplaintError>;

    /// Update a complaint's status, returning the updated record.
    ///
    /// # Errors
    /// * `NotFound` - Complaint does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update_status(
        &self,
        id: ComplaintId,
        status: ComplaintStatus,
    ) -> Result<Complaint, ComplaintError>;
}
