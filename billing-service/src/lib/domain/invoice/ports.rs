use async_trait::async_trait;

use crate::domain::client::models::ClientId;
use crate::domain::invoice::errors::InvoiceError;
use crate::domain::invoice::models::CreateInvoiceCommand;
use crate::domain::invoice::models::Invoice;
use crate::domain::invoice::models::InvoiceId;
use crate::domain::invoice::models::InvoiceStatus;
use crate::domain::invoice::models::NewInvoice;

/// Port for invoice domain service operations.
#[async_trait]
pub trait InvoiceServicePort: Send + Sync + 'static {
    /// Issue an invoice to an existing client.
    ///
    /// # Errors
    /// * `ClientNotFound` - No client with this id
    /// * `NumberAlreadyExists` - Invoice number is already taken
    /// * `DatabaseError` - Database operation failed
    async fn create_invoice(
        &self,
        client_id: ClientId,
        command: CreateInvoiceCommand,
    ) -> Result<Invoice, InvoiceError>;

    /// List an existing client's invoices.
    ///
    /// # Errors
    /// * `ClientNotFound` - No client with this id
    /// * `DatabaseError` - Database operation failed
    async fn list_for_client(&self, client_id: ClientId) -> Result<Vec<Invoice>, InvoiceError>;

    /// Update an invoice's payment status.
    ///
    /// # Errors
    /// * `NotFound` - Invoice does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update_status(
        &self,
        id: InvoiceId,
        status: InvoiceStatus,
    ) -> Result<Invoice, InvoiceError>;
}

/// Persistence operations for invoices.
#[async_trait]
pub trait InvoiceRepository: Send + Sync + 'static {
    /// Persist a new invoice; storage assigns the id.
    ///
    /// # Errors
    /// * `NumberAlreadyExists` - Invoice number is already taken
    /// * `ClientNotFound` - Referenced client does not exist
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, new_invoice: NewInvoice) -> Result<Invoice, InvoiceError>;

    /// List a client's invoices ordered by id.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_by_client(&self, client_id: ClientId) -> Result<Vec<Invoice>, InvoiceError>;

    /// Update an invoice's status, returning the updated record.
    ///
    /// # Errors
    /// * `NotFound` - Invoice does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update_status(
        &self,
        id: InvoiceId,
        status: InvoiceStatus,
    ) -> Result<Invoice, InvoiceError>;
}
