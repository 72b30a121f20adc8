use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::client::models::ClientId;
use crate::domain::client::ports::ClientRepository;
use crate::domain::invoice::errors::InvoiceError;
use crate::domain::invoice::models::CreateInvoiceCommand;
use crate::domain::invoice::models::Invoice;
use crate::domain::invoice::models::InvoiceId;
use crate::domain::invoice::models::InvoiceStatus;
use crate::domain::invoice::models::NewInvoice;
use crate::domain::invoice::ports::InvoiceRepository;
use crate::domain::invoice::ports::InvoiceServicePort;

/// Domain service implementation for invoice operations.
///
/// Holds the client repository as well: invoices are a nested resource and
/// every operation starts from an existing client.
pub struct InvoiceService<IR, CR>
where
    IR: InvoiceRepository,
    CR: ClientRepository,
{
    invoices: Arc<IR>,
    clients: Arc<CR>,
}

impl<IR, CR> InvoiceService<IR, CR>
where
    IR: InvoiceRepository,
    CR: ClientRepository,
{
    pub fn new(invoices: Arc<IR>, clients: Arc<CR>) -> Self {
        Self { invoices, clients }
    }

    async fn ensure_client_exists(&self, client_id: ClientId) -> Result<(), InvoiceError> {
        self.clients
            .find_by_id(client_id)
            .await?
            .map(|_| ())
            .ok_or(InvoiceError::ClientNotFound(client_id.0))
    }
}

#[async_trait]
impl<IR, CR> InvoiceServicePort for InvoiceService<IR, CR>
where
    IR: InvoiceRepository,
    CR: ClientRepository,
{
    async fn create_invoice(
        &self,
        client_id: ClientId,
        command: CreateInvoiceCommand,
    ) -> Result<Invoice, InvoiceError> {
        self.ensure_client_exists(client_id).await?;

        let new_invoice = NewInvoice {
            number: command.number,
            amount: command.amount,
            issued_on: command.issued_on,
            status: command.status,
            client_id,
        };
        self.invoices.create(new_invoice).await
    }

    async fn list_for_client(&self, client_id: ClientId) -> Result<Vec<Invoice>, InvoiceError> {
        self.ensure_client_exists(client_id).await?;
        self.invoices.list_by_client(client_id).await
    }

    async fn update_status(
        &self,
        id: InvoiceId,
        status: InvoiceStatus,
    ) -> Result<Invoice, InvoiceError> {
        self.invoices.update_status(id, status).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use mockall::mock;

    use super::*;
    use crate::domain::client::errors::ClientError;
    use crate::domain::client::models::Client;
    use crate::domain::client::models::ClientName;
    use crate::domain::client::models::NewClient;
    use crate::domain::client::models::Page;
    use crate::domain::invoice::models::InvoiceAmount;
    use crate::domain::invoice::models::InvoiceNumber;
    use crate::domain::user::models::EmailAddress;

    mock! {
        pub TestInvoiceRepository {}

        #[async_trait]
        impl InvoiceRepository for TestInvoiceRepository {
            async fn create(&self, new_invoice: NewInvoice) -> Result<Invoice, InvoiceError>;
            async fn list_by_client(&self, client_id: ClientId) -> Result<Vec<Invoice>, InvoiceError>;
            async fn update_status(&self, id: InvoiceId, status: InvoiceStatus) -> Result<Invoice, InvoiceError>;
        }
    }

    mock! {
        pub TestClientRepository {}

        #[async_trait]
        impl ClientRepository for TestClientRepository {
            async fn create(&self, new_client: NewClient) -> Result<Client, ClientError>;
            async fn list(&self, page: Page) -> Result<Vec<Client>, ClientError>;
            async fn find_by_id(&self, id: ClientId) -> Result<Option<Client>, ClientError>;
            async fn delete(&self, id: ClientId) -> Result<(), ClientError>;
        }
    }

    fn sample_client(id: ClientId) -> Client {
        Client {
            id,
            name: ClientName::new("Acme Corp".to_string()).unwrap(),
            email: EmailAddress::new("billing@acme.example".to_string()).unwrap(),
            phone: None,
        }
    }

    fn sample_command() -> CreateInvoiceCommand {
        CreateInvoiceCommand {
            number: InvoiceNumber::new("INV-001".to_string()).unwrap(),
            amount: InvoiceAmount::new(1500.50).unwrap(),
            issued_on: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            status: InvoiceStatus::Unpaid,
        }
    }

    #[tokio::test]
    async fn test_create_invoice_for_unknown_client() {
        let invoices = MockTestInvoiceRepository::new();
        let mut clients = MockTestClientRepository::new();

        clients.expect_find_by_id().times(1).returning(|_| Ok(None));

        let service = InvoiceService::new(Arc::new(invoices), Arc::new(clients));

        let result = service.create_invoice(ClientId(7), sample_command()).await;
        assert!(matches!(
            result.unwrap_err(),
            InvoiceError::ClientNotFound(7)
        ));
    }

    #[tokio::test]
    async fn test_create_invoice_success() {
        let mut invoices = MockTestInvoiceRepository::new();
        let mut clients = MockTestClientRepository::new();

        clients
            .expect_find_by_id()
            .times(1)
            .returning(|id| Ok(Some(sample_client(id))));

        invoices
            .expect_create()
            .withf(|new_invoice| {
                new_invoice.number.as_str() == "INV-001"
                    && new_invoice.client_id == ClientId(7)
                    && new_invoice.status == InvoiceStatus::Unpaid
            })
            .times(1)
            .returning(|new_invoice| {
                Ok(Invoice {
                    id: InvoiceId(1),
                    number: new_invoice.number,
                    amount: new_invoice.amount,
                    issued_on: new_invoice.issued_on,
                    status: new_invoice.status,
                    client_id: new_invoice.client_id,
                })
            });

        let service = InvoiceService::new(Arc::new(invoices), Arc::new(clients));

        let invoice = service
            .create_invoice(ClientId(7), sample_command())
            .await
            .expect("creation failed");
        assert_eq!(invoice.amount.value(), 1500.50);
    }

    #[tokio::test]
    async fn test_update_status_not_found() {
        let mut invoices = MockTestInvoiceRepository::new();
        let clients = MockTestClientRepository::new();

        invoices
            .expect_update_status()
            .times(1)
            .returning(|id, _| Err(InvoiceError::NotFound(id.0)));

        let service = InvoiceService::new(Arc::new(invoices), Arc::new(clients));

        let result = service
            .update_status(InvoiceId(99), InvoiceStatus::Paid)
            .await;
        assert!(matches!(result.unwrap_err(), InvoiceError::NotFound(99)));
    }
}
