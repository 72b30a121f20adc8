#![allow(dead_code)]

use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::Authenticator;
use auth::Role;
use billing_service::domain::client::errors::ClientError;
use billing_service::domain::client::models::Client;
use billing_service::domain::client::models::ClientId;
use billing_service::domain::client::models::NewClient;
use billing_service::domain::client::models::Page;
use billing_service::domain::client::ports::ClientRepository;
use billing_service::domain::client::service::ClientService;
use billing_service::domain::complaint::errors::ComplaintError;
use billing_service::domain::complaint::models::Complaint;
use billing_service::domain::complaint::models::ComplaintId;
use billing_service::domain::complaint::models::ComplaintStatus;
use billing_service::domain::complaint::models::NewComplaint;
use billing_service::domain::complaint::ports::ComplaintRepository;
use billing_service::domain::complaint::service::ComplaintService;
use billing_service::domain::invoice::errors::InvoiceError;
use billing_service::domain::invoice::models::Invoice;
use billing_service::domain::invoice::models::InvoiceId;
use billing_service::domain::invoice::models::InvoiceStatus;
use billing_service::domain::invoice::models::NewInvoice;
use billing_service::domain::invoice::ports::InvoiceRepository;
use billing_service::domain::invoice::service::InvoiceService;
use billing_service::domain::user::errors::UserError;
use billing_service::domain::user::models::NewUser;
use billing_service::domain::user::models::User;
use billing_service::domain::user::models::UserId;
use billing_service::domain::user::models::Username;
use billing_service::domain::user::ports::UserRepository;
use billing_service::domain::user::service::UserService;
use billing_service::inbound::http::router::create_router;
use billing_service::inbound::http::router::AppState;
use chrono::Duration;
use serde_json::json;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// In-memory stand-in for the Postgres schema, shared by all repository
/// adapters so client deletion can cascade like the real foreign keys do.
#[derive(Default)]
pub struct Tables {
    pub users: Vec<User>,
    pub clients: Vec<Client>,
    pub invoices: Vec<Invoice>,
    pub complaints: Vec<Complaint>,
    next_user_id: i64,
    next_client_id: i64,
    next_invoice_id: i64,
    next_complaint_id: i64,
}

pub type SharedTables = Arc<Mutex<Tables>>;

pub struct InMemoryUserRepository {
    tables: SharedTables,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, UserError> {
        let mut tables = self.tables.lock().unwrap();

        if tables
            .users
            .iter()
            .any(|u| u.username == new_user.username)
        {
            return Err(UserError::UsernameAlreadyExists(
                new_user.username.as_str().to_string(),
            ));
        }
        if tables.users.iter().any(|u| u.email == new_user.email) {
            return Err(UserError::EmailAlreadyExists(
                new_user.email.as_str().to_string(),
            ));
        }

        tables.next_user_id += 1;
        let user = User {
            id: UserId(tables.next_user_id),
            username: new_user.username,
            email: new_user.email,
            password_hash: new_user.password_hash,
            role: new_user.role,
            is_active: new_user.is_active,
            created_at: new_user.created_at,
        };
        tables.users.push(user.clone());
        Ok(user)
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.users.iter().find(|u| &u.username == username).cloned())
    }
}

pub struct InMemoryClientRepository {
    tables: SharedTables,
}

#[async_trait]
impl ClientRepository for InMemoryClientRepository {
    async fn create(&self, new_client: NewClient) -> Result<Client, ClientError> {
        let mut tables = self.tables.lock().unwrap();

        if tables.clients.iter().any(|c| c.name == new_client.name) {
            return Err(ClientError::NameAlreadyExists(
                new_client.name.as_str().to_string(),
            ));
        }
        if tables.clients.iter().any(|c| c.email == new_client.email) {
            return Err(ClientError::EmailAlreadyExists(
                new_client.email.as_str().to_string(),
            ));
        }

        tables.next_client_id += 1;
        let client = Client {
            id: ClientId(tables.next_client_id),
            name: new_client.name,
            email: new_client.email,
            phone: new_client.phone,
        };
        tables.clients.push(client.clone());
        Ok(client)
    }

    async fn list(&self, page: Page) -> Result<Vec<Client>, ClientError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .clients
            .iter()
            .skip(page.skip.max(0) as usize)
            .take(page.limit.max(0) as usize)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: ClientId) -> Result<Option<Client>, ClientError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.clients.iter().find(|c| c.id == id).cloned())
    }

    async fn delete(&self, id: ClientId) -> Result<(), ClientError> {
        let mut tables = self.tables.lock().unwrap();

        let before = tables.clients.len();
        tables.clients.retain(|c| c.id != id);
        if tables.clients.len() == before {
            return Err(ClientError::NotFound(id.0));
        }

        // Mirror ON DELETE CASCADE
        tables.invoices.retain(|i| i.client_id != id);
        tables.complaints.retain(|c| c.client_id != id);
        Ok(())
    }
}

pub struct InMemoryInvoiceRepository {
    tables: SharedTables,
}

#[async_trait]
impl InvoiceRepository for InMemoryInvoiceRepository {
    async fn create(&self, new_invoice: NewInvoice) -> Result<Invoice, InvoiceError> {
        let mut tables = self.tables.lock().unwrap();

        if !tables.clients.iter().any(|c| c.id == new_invoice.client_id) {
            return Err(InvoiceError::ClientNotFound(new_invoice.client_id.0));
        }
        if tables.invoices.iter().any(|i| i.number == new_invoice.number) {
            return Err(InvoiceError::NumberAlreadyExists(
                new_invoice.number.as_str().to_string(),
            ));
        }

        tables.next_invoice_id += 1;
        let invoice = Invoice {
            id: InvoiceId(tables.next_invoice_id),
            number: new_invoice.number,
            amount: new_invoice.amount,
            issued_on: new_invoice.issued_on,
            status: new_invoice.status,
            client_id: new_invoice.client_id,
        };
        tables.invoices.push(invoice.clone());
        Ok(invoice)
    }

    async fn list_by_client(&self, client_id: ClientId) -> Result<Vec<Invoice>, InvoiceError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .invoices
            .iter()
            .filter(|i| i.client_id == client_id)
            .cloned()
            .collect())
    }

    async fn update_status(
        &self,
        id: InvoiceId,
        status: InvoiceStatus,
    ) -> Result<Invoice, InvoiceError> {
        let mut tables = self.tables.lock().unwrap();
        let invoice = tables
            .invoices
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or(InvoiceError::NotFound(id.0))?;
        invoice.status = status;
        Ok(invoice.clone())
    }
}

pub struct InMemoryComplaintRepository {
    tables: SharedTables,
}

#[async_trait]
impl ComplaintRepository for InMemoryComplaintRepository {
    async fn create(&self, new_complaint: NewComplaint) -> Result<Complaint, ComplaintError> {
        let mut tables = self.tables.lock().unwrap();

        if !tables
            .clients
            .iter()
            .any(|c| c.id == new_complaint.client_id)
        {
            return Err(ComplaintError::ClientNotFound(new_complaint.client_id.0));
        }

        tables.next_complaint_id += 1;
        let complaint = Complaint {
            id: ComplaintId(tables.next_complaint_id),
            subject: new_complaint.subject,
            description: new_complaint.description,
            opened_on: new_complaint.opened_on,
            status: new_complaint.status,
            client_id: new_complaint.client_id,
        };
        tables.complaints.push(complaint.clone());
        Ok(complaint)
    }

    async fn list_by_client(
        &self,
        client_id: ClientId,
    ) -> Result<Vec<Complaint>, ComplaintError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .complaints
            .iter()
            .filter(|c| c.client_id == client_id)
            .cloned()
            .collect())
    }

    async fn update_status(
        &self,
        id: ComplaintId,
        status: ComplaintStatus,
    ) -> Result<Complaint, ComplaintError> {
        let mut tables = self.tables.lock().unwrap();
        let complaint = tables
            .complaints
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(ComplaintError::NotFound(id.0))?;
        complaint.status = status;
        Ok(complaint.clone())
    }
}

/// Test application that spawns a real server on a random port, backed by
/// the in-memory repositories.
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub authenticator: Authenticator,
    tables: SharedTables,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let tables: SharedTables = Arc::new(Mutex::new(Tables::default()));

        let user_repo = Arc::new(InMemoryUserRepository {
            tables: Arc::clone(&tables),
        });
        let client_repo = Arc::new(InMemoryClientRepository {
            tables: Arc::clone(&tables),
        });
        let invoice_repo = Arc::new(InMemoryInvoiceRepository {
            tables: Arc::clone(&tables),
        });
        let complaint_repo = Arc::new(InMemoryComplaintRepository {
            tables: Arc::clone(&tables),
        });

        let authenticator = Arc::new(Authenticator::new(
            TEST_SECRET,
            auth::Algorithm::HS256,
            Duration::minutes(30),
        ));

        let state = AppState {
            users: Arc::new(UserService::new(user_repo)),
            clients: Arc::new(ClientService::new(Arc::clone(&client_repo))),
            invoices: Arc::new(InvoiceService::new(
                invoice_repo,
                Arc::clone(&client_repo),
            )),
            complaints: Arc::new(ComplaintService::new(complaint_repo, client_repo)),
            authenticator,
        };

        let router = create_router(state);

        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            authenticator: Authenticator::new(
                TEST_SECRET,
                auth::Algorithm::HS256,
                Duration::minutes(30),
            ),
            tables,
        }
    }

    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    pub fn patch(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.patch(format!("{}{}", self.address, path))
    }

    pub fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.delete(format!("{}{}", self.address, path))
    }

    /// Register an account through the API.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
        role: Option<&str>,
    ) -> reqwest::Response {
        let mut body = json!({
            "username": username,
            "email": email,
            "password": password,
        });
        if let Some(role) = role {
            body["role"] = json!(role);
        }

        self.post("/api/auth/register")
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Log in through the API and return the bearer token.
    pub async fn login_token(&self, username: &str, password: &str) -> String {
        let response = self
            .post("/api/auth/login")
            .json(&json!({ "username": username, "password": password }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["data"]["access_token"]
            .as_str()
            .expect("Missing access_token")
            .to_string()
    }

    /// Forge a token signed with the server's secret, bypassing login.
    pub fn issue_token(&self, username: &str, role: Role) -> String {
        self.authenticator
            .issue_token(username, role)
            .expect("Failed to issue token")
    }

    /// Flip an account's active flag off, as an administrative action would.
    pub fn deactivate_user(&self, username: &str) {
        let mut tables = self.tables.lock().unwrap();
        let user = tables
            .users
            .iter_mut()
            .find(|u| u.username.as_str() == username)
            .expect("Unknown user");
        user.is_active = false;
    }
}
