use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::client::errors::ClientError;
use crate::domain::client::models::Client;
use crate::domain::client::models::ClientId;
use crate::domain::client::models::ClientName;
use crate::domain::client::models::NewClient;
use crate::domain::client::models::Page;
use crate::domain::client::models::PhoneNumber;
use crate::domain::client::ports::ClientRepository;
use crate::domain::user::models::EmailAddress;

pub struct PostgresClientRepository {
    pool: PgPool,
}

impl PostgresClientRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ClientRow {
    id: i64,
    name: String,
    email: String,
    phone: Option<String>,
}

impl TryFrom<ClientRow> for Client {
    type Error = ClientError;

    fn try_from(row: ClientRow) -> Result<Self, Self::Error> {
        Ok(Client {
            id: ClientId(row.id),
            name: ClientName::new(row.name)?,
            email: EmailAddress::new(row.email)?,
            phone: row.phone.map(PhoneNumber::new).transpose()?,
        })
    }
}

#[async_trait]
impl ClientRepository for PostgresClientRepository {
    async fn create(&self, new_client: NewClient) -> Result<Client, ClientError> {
        let row = sqlx::query_as::<_, ClientRow>(
            r#"
            INSERT INTO clients (name, email, phone)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, phone
            "#,
        )
        .bind(new_client.name.as_str())
        .bind(new_client.email.as_str())
        .bind(new_client.phone.as_ref().map(|p| p.as_str()))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    if db_err.constraint() == Some("clients_name_key") {
                        return ClientError::NameAlreadyExists(
                            new_client.name.as_str().to_string(),
                        );
                    }
                    if db_err.constraint() == Some("clients_email_key") {
                        return ClientError::EmailAlreadyExists(
                            new_client.email.as_str().to_string(),
                        );
                    }
                }
            }
            ClientError::DatabaseError(e.to_string())
        })?;

        row.try_into()
    }

    async fn list(&self, page: Page) -> Result<Vec<Client>, ClientError> {
        let rows = sqlx::query_as::<_, ClientRow>(
            r#"
            SELECT id, name, email, phone
            FROM clients
            ORDER BY id
            OFFSET $1 LIMIT $2
            "#,
        )
        .bind(page.skip)
        .bind(page.limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ClientError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Client::try_from).collect()
    }

    async fn find_by_id(&self, id: ClientId) -> Result<Option<Client>, ClientError> {
        let row = sqlx::query_as::<_, ClientRow>(
            r#"
            SELECT id, name, email, phone
            FROM clients
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ClientError::DatabaseError(e.to_string()))?;

        row.map(Client::try_from).transpose()
    }

    async fn delete(&self, id: ClientId) -> Result<(), ClientError> {
        // Invoices and complaints go with the client (ON DELETE CASCADE)
        let result = sqlx::query(
            r#"
            DELETE FROM clients
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| ClientError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ClientError::NotFound(id.0));
        }

        Ok(())
    }
}
