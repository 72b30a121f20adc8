use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

use crate::domain::client::models::ClientId;
use crate::domain::invoice::errors::InvoiceError;
use crate::domain::invoice::errors::InvoiceStatusParseError;
use crate::domain::invoice::models::Invoice;
use crate::domain::invoice::models::InvoiceAmount;
use crate::domain::invoice::models::InvoiceId;
use crate::domain::invoice::models::InvoiceNumber;
use crate::domain::invoice::models::InvoiceStatus;
use crate::domain::invoice::models::NewInvoice;
use crate::domain::invoice::ports::InvoiceRepository;

pub struct PostgresInvoiceRepository {
    pool: PgPool,
}

impl PostgresInvoiceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct InvoiceRow {
    id: i64,
    number: String,
    amount: f64,
    issued_on: NaiveDate,
    status: String,
    client_id: i64,
}

impl TryFrom<InvoiceRow> for Invoice {
    type Error = InvoiceError;

    fn try_from(row: InvoiceRow) -> Result<Self, Self::Error> {
        Ok(Invoice {
            id: InvoiceId(row.id),
            number: InvoiceNumber::new(row.number)?,
            amount: InvoiceAmount::new(row.amount)?,
            issued_on: row.issued_on,
            status: row
                .status
                .parse()
                .map_err(|e: InvoiceStatusParseError| InvoiceError::DatabaseError(e.to_string()))?,
            client_id: ClientId(row.client_id),
        })
    }
}

#[async_trait]
impl InvoiceRepository for PostgresInvoiceRepository {
    async fn create(&self, new_invoice: NewInvoice) -> Result<Invoice, InvoiceError> {
        let row = sqlx::query_as::<_, InvoiceRow>(
            r#"
            INSERT INTO invoices (number, amount, issued_on, status, client_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, number, amount, issued_on, status, client_id
            "#,
        )
        .bind(new_invoice.number.as_str())
        .bind(new_invoice.amount.value())
        .bind(new_invoice.issued_on)
        .bind(new_invoice.status.as_str())
        .bind(new_invoice.client_id.0)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation()
                    && db_err.constraint() == Some("invoices_number_key")
                {
                    return InvoiceError::NumberAlreadyExists(
                        new_invoice.number.as_str().to_string(),
                    );
                }
                if db_err.is_foreign_key_violation() {
                    return InvoiceError::ClientNotFound(new_invoice.client_id.0);
                }
            }
            InvoiceError::DatabaseError(e.to_string())
        })?;

        row.try_into()
    }

    async fn list_by_client(&self, client_id: ClientId) -> Result<Vec<Invoice>, InvoiceError> {
        let rows = sqlx::query_as::<_, InvoiceRow>(
            r#"
            SELECT id, number, amount, issued_on, status, client_id
            FROM invoices
            WHERE client_id = $1
            ORDER BY id
            "#,
        )
        .bind(client_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| InvoiceError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Invoice::try_from).collect()
    }

    async fn update_status(
        &self,
        id: InvoiceId,
        status: InvoiceStatus,
    ) -> Result<Invoice, InvoiceError> {
        let row = sqlx::query_as::<_, InvoiceRow>(
            r#"
            UPDATE invoices
            SET status = $2
            WHERE id = $1
            RETURNING id, number, amount, issued_on, status, client_id
            "#,
        )
        .bind(id.0)
        .bind(status.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| InvoiceError::DatabaseError(e.to_string()))?;

        match row {
            Some(row) => row.try_into(),
            None => Err(InvoiceError::NotFound(id.0)),
        }
    }
}
