use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

use crate::domain::client::models::ClientId;
use crate::domain::complaint::errors::ComplaintError;
use crate::domain::complaint::errors::ComplaintStatusParseError;
use crate::domain::complaint::models::Complaint;
use crate::domain::complaint::models::ComplaintId;
use crate::domain::complaint::models::ComplaintStatus;
use crate::domain::complaint::models::Description;
use crate::domain::complaint::models::NewComplaint;
use crate::domain::complaint::models::Subject;
use crate::domain::complaint::ports::ComplaintRepository;

pub struct PostgresComplaintRepository {
    pool: PgPool,
}

impl PostgresComplaintRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ComplaintRow {
    id: i64,
    subject: String,
    description: String,
    opened_on: NaiveDate,
    status: String,
    client_id: i64,
}

impl TryFrom<ComplaintRow> for Complaint {
    type Error = ComplaintError;

    fn try_from(row: ComplaintRow) -> Result<Self, Self::Error> {
        Ok(Complaint {
            id: ComplaintId(row.id),
            subject: Subject::new(row.subject)?,
            description: Description::new(row.description)?,
            opened_on: row.opened_on,
            status: row.status.parse().map_err(|e: ComplaintStatusParseError| {
                ComplaintError::DatabaseError(e.to_string())
            })?,
            client_id: ClientId(row.client_id),
        })
    }
}

#[async_trait]
impl ComplaintRepository for PostgresComplaintRepository {
    async fn create(&self, new_complaint: NewComplaint) -> Result<Complaint, ComplaintError> {
        let row = sqlx::query_as::<_, ComplaintRow>(
            r#"
            INSERT INTO complaints (subject, description, opened_on, status, client_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, subject, description, opened_on, status, client_id
            "#,
        )
        .bind(new_complaint.subject.as_str())
        .bind(new_complaint.description.as_str())
        .bind(new_complaint.opened_on)
        .bind(new_complaint.status.as_str())
        .bind(new_complaint.client_id.0)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_foreign_key_violation() {
                    return ComplaintError::ClientNotFound(new_complaint.client_id.0);
                }
            }
            ComplaintError::DatabaseError(e.to_string())
        })?;

        row.try_into()
    }

    async fn list_by_client(
        &self,
        client_id: ClientId,
    ) -> Result<Vec<Complaint>, ComplaintError> {
        let rows = sqlx::query_as::<_, ComplaintRow>(
            r#"
            SELECT id, subject, description, opened_on, status, client_id
            FROM complaints
            WHERE client_id = $1
            ORDER BY id
            "#,
        )
        .bind(client_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ComplaintError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Complaint::try_from).collect()
    }

    async fn update_status(
        &self,
        id: ComplaintId,
        status: ComplaintStatus,
    ) -> Result<Complaint, ComplaintError> {
        let row = sqlx::query_as::<_, ComplaintRow>(
            r#"
            UPDATE complaints
            SET status = $2
            WHERE id = $1
            RETURNING id, subject, description, opened_on, status, client_id
            "#,
        )
        .bind(id.0)
        .bind(status.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ComplaintError::DatabaseError(e.to_string()))?;

        match row {
            Some(row) => row.try_into(),
            None => Err(ComplaintError::NotFound(id.0)),
        }
    }
}
