//! PostgreSQL Client Repository

use chrono::{DateTime, Utc};
use kernel::id::{ClientId, UserId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::Client;
use crate::domain::repository::ClientRepository;
use crate::domain::value_object::ClientName;
use crate::error::ClientResult;

#[derive(Clone)]
pub struct PgClientRepository {
    pool: PgPool,
}

impl PgClientRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl ClientRepository for PgClientRepository {
    async fn create(&self, client: &Client) -> ClientResult<()> {
        sqlx::query(
            r#"
            INSERT INTO clients (
                client_id,
                owner_id,
                full_name,
                email,
                phone,
                notes,
                created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(client.client_id.as_uuid())
        .bind(client.owner_id.as_uuid())
        .bind(client.full_name.as_str())
        .bind(&client.email)
        .bind(&client.phone)
        .bind(&client.notes)
        .bind(client.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_by_owner(&self, owner_id: UserId) -> ClientResult<Vec<Client>> {
        let rows = sqlx::query_as::<_, ClientRow>(
            r#"
            SELECT
                client_id,
                owner_id,
                full_name,
                email,
                phone,
                notes,
                created_at
            FROM clients
            WHERE owner_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(owner_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ClientRow::into_client).collect())
    }
}

#[derive(sqlx::FromRow)]
struct ClientRow {
    client_id: Uuid,
    owner_id: Uuid,
    full_name: String,
    email: Option<String>,
    phone: Option<String>,
    notes: Option<String>,
    created_at: DateTime<Utc>,
}

impl ClientRow {
    fn into_client(self) -> Client {
        Client {
            client_id: ClientId::from_uuid(self.client_id),
            owner_id: UserId::from_uuid(self.owner_id),
            full_name: ClientName::from_db(self.full_name),
            email: self.email,
            phone: self.phone,
            notes: self.notes,
            created_at: self.created_at,
        }
    }
}
