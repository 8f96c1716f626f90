use sqlx::PgPool;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS customer (
    email TEXT PRIMARY KEY,
    password TEXT NOT NULL
)";

/// Outcome of an insert attempt, duplicates are detected atomically by the
/// conflict clause rather than a separate existence check.
#[derive(Debug, PartialEq, Eq)]
pub enum Insert {
    Created,
    Duplicate,
}

/// Adapter over the customer table. Clones share the same pool.
#[derive(Debug, Clone)]
pub struct CustomerStore {
    pool: PgPool,
}

impl CustomerStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn ensure_schema(&self) -> Result<(), sqlx::Error> {
        sqlx::query(SCHEMA).execute(&self.pool).await?;

        Ok(())
    }

    /// Insert a credential row, reports `Duplicate` when the email is taken.
    pub async fn insert(&self, email: &str, password_hash: &str) -> Result<Insert, sqlx::Error> {
        let result =
            sqlx::query("INSERT INTO customer (email, password) VALUES ($1, $2) ON CONFLICT (email) DO NOTHING")
                .bind(email)
                .bind(password_hash)
                .execute(&self.pool)
                .await?;

        if result.rows_affected() == 0 {
            Ok(Insert::Duplicate)
        } else {
            Ok(Insert::Created)
        }
    }

    /// Fetch the stored password hash for an email, `None` when unknown.
    pub async fn find_password_hash(&self, email: &str) -> Result<Option<String>, sqlx::Error> {
        let row: Option<(String,)> =
            sqlx::query_as("SELECT password FROM customer WHERE email = $1")
                .bind(email)
                .fetch_optional(&self.pool)
                .await?;

        Ok(row.map(|(password,)| password))
    }
}
