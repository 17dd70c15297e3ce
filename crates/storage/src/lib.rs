use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow},
    Pool, Row, Sqlite,
};
use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};
use thiserror::Error;

use shared::domain::{Account, AccountDetails, AccountNumber};

pub mod config;

/// Failure reported by the store while executing a statement. Carries the
/// driver's message verbatim so it can be shown to the operator unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct DataError {
    pub message: String,
}

impl DataError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<sqlx::Error> for DataError {
    fn from(value: sqlx::Error) -> Self {
        match &value {
            sqlx::Error::Database(db) => Self::new(db.message()),
            _ => Self::new(value.to_string()),
        }
    }
}

/// The four statements the account form issues. Each call is one round trip
/// and commits on its own.
#[async_trait]
pub trait AccountStore: Send + Sync {
    async fn create_account(&self, account: &Account) -> Result<u64, DataError>;
    async fn fetch_account(
        &self,
        account_number: &AccountNumber,
    ) -> Result<Option<Account>, DataError>;
    async fn update_account(
        &self,
        account_number: &AccountNumber,
        details: &AccountDetails,
    ) -> Result<u64, DataError>;
    async fn delete_account(&self, account_number: &AccountNumber) -> Result<u64, DataError>;
}

#[derive(Clone)]
pub struct Storage {
    pool: Pool<Sqlite>,
}

impl Storage {
    /// Opens the single connection used for the lifetime of the process and
    /// applies the embedded schema.
    pub async fn new(database_url: &str) -> Result<Self> {
        ensure_sqlite_parent_dir_exists(database_url)?;

        let connect_options = SqliteConnectOptions::from_str(database_url)
            .with_context(|| format!("invalid database url '{database_url}'"))?
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(connect_options)
            .await
            .with_context(|| format!("failed to connect to '{database_url}'"))?;
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .context("failed to apply account schema")?;
        tracing::debug!(database_url, "account store ready");
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    pub async fn health_check(&self) -> Result<()> {
        let _: i64 = sqlx::query_scalar("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .context("sqlite ping failed")?;
        Ok(())
    }
}

#[async_trait]
impl AccountStore for Storage {
    async fn create_account(&self, account: &Account) -> Result<u64, DataError> {
        let details = &account.details;
        let affected = sqlx::query(
            "INSERT INTO accounts (account_number, full_name, date_of_birth, phone_number,
                                   balance, transaction_history)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(account.account_number.as_str())
        .bind(&details.full_name)
        .bind(details.date_of_birth)
        .bind(&details.phone_number)
        .bind(details.balance)
        .bind(&details.transaction_history)
        .execute(&self.pool)
        .await?
        .rows_affected();
        Ok(affected)
    }

    async fn fetch_account(
        &self,
        account_number: &AccountNumber,
    ) -> Result<Option<Account>, DataError> {
        let row = sqlx::query(
            "SELECT account_number, full_name, date_of_birth, phone_number, balance,
                    transaction_history
             FROM accounts
             WHERE account_number = ?",
        )
        .bind(account_number.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|row| account_from_row(&row)).transpose()
    }

    async fn update_account(
        &self,
        account_number: &AccountNumber,
        details: &AccountDetails,
    ) -> Result<u64, DataError> {
        let affected = sqlx::query(
            "UPDATE accounts
             SET full_name = ?, date_of_birth = ?, phone_number = ?, balance = ?,
                 transaction_history = ?
             WHERE account_number = ?",
        )
        .bind(&details.full_name)
        .bind(details.date_of_birth)
        .bind(&details.phone_number)
        .bind(details.balance)
        .bind(&details.transaction_history)
        .bind(account_number.as_str())
        .execute(&self.pool)
        .await?
        .rows_affected();
        Ok(affected)
    }

    async fn delete_account(&self, account_number: &AccountNumber) -> Result<u64, DataError> {
        let affected = sqlx::query("DELETE FROM accounts WHERE account_number = ?")
            .bind(account_number.as_str())
            .execute(&self.pool)
            .await?
            .rows_affected();
        Ok(affected)
    }
}

fn account_from_row(row: &SqliteRow) -> Result<Account, DataError> {
    let raw_number: String = row.try_get("account_number")?;
    let account_number = AccountNumber::parse(&raw_number)
        .map_err(|_| DataError::new("stored account has an empty account_number"))?;
    Ok(Account {
        account_number,
        details: AccountDetails {
            full_name: row.try_get("full_name")?,
            date_of_birth: row.try_get::<NaiveDate, _>("date_of_birth")?,
            phone_number: row.try_get("phone_number")?,
            balance: row.try_get::<f64, _>("balance")?,
            transaction_history: row.try_get("transaction_history")?,
        },
    })
}

fn ensure_sqlite_parent_dir_exists(database_url: &str) -> Result<()> {
    let Some(path) = sqlite_path(database_url) else {
        return Ok(());
    };

    let Some(parent) = path.parent() else {
        return Ok(());
    };

    fs::create_dir_all(parent).with_context(|| {
        format!(
            "failed to create parent directory '{}' for database url '{database_url}'",
            parent.display()
        )
    })?;

    Ok(())
}

fn sqlite_path(database_url: &str) -> Option<PathBuf> {
    if database_url.starts_with("sqlite::memory:") || !database_url.starts_with("sqlite:") {
        return None;
    }

    let path = database_url
        .trim_start_matches("sqlite://")
        .trim_start_matches("sqlite:")
        .split('?')
        .next()
        .unwrap_or_default();

    if path.is_empty() {
        return None;
    }

    Some(Path::new(path).to_path_buf())
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
