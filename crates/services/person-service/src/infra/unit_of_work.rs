//! Unit of Work pattern implementation.
//!
//! Every repository operation runs inside a scope obtained here: the
//! transaction begins before the work, commits when it succeeds and rolls
//! back when it fails. Nothing outside this module begins or ends a
//! transaction.

use std::future::Future;
use std::pin::Pin;

use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use common::{AppError, AppResult};

/// Boxed unit of work borrowing the open transaction
pub type TxFuture<'a, T> = Pin<Box<dyn Future<Output = AppResult<T>> + Send + 'a>>;

/// Owns the connection handle and hands out transaction scopes.
///
/// Cloning is cheap: the underlying pool is shared.
#[derive(Clone)]
pub struct UnitOfWork {
    db: DatabaseConnection,
}

impl UnitOfWork {
    /// Create new UnitOfWork instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Execute a closure within a transaction.
    ///
    /// The transaction is committed on success or rolled back on error.
    /// The closure only sees the borrowed transaction, so values it needs
    /// must be moved in.
    pub async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(&'a DatabaseTransaction) -> TxFuture<'a, T> + Send,
        T: Send,
    {
        let txn = self.db.begin().await.map_err(AppError::from)?;
        tracing::trace!("Transaction started");

        let outcome = f(&txn).await;

        match outcome {
            Ok(result) => {
                txn.commit().await.map_err(AppError::from)?;
                tracing::trace!("Transaction committed");
                Ok(result)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                } else {
                    tracing::debug!("Transaction rolled back: {}", e);
                }
                Err(e)
            }
        }
    }
}

/// Simpler API for executing transactional operations.
///
/// Variables used by the body are moved into the transaction scope.
#[macro_export]
macro_rules! with_transaction {
    ($uow:expr, |$txn:ident| $body:expr) => {
        $uow.transaction(|$txn| Box::pin(async move { $body })).await
    };
}
