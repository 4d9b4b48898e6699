use diesel::r2d2::PoolError;
use diesel::result::Error as DieselError;
use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

/// Failures surfaced by store operations.
///
/// A lookup that matches zero rows is not a failure; those calls return
/// `Ok(None)` or an empty list instead.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("cannot connect to database: {0}")]
    Connection(#[source] QueryError),

    #[error("read failed: {0}")]
    Read(#[source] QueryError),

    #[error("write failed: {0}")]
    Write(#[source] QueryError),
}

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("pool: {0}")]
    Pool(#[from] PoolError),

    #[error("query: {0}")]
    Query(#[from] DieselError),
}
