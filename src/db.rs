use diesel::pg::PgConnection;
use diesel::r2d2;
use diesel::RunQueryDsl;

use crate::error::{QueryError, StoreError, StoreResult};
use crate::models::feed::Feed;
use crate::models::item::Item;

#[cfg(test)]
use diesel::connection::Connection;

#[cfg(test)]
use dotenv::dotenv;

pub mod feeds;
pub mod items;

pub use self::items::NewItem;

pub type ConnectionPool = r2d2::Pool<r2d2::ConnectionManager<PgConnection>>;
pub type PooledConnection = r2d2::PooledConnection<r2d2::ConnectionManager<PgConnection>>;

/// Handle over the shared connection pool. Every operation checks one
/// connection out, runs its queries and returns it; the pool is closed when
/// the handle is dropped.
pub struct FeedStore {
    pool: ConnectionPool,
}

impl FeedStore {
    /// Opens a pool against `database_url`, bounded by `max_idle` and
    /// `max_open` connections, and verifies the backend answers with one
    /// round trip. There is no reconnection logic past this point; a later
    /// network failure surfaces on the call that hits it.
    pub fn connect(database_url: &str, max_idle: u32, max_open: u32) -> StoreResult<Self> {
        let manager = r2d2::ConnectionManager::<PgConnection>::new(database_url);

        let pool = r2d2::Pool::builder()
            .min_idle(Some(max_idle))
            .max_size(max_open)
            .build(manager)
            .map_err(|error| StoreError::Connection(error.into()))?;

        let mut connection = pool
            .get()
            .map_err(|error| StoreError::Connection(error.into()))?;

        diesel::sql_query("SELECT 1")
            .execute(&mut connection)
            .map_err(|error| StoreError::Connection(QueryError::Query(error)))?;

        log::info!(
            "Established database pool with {} idle and {} open connections",
            max_idle,
            max_open
        );

        Ok(Self { pool })
    }

    /// Inserts `new_items` for `feed` in one all-or-nothing transaction.
    /// Items already stored for the feed are skipped silently.
    pub fn create_items(&self, feed: &Feed, new_items: &[NewItem<'_>]) -> StoreResult<()> {
        let mut connection = self.checkout().map_err(StoreError::Write)?;

        items::create(&mut connection, feed, new_items)
            .map_err(|error| StoreError::Write(error.into()))
    }

    pub fn find_feed(&self, name: &str) -> StoreResult<Option<Feed>> {
        let mut connection = self.checkout().map_err(StoreError::Read)?;

        feeds::find_by_name(&mut connection, name).map_err(|error| StoreError::Read(error.into()))
    }

    pub fn search_feeds(&self, names: &[String]) -> StoreResult<Vec<Feed>> {
        let mut connection = self.checkout().map_err(StoreError::Read)?;

        feeds::search(&mut connection, names).map_err(|error| StoreError::Read(error.into()))
    }

    pub fn find_item_by_uri(&self, feed: &Feed, uri: &str) -> StoreResult<Option<Item>> {
        let mut connection = self.checkout().map_err(StoreError::Read)?;

        items::find_by_uri(&mut connection, feed, uri)
            .map_err(|error| StoreError::Read(error.into()))
    }

    pub fn search_items(&self, feed: &Feed) -> StoreResult<Vec<Item>> {
        let mut connection = self.checkout().map_err(StoreError::Read)?;

        items::search(&mut connection, feed).map_err(|error| StoreError::Read(error.into()))
    }

    fn checkout(&self) -> Result<PooledConnection, QueryError> {
        self.pool.get().map_err(QueryError::from)
    }
}

#[cfg(test)]
pub fn establish_test_connection() -> PgConnection {
    dotenv().ok();

    let url = crate::config::Config::database_url();

    PgConnection::establish(&url).unwrap_or_else(|_| panic!("Error connecting to {}", url))
}
