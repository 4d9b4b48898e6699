use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::schema::items;

#[derive(Queryable, Identifiable, Debug, Eq, PartialEq)]
#[diesel(table_name = items)]
pub struct Item {
    pub id: i64,
    pub feed_id: i64,
    pub title: String,
    pub uri: String,
    pub description: String,

    pub created_at: DateTime<Utc>,
}
