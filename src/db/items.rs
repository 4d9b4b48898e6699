use diesel::prelude::*;
use diesel::result::Error;

use crate::models::feed::Feed;
use crate::models::item::Item;
use crate::schema::items;

const RECENT_ITEMS_COUNT: i64 = 10;

/// One candidate entry for [`create`]. The owning feed and the creation
/// timestamp are attached by the store.
#[derive(Debug)]
pub struct NewItem<'a> {
    pub title: &'a str,
    pub uri: &'a str,
    pub description: &'a str,
}

#[derive(Insertable)]
#[diesel(table_name = items)]
struct InsertableItem<'a> {
    feed_id: i64,
    title: &'a str,
    uri: &'a str,
    description: &'a str,
}

/// Inserts `new_items` for `feed` in one transaction.
///
/// An item whose (feed, title, uri, description) tuple is already stored is
/// skipped without an error. Any failing insert aborts the whole batch.
pub fn create(
    conn: &mut PgConnection,
    feed: &Feed,
    new_items: &[NewItem<'_>],
) -> Result<(), Error> {
    conn.transaction(|conn| {
        for item in new_items {
            diesel::insert_into(items::table)
                .values(InsertableItem {
                    feed_id: feed.id,
                    title: item.title,
                    uri: item.uri,
                    description: item.description,
                })
                .on_conflict_do_nothing()
                .execute(conn)?;
        }

        Ok(())
    })
}

pub fn find_by_uri(conn: &mut PgConnection, feed: &Feed, uri: &str) -> Result<Option<Item>, Error> {
    items::table
        .filter(items::feed_id.eq(feed.id))
        .filter(items::uri.eq(uri))
        .first::<Item>(conn)
        .optional()
}

/// Fetches the ten most recently created items of `feed`, newest first.
pub fn search(conn: &mut PgConnection, feed: &Feed) -> Result<Vec<Item>, Error> {
    items::table
        .filter(items::feed_id.eq(feed.id))
        .order(items::created_at.desc())
        .limit(RECENT_ITEMS_COUNT)
        .load::<Item>(conn)
}
