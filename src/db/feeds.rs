use diesel::prelude::*;
use diesel::result::Error;

use crate::models::feed::Feed;
use crate::schema::feeds;

#[derive(Insertable)]
#[diesel(table_name = feeds)]
struct NewFeed<'a> {
    name: &'a str,
}

pub fn create(conn: &mut PgConnection, name: &str) -> Result<Feed, Error> {
    diesel::insert_into(feeds::table)
        .values(NewFeed { name })
        .get_result::<Feed>(conn)
}

pub fn find_by_name(conn: &mut PgConnection, name: &str) -> Result<Option<Feed>, Error> {
    feeds::table
        .filter(feeds::name.eq(name))
        .first::<Feed>(conn)
        .optional()
}

/// Fetches the feeds whose name is in `names`, or every feed when `names`
/// is empty, ordered by name.
pub fn search(conn: &mut PgConnection, names: &[String]) -> Result<Vec<Feed>, Error> {
    let mut query = feeds::table.into_boxed();

    if !names.is_empty() {
        query = query.filter(feeds::name.eq_any(names));
    }

    query.order(feeds::name.asc()).load::<Feed>(conn)
}

#[cfg(test)]
mod tests {
    use diesel::connection::Connection;
    use diesel::result::Error;

    use crate::db;

    #[test]
    fn create_creates_new_feed() {
        let mut connection = db::establish_test_connection();

        connection.test_transaction::<_, Error, _>(|connection| {
            let feed = super::create(connection, "equipment-news").unwrap();

            assert_eq!(feed.name, "equipment-news");

            Ok(())
        });
    }

    #[test]
    fn find_by_name_finds_feed() {
        let mut connection = db::establish_test_connection();

        connection.test_transaction::<_, Error, _>(|connection| {
            let feed = super::create(connection, "release-announcements").unwrap();

            let found_feed = super::find_by_name(connection, "release-announcements")
                .unwrap()
                .unwrap();

            assert_eq!(found_feed.id, feed.id);
            assert_eq!(found_feed.name, feed.name);

            Ok(())
        });
    }

    #[test]
    fn find_by_name_returns_none_for_unknown_name() {
        let mut connection = db::establish_test_connection();

        connection.test_transaction::<_, Error, _>(|connection| {
            let found_feed = super::find_by_name(connection, "unknown-feed").unwrap();

            assert_eq!(found_feed, None);

            Ok(())
        });
    }

    #[test]
    fn search_returns_all_feeds_ordered_by_name() {
        let mut connection = db::establish_test_connection();

        connection.test_transaction::<_, Error, _>(|connection| {
            super::create(connection, "c-feed").unwrap();
            super::create(connection, "a-feed").unwrap();
            super::create(connection, "b-feed").unwrap();

            let feeds = super::search(connection, &[]).unwrap();
            let names = feeds.iter().map(|feed| feed.name.as_str()).collect::<Vec<_>>();

            assert_eq!(names, ["a-feed", "b-feed", "c-feed"]);

            Ok(())
        });
    }

    #[test]
    fn search_filters_by_name_set() {
        let mut connection = db::establish_test_connection();

        connection.test_transaction::<_, Error, _>(|connection| {
            super::create(connection, "a-feed").unwrap();
            super::create(connection, "b-feed").unwrap();
            super::create(connection, "c-feed").unwrap();

            let feeds = super::search(
                connection,
                &["c-feed".to_string(), "b-feed".to_string()],
            )
            .unwrap();
            let names = feeds.iter().map(|feed| feed.name.as_str()).collect::<Vec<_>>();

            assert_eq!(names, ["b-feed", "c-feed"]);

            Ok(())
        });
    }

    #[test]
    fn search_collapses_duplicate_names_in_input() {
        let mut connection = db::establish_test_connection();

        connection.test_transaction::<_, Error, _>(|connection| {
            super::create(connection, "a-feed").unwrap();

            let feeds = super::search(
                connection,
                &["a-feed".to_string(), "a-feed".to_string()],
            )
            .unwrap();

            assert_eq!(feeds.len(), 1);

            Ok(())
        });
    }

    #[test]
    fn search_returns_empty_for_unknown_names() {
        let mut connection = db::establish_test_connection();

        connection.test_transaction::<_, Error, _>(|connection| {
            let feeds = super::search(connection, &["unknown-feed".to_string()]).unwrap();

            assert!(feeds.is_empty());

            Ok(())
        });
    }
}
