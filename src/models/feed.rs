use diesel::prelude::*;

use crate::schema::feeds;

#[derive(Queryable, Identifiable, Debug, Eq, PartialEq)]
#[diesel(table_name = feeds)]
pub struct Feed {
    pub id: i64,
    pub name: String,
}
