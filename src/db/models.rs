//! Database models.

use chrono::NaiveDateTime;
use derive_getters::Getters;
use derive_new::new;
use diesel::prelude::*;

use crate::db::schema;

/// A stored snapshot row.
#[derive(Debug, Clone, Queryable, Selectable, Getters)]
#[diesel(table_name = schema::snapshots)]
#[diesel(primary_key(name))]
pub struct Snapshot {
    name: String,
    payload: String,
    updated_at: NaiveDateTime,
}

/// Insertable snapshot; `updated_at` is filled by the database.
#[derive(Debug, Clone, Insertable, new, Getters)]
#[diesel(table_name = schema::snapshots)]
pub struct NewSnapshot {
    name: String,
    payload: String,
}
