// Roster
// Copyright 2026 The Roster Authors
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not
// use this file except in compliance with the License.  You may obtain a copy
// of the License at:
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.  See the
// License for the specific language governing permissions and limitations
// under the License.

//! Generic SQL statement builders shared by all tables.
//!
//! Statements are composed with `sqlx::QueryBuilder` so that the same construction logic serves
//! every database backend, and only the final execution step needs to know which backend is
//! behind an `Executor`.

use crate::model::RecordId;
#[cfg(feature = "postgres")]
use roster_core::db::postgres;
#[cfg(any(feature = "sqlite", test))]
use roster_core::db::sqlite;
use roster_core::db::{DbError, DbResult, Executor};
#[cfg(feature = "postgres")]
use sqlx::postgres::{PgRow, Postgres};
#[cfg(any(feature = "sqlite", test))]
use sqlx::sqlite::{Sqlite, SqliteRow};
use sqlx::{Database, QueryBuilder, Row};
use time::{Date, PrimitiveDateTime};

/// A value that can be bound to a statement parameter.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum SqlValue {
    /// A boolean.
    Bool(bool),

    /// A 32-bit integer.
    Int(i32),

    /// A 64-bit integer.
    BigInt(i64),

    /// A non-nullable string.
    Text(String),

    /// A nullable string.
    OptText(Option<String>),

    /// A calendar date.
    Date(Date),

    /// A date and time without time zone.
    DateTime(PrimitiveDateTime),
}

impl From<bool> for SqlValue {
    fn from(value: bool) -> Self {
        SqlValue::Bool(value)
    }
}

impl From<i32> for SqlValue {
    fn from(value: i32) -> Self {
        SqlValue::Int(value)
    }
}

impl From<RecordId> for SqlValue {
    fn from(value: RecordId) -> Self {
        SqlValue::BigInt(value.as_i64())
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        SqlValue::Text(value)
    }
}

impl From<&String> for SqlValue {
    fn from(value: &String) -> Self {
        SqlValue::Text(value.clone())
    }
}

impl From<Option<String>> for SqlValue {
    fn from(value: Option<String>) -> Self {
        SqlValue::OptText(value)
    }
}

impl From<Date> for SqlValue {
    fn from(value: Date) -> Self {
        SqlValue::Date(value)
    }
}

impl From<PrimitiveDateTime> for SqlValue {
    fn from(value: PrimitiveDateTime) -> Self {
        SqlValue::DateTime(value)
    }
}

/// Comparison operators supported in conditions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Op {
    /// Equality.
    Eq,

    /// SQL `LIKE` pattern matching.
    Like,

    /// Greater than or equal to.
    AtLeast,
}

impl Op {
    /// Returns the SQL representation of the operator.
    fn as_sql(self) -> &'static str {
        match self {
            Op::Eq => "=",
            Op::Like => "LIKE",
            Op::AtLeast => ">=",
        }
    }
}

/// A single predicate in a `WHERE` clause.  Multiple conditions are combined with `AND`.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Condition {
    /// Column to compare.  Must be a trusted identifier as it is not escaped.
    column: &'static str,

    /// Comparison to apply.
    op: Op,

    /// Value to compare the column against.
    value: SqlValue,
}

impl Condition {
    /// Matches rows where `column` equals `value`.
    pub(crate) fn eq<V: Into<SqlValue>>(column: &'static str, value: V) -> Self {
        Self { column, op: Op::Eq, value: value.into() }
    }

    /// Matches rows where `column` matches the `LIKE` `pattern`.
    pub(crate) fn like(column: &'static str, pattern: String) -> Self {
        Self { column, op: Op::Like, value: SqlValue::Text(pattern) }
    }

    /// Matches rows where `column` is greater than or equal to `value`.
    pub(crate) fn at_least<V: Into<SqlValue>>(column: &'static str, value: V) -> Self {
        Self { column, op: Op::AtLeast, value: value.into() }
    }
}

/// Conversion from raw database rows to typed values.
pub(crate) trait DecodeRow {
    /// Type produced by decoding one row.
    type Output: Send;

    /// Decodes a PostgreSQL row.
    #[cfg(feature = "postgres")]
    fn from_pg_row(row: PgRow) -> DbResult<Self::Output>;

    /// Decodes an SQLite row.
    #[cfg(any(feature = "sqlite", test))]
    fn from_sqlite_row(row: SqliteRow) -> DbResult<Self::Output>;
}

/// Database backends that can receive `SqlValue`s as bound parameters.
trait PushValue<'args>: Database {
    /// Appends `value` to `qb` as a bound parameter.
    fn push_value(qb: &mut QueryBuilder<'args, Self>, value: SqlValue);
}

#[cfg(feature = "postgres")]
impl<'args> PushValue<'args> for Postgres {
    fn push_value(qb: &mut QueryBuilder<'args, Self>, value: SqlValue) {
        match value {
            SqlValue::Bool(v) => qb.push_bind(v),
            SqlValue::Int(v) => qb.push_bind(v),
            SqlValue::BigInt(v) => qb.push_bind(v),
            SqlValue::Text(v) => qb.push_bind(v),
            SqlValue::OptText(v) => qb.push_bind(v),
            SqlValue::Date(v) => qb.push_bind(v),
            SqlValue::DateTime(v) => qb.push_bind(v),
        };
    }
}

#[cfg(any(feature = "sqlite", test))]
impl<'args> PushValue<'args> for Sqlite {
    fn push_value(qb: &mut QueryBuilder<'args, Self>, value: SqlValue) {
        match value {
            SqlValue::Bool(v) => qb.push_bind(v),
            SqlValue::Int(v) => qb.push_bind(v),
            SqlValue::BigInt(v) => qb.push_bind(v),
            SqlValue::Text(v) => qb.push_bind(v),
            SqlValue::OptText(v) => qb.push_bind(v),
            SqlValue::Date(v) => qb.push_bind(v),
            SqlValue::DateTime(v) => qb.push_bind(v),
        };
    }
}

/// Appends a `WHERE` clause with all `conditions` to `qb`, if any.
fn push_where<'args, DB: PushValue<'args>>(
    qb: &mut QueryBuilder<'args, DB>,
    conditions: Vec<Condition>,
) {
    for (i, condition) in conditions.into_iter().enumerate() {
        qb.push(if i == 0 { " WHERE " } else { " AND " });
        qb.push(condition.column).push(" ").push(condition.op.as_sql()).push(" ");
        DB::push_value(qb, condition.value);
    }
}

/// Builds a query that fetches all rows of `table` that match `conditions`, ordered by id.
fn push_select<'args, DB: PushValue<'args>>(
    qb: &mut QueryBuilder<'args, DB>,
    table: &str,
    conditions: Vec<Condition>,
) {
    qb.push("SELECT * FROM ").push(table);
    push_where(qb, conditions);
    qb.push(" ORDER BY id");
}

/// Builds a query that counts the rows of `table` that match `conditions`.
fn push_count<'args, DB: PushValue<'args>>(
    qb: &mut QueryBuilder<'args, DB>,
    table: &str,
    conditions: Vec<Condition>,
) {
    qb.push("SELECT COUNT(*) AS count FROM ").push(table);
    push_where(qb, conditions);
}

/// Builds a statement that inserts a new row in `table` and returns its id.
fn push_insert<'args, DB: PushValue<'args>>(
    qb: &mut QueryBuilder<'args, DB>,
    table: &str,
    columns: Vec<(&'static str, SqlValue)>,
) {
    let (names, values): (Vec<&str>, Vec<SqlValue>) = columns.into_iter().unzip();
    qb.push("INSERT INTO ").push(table).push(" (").push(names.join(", ")).push(") VALUES (");
    for (i, value) in values.into_iter().enumerate() {
        if i > 0 {
            qb.push(", ");
        }
        DB::push_value(qb, value);
    }
    qb.push(") RETURNING id");
}

/// Builds a statement that overwrites `columns` of the row with `id` in `table`.
fn push_update<'args, DB: PushValue<'args>>(
    qb: &mut QueryBuilder<'args, DB>,
    table: &str,
    id: RecordId,
    columns: Vec<(&'static str, SqlValue)>,
) {
    qb.push("UPDATE ").push(table).push(" SET ");
    for (i, (name, value)) in columns.into_iter().enumerate() {
        if i > 0 {
            qb.push(", ");
        }
        qb.push(name).push(" = ");
        DB::push_value(qb, value);
    }
    push_where(qb, vec![Condition::eq("id", id)]);
}

/// Builds a statement that deletes all rows of `table` that match `conditions`.
fn push_delete<'args, DB: PushValue<'args>>(
    qb: &mut QueryBuilder<'args, DB>,
    table: &str,
    conditions: Vec<Condition>,
) {
    qb.push("DELETE FROM ").push(table);
    push_where(qb, conditions);
}

/// Fetches all rows of `table` that match `conditions` and decodes them with `D`.
pub(crate) async fn select<D: DecodeRow>(
    ex: &mut Executor,
    table: &str,
    conditions: Vec<Condition>,
) -> DbResult<Vec<D::Output>> {
    match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let mut qb = QueryBuilder::<Postgres>::new("");
            push_select(&mut qb, table, conditions);
            let rows = qb.build().fetch_all(ex.conn()).await.map_err(postgres::map_sqlx_error)?;
            rows.into_iter().map(D::from_pg_row).collect()
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let mut qb = QueryBuilder::<Sqlite>::new("");
            push_select(&mut qb, table, conditions);
            let rows = qb.build().fetch_all(ex.conn()).await.map_err(sqlite::map_sqlx_error)?;
            rows.into_iter().map(D::from_sqlite_row).collect()
        }

        #[allow(unused)]
        _ => unreachable!(),
    }
}

/// Counts the rows of `table` that match `conditions`.
pub(crate) async fn count(
    ex: &mut Executor,
    table: &str,
    conditions: Vec<Condition>,
) -> DbResult<u64> {
    let count: i64 = match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let mut qb = QueryBuilder::<Postgres>::new("");
            push_count(&mut qb, table, conditions);
            let row = qb.build().fetch_one(ex.conn()).await.map_err(postgres::map_sqlx_error)?;
            row.try_get("count").map_err(postgres::map_sqlx_error)?
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let mut qb = QueryBuilder::<Sqlite>::new("");
            push_count(&mut qb, table, conditions);
            let row = qb.build().fetch_one(ex.conn()).await.map_err(sqlite::map_sqlx_error)?;
            row.try_get("count").map_err(sqlite::map_sqlx_error)?
        }

        #[allow(unused)]
        _ => unreachable!(),
    };
    u64::try_from(count).map_err(|e| DbError::DataIntegrityError(format!("Bad row count: {}", e)))
}

/// Inserts a new row with `columns` into `table` and returns the id assigned to it.
pub(crate) async fn insert(
    ex: &mut Executor,
    table: &str,
    columns: Vec<(&'static str, SqlValue)>,
) -> DbResult<RecordId> {
    let id: i64 = match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let mut qb = QueryBuilder::<Postgres>::new("");
            push_insert(&mut qb, table, columns);
            let row = qb.build().fetch_one(ex.conn()).await.map_err(postgres::map_sqlx_error)?;
            row.try_get("id").map_err(postgres::map_sqlx_error)?
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let mut qb = QueryBuilder::<Sqlite>::new("");
            push_insert(&mut qb, table, columns);
            let row = qb.build().fetch_one(ex.conn()).await.map_err(sqlite::map_sqlx_error)?;
            row.try_get("id").map_err(sqlite::map_sqlx_error)?
        }

        #[allow(unused)]
        _ => unreachable!(),
    };
    Ok(RecordId::new(id))
}

/// Overwrites `columns` of the row with `id` in `table`.
///
/// Fails with `NotFound` if there is no such row.
pub(crate) async fn update(
    ex: &mut Executor,
    table: &str,
    id: RecordId,
    columns: Vec<(&'static str, SqlValue)>,
) -> DbResult<()> {
    let rows_affected = match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let mut qb = QueryBuilder::<Postgres>::new("");
            push_update(&mut qb, table, id, columns);
            let done = qb.build().execute(ex.conn()).await.map_err(postgres::map_sqlx_error)?;
            done.rows_affected()
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let mut qb = QueryBuilder::<Sqlite>::new("");
            push_update(&mut qb, table, id, columns);
            let done = qb.build().execute(ex.conn()).await.map_err(sqlite::map_sqlx_error)?;
            done.rows_affected()
        }

        #[allow(unused)]
        _ => unreachable!(),
    };

    match rows_affected {
        0 => Err(DbError::NotFound),
        1 => Ok(()),
        _ => Err(DbError::BackendError("Update affected more than one row".to_owned())),
    }
}

/// Deletes all rows of `table` that match `conditions` and returns how many were deleted.
pub(crate) async fn delete(
    ex: &mut Executor,
    table: &str,
    conditions: Vec<Condition>,
) -> DbResult<u64> {
    match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let mut qb = QueryBuilder::<Postgres>::new("");
            push_delete(&mut qb, table, conditions);
            let done = qb.build().execute(ex.conn()).await.map_err(postgres::map_sqlx_error)?;
            Ok(done.rows_affected())
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let mut qb = QueryBuilder::<Sqlite>::new("");
            push_delete(&mut qb, table, conditions);
            let done = qb.build().execute(ex.conn()).await.map_err(sqlite::map_sqlx_error)?;
            Ok(done.rows_affected())
        }

        #[allow(unused)]
        _ => unreachable!(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_select_without_conditions() {
        let mut qb = QueryBuilder::<Sqlite>::new("");
        push_select(&mut qb, "things", vec![]);
        assert_eq!("SELECT * FROM things ORDER BY id", qb.sql());
    }

    #[test]
    fn test_push_select_with_conditions() {
        let mut qb = QueryBuilder::<Sqlite>::new("");
        push_select(
            &mut qb,
            "things",
            vec![
                Condition::eq("a", 1),
                Condition::like("b", "x%".to_owned()),
                Condition::at_least("c", 5),
            ],
        );
        assert_eq!("SELECT * FROM things WHERE a = ? AND b LIKE ? AND c >= ? ORDER BY id", qb.sql());
    }

    #[test]
    fn test_push_insert() {
        let mut qb = QueryBuilder::<Sqlite>::new("");
        push_insert(&mut qb, "things", vec![("a", SqlValue::Int(1)), ("b", SqlValue::from(true))]);
        assert_eq!("INSERT INTO things (a, b) VALUES (?, ?) RETURNING id", qb.sql());
    }

    #[test]
    fn test_push_update() {
        let mut qb = QueryBuilder::<Sqlite>::new("");
        push_update(
            &mut qb,
            "things",
            RecordId::new(3),
            vec![("a", SqlValue::Int(1)), ("b", SqlValue::OptText(None))],
        );
        assert_eq!("UPDATE things SET a = ?, b = ? WHERE id = ?", qb.sql());
    }

    #[test]
    fn test_push_delete() {
        let mut qb = QueryBuilder::<Sqlite>::new("");
        push_delete(&mut qb, "things", vec![Condition::eq("owner_id", RecordId::new(3))]);
        assert_eq!("DELETE FROM things WHERE owner_id = ?", qb.sql());
    }
}
