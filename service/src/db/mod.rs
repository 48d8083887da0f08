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

//! Database abstraction in terms of the operations needed by the server.
//!
//! Every record type is stored in its own table and implements the `Table` trait, which describes
//! how to map the record to columns and back.  The free functions in this module then implement
//! the CRUD operations generically on top of any `Table`.

use crate::model::{Entity, RecordId};
use async_trait::async_trait;
#[cfg(feature = "postgres")]
use roster_core::db::postgres;
#[cfg(any(feature = "sqlite", test))]
use roster_core::db::sqlite;
use roster_core::db::{DbError, DbResult, Executor};
use serde::de::DeserializeOwned;

mod employees;
mod sql;
pub(crate) use sql::{Condition, DecodeRow, SqlValue};
mod students;
mod superheroes;

/// Initializes the database schema.
pub async fn init_schema(ex: &mut Executor) -> DbResult<()> {
    match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => postgres::run_schema(ex, include_str!("postgres.sql")).await,

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => sqlite::run_schema(ex, include_str!("sqlite.sql")).await,

        #[allow(unused)]
        _ => unreachable!(),
    }
}

/// Mapping between a record type and the table that stores it.
#[async_trait]
pub(crate) trait Table: DecodeRow<Output = Entity<Self>> + Send + Sized + Sync + 'static {
    /// Name of the table that holds the records.
    const TABLE: &'static str;

    /// Derived finders supported by listings of this record type.
    type Filter: Default + DeserializeOwned + Send + Sync + 'static;

    /// Query-by-example probe for this record type.
    type Probe: Default + Send + Sync + 'static;

    /// Returns the column values that represent this record, excluding the id.
    fn columns(&self) -> Vec<(&'static str, SqlValue)>;

    /// Converts the derived finders in `filter` into conditions.
    fn filter_conditions(filter: &Self::Filter) -> Vec<Condition>;

    /// Converts the set fields of `probe` into equality conditions.
    fn probe_conditions(probe: &Self::Probe) -> Vec<Condition>;

    /// Fetches any data stored outside of the main table for `entity` and attaches it.
    async fn load_children(_ex: &mut Executor, entity: Entity<Self>) -> DbResult<Entity<Self>> {
        Ok(entity)
    }

    /// Replaces any data stored outside of the main table for the record with `id`.
    ///
    /// Child rows are removed automatically when their parent is deleted.
    async fn save_children(_ex: &mut Executor, _id: RecordId, _record: &Self) -> DbResult<()> {
        Ok(())
    }
}

/// Attaches the child data of every entity in `entities`.
async fn load_children<T: Table>(
    ex: &mut Executor,
    entities: Vec<Entity<T>>,
) -> DbResult<Vec<Entity<T>>> {
    let mut loaded = Vec::with_capacity(entities.len());
    for entity in entities {
        loaded.push(T::load_children(ex, entity).await?);
    }
    Ok(loaded)
}

/// Fetches all stored entities of type `T` that pass `filter`, ordered by id.
pub(crate) async fn get_all<T: Table>(
    ex: &mut Executor,
    filter: &T::Filter,
) -> DbResult<Vec<Entity<T>>> {
    let entities = sql::select::<T>(ex, T::TABLE, T::filter_conditions(filter)).await?;
    load_children(ex, entities).await
}

/// Fetches all stored entities of type `T` that match `probe`, ordered by id.
pub(crate) async fn search<T: Table>(
    ex: &mut Executor,
    probe: &T::Probe,
) -> DbResult<Vec<Entity<T>>> {
    let entities = sql::select::<T>(ex, T::TABLE, T::probe_conditions(probe)).await?;
    load_children(ex, entities).await
}

/// Fetches the entity of type `T` with `id`.
pub(crate) async fn get<T: Table>(ex: &mut Executor, id: RecordId) -> DbResult<Entity<T>> {
    let entities = sql::select::<T>(ex, T::TABLE, vec![Condition::eq("id", id)]).await?;
    match entities.into_iter().next() {
        Some(entity) => T::load_children(ex, entity).await,
        None => Err(DbError::NotFound),
    }
}

/// Checks if an entity of type `T` with `id` exists.
pub(crate) async fn exists<T: Table>(ex: &mut Executor, id: RecordId) -> DbResult<bool> {
    let count = sql::count(ex, T::TABLE, vec![Condition::eq("id", id)]).await?;
    Ok(count > 0)
}

/// Stores a new `record` and returns it together with its newly-assigned id.
pub(crate) async fn insert<T: Table>(ex: &mut Executor, record: T) -> DbResult<Entity<T>> {
    let id = sql::insert(ex, T::TABLE, record.columns()).await?;
    T::save_children(ex, id, &record).await?;
    Ok(Entity::new(id, record))
}

/// Overwrites the stored entity with the id of `entity` with its contents.
pub(crate) async fn update<T: Table>(ex: &mut Executor, entity: Entity<T>) -> DbResult<Entity<T>> {
    sql::update(ex, T::TABLE, entity.id(), entity.record().columns()).await?;
    T::save_children(ex, entity.id(), entity.record()).await?;
    Ok(entity)
}

/// Deletes the entity of type `T` with `id`.
pub(crate) async fn delete<T: Table>(ex: &mut Executor, id: RecordId) -> DbResult<()> {
    match sql::delete(ex, T::TABLE, vec![Condition::eq("id", id)]).await? {
        0 => Err(DbError::NotFound),
        _ => Ok(()),
    }
}

/// Deletes all entities of type `T` and returns how many there were.
pub(crate) async fn delete_all<T: Table>(ex: &mut Executor) -> DbResult<u64> {
    sql::delete(ex, T::TABLE, vec![]).await
}
