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

//! Test utilities for the REST API.

use crate::db::{self, Table};
use crate::driver::Driver;
use crate::model::{Entity, RecordId};
use crate::rest::{app, Resource};
use axum::Router;
use roster_core::db::{Db, DbError};
use std::sync::Arc;

/// State of a running test.
pub(crate) struct TestContext {
    /// The database the app is backed by.
    db: Arc<dyn Db + Send + Sync>,

    /// The app under test.
    app: Router,
}

impl TestContext {
    /// Initializes the app using an in-memory database.
    pub(crate) async fn setup() -> Self {
        let db: Arc<dyn Db + Send + Sync> =
            Arc::new(roster_core::db::sqlite::testutils::setup().await);
        db::init_schema(&mut db.ex().await.unwrap()).await.unwrap();
        let app = app(Driver::new(db.clone()));
        Self { db, app }
    }

    /// Gets a clone of the app router.
    pub(crate) fn app(&self) -> Router {
        self.app.clone()
    }

    /// Consumes the context and transforms it into the app router.
    pub(crate) fn into_app(self) -> Router {
        self.app
    }

    /// Stores `record` directly in the database.
    pub(crate) async fn insert<T: Table>(&self, record: T) -> Entity<T> {
        db::insert(&mut self.db.ex().await.unwrap(), record).await.unwrap()
    }

    /// Fetches the record with `id` directly from the database.
    pub(crate) async fn get<T: Table>(&self, id: RecordId) -> Option<Entity<T>> {
        match db::get::<T>(&mut self.db.ex().await.unwrap(), id).await {
            Ok(entity) => Some(entity),
            Err(DbError::NotFound) => None,
            Err(e) => panic!("{:?}", e),
        }
    }

    /// Fetches all records of type `T` directly from the database.
    pub(crate) async fn get_all<T: Table>(&self) -> Vec<Entity<T>> {
        db::get_all::<T>(&mut self.db.ex().await.unwrap(), &T::Filter::default()).await.unwrap()
    }
}

/// Converts a `record` without an id to its wire representation.
pub(crate) fn new_dto<R: Resource>(record: R) -> R::Dto {
    R::to_dto(None, record)
}

/// Converts a stored `entity` to its wire representation.
pub(crate) fn dto<R: Resource>(entity: Entity<R>) -> R::Dto {
    super::entity_to_dto(entity)
}
