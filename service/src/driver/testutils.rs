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

//! Utilities to help testing the driver.

use crate::db;
use crate::driver::Driver;
use crate::model::{Entity, RecordId};
use roster_core::db::{Db, Executor};
use std::sync::Arc;

/// State of a running test.
pub(crate) struct TestContext {
    /// The database the driver is backed by.
    db: Arc<dyn Db + Send + Sync>,

    /// The driver under test.
    driver: Driver,
}

impl TestContext {
    /// Initializes the driver using an in-memory database.
    pub(crate) async fn setup() -> Self {
        let db: Arc<dyn Db + Send + Sync> =
            Arc::new(roster_core::db::sqlite::testutils::setup().await);
        db::init_schema(&mut db.ex().await.unwrap()).await.unwrap();
        let driver = Driver::new(db.clone());
        Self { db, driver }
    }

    /// Obtains a direct executor against the database.
    pub(crate) async fn ex(&self) -> Executor {
        self.db.ex().await.unwrap()
    }

    /// Gets a copy of the driver in this test context.
    pub(crate) fn driver(&self) -> Driver {
        self.driver.clone()
    }

    /// Stores `record` directly in the database, bypassing the driver.
    pub(crate) async fn insert<T: db::Table>(&self, record: T) -> Entity<T> {
        db::insert(&mut self.ex().await, record).await.unwrap()
    }

    /// Fetches the record with `id` directly from the database, bypassing the driver.
    pub(crate) async fn get<T: db::Table>(&self, id: RecordId) -> Option<Entity<T>> {
        match db::get::<T>(&mut self.ex().await, id).await {
            Ok(entity) => Some(entity),
            Err(roster_core::db::DbError::NotFound) => None,
            Err(e) => panic!("{:?}", e),
        }
    }
}
