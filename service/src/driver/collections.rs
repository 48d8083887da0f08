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

//! Extends the driver with operations on whole collections of records.

use crate::db::{self, Table};
use crate::driver::Driver;
use crate::model::{Entity, RecordId};
use log::{info, warn};
use roster_core::driver::{DriverError, DriverResult};

/// Builds the error returned when a listing has nothing to return.
fn no_records() -> DriverError {
    DriverError::NotFound("No record found".to_owned())
}

impl Driver {
    /// Gets all records that pass `filter`, ordered by id.  An empty result is an error.
    pub(crate) async fn get_all<T: Table>(self, filter: T::Filter) -> DriverResult<Vec<Entity<T>>> {
        let mut ex = self.db.ex().await?;
        let entities = db::get_all::<T>(&mut ex, &filter).await?;
        if entities.is_empty() {
            return Err(no_records());
        }
        Ok(entities)
    }

    /// Gets all records that match `probe`, ordered by id.  An empty result is an error.
    pub(crate) async fn search<T: Table>(self, probe: T::Probe) -> DriverResult<Vec<Entity<T>>> {
        let mut ex = self.db.ex().await?;
        let entities = db::search::<T>(&mut ex, &probe).await?;
        if entities.is_empty() {
            return Err(no_records());
        }
        Ok(entities)
    }

    /// Stores all `records` one at a time, following the rules of `insert` for each.
    ///
    /// Every record is stored in its own transaction: a failure stops the process but does not
    /// undo the records that were already stored.
    pub(crate) async fn insert_all<T: Table>(
        self,
        records: Vec<(Option<RecordId>, T)>,
    ) -> DriverResult<Vec<Entity<T>>> {
        let total = records.len();
        let mut entities = Vec::with_capacity(total);
        for (id, record) in records {
            match self.clone().insert(id, record).await {
                Ok(entity) => entities.push(entity),
                Err(e) => {
                    warn!(
                        "Batch insertion into {} stopped after {} of {} records: {}",
                        T::TABLE,
                        entities.len(),
                        total,
                        e
                    );
                    return Err(e);
                }
            }
        }
        Ok(entities)
    }

    /// Deletes all records and returns how many there were.
    pub(crate) async fn delete_all<T: Table>(self) -> DriverResult<u64> {
        let mut tx = self.db.begin().await?;
        let count = db::delete_all::<T>(tx.ex()).await?;
        tx.commit().await?;

        info!("Deleted {} records from {}", count, T::TABLE);
        Ok(count)
    }
}
