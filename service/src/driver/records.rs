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

//! Extends the driver with operations on individual records.

use crate::db::{self, Table};
use crate::driver::Driver;
use crate::model::{Entity, RecordId};
use log::info;
use roster_core::db::DbError;
use roster_core::driver::{DriverError, DriverResult};

/// Builds the error returned when the record with `id` does not exist.
pub(super) fn not_found(id: RecordId) -> DriverError {
    DriverError::NotFound(format!("No record found with id {}", id))
}

impl Driver {
    /// Gets the record with `id`.
    pub(crate) async fn get<T: Table>(self, id: RecordId) -> DriverResult<Entity<T>> {
        let mut ex = self.db.ex().await?;
        match db::get::<T>(&mut ex, id).await {
            Ok(entity) => Ok(entity),
            Err(DbError::NotFound) => Err(not_found(id)),
            Err(e) => Err(e.into()),
        }
    }

    /// Stores a new `record`.
    ///
    /// If the payload carried an `id` and a record with that id already exists, the insertion
    /// fails.  Otherwise, any given `id` is ignored and the database assigns a new one.
    pub(crate) async fn insert<T: Table>(
        self,
        id: Option<RecordId>,
        record: T,
    ) -> DriverResult<Entity<T>> {
        let mut tx = self.db.begin().await?;

        if let Some(id) = id {
            if db::exists::<T>(tx.ex(), id).await? {
                return Err(DriverError::AlreadyExists(format!(
                    "Record already found with id {}",
                    id
                )));
            }
        }

        let entity = db::insert(tx.ex(), record).await?;
        tx.commit().await?;

        info!("Inserted record {} into {}", entity.id(), T::TABLE);
        Ok(entity)
    }

    /// Replaces the contents of the record with `path_id` with `record`.
    ///
    /// `payload_id` is the id carried by the request body, which must be present and match
    /// `path_id`.
    pub(crate) async fn update<T: Table>(
        self,
        path_id: RecordId,
        payload_id: Option<RecordId>,
        record: T,
    ) -> DriverResult<Entity<T>> {
        let payload_id = match payload_id {
            Some(id) => id,
            None => {
                return Err(DriverError::InvalidPayload("Payload record id is null".to_owned()))
            }
        };
        if path_id != payload_id {
            return Err(DriverError::InvalidPayload(format!(
                "Update Record id: {} not equal to payload id: {}",
                path_id, payload_id
            )));
        }

        let mut tx = self.db.begin().await?;
        let entity = match db::update(tx.ex(), Entity::new(path_id, record)).await {
            Ok(entity) => entity,
            Err(DbError::NotFound) => return Err(not_found(path_id)),
            Err(e) => return Err(e.into()),
        };
        tx.commit().await?;

        info!("Updated record {} in {}", path_id, T::TABLE);
        Ok(entity)
    }

    /// Deletes the record with `id`.
    pub(crate) async fn delete<T: Table>(self, id: RecordId) -> DriverResult<()> {
        let mut tx = self.db.begin().await?;
        match db::delete::<T>(tx.ex(), id).await {
            Ok(()) => (),
            Err(DbError::NotFound) => return Err(not_found(id)),
            Err(e) => return Err(e.into()),
        }
        tx.commit().await?;

        info!("Deleted record {} from {}", id, T::TABLE);
        Ok(())
    }
}
