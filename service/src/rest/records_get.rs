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

//! API to list all records of a type, optionally narrowed by derived finders.

use crate::driver::Driver;
use crate::rest::{entity_to_dto, Resource};
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use roster_core::rest::{EmptyBody, RestError};

/// GET handler for this API.
pub(crate) async fn handler<R: Resource>(
    State(driver): State<Driver>,
    filter: Result<Query<R::Filter>, QueryRejection>,
    _: EmptyBody,
) -> Result<Json<Vec<R::Dto>>, RestError> {
    let Query(filter) = filter?;
    let entities = driver.get_all::<R>(filter).await?;
    Ok(Json(entities.into_iter().map(entity_to_dto).collect()))
}
