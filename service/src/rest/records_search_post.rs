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

//! API to look up records by example.

use crate::driver::Driver;
use crate::rest::{entity_to_dto, Resource};
use axum::extract::State;
use axum::Json;
use roster_core::rest::{JsonBody, RestError};

/// POST handler for this API.
pub(crate) async fn handler<R: Resource>(
    State(driver): State<Driver>,
    JsonBody(request): JsonBody<R::ProbeDto>,
) -> Result<Json<Vec<R::Dto>>, RestError> {
    let probe = R::probe_from_dto(request)?;
    let entities = driver.search::<R>(probe).await?;
    Ok(Json(entities.into_iter().map(entity_to_dto).collect()))
}
