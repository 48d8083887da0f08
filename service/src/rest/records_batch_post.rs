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

//! API to store multiple new records at once.

use crate::driver::Driver;
use crate::rest::{entity_to_dto, Resource};
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use roster_core::model::ModelResult;
use roster_core::rest::{JsonBody, RestError};

/// POST handler for this API.
pub(crate) async fn handler<R: Resource>(
    State(driver): State<Driver>,
    JsonBody(request): JsonBody<Vec<R::Dto>>,
) -> Result<(StatusCode, Json<Vec<R::Dto>>), RestError> {
    let records = request.into_iter().map(R::from_dto).collect::<ModelResult<Vec<_>>>()?;
    let entities = driver.insert_all(records).await?;
    Ok((StatusCode::CREATED, Json(entities.into_iter().map(entity_to_dto).collect())))
}
