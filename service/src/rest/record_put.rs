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

//! API to replace the contents of a single record.

use crate::driver::Driver;
use crate::model::RecordId;
use crate::rest::{entity_to_dto, Resource};
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use roster_core::rest::{JsonBody, RestError};

/// PUT handler for this API.
pub(crate) async fn handler<R: Resource>(
    State(driver): State<Driver>,
    id: Result<Path<RecordId>, PathRejection>,
    JsonBody(request): JsonBody<R::Dto>,
) -> Result<(StatusCode, Json<R::Dto>), RestError> {
    let Path(id) = id?;
    let (payload_id, record) = R::from_dto(request)?;
    let entity = driver.update(id, payload_id, record).await?;
    Ok((StatusCode::ACCEPTED, Json(entity_to_dto(entity))))
}
