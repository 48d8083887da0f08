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

//! API to delete all records of a kind.

use crate::driver::Driver;
use crate::rest::Resource;
use axum::extract::State;
use axum::Json;
use roster_core::rest::{EmptyBody, RestError};

/// DELETE handler for this API.
pub(crate) async fn handler<R: Resource>(
    State(driver): State<Driver>,
    _: EmptyBody,
) -> Result<Json<u64>, RestError> {
    let count = driver.delete_all::<R>().await?;
    Ok(Json(count))
}
