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

//! API to delete a single record.

use crate::driver::Driver;
use crate::model::RecordId;
use crate::rest::Resource;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::Json;
use roster_core::rest::{EmptyBody, RestError};

/// DELETE handler for this API.
pub(crate) async fn handler<R: Resource>(
    State(driver): State<Driver>,
    id: Result<Path<RecordId>, PathRejection>,
    _: EmptyBody,
) -> Result<Json<bool>, RestError> {
    let Path(id) = id?;
    driver.delete::<R>(id).await?;
    Ok(Json(true))
}

#[cfg(test)]
mod tests {
    use crate::model::testutils::{employee, student};
    use crate::model::{Employee, RecordId, Student};
    use crate::rest::testutils::*;
    use axum::http;
    use roster_core::rest::testutils::OneShotBuilder;
    use roster_core::test_payload_must_be_empty;

    fn route(base: &str, id: RecordId) -> (http::Method, String) {
        (http::Method::DELETE, format!("{}/{}", base, id))
    }

    #[tokio::test]
    async fn test_ok() {
        let context = TestContext::setup().await;

        let e1 = context.insert(employee(1)).await;
        let e2 = context.insert(employee(2)).await;

        let response = OneShotBuilder::new(context.app(), route("/employees", e1.id()))
            .send_empty()
            .await
            .expect_json::<bool>()
            .await;
        assert!(response);

        assert_eq!(None, context.get::<Employee>(e1.id()).await);
        assert_eq!(vec![e2], context.get_all::<Employee>().await);
    }

    #[tokio::test]
    async fn test_not_found_is_consistent() {
        let context = TestContext::setup().await;

        let s1 = context.insert(student(1)).await;

        OneShotBuilder::new(context.app(), route("/students", s1.id()))
            .send_empty()
            .await
            .expect_json::<bool>()
            .await;

        for _ in 0..2 {
            OneShotBuilder::new(context.app(), route("/students", s1.id()))
                .send_empty()
                .await
                .expect_status(http::StatusCode::NOT_FOUND)
                .expect_error(&format!("^No record found with id {}$", s1.id()))
                .await;
        }

        assert!(context.get_all::<Student>().await.is_empty());
    }

    test_payload_must_be_empty!(
        TestContext::setup().await.into_app(),
        route("/students", RecordId::new(1))
    );
}
