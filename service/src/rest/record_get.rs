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

//! API to get a single record.

use crate::driver::Driver;
use crate::model::RecordId;
use crate::rest::{entity_to_dto, Resource};
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::Json;
use roster_core::rest::{EmptyBody, RestError};

/// GET handler for this API.
pub(crate) async fn handler<R: Resource>(
    State(driver): State<Driver>,
    id: Result<Path<RecordId>, PathRejection>,
    _: EmptyBody,
) -> Result<Json<R::Dto>, RestError> {
    let Path(id) = id?;
    let entity = driver.get::<R>(id).await?;
    Ok(Json(entity_to_dto(entity)))
}

#[cfg(test)]
mod tests {
    use crate::model::testutils::{bare_employee, employee, student, superhero};
    use crate::model::RecordId;
    use crate::rest::dto::employee::EmployeeDto;
    use crate::rest::dto::superhero::SuperHeroDto;
    use crate::rest::testutils::*;
    use axum::http;
    use roster_core::rest::testutils::OneShotBuilder;
    use roster_core::test_payload_must_be_empty;

    fn route(base: &str, id: RecordId) -> (http::Method, String) {
        (http::Method::GET, format!("{}/{}", base, id))
    }

    #[tokio::test]
    async fn test_ok() {
        let context = TestContext::setup().await;

        context.insert(superhero(1)).await;
        let h2 = context.insert(superhero(2)).await;

        let response = OneShotBuilder::new(context.app(), route("/super-heroes", h2.id()))
            .send_empty()
            .await
            .expect_json::<SuperHeroDto>()
            .await;
        assert_eq!(dto(h2), response);
    }

    #[tokio::test]
    async fn test_ok_employees() {
        let context = TestContext::setup().await;

        let e1 = context.insert(employee(1)).await;
        let e2 = context.insert(bare_employee(2)).await;

        for entity in [e1, e2] {
            let response = OneShotBuilder::new(context.app(), route("/employees", entity.id()))
                .send_empty()
                .await
                .expect_json::<EmployeeDto>()
                .await;
            assert_eq!(dto(entity), response);
        }
    }

    #[tokio::test]
    async fn test_not_found() {
        let context = TestContext::setup().await;

        // Ids are per table, so a student must not be visible as a super hero.
        let s1 = context.insert(student(1)).await;

        OneShotBuilder::new(context.app(), route("/super-heroes", s1.id()))
            .send_empty()
            .await
            .expect_status(http::StatusCode::NOT_FOUND)
            .expect_error(&format!("^No record found with id {}$", s1.id()))
            .await;
    }

    #[tokio::test]
    async fn test_bad_id() {
        let context = TestContext::setup().await;

        OneShotBuilder::new(context.app(), (http::Method::GET, "/students/abc"))
            .send_empty()
            .await
            .expect_status(http::StatusCode::BAD_REQUEST)
            .expect_error("Cannot parse")
            .await;
    }

    test_payload_must_be_empty!(
        TestContext::setup().await.into_app(),
        route("/students", RecordId::new(1))
    );
}
