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

//! API to store a new record.

use crate::driver::Driver;
use crate::rest::{entity_to_dto, Resource};
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use roster_core::rest::{JsonBody, RestError};

/// POST handler for this API.
pub(crate) async fn handler<R: Resource>(
    State(driver): State<Driver>,
    JsonBody(request): JsonBody<R::Dto>,
) -> Result<(StatusCode, Json<R::Dto>), RestError> {
    let (id, record) = R::from_dto(request)?;
    let entity = driver.insert(id, record).await?;
    Ok((StatusCode::CREATED, Json(entity_to_dto(entity))))
}

#[cfg(test)]
mod tests {
    use crate::model::testutils::{bare_employee, employee, student, superhero};
    use crate::model::{Employee, RecordId, Student, SuperHero};
    use crate::rest::dto::employee::EmployeeDto;
    use crate::rest::dto::student::StudentDto;
    use crate::rest::dto::superhero::SuperHeroDto;
    use crate::rest::testutils::*;
    use axum::http;
    use roster_core::rest::testutils::OneShotBuilder;
    use roster_core::test_payload_must_be_json;

    fn route(base: &str) -> (http::Method, String) {
        (http::Method::POST, base.to_owned())
    }

    #[tokio::test]
    async fn test_ok() {
        let context = TestContext::setup().await;

        let response = OneShotBuilder::new(context.app(), route("/students"))
            .send_json(new_dto(student(1)))
            .await
            .expect_status(http::StatusCode::CREATED)
            .expect_json::<StudentDto>()
            .await;

        let stored = context.get_all::<Student>().await;
        assert_eq!(1, stored.len());
        assert_eq!(&student(1), stored[0].record());
        assert_eq!(dto(stored[0].clone()), response);
    }

    #[tokio::test]
    async fn test_ok_employee_with_children() {
        let context = TestContext::setup().await;

        for record in [employee(1), bare_employee(2)] {
            let response = OneShotBuilder::new(context.app(), route("/employees"))
                .send_json(new_dto(record.clone()))
                .await
                .expect_status(http::StatusCode::CREATED)
                .expect_json::<EmployeeDto>()
                .await;

            let id = response.id.expect("Stored records must have an id");
            let stored = context.get::<Employee>(id).await.unwrap();
            assert_eq!(&record, stored.record());
        }
    }

    #[tokio::test]
    async fn test_employee_defaults() {
        let context = TestContext::setup().await;

        let request = serde_json::json!({
            "firstName": "Jane",
            "lastName": "Doe",
            "age": 35,
            "dateOfJoining": "2020-01-02 03:04:05",
        });
        let response = OneShotBuilder::new(context.app(), route("/employees"))
            .send_json(request)
            .await
            .expect_status(http::StatusCode::CREATED)
            .expect_json::<serde_json::Value>()
            .await;

        assert_eq!(0, response["noOfChildrens"]);
        assert!(response["spouse"].is_null());
        assert_eq!(serde_json::json!([]), response["hobbies"]);
        assert!(response["address"].is_null());
        assert_eq!(serde_json::json!([]), response["phoneNumbers"]);
    }

    #[tokio::test]
    async fn test_unknown_id_is_ignored() {
        let context = TestContext::setup().await;

        let mut request = new_dto(superhero(1));
        request.id = Some(RecordId::new(999));
        let response = OneShotBuilder::new(context.app(), route("/super-heroes"))
            .send_json(request)
            .await
            .expect_status(http::StatusCode::CREATED)
            .expect_json::<SuperHeroDto>()
            .await;

        let stored = context.get_all::<SuperHero>().await;
        assert_eq!(1, stored.len());
        assert_eq!(dto(stored[0].clone()), response);
    }

    #[tokio::test]
    async fn test_duplicate_id() {
        let context = TestContext::setup().await;

        let existing = context.insert(student(1)).await;

        let mut request = new_dto(student(2));
        request.id = Some(existing.id());
        OneShotBuilder::new(context.app(), route("/students"))
            .send_json(request)
            .await
            .expect_status(http::StatusCode::CONFLICT)
            .expect_error(&format!("^Record already found with id {}$", existing.id()))
            .await;

        assert_eq!(vec![existing], context.get_all::<Student>().await);
    }

    #[tokio::test]
    async fn test_bad_date() {
        let context = TestContext::setup().await;

        let mut request = new_dto(student(1));
        request.date_of_birth = "01/02/2003".to_owned();
        OneShotBuilder::new(context.app(), route("/students"))
            .send_json(request)
            .await
            .expect_status(http::StatusCode::BAD_REQUEST)
            .expect_error("Invalid date '01/02/2003'")
            .await;

        assert!(context.get_all::<Student>().await.is_empty());
    }

    #[tokio::test]
    async fn test_incomplete_payload() {
        let context = TestContext::setup().await;

        OneShotBuilder::new(context.app(), route("/students"))
            .send_json(serde_json::json!({"firstName": "Jane"}))
            .await
            .expect_status(http::StatusCode::BAD_REQUEST)
            .expect_error("missing field")
            .await;

        assert!(context.get_all::<Student>().await.is_empty());
    }

    test_payload_must_be_json!(TestContext::setup().await.into_app(), route("/students"));
}
