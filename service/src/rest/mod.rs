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

//! REST interface for the CRUD service.
//!
//! Every record type is exposed under its own base path with the same set of APIs, which are
//! implemented once generically over the `Resource` trait.

use crate::db::Table;
use crate::driver::Driver;
use crate::model::{Employee, Entity, RecordId, Student, SuperHero};
use axum::Router;
use roster_core::model::ModelResult;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub(crate) mod dto;
mod record_delete;
mod record_get;
mod record_put;
mod records_batch_post;
mod records_delete;
mod records_get;
mod records_post;
mod records_search_post;
#[cfg(test)]
mod testutils;

/// A record type that is exposed through the REST interface.
pub(crate) trait Resource: Table {
    /// Base path under which the APIs for this record type are served.
    const PATH: &'static str;

    /// Wire representation of a record.
    type Dto: DeserializeOwned + Serialize + Send + 'static;

    /// Wire representation of a query-by-example probe.
    type ProbeDto: DeserializeOwned + Send + 'static;

    /// Converts a `record` and its optional `id` to its wire representation.
    fn to_dto(id: Option<RecordId>, record: Self) -> Self::Dto;

    /// Converts a wire representation to a record and the id it carried, if any.
    fn from_dto(dto: Self::Dto) -> ModelResult<(Option<RecordId>, Self)>;

    /// Converts the wire representation of a probe to a probe.
    fn probe_from_dto(dto: Self::ProbeDto) -> ModelResult<Self::Probe>;
}

/// Converts a stored `entity` to its wire representation.
fn entity_to_dto<R: Resource>(entity: Entity<R>) -> R::Dto {
    let (id, record) = entity.dissolve();
    R::to_dto(Some(id), record)
}

/// Creates the router for the APIs of the `R` record type.
fn resource_router<R: Resource>() -> Router<Driver> {
    use axum::routing::{get, post};

    Router::new()
        .route(
            R::PATH,
            get(records_get::handler::<R>)
                .post(records_post::handler::<R>)
                .delete(records_delete::handler::<R>),
        )
        .route(&format!("{}/batch", R::PATH), post(records_batch_post::handler::<R>))
        .route(&format!("{}/search", R::PATH), post(records_search_post::handler::<R>))
        .route(
            &format!("{}/:id", R::PATH),
            get(record_get::handler::<R>)
                .put(record_put::handler::<R>)
                .delete(record_delete::handler::<R>),
        )
}

/// Creates the router for the application.
pub(crate) fn app(driver: Driver) -> Router {
    Router::new()
        .merge(resource_router::<Employee>())
        .merge(resource_router::<Student>())
        .merge(resource_router::<SuperHero>())
        .with_state(driver)
}

#[cfg(test)]
mod tests {
    use super::dto::employee::{AddressDto, EmployeeDto, PhoneNumberDto};
    use super::testutils::*;
    use axum::http::{Method, StatusCode};
    use roster_core::rest::testutils::OneShotBuilder;

    #[tokio::test]
    async fn test_e2e_employee_lifecycle() {
        let context = TestContext::setup().await;

        let request = serde_json::json!({
            "firstName": "Jane",
            "lastName": "Doe",
            "age": 35,
            "noOfChildrens": 2,
            "spouse": "John",
            "dateOfJoining": "2020-01-02 03:04:05",
            "hobbies": ["chess", "golf"],
            "address": {
                "street": "1 Main St",
                "city": "Springfield",
                "state": "OR",
                "country": "USA",
                "postalCode": "97403",
            },
            "phoneNumbers": [
                {"type": "mobile", "number": "555-1234"},
                {"type": "home", "number": "555-5678"},
            ],
        });
        let created = OneShotBuilder::new(context.app(), (Method::POST, "/employees"))
            .send_json(request)
            .await
            .expect_status(StatusCode::CREATED)
            .expect_json::<EmployeeDto>()
            .await;
        let id = created.id.expect("Stored records must have an id");

        let exp_employee = EmployeeDto {
            id: Some(id),
            first_name: "Jane".to_owned(),
            last_name: "Doe".to_owned(),
            age: 35,
            no_of_childrens: 2,
            spouse: Some("John".to_owned()),
            date_of_joining: "2020-01-02 03:04:05".to_owned(),
            hobbies: vec!["chess".to_owned(), "golf".to_owned()],
            address: Some(AddressDto {
                street: "1 Main St".to_owned(),
                city: "Springfield".to_owned(),
                state: "OR".to_owned(),
                country: "USA".to_owned(),
                postal_code: "97403".to_owned(),
            }),
            phone_numbers: vec![
                PhoneNumberDto { kind: "mobile".to_owned(), number: "555-1234".to_owned() },
                PhoneNumberDto { kind: "home".to_owned(), number: "555-5678".to_owned() },
            ],
        };
        assert_eq!(exp_employee, created);

        let path = format!("/employees/{}", id);
        let fetched = OneShotBuilder::new(context.app(), (Method::GET, &path))
            .send_empty()
            .await
            .expect_json::<EmployeeDto>()
            .await;
        assert_eq!(exp_employee, fetched);

        let deleted = OneShotBuilder::new(context.app(), (Method::DELETE, &path))
            .send_empty()
            .await
            .expect_json::<bool>()
            .await;
        assert!(deleted);

        OneShotBuilder::new(context.app(), (Method::GET, &path))
            .send_empty()
            .await
            .expect_status(StatusCode::NOT_FOUND)
            .expect_error(&format!("No record found with id {}$", id))
            .await;
    }

    #[tokio::test]
    async fn test_resources_are_independent() {
        let context = TestContext::setup().await;

        let student = context.insert(crate::model::testutils::student(1)).await;

        OneShotBuilder::new(context.app(), (Method::GET, "/super-heroes"))
            .send_empty()
            .await
            .expect_status(StatusCode::NOT_FOUND)
            .expect_error("^No record found$")
            .await;

        OneShotBuilder::new(context.app(), (Method::GET, format!("/employees/{}", student.id())))
            .send_empty()
            .await
            .expect_status(StatusCode::NOT_FOUND)
            .expect_error("No record found with id")
            .await;
    }
}
