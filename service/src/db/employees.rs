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

//! Persistence of employees and the data they own.
//!
//! The optional address lives in nullable columns of the `employees` table.  Hobbies and phone
//! numbers live in their own tables, keyed by the owning employee, and are rewritten in full
//! whenever the employee is saved.

use super::{sql, Condition, DecodeRow, SqlValue, Table};
use crate::model::{
    Address, Employee, EmployeeFilter, EmployeeProbe, Entity, PhoneNumber, RecordId,
};
use async_trait::async_trait;
#[cfg(feature = "postgres")]
use roster_core::db::postgres;
#[cfg(any(feature = "sqlite", test))]
use roster_core::db::sqlite;
use roster_core::db::{DbError, DbResult, Executor};
#[cfg(feature = "postgres")]
use sqlx::postgres::PgRow;
#[cfg(any(feature = "sqlite", test))]
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use time::PrimitiveDateTime;

/// Table that holds the hobbies of each employee.
const HOBBIES_TABLE: &str = "employee_hobbies";

/// Table that holds the phone numbers of each employee.
const PHONE_NUMBERS_TABLE: &str = "phone_numbers";

/// Reassembles an address from its nullable columns, which must be all set or all unset.
fn build_address(
    street: Option<String>,
    city: Option<String>,
    state: Option<String>,
    country: Option<String>,
    postal_code: Option<String>,
) -> DbResult<Option<Address>> {
    match (street, city, state, country, postal_code) {
        (Some(street), Some(city), Some(state), Some(country), Some(postal_code)) => {
            Ok(Some(Address::new(street, city, state, country, postal_code)))
        }
        (None, None, None, None, None) => Ok(None),
        (_, _, _, _, _) => {
            Err(DbError::DataIntegrityError("Inconsistent values for address".to_owned()))
        }
    }
}

/// Builds the employee stored in a row of the main table, without its children.
fn build_employee(
    first_name: String,
    last_name: String,
    age: i32,
    no_of_childrens: i32,
    spouse: Option<String>,
    date_of_joining: PrimitiveDateTime,
    address: Option<Address>,
) -> Employee {
    Employee::new(first_name, last_name, age, date_of_joining)
        .with_no_of_childrens(no_of_childrens)
        .with_spouse(spouse)
        .with_address(address)
}

impl DecodeRow for Employee {
    type Output = Entity<Employee>;

    #[cfg(feature = "postgres")]
    fn from_pg_row(row: PgRow) -> DbResult<Entity<Employee>> {
        let id: i64 = row.try_get("id").map_err(postgres::map_sqlx_error)?;
        let first_name: String = row.try_get("first_name").map_err(postgres::map_sqlx_error)?;
        let last_name: String = row.try_get("last_name").map_err(postgres::map_sqlx_error)?;
        let age: i32 = row.try_get("age").map_err(postgres::map_sqlx_error)?;
        let no_of_childrens: i32 =
            row.try_get("no_of_childrens").map_err(postgres::map_sqlx_error)?;
        let spouse: Option<String> = row.try_get("spouse").map_err(postgres::map_sqlx_error)?;
        let date_of_joining: PrimitiveDateTime =
            row.try_get("date_of_joining").map_err(postgres::map_sqlx_error)?;
        let street: Option<String> =
            row.try_get("address_street").map_err(postgres::map_sqlx_error)?;
        let city: Option<String> = row.try_get("address_city").map_err(postgres::map_sqlx_error)?;
        let state: Option<String> =
            row.try_get("address_state").map_err(postgres::map_sqlx_error)?;
        let country: Option<String> =
            row.try_get("address_country").map_err(postgres::map_sqlx_error)?;
        let postal_code: Option<String> =
            row.try_get("address_postal_code").map_err(postgres::map_sqlx_error)?;

        let address = build_address(street, city, state, country, postal_code)?;
        let employee = build_employee(
            first_name,
            last_name,
            age,
            no_of_childrens,
            spouse,
            date_of_joining,
            address,
        );
        Ok(Entity::new(RecordId::new(id), employee))
    }

    #[cfg(any(feature = "sqlite", test))]
    fn from_sqlite_row(row: SqliteRow) -> DbResult<Entity<Employee>> {
        let id: i64 = row.try_get("id").map_err(sqlite::map_sqlx_error)?;
        let first_name: String = row.try_get("first_name").map_err(sqlite::map_sqlx_error)?;
        let last_name: String = row.try_get("last_name").map_err(sqlite::map_sqlx_error)?;
        let age: i32 = row.try_get("age").map_err(sqlite::map_sqlx_error)?;
        let no_of_childrens: i32 =
            row.try_get("no_of_childrens").map_err(sqlite::map_sqlx_error)?;
        let spouse: Option<String> = row.try_get("spouse").map_err(sqlite::map_sqlx_error)?;
        let date_of_joining: PrimitiveDateTime =
            row.try_get("date_of_joining").map_err(sqlite::map_sqlx_error)?;
        let street: Option<String> =
            row.try_get("address_street").map_err(sqlite::map_sqlx_error)?;
        let city: Option<String> = row.try_get("address_city").map_err(sqlite::map_sqlx_error)?;
        let state: Option<String> = row.try_get("address_state").map_err(sqlite::map_sqlx_error)?;
        let country: Option<String> =
            row.try_get("address_country").map_err(sqlite::map_sqlx_error)?;
        let postal_code: Option<String> =
            row.try_get("address_postal_code").map_err(sqlite::map_sqlx_error)?;

        let address = build_address(street, city, state, country, postal_code)?;
        let employee = build_employee(
            first_name,
            last_name,
            age,
            no_of_childrens,
            spouse,
            date_of_joining,
            address,
        );
        Ok(Entity::new(RecordId::new(id), employee))
    }
}

/// A row of the hobbies table.
struct HobbyRow(String);

impl DecodeRow for HobbyRow {
    type Output = HobbyRow;

    #[cfg(feature = "postgres")]
    fn from_pg_row(row: PgRow) -> DbResult<HobbyRow> {
        Ok(HobbyRow(row.try_get("hobby").map_err(postgres::map_sqlx_error)?))
    }

    #[cfg(any(feature = "sqlite", test))]
    fn from_sqlite_row(row: SqliteRow) -> DbResult<HobbyRow> {
        Ok(HobbyRow(row.try_get("hobby").map_err(sqlite::map_sqlx_error)?))
    }
}

impl DecodeRow for PhoneNumber {
    type Output = PhoneNumber;

    #[cfg(feature = "postgres")]
    fn from_pg_row(row: PgRow) -> DbResult<PhoneNumber> {
        let kind: String = row.try_get("phone_type").map_err(postgres::map_sqlx_error)?;
        let number: String = row.try_get("phone_number").map_err(postgres::map_sqlx_error)?;
        Ok(PhoneNumber::new(kind, number))
    }

    #[cfg(any(feature = "sqlite", test))]
    fn from_sqlite_row(row: SqliteRow) -> DbResult<PhoneNumber> {
        let kind: String = row.try_get("phone_type").map_err(sqlite::map_sqlx_error)?;
        let number: String = row.try_get("phone_number").map_err(sqlite::map_sqlx_error)?;
        Ok(PhoneNumber::new(kind, number))
    }
}

#[async_trait]
impl Table for Employee {
    const TABLE: &'static str = "employees";
    type Filter = EmployeeFilter;
    type Probe = EmployeeProbe;

    fn columns(&self) -> Vec<(&'static str, SqlValue)> {
        let address = self.address().as_ref();
        vec![
            ("first_name", self.first_name().into()),
            ("last_name", self.last_name().into()),
            ("age", self.age().into()),
            ("no_of_childrens", self.no_of_childrens().into()),
            ("spouse", self.spouse().clone().into()),
            ("date_of_joining", self.date_of_joining().into()),
            ("address_street", address.map(|a| a.street().clone()).into()),
            ("address_city", address.map(|a| a.city().clone()).into()),
            ("address_state", address.map(|a| a.state().clone()).into()),
            ("address_country", address.map(|a| a.country().clone()).into()),
            ("address_postal_code", address.map(|a| a.postal_code().clone()).into()),
        ]
    }

    fn filter_conditions(filter: &EmployeeFilter) -> Vec<Condition> {
        let mut conditions = vec![];
        if let Some(first_name) = filter.first_name.as_ref() {
            conditions.push(Condition::eq("first_name", first_name));
        }
        conditions
    }

    fn probe_conditions(probe: &EmployeeProbe) -> Vec<Condition> {
        let mut conditions = vec![];
        if let Some(first_name) = probe.first_name.as_ref() {
            conditions.push(Condition::eq("first_name", first_name));
        }
        if let Some(last_name) = probe.last_name.as_ref() {
            conditions.push(Condition::eq("last_name", last_name));
        }
        if let Some(age) = probe.age {
            conditions.push(Condition::eq("age", age));
        }
        if let Some(no_of_childrens) = probe.no_of_childrens {
            conditions.push(Condition::eq("no_of_childrens", no_of_childrens));
        }
        if let Some(spouse) = probe.spouse.as_ref() {
            conditions.push(Condition::eq("spouse", spouse));
        }
        if let Some(date_of_joining) = probe.date_of_joining {
            conditions.push(Condition::eq("date_of_joining", date_of_joining));
        }
        if let Some(address) = probe.address.as_ref() {
            let fields = [
                ("address_street", &address.street),
                ("address_city", &address.city),
                ("address_state", &address.state),
                ("address_country", &address.country),
                ("address_postal_code", &address.postal_code),
            ];
            for (column, value) in fields {
                if let Some(value) = value {
                    conditions.push(Condition::eq(column, value));
                }
            }
        }
        conditions
    }

    async fn load_children(ex: &mut Executor, entity: Entity<Self>) -> DbResult<Entity<Self>> {
        let (id, employee) = entity.dissolve();
        let owner = || vec![Condition::eq("employee_id", id)];
        let hobbies = sql::select::<HobbyRow>(ex, HOBBIES_TABLE, owner()).await?;
        let hobbies = hobbies.into_iter().map(|row| row.0).collect();
        let phone_numbers = sql::select::<PhoneNumber>(ex, PHONE_NUMBERS_TABLE, owner()).await?;
        Ok(Entity::new(id, employee.with_hobbies(hobbies).with_phone_numbers(phone_numbers)))
    }

    async fn save_children(ex: &mut Executor, id: RecordId, record: &Self) -> DbResult<()> {
        sql::delete(ex, HOBBIES_TABLE, vec![Condition::eq("employee_id", id)]).await?;
        for hobby in record.hobbies() {
            let columns = vec![("employee_id", id.into()), ("hobby", hobby.into())];
            sql::insert(ex, HOBBIES_TABLE, columns).await?;
        }

        sql::delete(ex, PHONE_NUMBERS_TABLE, vec![Condition::eq("employee_id", id)]).await?;
        for phone_number in record.phone_numbers() {
            let columns = vec![
                ("employee_id", id.into()),
                ("phone_type", phone_number.kind().into()),
                ("phone_number", phone_number.number().into()),
            ];
            sql::insert(ex, PHONE_NUMBERS_TABLE, columns).await?;
        }

        Ok(())
    }
}
