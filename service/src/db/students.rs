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

//! Persistence of students.

use super::{Condition, DecodeRow, SqlValue, Table};
use crate::model::{Entity, RecordId, Student, StudentFilter, StudentProbe};
#[cfg(feature = "postgres")]
use roster_core::db::postgres;
#[cfg(any(feature = "sqlite", test))]
use roster_core::db::sqlite;
use roster_core::db::DbResult;
#[cfg(feature = "postgres")]
use sqlx::postgres::PgRow;
#[cfg(any(feature = "sqlite", test))]
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use time::Date;

impl DecodeRow for Student {
    type Output = Entity<Student>;

    #[cfg(feature = "postgres")]
    fn from_pg_row(row: PgRow) -> DbResult<Entity<Student>> {
        let id: i64 = row.try_get("id").map_err(postgres::map_sqlx_error)?;
        let roll_no: i32 = row.try_get("roll_no").map_err(postgres::map_sqlx_error)?;
        let first_name: String = row.try_get("first_name").map_err(postgres::map_sqlx_error)?;
        let last_name: String = row.try_get("last_name").map_err(postgres::map_sqlx_error)?;
        let date_of_birth: Date = row.try_get("date_of_birth").map_err(postgres::map_sqlx_error)?;
        let marks: i32 = row.try_get("marks").map_err(postgres::map_sqlx_error)?;

        let student = Student::new(roll_no, first_name, last_name, date_of_birth, marks);
        Ok(Entity::new(RecordId::new(id), student))
    }

    #[cfg(any(feature = "sqlite", test))]
    fn from_sqlite_row(row: SqliteRow) -> DbResult<Entity<Student>> {
        let id: i64 = row.try_get("id").map_err(sqlite::map_sqlx_error)?;
        let roll_no: i32 = row.try_get("roll_no").map_err(sqlite::map_sqlx_error)?;
        let first_name: String = row.try_get("first_name").map_err(sqlite::map_sqlx_error)?;
        let last_name: String = row.try_get("last_name").map_err(sqlite::map_sqlx_error)?;
        let date_of_birth: Date = row.try_get("date_of_birth").map_err(sqlite::map_sqlx_error)?;
        let marks: i32 = row.try_get("marks").map_err(sqlite::map_sqlx_error)?;

        let student = Student::new(roll_no, first_name, last_name, date_of_birth, marks);
        Ok(Entity::new(RecordId::new(id), student))
    }
}

impl Table for Student {
    const TABLE: &'static str = "students";
    type Filter = StudentFilter;
    type Probe = StudentProbe;

    fn columns(&self) -> Vec<(&'static str, SqlValue)> {
        vec![
            ("roll_no", self.roll_no().into()),
            ("first_name", self.first_name().into()),
            ("last_name", self.last_name().into()),
            ("date_of_birth", self.date_of_birth().into()),
            ("marks", self.marks().into()),
        ]
    }

    fn filter_conditions(filter: &StudentFilter) -> Vec<Condition> {
        let mut conditions = vec![];
        if let Some(first_name) = filter.first_name.as_ref() {
            conditions.push(Condition::eq("first_name", first_name));
        }
        if let Some(pattern) = filter.first_name_like.as_ref() {
            conditions.push(Condition::like("first_name", pattern.clone()));
        }
        if let Some(min_marks) = filter.min_marks {
            conditions.push(Condition::at_least("marks", min_marks));
        }
        conditions
    }

    fn probe_conditions(probe: &StudentProbe) -> Vec<Condition> {
        let mut conditions = vec![];
        if let Some(roll_no) = probe.roll_no {
            conditions.push(Condition::eq("roll_no", roll_no));
        }
        if let Some(first_name) = probe.first_name.as_ref() {
            conditions.push(Condition::eq("first_name", first_name));
        }
        if let Some(last_name) = probe.last_name.as_ref() {
            conditions.push(Condition::eq("last_name", last_name));
        }
        if let Some(date_of_birth) = probe.date_of_birth {
            conditions.push(Condition::eq("date_of_birth", date_of_birth));
        }
        if let Some(marks) = probe.marks {
            conditions.push(Condition::eq("marks", marks));
        }
        conditions
    }
}
