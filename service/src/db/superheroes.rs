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

//! Persistence of super heroes.

use super::{Condition, DecodeRow, SqlValue, Table};
use crate::model::{Entity, NoFilter, RecordId, SuperHero, SuperHeroProbe};
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

impl DecodeRow for SuperHero {
    type Output = Entity<SuperHero>;

    #[cfg(feature = "postgres")]
    fn from_pg_row(row: PgRow) -> DbResult<Entity<SuperHero>> {
        let id: i64 = row.try_get("id").map_err(postgres::map_sqlx_error)?;
        let name: String = row.try_get("name").map_err(postgres::map_sqlx_error)?;
        let super_name: String = row.try_get("super_name").map_err(postgres::map_sqlx_error)?;
        let profession: String = row.try_get("profession").map_err(postgres::map_sqlx_error)?;
        let age: i32 = row.try_get("age").map_err(postgres::map_sqlx_error)?;
        let can_fly: bool = row.try_get("can_fly").map_err(postgres::map_sqlx_error)?;

        let hero = SuperHero::new(name, super_name, profession, age, can_fly);
        Ok(Entity::new(RecordId::new(id), hero))
    }

    #[cfg(any(feature = "sqlite", test))]
    fn from_sqlite_row(row: SqliteRow) -> DbResult<Entity<SuperHero>> {
        let id: i64 = row.try_get("id").map_err(sqlite::map_sqlx_error)?;
        let name: String = row.try_get("name").map_err(sqlite::map_sqlx_error)?;
        let super_name: String = row.try_get("super_name").map_err(sqlite::map_sqlx_error)?;
        let profession: String = row.try_get("profession").map_err(sqlite::map_sqlx_error)?;
        let age: i32 = row.try_get("age").map_err(sqlite::map_sqlx_error)?;
        let can_fly: bool = row.try_get("can_fly").map_err(sqlite::map_sqlx_error)?;

        let hero = SuperHero::new(name, super_name, profession, age, can_fly);
        Ok(Entity::new(RecordId::new(id), hero))
    }
}

impl Table for SuperHero {
    const TABLE: &'static str = "superheroes";
    type Filter = NoFilter;
    type Probe = SuperHeroProbe;

    fn columns(&self) -> Vec<(&'static str, SqlValue)> {
        vec![
            ("name", self.name().into()),
            ("super_name", self.super_name().into()),
            ("profession", self.profession().into()),
            ("age", self.age().into()),
            ("can_fly", self.can_fly().into()),
        ]
    }

    fn filter_conditions(_filter: &NoFilter) -> Vec<Condition> {
        vec![]
    }

    fn probe_conditions(probe: &SuperHeroProbe) -> Vec<Condition> {
        let mut conditions = vec![];
        if let Some(name) = probe.name.as_ref() {
            conditions.push(Condition::eq("name", name));
        }
        if let Some(super_name) = probe.super_name.as_ref() {
            conditions.push(Condition::eq("super_name", super_name));
        }
        if let Some(profession) = probe.profession.as_ref() {
            conditions.push(Condition::eq("profession", profession));
        }
        if let Some(age) = probe.age {
            conditions.push(Condition::eq("age", age));
        }
        if let Some(can_fly) = probe.can_fly {
            conditions.push(Condition::eq("can_fly", can_fly));
        }
        conditions
    }
}
