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

//! Wire representation of super heroes.

use crate::model::{RecordId, SuperHero, SuperHeroProbe};
use crate::rest::Resource;
use roster_core::model::ModelResult;
use serde::{Deserialize, Serialize};

/// A super hero as exchanged with clients.
#[derive(Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SuperHeroDto {
    /// Identifier of the record, if known.
    pub(crate) id: Option<RecordId>,

    /// Civilian name.
    pub(crate) name: String,

    /// Name used while in costume.
    pub(crate) super_name: String,

    /// Day job.
    pub(crate) profession: String,

    /// Age in years.
    pub(crate) age: i32,

    /// Whether the hero can fly.
    pub(crate) can_fly: bool,
}

/// Query-by-example probe for super heroes as sent by clients.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SuperHeroProbeDto {
    /// Civilian name to match.
    pub(crate) name: Option<String>,
    /// Super name to match.
    pub(crate) super_name: Option<String>,
    /// Profession to match.
    pub(crate) profession: Option<String>,
    /// Age to match.
    pub(crate) age: Option<i32>,
    /// Flying ability to match.
    pub(crate) can_fly: Option<bool>,
}

impl Resource for SuperHero {
    const PATH: &'static str = "/super-heroes";
    type Dto = SuperHeroDto;
    type ProbeDto = SuperHeroProbeDto;

    fn to_dto(id: Option<RecordId>, record: SuperHero) -> SuperHeroDto {
        let (name, super_name, profession, age, can_fly) = record.dissolve();
        SuperHeroDto { id, name, super_name, profession, age, can_fly }
    }

    fn from_dto(dto: SuperHeroDto) -> ModelResult<(Option<RecordId>, SuperHero)> {
        let hero = SuperHero::new(dto.name, dto.super_name, dto.profession, dto.age, dto.can_fly);
        Ok((dto.id, hero))
    }

    fn probe_from_dto(dto: SuperHeroProbeDto) -> ModelResult<SuperHeroProbe> {
        Ok(SuperHeroProbe {
            name: dto.name,
            super_name: dto.super_name,
            profession: dto.profession,
            age: dto.age,
            can_fly: dto.can_fly,
        })
    }
}
