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

//! Super heroes.

use derive_getters::{Dissolve, Getters};
use derive_more::Constructor;

/// A super hero and their civilian identity.
#[derive(Clone, Constructor, Debug, Dissolve, Getters, PartialEq)]
pub(crate) struct SuperHero {
    /// Civilian name.
    name: String,

    /// Name used while in costume.
    super_name: String,

    /// Day job.
    profession: String,

    /// Age in years.
    #[getter(copy)]
    age: i32,

    /// Whether the hero can fly.
    #[getter(copy)]
    can_fly: bool,
}

/// Query-by-example probe for super heroes: every field that is set must match.
#[derive(Debug, Default)]
pub(crate) struct SuperHeroProbe {
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
