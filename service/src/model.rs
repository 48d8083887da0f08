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

//! High-level data types.

use derive_getters::{Dissolve, Getters};
use derive_more::{Constructor, Display};
use serde::{Deserialize, Serialize};

mod employee;
pub(crate) use employee::{Address, AddressProbe, Employee, EmployeeFilter, EmployeeProbe, PhoneNumber};
mod student;
pub(crate) use student::{Student, StudentFilter, StudentProbe};
mod superhero;
pub(crate) use superhero::{SuperHero, SuperHeroProbe};

/// Server-assigned identifier of a stored record.
#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(transparent)]
pub(crate) struct RecordId(i64);

impl RecordId {
    /// Creates a new identifier from its raw database representation.
    pub(crate) fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the identifier in its raw database representation.
    pub(crate) fn as_i64(self) -> i64 {
        self.0
    }
}

/// A record of type `T` as persisted in the database, together with its identifier.
#[derive(Clone, Constructor, Debug, Dissolve, Getters, PartialEq)]
pub(crate) struct Entity<T> {
    /// Identifier assigned to the record when it was first stored.
    #[getter(copy)]
    id: RecordId,

    /// The record's contents.
    record: T,
}

/// Filter for resources that do not support filtered listings.
///
/// Any query parameters given to the listing are ignored.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct NoFilter {}
