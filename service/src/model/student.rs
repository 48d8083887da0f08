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

//! Students and their grades.

use derive_getters::{Dissolve, Getters};
use derive_more::Constructor;
use serde::Deserialize;
use time::Date;

/// A student enrolled in the school.
#[derive(Clone, Constructor, Debug, Dissolve, Getters, PartialEq)]
pub(crate) struct Student {
    /// Roll number within the student's class.
    #[getter(copy)]
    roll_no: i32,

    /// First name.
    first_name: String,

    /// Last name.
    last_name: String,

    /// Date of birth.
    #[getter(copy)]
    date_of_birth: Date,

    /// Accumulated marks.
    #[getter(copy)]
    marks: i32,
}

/// Query-by-example probe for students: every field that is set must match.
#[derive(Debug, Default)]
pub(crate) struct StudentProbe {
    /// Roll number to match.
    pub(crate) roll_no: Option<i32>,
    /// First name to match.
    pub(crate) first_name: Option<String>,
    /// Last name to match.
    pub(crate) last_name: Option<String>,
    /// Date of birth to match.
    pub(crate) date_of_birth: Option<Date>,
    /// Marks to match.
    pub(crate) marks: Option<i32>,
}

/// Derived finders for students.  Set fields combine with AND.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StudentFilter {
    /// Exact first name to match.
    pub(crate) first_name: Option<String>,

    /// SQL `LIKE` pattern that the first name must match.
    pub(crate) first_name_like: Option<String>,

    /// Minimum marks (inclusive).
    pub(crate) min_marks: Option<i32>,
}
