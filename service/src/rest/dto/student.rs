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

//! Wire representation of students.

use super::{format_date, parse_date};
use crate::model::{RecordId, Student, StudentProbe};
use crate::rest::Resource;
use roster_core::model::ModelResult;
use serde::{Deserialize, Serialize};

/// A student as exchanged with clients.
#[derive(Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StudentDto {
    /// Identifier of the record, if known.
    pub(crate) id: Option<RecordId>,

    /// Roll number within the student's class.
    pub(crate) roll_no: i32,

    /// First name.
    pub(crate) first_name: String,

    /// Last name.
    pub(crate) last_name: String,

    /// Date of birth in `DATE_FORMAT`.
    pub(crate) date_of_birth: String,

    /// Accumulated marks.
    pub(crate) marks: i32,
}

/// Query-by-example probe for students as sent by clients.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StudentProbeDto {
    /// Roll number to match.
    pub(crate) roll_no: Option<i32>,
    /// First name to match.
    pub(crate) first_name: Option<String>,
    /// Last name to match.
    pub(crate) last_name: Option<String>,
    /// Date of birth to match, in `DATE_FORMAT`.
    pub(crate) date_of_birth: Option<String>,
    /// Marks to match.
    pub(crate) marks: Option<i32>,
}

impl Resource for Student {
    const PATH: &'static str = "/students";
    type Dto = StudentDto;
    type ProbeDto = StudentProbeDto;

    fn to_dto(id: Option<RecordId>, record: Student) -> StudentDto {
        let (roll_no, first_name, last_name, date_of_birth, marks) = record.dissolve();
        StudentDto {
            id,
            roll_no,
            first_name,
            last_name,
            date_of_birth: format_date(date_of_birth),
            marks,
        }
    }

    fn from_dto(dto: StudentDto) -> ModelResult<(Option<RecordId>, Student)> {
        let date_of_birth = parse_date(&dto.date_of_birth)?;
        let student =
            Student::new(dto.roll_no, dto.first_name, dto.last_name, date_of_birth, dto.marks);
        Ok((dto.id, student))
    }

    fn probe_from_dto(dto: StudentProbeDto) -> ModelResult<StudentProbe> {
        Ok(StudentProbe {
            roll_no: dto.roll_no,
            first_name: dto.first_name,
            last_name: dto.last_name,
            date_of_birth: dto.date_of_birth.as_deref().map(parse_date).transpose()?,
            marks: dto.marks,
        })
    }
}
