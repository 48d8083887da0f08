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

//! Wire representations of the records served by the REST API.
//!
//! DTOs use camelCase field names and render dates as strings with fixed formats.

use roster_core::model::{ModelError, ModelResult};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, PrimitiveDateTime};

pub(crate) mod employee;
pub(crate) mod student;
pub(crate) mod superhero;

/// Format of dates on the wire.
pub(crate) const DATE_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]");

/// Format of timestamps on the wire.
pub(crate) const DATE_TIME_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// Renders `date` with `DATE_FORMAT`.
pub(crate) fn format_date(date: Date) -> String {
    date.format(DATE_FORMAT).expect("Dates within the supported range are always formattable")
}

/// Parses `raw` as a date in `DATE_FORMAT`.
pub(crate) fn parse_date(raw: &str) -> ModelResult<Date> {
    Date::parse(raw, DATE_FORMAT)
        .map_err(|e| ModelError(format!("Invalid date '{}' (expected YYYY-MM-DD): {}", raw, e)))
}

/// Renders `datetime` with `DATE_TIME_FORMAT`.
pub(crate) fn format_datetime(datetime: PrimitiveDateTime) -> String {
    datetime
        .format(DATE_TIME_FORMAT)
        .expect("Timestamps within the supported range are always formattable")
}

/// Parses `raw` as a timestamp in `DATE_TIME_FORMAT`.
pub(crate) fn parse_datetime(raw: &str) -> ModelResult<PrimitiveDateTime> {
    PrimitiveDateTime::parse(raw, DATE_TIME_FORMAT).map_err(|e| {
        ModelError(format!("Invalid date-time '{}' (expected YYYY-MM-DD HH:MM:SS): {}", raw, e))
    })
}
