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

//! Wire representation of employees.

use super::{format_datetime, parse_datetime};
use crate::model::{Address, AddressProbe, Employee, EmployeeProbe, PhoneNumber, RecordId};
use crate::rest::Resource;
use roster_core::model::ModelResult;
use serde::{Deserialize, Serialize};

/// An employee's address as exchanged with clients.
#[derive(Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AddressDto {
    /// Street name and number.
    pub(crate) street: String,

    /// City.
    pub(crate) city: String,

    /// State or province.
    pub(crate) state: String,

    /// Country.
    pub(crate) country: String,

    /// Postal code.
    pub(crate) postal_code: String,
}

impl From<Address> for AddressDto {
    fn from(address: Address) -> Self {
        let (street, city, state, country, postal_code) = address.dissolve();
        Self { street, city, state, country, postal_code }
    }
}

impl From<AddressDto> for Address {
    fn from(dto: AddressDto) -> Self {
        Address::new(dto.street, dto.city, dto.state, dto.country, dto.postal_code)
    }
}

/// An employee's phone number as exchanged with clients.
#[derive(Debug, Deserialize, PartialEq, Serialize)]
pub(crate) struct PhoneNumberDto {
    /// Kind of phone line.
    #[serde(rename = "type")]
    pub(crate) kind: String,

    /// The number itself.
    pub(crate) number: String,
}

impl From<PhoneNumber> for PhoneNumberDto {
    fn from(phone_number: PhoneNumber) -> Self {
        let (kind, number) = phone_number.dissolve();
        Self { kind, number }
    }
}

impl From<PhoneNumberDto> for PhoneNumber {
    fn from(dto: PhoneNumberDto) -> Self {
        PhoneNumber::new(dto.kind, dto.number)
    }
}

/// An employee as exchanged with clients.
#[derive(Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EmployeeDto {
    /// Identifier of the record, if known.
    pub(crate) id: Option<RecordId>,

    /// First name.
    pub(crate) first_name: String,

    /// Last name.
    pub(crate) last_name: String,

    /// Age in years.
    pub(crate) age: i32,

    /// Number of children.
    #[serde(default)]
    pub(crate) no_of_childrens: i32,

    /// Name of the spouse, if any.
    #[serde(default)]
    pub(crate) spouse: Option<String>,

    /// Joining timestamp in `DATE_TIME_FORMAT`.
    pub(crate) date_of_joining: String,

    /// Hobbies, in order.
    #[serde(default)]
    pub(crate) hobbies: Vec<String>,

    /// Postal address, if known.
    #[serde(default)]
    pub(crate) address: Option<AddressDto>,

    /// Phone numbers, in order.
    #[serde(default)]
    pub(crate) phone_numbers: Vec<PhoneNumberDto>,
}

/// Query-by-example probe for an employee's address as sent by clients.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AddressProbeDto {
    /// Street to match.
    pub(crate) street: Option<String>,
    /// City to match.
    pub(crate) city: Option<String>,
    /// State to match.
    pub(crate) state: Option<String>,
    /// Country to match.
    pub(crate) country: Option<String>,
    /// Postal code to match.
    pub(crate) postal_code: Option<String>,
}

/// Query-by-example probe for employees as sent by clients.
///
/// Hobbies and phone numbers are accepted for symmetry with `EmployeeDto` but are not matched.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EmployeeProbeDto {
    /// First name to match.
    pub(crate) first_name: Option<String>,
    /// Last name to match.
    pub(crate) last_name: Option<String>,
    /// Age to match.
    pub(crate) age: Option<i32>,
    /// Number of children to match.
    pub(crate) no_of_childrens: Option<i32>,
    /// Spouse to match.
    pub(crate) spouse: Option<String>,
    /// Joining timestamp to match, in `DATE_TIME_FORMAT`.
    pub(crate) date_of_joining: Option<String>,
    /// Address fields to match.
    pub(crate) address: Option<AddressProbeDto>,
}

impl Resource for Employee {
    const PATH: &'static str = "/employees";
    type Dto = EmployeeDto;
    type ProbeDto = EmployeeProbeDto;

    fn to_dto(id: Option<RecordId>, record: Employee) -> EmployeeDto {
        let (
            first_name,
            last_name,
            age,
            no_of_childrens,
            spouse,
            date_of_joining,
            hobbies,
            address,
            phone_numbers,
        ) = record.dissolve();
        EmployeeDto {
            id,
            first_name,
            last_name,
            age,
            no_of_childrens,
            spouse,
            date_of_joining: format_datetime(date_of_joining),
            hobbies,
            address: address.map(AddressDto::from),
            phone_numbers: phone_numbers.into_iter().map(PhoneNumberDto::from).collect(),
        }
    }

    fn from_dto(dto: EmployeeDto) -> ModelResult<(Option<RecordId>, Employee)> {
        let date_of_joining = parse_datetime(&dto.date_of_joining)?;
        let employee = Employee::new(dto.first_name, dto.last_name, dto.age, date_of_joining)
            .with_no_of_childrens(dto.no_of_childrens)
            .with_spouse(dto.spouse)
            .with_hobbies(dto.hobbies)
            .with_address(dto.address.map(Address::from))
            .with_phone_numbers(dto.phone_numbers.into_iter().map(PhoneNumber::from).collect());
        Ok((dto.id, employee))
    }

    fn probe_from_dto(dto: EmployeeProbeDto) -> ModelResult<EmployeeProbe> {
        Ok(EmployeeProbe {
            first_name: dto.first_name,
            last_name: dto.last_name,
            age: dto.age,
            no_of_childrens: dto.no_of_childrens,
            spouse: dto.spouse,
            date_of_joining: dto.date_of_joining.as_deref().map(parse_datetime).transpose()?,
            address: dto.address.map(|address| AddressProbe {
                street: address.street,
                city: address.city,
                state: address.state,
                country: address.country,
                postal_code: address.postal_code,
            }),
        })
    }
}
