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

//! Employees and the data they own.

use derive_getters::{Dissolve, Getters};
use derive_more::Constructor;
use serde::Deserialize;
use time::PrimitiveDateTime;

/// Postal address owned by an employee.
#[derive(Clone, Constructor, Debug, Dissolve, Getters, PartialEq)]
pub(crate) struct Address {
    /// Street name and number.
    street: String,

    /// City.
    city: String,

    /// State or province.
    state: String,

    /// Country.
    country: String,

    /// Postal code.
    postal_code: String,
}

/// Phone number owned by an employee.
#[derive(Clone, Constructor, Debug, Dissolve, Getters, PartialEq)]
pub(crate) struct PhoneNumber {
    /// Kind of phone line, such as "mobile" or "home".
    kind: String,

    /// The number itself, in free form.
    number: String,
}

/// An employee of the company.
#[derive(Clone, Debug, Dissolve, Getters, PartialEq)]
pub(crate) struct Employee {
    /// First name.
    first_name: String,

    /// Last name.
    last_name: String,

    /// Age in years.
    #[getter(copy)]
    age: i32,

    /// Number of children.
    #[getter(copy)]
    no_of_childrens: i32,

    /// Name of the spouse, if any.
    spouse: Option<String>,

    /// Date and time when the employee joined the company.
    #[getter(copy)]
    date_of_joining: PrimitiveDateTime,

    /// Hobbies in the order given by the employee.
    hobbies: Vec<String>,

    /// Postal address, if known.
    address: Option<Address>,

    /// Phone numbers in the order given by the employee.
    phone_numbers: Vec<PhoneNumber>,
}

impl Employee {
    /// Creates a new employee with the minimum set of required fields.
    pub(crate) fn new(
        first_name: String,
        last_name: String,
        age: i32,
        date_of_joining: PrimitiveDateTime,
    ) -> Self {
        Self {
            first_name,
            last_name,
            age,
            no_of_childrens: 0,
            spouse: None,
            date_of_joining,
            hobbies: vec![],
            address: None,
            phone_numbers: vec![],
        }
    }

    /// Modifies an employee to set the number of children.
    pub(crate) fn with_no_of_childrens(mut self, no_of_childrens: i32) -> Self {
        self.no_of_childrens = no_of_childrens;
        self
    }

    /// Modifies an employee to set the spouse's name.
    pub(crate) fn with_spouse(mut self, spouse: Option<String>) -> Self {
        self.spouse = spouse;
        self
    }

    /// Modifies an employee to set its hobbies.
    pub(crate) fn with_hobbies(mut self, hobbies: Vec<String>) -> Self {
        self.hobbies = hobbies;
        self
    }

    /// Modifies an employee to set its address.
    pub(crate) fn with_address(mut self, address: Option<Address>) -> Self {
        self.address = address;
        self
    }

    /// Modifies an employee to set its phone numbers.
    pub(crate) fn with_phone_numbers(mut self, phone_numbers: Vec<PhoneNumber>) -> Self {
        self.phone_numbers = phone_numbers;
        self
    }
}

/// Query-by-example probe for an employee's address.
#[derive(Debug, Default)]
pub(crate) struct AddressProbe {
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

/// Query-by-example probe for employees: every field that is set must match.
///
/// Hobbies and phone numbers cannot be matched on.
#[derive(Debug, Default)]
pub(crate) struct EmployeeProbe {
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
    /// Joining date to match.
    pub(crate) date_of_joining: Option<PrimitiveDateTime>,
    /// Address fields to match.
    pub(crate) address: Option<AddressProbe>,
}

/// Derived finders for employees.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EmployeeFilter {
    /// Exact first name to match.
    pub(crate) first_name: Option<String>,
}
