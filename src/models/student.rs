use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::route::RouteSummary;

/// Department codes are written upper-case and read in any case.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
pub enum Department {
    Cse,
    Ece,
    Mech,
    Civil,
    It,
    Eee,
}

impl Department {
    pub const ALL: [Department; 6] = [
        Department::Cse,
        Department::Ece,
        Department::Mech,
        Department::Civil,
        Department::It,
        Department::Eee,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Department::Cse => "CSE",
            Department::Ece => "ECE",
            Department::Mech => "MECH",
            Department::Civil => "CIVIL",
            Department::It => "IT",
            Department::Eee => "EEE",
        }
    }

    pub fn full_name(self) -> &'static str {
        match self {
            Department::Cse => "Computer Science Engineering",
            Department::Ece => "Electronics & Communication Engineering",
            Department::Mech => "Mechanical Engineering",
            Department::Civil => "Civil Engineering",
            Department::It => "Information Technology",
            Department::Eee => "Electrical & Electronics Engineering",
        }
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("Unknown department {0}")]
pub struct UnknownDepartment(pub String);

impl FromStr for Department {
    type Err = UnknownDepartment;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Department::ALL
            .into_iter()
            .find(|d| d.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| UnknownDepartment(code.to_string()))
    }
}

impl TryFrom<String> for Department {
    type Error = UnknownDepartment;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: u32,
    pub reg_no: String,
    pub name: String,
    pub department: Department,
    pub year: u8,
    /// Bus number of the assigned route.
    pub route: String,
    pub pickup_point: String,
    pub contact_no: String,
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct StudentFilter {
    pub search: Option<String>,
    pub department: Option<Department>,
    pub year: Option<u8>,
}

impl StudentFilter {
    pub fn matches(&self, student: &Student) -> bool {
        if let Some(department) = self.department {
            if student.department != department {
                return false;
            }
        }
        if let Some(year) = self.year {
            if student.year != year {
                return false;
            }
        }
        match self.search.as_deref().map(str::trim) {
            Some(term) if !term.is_empty() => {
                let term = term.to_lowercase();
                student.name.to_lowercase().contains(&term)
                    || student.reg_no.to_lowercase().contains(&term)
                    || student.department.code().to_lowercase().contains(&term)
            }
            _ => true,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewStudent {
    pub reg_no: Option<String>,
    pub name: Option<String>,
    pub department: Option<Department>,
    pub year: Option<u8>,
    pub route: Option<String>,
    pub pickup_point: Option<String>,
    #[serde(default)]
    pub contact_no: String,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeeStatus {
    pub is_paid: bool,
    pub paid_amount: f64,
    pub paid_date: Option<NaiveDate>,
    pub due_amount: f64,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AcademicDetails {
    pub batch: String,
    pub cgpa: f64,
    pub attendance: String,
    pub mentor: String,
}

#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct StudentDetails {
    pub id: u32,
    pub reg_no: String,
    pub name: String,
    pub department: Department,
    pub department_name: String,
    pub year: u8,
    pub section: String,
    pub dob: String,
    pub gender: String,
    pub blood_group: String,
    pub address: String,
    pub contact_no: String,
    pub email: String,
    pub father_name: String,
    pub father_contact_no: String,
    pub mother_name: String,
    pub mother_contact_no: String,
    pub route: String,
    pub route_info: Option<RouteSummary>,
    pub pickup_point: String,
    pub fee_status: FeeStatus,
    pub academic_details: AcademicDetails,
}
