//! Student profile enrichment.
//!
//! Everything here is a pure function of its inputs. The personal and
//! academic fields are placeholders derived from the student id until real
//! records exist; do not treat them as business rules.

use chrono::NaiveDate;

use crate::models::{
    AcademicDetails, BusRoute, Department, FeeStatus, Payment, PaymentStatus, RouteSummary, Student,
    StudentDetails,
};

use super::seed::day;

/// First calendar year of the current academic year (2024-2025).
pub const ACADEMIC_START_YEAR: i32 = 2024;

const SECTIONS: [&str; 4] = ["A", "B", "C", "D"];
const BLOOD_GROUPS: [&str; 8] = ["O+", "A+", "B+", "AB+", "O-", "A-", "B-", "AB-"];
const FATHER_NAMES: [&str; 5] = ["Rajesh", "Suresh", "Mahesh", "Ramana", "Prakash"];
const MOTHER_NAMES: [&str; 5] = ["Sunita", "Lakshmi", "Padma", "Kavitha", "Saraswathi"];

fn mentor(department: Department) -> &'static str {
    match department {
        Department::Cse => "Dr. Subramaniam",
        Department::Ece => "Dr. Radhika Menon",
        Department::Mech => "Dr. Venkat Rao",
        Department::Civil => "Dr. Anitha Reddy",
        Department::It => "Dr. Harish Chandra",
        Department::Eee => "Dr. Sreedevi K",
    }
}

/// A student has paid when the ledger holds a successful payment and no
/// pending entry is still open. A pending entry stays open until a
/// successful payment for the same academic year and semester exists.
pub fn is_paid(payments: &[&Payment]) -> bool {
    let has_success = payments.iter().any(|p| p.status == PaymentStatus::Success);
    let open_pending = payments.iter().any(|pending| {
        pending.status == PaymentStatus::Pending
            && !payments
                .iter()
                .any(|p| p.status == PaymentStatus::Success && p.same_period(pending))
    });
    has_success && !open_pending
}

/// Latest successful payment, by date then id.
pub fn last_success<'a>(payments: &[&'a Payment]) -> Option<&'a Payment> {
    payments
        .iter()
        .copied()
        .filter(|p| p.status == PaymentStatus::Success)
        .max_by_key(|p| (p.date, p.id))
}

pub fn fee_status(payments: &[&Payment], semester_fee: f64) -> FeeStatus {
    let is_paid = is_paid(payments);
    let last = last_success(payments);
    FeeStatus {
        is_paid,
        paid_amount: last.map(|p| p.amount).unwrap_or(0.0),
        paid_date: last.map(|p| p.date),
        due_amount: if is_paid { 0.0 } else { semester_fee },
    }
}

pub fn email_for(name: &str) -> String {
    let local = name
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(".");
    format!("{}@example.com", local)
}

fn surname(name: &str) -> &str {
    name.split_whitespace().last().unwrap_or(name)
}

fn date_of_birth(student: &Student) -> NaiveDate {
    // Roughly 17 at the start of first year.
    let birth_year = ACADEMIC_START_YEAR - 17 - i32::from(student.year);
    day(birth_year, student.id % 12 + 1, student.id % 28 + 1)
}

pub fn academic_details(student: &Student) -> AcademicDetails {
    let start = ACADEMIC_START_YEAR - (i32::from(student.year) - 1);
    AcademicDetails {
        batch: format!("{}-{}", start, start + 4),
        cgpa: f64::from(65 + (student.id * 7) % 35) / 10.0,
        attendance: format!("{}%", 75 + (student.id * 13) % 25),
        mentor: mentor(student.department).to_string(),
    }
}

/// Builds the detail view of `student`. `route` is the bus the student is
/// assigned to (if it still exists) and `payments` their ledger entries.
pub fn student_details(
    student: &Student,
    route: Option<&BusRoute>,
    payments: &[&Payment],
    semester_fee: f64,
) -> StudentDetails {
    let id = student.id as usize;
    let family = surname(&student.name);
    let contact_seed = u64::from(student.id);

    StudentDetails {
        id: student.id,
        reg_no: student.reg_no.clone(),
        name: student.name.clone(),
        department: student.department,
        department_name: student.department.full_name().to_string(),
        year: student.year,
        section: SECTIONS[id % SECTIONS.len()].to_string(),
        dob: date_of_birth(student).format("%d %b %Y").to_string(),
        gender: if student.id % 2 == 0 { "Female" } else { "Male" }.to_string(),
        blood_group: BLOOD_GROUPS[id % BLOOD_GROUPS.len()].to_string(),
        address: format!(
            "{}, {}, Anantapur, Andhra Pradesh - 5150{:02}",
            100 + student.id * 7,
            student.pickup_point,
            student.id % 100
        ),
        contact_no: student.contact_no.clone(),
        email: email_for(&student.name),
        father_name: format!("{} {}", FATHER_NAMES[id % FATHER_NAMES.len()], family),
        father_contact_no: (9_876_540_000 + (contact_seed * 17) % 10_000).to_string(),
        mother_name: format!("{} {}", MOTHER_NAMES[id % MOTHER_NAMES.len()], family),
        mother_contact_no: (9_876_550_000 + (contact_seed * 29) % 10_000).to_string(),
        route: student.route.clone(),
        route_info: route.map(RouteSummary::from),
        pickup_point: student.pickup_point.clone(),
        fee_status: fee_status(payments, semester_fee),
        academic_details: academic_details(student),
    }
}
