use std::collections::BTreeMap;

use crate::models::{
    BusRoute, DashboardSummary, Department, Payment, PaymentStatus, RecentPayment, RouteOccupancy,
    Share, Student,
};

use super::enrich::is_paid;

pub const RECENT_PAYMENTS: usize = 5;

/// `part` as an integer percentage of `whole`, rounded half away from zero.
/// An empty denominator yields 0.
pub fn percent(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    (part as f64 * 100.0 / whole as f64).round() as u32
}

fn shares<K: Ord + Copy>(counts: BTreeMap<K, usize>, total: usize) -> Vec<Share<K>> {
    counts
        .into_iter()
        .map(|(key, count)| Share {
            key,
            count,
            percent: percent(count, total),
        })
        .collect()
}

pub fn summarize(
    routes: &[BusRoute],
    students: &[Student],
    payments: &[Payment],
    semester_fee: f64,
) -> DashboardSummary {
    let total = students.len();

    let pending_fee_count = students
        .iter()
        .filter(|s| {
            let own: Vec<&Payment> = payments.iter().filter(|p| p.student_id == s.id).collect();
            !is_paid(&own)
        })
        .count();

    let mut successes: Vec<&Payment> = payments
        .iter()
        .filter(|p| p.status == PaymentStatus::Success)
        .collect();
    successes.sort_by(|a, b| (b.date, b.id).cmp(&(a.date, a.id)));
    let recent_payments = successes
        .into_iter()
        .filter_map(|p| {
            let student = students.iter().find(|s| s.id == p.student_id)?;
            Some(RecentPayment {
                id: p.id,
                student_id: p.student_id,
                student: student.name.clone(),
                amount: p.amount,
                date: p.date,
            })
        })
        .take(RECENT_PAYMENTS)
        .collect();

    let occupancy = routes
        .iter()
        .map(|route| {
            let assigned = students
                .iter()
                .filter(|s| route.matches_number(&s.route))
                .count();
            RouteOccupancy {
                bus_number: route.bus_number.clone(),
                assigned,
                capacity: route.capacity,
                percent: percent(assigned, route.capacity as usize),
            }
        })
        .collect();

    let mut departments: BTreeMap<Department, usize> =
        Department::ALL.iter().map(|d| (*d, 0)).collect();
    let mut years: BTreeMap<u8, usize> = (1..=4).map(|y| (y, 0)).collect();
    for s in students {
        *departments.entry(s.department).or_insert(0) += 1;
        *years.entry(s.year).or_insert(0) += 1;
    }

    DashboardSummary {
        total_students: total,
        total_buses: routes.len(),
        pending_fee_count,
        pending_fee_amount: pending_fee_count as f64 * semester_fee,
        recent_payments,
        occupancy,
        departments: shares(departments, total),
        years: shares(years, total),
    }
}
