use chrono::NaiveDate;
use serde::Serialize;

use super::student::Department;

#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_students: usize,
    pub total_buses: usize,
    pub pending_fee_count: usize,
    pub pending_fee_amount: f64,
    pub recent_payments: Vec<RecentPayment>,
    pub occupancy: Vec<RouteOccupancy>,
    pub departments: Vec<Share<Department>>,
    pub years: Vec<Share<u8>>,
}

#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RecentPayment {
    pub id: u32,
    pub student_id: u32,
    pub student: String,
    pub amount: f64,
    pub date: NaiveDate,
}

#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RouteOccupancy {
    pub bus_number: String,
    pub assigned: usize,
    pub capacity: u32,
    pub percent: u32,
}

/// A bucket of a distribution: how many students fall into `key`, and that
/// count as a rounded percentage of the roster.
#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Share<K> {
    pub key: K,
    pub count: usize,
    pub percent: u32,
}
