use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaymentStatus {
    Success,
    Pending,
    Failed,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Semester {
    Odd,
    Even,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaymentMode {
    Online,
    Cash,
    Cheque,
    #[serde(rename = "DD")]
    DemandDraft,
    #[serde(rename = "UPI")]
    Upi,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: u32,
    pub student_id: u32,
    pub transaction_id: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub academic_year: String,
    pub semester: Semester,
    pub payment_mode: PaymentMode,
    pub status: PaymentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

impl Payment {
    pub fn same_period(&self, other: &Payment) -> bool {
        self.student_id == other.student_id
            && self.academic_year == other.academic_year
            && self.semester == other.semester
    }
}

pub const DEFAULT_ACADEMIC_YEAR: &str = "2024-2025";

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewPayment {
    pub student_id: Option<u32>,
    pub transaction_id: Option<String>,
    pub amount: Option<f64>,
    pub date: Option<NaiveDate>,
    pub academic_year: Option<String>,
    pub semester: Option<Semester>,
    pub payment_mode: Option<PaymentMode>,
    pub status: Option<PaymentStatus>,
    pub remarks: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
pub struct PaymentQuery {
    pub status: Option<PaymentStatus>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeeState {
    Paid,
    Pending,
}

impl FeeState {
    pub fn label(self) -> &'static str {
        match self {
            FeeState::Paid => "Paid",
            FeeState::Pending => "Pending",
        }
    }
}

#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct FeeRecord {
    pub id: u32,
    pub reg_no: String,
    pub name: String,
    pub route: String,
    pub amount: f64,
    pub status: FeeState,
    pub paid_date: Option<NaiveDate>,
}

#[derive(Deserialize, Debug, Default)]
pub struct FeeQuery {
    pub search: Option<String>,
}
