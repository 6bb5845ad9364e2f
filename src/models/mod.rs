pub mod auth;
pub mod dashboard;
pub mod payment;
pub mod route;
pub mod student;

// Re-export all the models that are used in other modules
pub use auth::{AuthResponse, Claims, LoginRequest, UserProfile};
pub use dashboard::{DashboardSummary, RecentPayment, RouteOccupancy, Share};
pub use payment::{
    FeeQuery, FeeRecord, FeeState, NewPayment, Payment, PaymentMode, PaymentQuery, PaymentStatus,
    Semester,
};
pub use route::{BusRoute, Driver, RouteInput, RouteSummary, Schedule};
pub use student::{
    AcademicDetails, Department, FeeStatus, NewStudent, Student, StudentDetails, StudentFilter,
};
