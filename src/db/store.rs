use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use chrono::Utc;
use log::{debug, info, warn};

use crate::error::StoreError;
use crate::models::{
    route::DEFAULT_CAPACITY, BusRoute, DashboardSummary, FeeRecord, FeeState, NewPayment,
    NewStudent, Payment, PaymentMode, PaymentStatus, RouteInput, Semester, Student, StudentDetails,
    StudentFilter,
};

use super::{dashboard, enrich, seed};

/// Outcome of [`Store::upsert_route`].
#[derive(Debug, Clone, PartialEq)]
pub enum Upserted {
    Created(BusRoute),
    Updated(BusRoute),
}

impl Upserted {
    pub fn is_created(&self) -> bool {
        matches!(self, Upserted::Created(_))
    }

    pub fn route(&self) -> &BusRoute {
        match self {
            Upserted::Created(route) | Upserted::Updated(route) => route,
        }
    }

    pub fn into_route(self) -> BusRoute {
        match self {
            Upserted::Created(route) | Upserted::Updated(route) => route,
        }
    }
}

#[derive(Default)]
pub struct Tables {
    pub routes: Vec<BusRoute>,
    pub students: Vec<Student>,
    pub payments: Vec<Payment>,
}

impl Tables {
    fn payments_of(&self, student_id: u32) -> Vec<&Payment> {
        self.payments
            .iter()
            .filter(|p| p.student_id == student_id)
            .collect()
    }

    fn route_position(&self, key: &str) -> Option<usize> {
        let key = key.trim();
        key.parse::<u32>()
            .ok()
            .and_then(|id| self.routes.iter().position(|r| r.id == id))
            .or_else(|| self.routes.iter().position(|r| r.matches_number(key)))
    }
}

/// In-memory owner of the route list, the student roster and the payment
/// ledger. Every operation runs its read or mutation inside a single lock
/// section and only then waits out the configured latency, so concurrent
/// callers see mutations applied whole and in lock order.
pub struct Store {
    tables: RwLock<Tables>,
    semester_fee: f64,
    latency: Duration,
}

impl Store {
    pub fn new(tables: Tables, semester_fee: f64, latency: Duration) -> Self {
        Store {
            tables: RwLock::new(tables),
            semester_fee,
            latency,
        }
    }

    pub fn seeded(semester_fee: f64, latency: Duration) -> Self {
        let students = seed::students();
        let payments = seed::payments(&students, semester_fee);
        let tables = Tables {
            routes: seed::routes(),
            students,
            payments,
        };
        info!(
            "Seeded {} routes, {} students, {} payments",
            tables.routes.len(),
            tables.students.len(),
            tables.payments.len()
        );
        Store::new(tables, semester_fee, latency)
    }

    fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write().unwrap_or_else(PoisonError::into_inner)
    }

    async fn settle(&self) {
        if !self.latency.is_zero() {
            actix_web::rt::time::sleep(self.latency).await;
        }
    }

    // Routes

    pub async fn list_routes(&self) -> Vec<BusRoute> {
        let routes = self.read().routes.clone();
        self.settle().await;
        routes
    }

    pub async fn get_route(&self, id: u32) -> Option<BusRoute> {
        let route = self.read().routes.iter().find(|r| r.id == id).cloned();
        self.settle().await;
        route
    }

    pub async fn get_route_by_number(&self, bus_number: &str) -> Option<BusRoute> {
        let route = self
            .read()
            .routes
            .iter()
            .find(|r| r.matches_number(bus_number))
            .cloned();
        self.settle().await;
        route
    }

    /// Looks `key` up as an id first, then as a bus number.
    pub async fn find_route(&self, key: &str) -> Option<BusRoute> {
        let route = {
            let tables = self.read();
            tables.route_position(key).map(|i| tables.routes[i].clone())
        };
        self.settle().await;
        route
    }

    pub async fn upsert_route(&self, input: RouteInput) -> Result<Upserted, StoreError> {
        let result = self.apply_upsert(input);
        self.settle().await;
        result
    }

    fn apply_upsert(&self, input: RouteInput) -> Result<Upserted, StoreError> {
        let bus_number = input
            .bus_number
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .ok_or(StoreError::MissingField("Bus number"))?
            .to_uppercase();
        let stops: Vec<String> = input
            .stops
            .unwrap_or_default()
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        if stops.len() < 2 {
            return Err(StoreError::TooFewStops { found: stops.len() });
        }

        let mut tables = self.write();
        let existing = input
            .id
            .and_then(|id| tables.routes.iter().position(|r| r.id == id))
            .or_else(|| tables.routes.iter().position(|r| r.matches_number(&bus_number)));

        match existing {
            Some(index) => {
                let clash = tables
                    .routes
                    .iter()
                    .enumerate()
                    .any(|(i, r)| i != index && r.matches_number(&bus_number));
                if clash {
                    return Err(StoreError::DuplicateBusNumber(bus_number));
                }

                let previous = tables.routes[index].bus_number.clone();
                {
                    let route = &mut tables.routes[index];
                    route.bus_number = bus_number.clone();
                    route.stops = stops;
                    if let Some(capacity) = input.capacity {
                        route.capacity = capacity;
                    }
                    if let Some(driver) = input.driver {
                        route.driver = driver;
                    }
                    if let Some(schedule) = input.schedule {
                        route.schedule = schedule;
                    }
                }

                if !previous.eq_ignore_ascii_case(&bus_number) {
                    let mut moved = 0;
                    for student in tables
                        .students
                        .iter_mut()
                        .filter(|s| s.route.eq_ignore_ascii_case(&previous))
                    {
                        student.route = bus_number.clone();
                        moved += 1;
                    }
                    info!(
                        "Route {} renumbered to {}, {} students reassigned",
                        previous, bus_number, moved
                    );
                }

                let route = tables.routes[index].clone();
                info!("Updated route {} (id {})", route.bus_number, route.id);
                Ok(Upserted::Updated(route))
            }
            None => {
                let id = tables.routes.iter().map(|r| r.id).max().unwrap_or(0) + 1;
                let route = BusRoute {
                    id,
                    bus_number,
                    stops,
                    capacity: input.capacity.unwrap_or(DEFAULT_CAPACITY),
                    driver: input.driver.unwrap_or_default(),
                    schedule: input.schedule.unwrap_or_default(),
                };
                tables.routes.push(route.clone());
                info!("Added route {} (id {})", route.bus_number, route.id);
                Ok(Upserted::Created(route))
            }
        }
    }

    /// Removes the route found by id or bus number. A route that still has
    /// students assigned is left in place.
    pub async fn remove_route(&self, key: &str) -> Result<BusRoute, StoreError> {
        let result = self.apply_remove(key);
        self.settle().await;
        result
    }

    fn apply_remove(&self, key: &str) -> Result<BusRoute, StoreError> {
        let mut tables = self.write();
        let index = tables.route_position(key).ok_or_else(|| {
            warn!("Refusing to remove unknown route {}", key);
            StoreError::RouteNotFound(key.trim().to_string())
        })?;

        let bus_number = tables.routes[index].bus_number.clone();
        let assigned = tables
            .students
            .iter()
            .filter(|s| s.route.eq_ignore_ascii_case(&bus_number))
            .count();
        if assigned > 0 {
            warn!(
                "Refusing to remove route {} with {} students assigned",
                bus_number, assigned
            );
            return Err(StoreError::RouteInUse {
                bus_number,
                students: assigned,
            });
        }

        let route = tables.routes.remove(index);
        info!("Removed route {} (id {})", route.bus_number, route.id);
        Ok(route)
    }

    // Students

    pub async fn list_students(&self, filter: &StudentFilter) -> Vec<Student> {
        let students = self
            .read()
            .students
            .iter()
            .filter(|s| filter.matches(s))
            .cloned()
            .collect();
        self.settle().await;
        students
    }

    pub async fn student_details(&self, id: u32) -> Option<StudentDetails> {
        let details = {
            let tables = self.read();
            tables.students.iter().find(|s| s.id == id).map(|student| {
                let route = tables.routes.iter().find(|r| r.matches_number(&student.route));
                enrich::student_details(
                    student,
                    route,
                    &tables.payments_of(id),
                    self.semester_fee,
                )
            })
        };
        self.settle().await;
        details
    }

    pub async fn students_by_bus(&self, bus_number: &str) -> Vec<Student> {
        let bus_number = bus_number.trim();
        let students = self
            .read()
            .students
            .iter()
            .filter(|s| s.route.eq_ignore_ascii_case(bus_number))
            .cloned()
            .collect();
        self.settle().await;
        students
    }

    pub async fn add_student(&self, input: NewStudent) -> Result<Student, StoreError> {
        let result = self.apply_add_student(input);
        self.settle().await;
        result
    }

    fn apply_add_student(&self, input: NewStudent) -> Result<Student, StoreError> {
        let name = input
            .name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .ok_or(StoreError::MissingField("Name"))?
            .to_string();
        let department = input.department.ok_or(StoreError::MissingField("Department"))?;
        let year = input.year.ok_or(StoreError::MissingField("Year"))?;
        if !(1..=4).contains(&year) {
            return Err(StoreError::InvalidYear(year));
        }
        let requested_route = input
            .route
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .ok_or(StoreError::MissingField("Route"))?;

        let mut tables = self.write();
        let route = tables
            .routes
            .iter()
            .find(|r| r.matches_number(requested_route))
            .ok_or_else(|| StoreError::RouteNotFound(requested_route.to_string()))?;

        let pickup_point = match input.pickup_point.as_deref().map(str::trim) {
            Some(stop) if !stop.is_empty() => {
                if !route.has_stop(stop) {
                    return Err(StoreError::UnknownPickupPoint {
                        stop: stop.to_string(),
                        bus_number: route.bus_number.clone(),
                    });
                }
                stop.to_string()
            }
            _ => route.stops.first().cloned().unwrap_or_default(),
        };
        let bus_number = route.bus_number.clone();

        let id = tables.students.iter().map(|s| s.id).max().unwrap_or(0) + 1;
        let reg_no = input
            .reg_no
            .map(|r| r.trim().to_string())
            .filter(|r| !r.is_empty())
            .unwrap_or_else(|| {
                let batch = enrich::ACADEMIC_START_YEAR - (i32::from(year) - 1);
                format!("BT{:02}{:03}", batch % 100, id % 1000)
            });

        let student = Student {
            id,
            reg_no,
            name,
            department,
            year,
            route: bus_number,
            pickup_point,
            contact_no: input.contact_no.trim().to_string(),
        };
        tables.students.push(student.clone());
        info!(
            "Added student {} ({}) on {}",
            student.reg_no, student.name, student.route
        );
        Ok(student)
    }

    // Payments

    pub async fn student_payments(&self, student_id: u32) -> Vec<Payment> {
        let payments = self
            .read()
            .payments_of(student_id)
            .into_iter()
            .cloned()
            .collect();
        self.settle().await;
        payments
    }

    pub async fn list_payments(&self, status: Option<PaymentStatus>) -> Vec<Payment> {
        let payments = self
            .read()
            .payments
            .iter()
            .filter(|p| status.map_or(true, |s| p.status == s))
            .cloned()
            .collect();
        self.settle().await;
        payments
    }

    pub async fn add_payment(&self, input: NewPayment) -> Result<Payment, StoreError> {
        let result = self.apply_add_payment(input);
        self.settle().await;
        result
    }

    fn apply_add_payment(&self, input: NewPayment) -> Result<Payment, StoreError> {
        let student_id = input.student_id.ok_or(StoreError::MissingField("Student"))?;
        let amount = input.amount.ok_or(StoreError::MissingField("Amount"))?;
        if !amount.is_finite() || amount <= 0.0 {
            return Err(StoreError::InvalidAmount);
        }

        let mut tables = self.write();
        if !tables.students.iter().any(|s| s.id == student_id) {
            return Err(StoreError::StudentNotFound(student_id));
        }

        let id = tables.payments.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        let transaction_id = input
            .transaction_id
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| {
                format!(
                    "TXN{:06}{:04}",
                    Utc::now().timestamp_millis().rem_euclid(1_000_000),
                    id % 10_000
                )
            });

        let payment = Payment {
            id,
            student_id,
            transaction_id,
            amount,
            date: input
                .date
                .unwrap_or_else(|| chrono::Local::now().date_naive()),
            academic_year: input
                .academic_year
                .filter(|y| !y.trim().is_empty())
                .unwrap_or_else(|| crate::models::payment::DEFAULT_ACADEMIC_YEAR.to_string()),
            semester: input.semester.unwrap_or(Semester::Even),
            payment_mode: input.payment_mode.unwrap_or(PaymentMode::Online),
            status: input.status.unwrap_or(PaymentStatus::Success),
            remarks: input.remarks.filter(|r| !r.trim().is_empty()),
        };
        tables.payments.push(payment.clone());
        info!(
            "Recorded {:?} payment {} of {} for student {}",
            payment.status, payment.transaction_id, payment.amount, payment.student_id
        );
        Ok(payment)
    }

    pub async fn fee_overview(&self, search: Option<&str>) -> Vec<FeeRecord> {
        let term = search
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty());
        let records = {
            let tables = self.read();
            tables
                .students
                .iter()
                .map(|student| {
                    let own = tables.payments_of(student.id);
                    let status = if enrich::is_paid(&own) {
                        FeeState::Paid
                    } else {
                        FeeState::Pending
                    };
                    FeeRecord {
                        id: student.id,
                        reg_no: student.reg_no.clone(),
                        name: student.name.clone(),
                        route: student.route.clone(),
                        amount: self.semester_fee,
                        status,
                        paid_date: enrich::last_success(&own).map(|p| p.date),
                    }
                })
                .filter(|record| match &term {
                    Some(term) => {
                        record.name.to_lowercase().contains(term)
                            || record.reg_no.to_lowercase().contains(term)
                            || record.status.label().to_lowercase().contains(term)
                    }
                    None => true,
                })
                .collect()
        };
        self.settle().await;
        records
    }

    // Dashboard

    pub async fn dashboard(&self) -> DashboardSummary {
        let summary = {
            let tables = self.read();
            dashboard::summarize(
                &tables.routes,
                &tables.students,
                &tables.payments,
                self.semester_fee,
            )
        };
        debug!(
            "Dashboard: {} students, {} pending fees",
            summary.total_students, summary.pending_fee_count
        );
        self.settle().await;
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Driver;

    fn store() -> Store {
        Store::seeded(10_000.0, Duration::ZERO)
    }

    fn input(bus_number: &str, stops: &[&str]) -> RouteInput {
        RouteInput {
            bus_number: Some(bus_number.to_string()),
            stops: Some(stops.iter().map(|s| s.to_string()).collect()),
            ..RouteInput::default()
        }
    }

    #[actix_web::test]
    async fn upsert_unseen_number_appends_with_fresh_id_and_defaults() {
        let store = store();
        let before = store.list_routes().await;

        let outcome = store
            .upsert_route(input("BUS NO-11", &["Clock Tower", "SVIT"]))
            .await
            .unwrap();
        assert!(outcome.is_created());
        let route = outcome.into_route();

        let after = store.list_routes().await;
        assert_eq!(after.len(), before.len() + 1);
        assert!(before.iter().all(|r| r.id != route.id));
        assert_eq!(route.id, 8);
        assert_eq!(route.capacity, DEFAULT_CAPACITY);
        assert_eq!(route.driver, Driver::default());
        assert_eq!(after.last(), Some(&route));
    }

    #[actix_web::test]
    async fn upsert_existing_number_is_case_insensitive_and_in_place() {
        let store = store();
        let before = store.list_routes().await;

        let outcome = store
            .upsert_route(input("bus no-4", &["Bus Stand", "Ravi petrol bunk", "SVIT"]))
            .await
            .unwrap();
        assert!(!outcome.is_created());
        let route = outcome.into_route();

        let after = store.list_routes().await;
        assert_eq!(after.len(), before.len());
        assert_eq!(route.id, 3);
        assert_eq!(route.bus_number, "BUS NO-4");
        assert_eq!(route.stops.len(), 3);
        // Merged fields the input did not carry are kept.
        assert_eq!(route.capacity, 40);
        assert_eq!(route.driver.name, "Narasimha Reddy");
    }

    #[actix_web::test]
    async fn upsert_by_id_renames_and_moves_students() {
        let store = store();
        let mut renamed = input("BUS NO-10", &["Somuladoddi", "D-mart", "SVIT"]);
        renamed.id = Some(4);

        let outcome = store.upsert_route(renamed).await.unwrap();
        assert!(matches!(outcome, Upserted::Updated(ref r) if r.id == 4));

        assert!(store.students_by_bus("BUS NO-5").await.is_empty());
        let moved = store.students_by_bus("BUS NO-10").await;
        assert_eq!(moved.iter().map(|s| s.id).collect::<Vec<_>>(), vec![5, 10, 15]);
    }

    #[actix_web::test]
    async fn upsert_by_id_rejects_number_of_another_route() {
        let store = store();
        let mut clash = input("BUS NO-9", &["A", "B"]);
        clash.id = Some(1);

        let err = store.upsert_route(clash).await.unwrap_err();
        assert_eq!(err, StoreError::DuplicateBusNumber("BUS NO-9".to_string()));
        assert_eq!(store.get_route(1).await.map(|r| r.bus_number), Some("BUS NO-1".to_string()));
    }

    #[actix_web::test]
    async fn upsert_rejects_short_routes_and_missing_numbers() {
        let store = store();
        let before = store.list_routes().await;

        let err = store
            .upsert_route(input("BUS NO-1", &["Only stop"]))
            .await
            .unwrap_err();
        assert_eq!(err, StoreError::TooFewStops { found: 1 });

        let err = store
            .upsert_route(input("BUS NO-12", &["  ", "SVIT"]))
            .await
            .unwrap_err();
        assert_eq!(err, StoreError::TooFewStops { found: 1 });

        let err = store
            .upsert_route(input("   ", &["A", "B"]))
            .await
            .unwrap_err();
        assert_eq!(err, StoreError::MissingField("Bus number"));

        assert_eq!(store.list_routes().await, before);
    }

    #[actix_web::test]
    async fn remove_by_id_then_by_number() {
        let store = store();
        store
            .upsert_route(input("BUS NO-11", &["Clock Tower", "SVIT"]))
            .await
            .unwrap();
        store
            .upsert_route(input("BUS NO-12", &["Kamalanagar", "SVIT"]))
            .await
            .unwrap();

        let removed = store.remove_route("8").await.unwrap();
        assert_eq!(removed.bus_number, "BUS NO-11");
        let removed = store.remove_route("bus no-12").await.unwrap();
        assert_eq!(removed.id, 9);
        assert_eq!(store.list_routes().await.len(), 7);

        let err = store.remove_route("BUS NO-99").await.unwrap_err();
        assert_eq!(err, StoreError::RouteNotFound("BUS NO-99".to_string()));
        assert_eq!(store.list_routes().await.len(), 7);
    }

    #[actix_web::test]
    async fn remove_refuses_route_with_students() {
        let store = store();
        let routes = store.list_routes().await;
        let roster = store.list_students(&StudentFilter::default()).await;

        let err = store.remove_route("BUS NO-1").await.unwrap_err();
        assert_eq!(
            err,
            StoreError::RouteInUse {
                bus_number: "BUS NO-1".to_string(),
                students: 6,
            }
        );
        let err = store.remove_route("6").await.unwrap_err();
        assert!(matches!(err, StoreError::RouteInUse { students: 3, .. }));

        assert_eq!(store.list_routes().await, routes);
        assert_eq!(store.list_students(&StudentFilter::default()).await, roster);
        let mut assigned = 0;
        for route in &routes {
            assigned += store.students_by_bus(&route.bus_number).await.len();
        }
        assert_eq!(assigned, roster.len());
    }

    #[actix_web::test]
    async fn concurrent_upserts_apply_in_call_order_under_latency() {
        let latency = Duration::from_millis(100);
        let store = Store::seeded(10_000.0, latency);
        let started = std::time::Instant::now();

        let (first, second) = futures::join!(
            store.upsert_route(input("BUS NO-11", &["Clock Tower", "SVIT"])),
            store.upsert_route(input("BUS NO-12", &["Kamalanagar", "SVIT"]))
        );

        let first = first.unwrap();
        let second = second.unwrap();
        assert!(first.is_created() && second.is_created());
        assert_eq!(first.route().id, 8);
        assert_eq!(second.route().id, 9);
        // Both calls wait out the delay together.
        let elapsed = started.elapsed();
        assert!(elapsed >= latency);
        assert!(elapsed < latency * 2);

        let routes = store.list_routes().await;
        assert_eq!(routes.len(), 9);
        assert_eq!(routes[7].bus_number, "BUS NO-11");
        assert_eq!(routes[8].bus_number, "BUS NO-12");
    }

    #[actix_web::test]
    async fn lookup_by_number_ignores_case() {
        let store = store();
        assert_eq!(store.get_route_by_number("bus no-7").await.map(|r| r.id), Some(5));
        assert!(store.get_route_by_number("BUS NO-70").await.is_none());
        assert_eq!(store.find_route("6").await.map(|r| r.bus_number), Some("BUS NO-9".to_string()));
    }

    #[actix_web::test]
    async fn students_by_bus_partition_the_roster() {
        let store = store();
        let roster = store.list_students(&StudentFilter::default()).await;

        let mut seen = Vec::new();
        for route in store.list_routes().await {
            for student in store.students_by_bus(&route.bus_number).await {
                assert_eq!(student.route, route.bus_number);
                seen.push(student.id);
            }
        }
        seen.sort_unstable();
        assert_eq!(seen, roster.iter().map(|s| s.id).collect::<Vec<_>>());
    }

    #[actix_web::test]
    async fn seeded_fee_status_follows_id_convention() {
        let store = store();
        for student in store.list_students(&StudentFilter::default()).await {
            let details = store.student_details(student.id).await.unwrap();
            assert_eq!(details.fee_status.is_paid, student.id % 3 != 0, "{}", student.id);

            let pending = store
                .student_payments(student.id)
                .await
                .iter()
                .any(|p| p.status == PaymentStatus::Pending);
            assert_eq!(pending, !details.fee_status.is_paid, "{}", student.id);
        }
        assert!(store.student_details(999).await.is_none());
    }

    #[actix_web::test]
    async fn settling_payment_flips_fee_status() {
        let store = store();
        assert!(!store.student_details(3).await.unwrap().fee_status.is_paid);

        let payment = store
            .add_payment(NewPayment {
                student_id: Some(3),
                amount: Some(10_000.0),
                status: Some(PaymentStatus::Success),
                ..NewPayment::default()
            })
            .await
            .unwrap();

        assert!(payment.transaction_id.starts_with("TXN"));
        assert_eq!(payment.semester, Semester::Even);
        assert!(store.student_payments(3).await.contains(&payment));
        assert!(store.student_details(3).await.unwrap().fee_status.is_paid);
        assert_eq!(store.dashboard().await.pending_fee_count, 7);
    }

    #[actix_web::test]
    async fn add_payment_validation() {
        let store = store();
        let count = store.list_payments(None).await.len();

        let missing_student = NewPayment {
            amount: Some(10_000.0),
            ..NewPayment::default()
        };
        assert_eq!(
            store.add_payment(missing_student).await.unwrap_err(),
            StoreError::MissingField("Student")
        );

        let missing_amount = NewPayment {
            student_id: Some(1),
            ..NewPayment::default()
        };
        assert_eq!(
            store.add_payment(missing_amount).await.unwrap_err(),
            StoreError::MissingField("Amount")
        );

        let negative = NewPayment {
            student_id: Some(1),
            amount: Some(-5.0),
            ..NewPayment::default()
        };
        assert_eq!(store.add_payment(negative).await.unwrap_err(), StoreError::InvalidAmount);

        let stranger = NewPayment {
            student_id: Some(404),
            amount: Some(10.0),
            ..NewPayment::default()
        };
        assert_eq!(
            store.add_payment(stranger).await.unwrap_err(),
            StoreError::StudentNotFound(404)
        );

        assert_eq!(store.list_payments(None).await.len(), count);
    }

    #[actix_web::test]
    async fn status_filter_on_ledger() {
        let store = store();
        let pending = store.list_payments(Some(PaymentStatus::Pending)).await;
        assert_eq!(pending.len(), 8);
        assert!(pending.iter().all(|p| p.student_id % 3 == 0));
        assert!(store.list_payments(Some(PaymentStatus::Failed)).await.is_empty());
    }

    #[actix_web::test]
    async fn add_student_checks_route_and_pickup_point() {
        let store = store();

        let student = store
            .add_student(NewStudent {
                name: Some("Sai Teja".to_string()),
                department: Some(crate::models::Department::It),
                year: Some(1),
                route: Some("bus no-4".to_string()),
                ..NewStudent::default()
            })
            .await
            .unwrap();
        assert_eq!(student.id, 25);
        assert_eq!(student.route, "BUS NO-4");
        assert_eq!(student.pickup_point, "Sangameshwara cicle");
        assert_eq!(student.reg_no, "BT24025");

        let err = store
            .add_student(NewStudent {
                name: Some("Sai Teja".to_string()),
                department: Some(crate::models::Department::It),
                year: Some(1),
                route: Some("BUS NO-4".to_string()),
                pickup_point: Some("JNTU".to_string()),
                ..NewStudent::default()
            })
            .await
            .unwrap_err();
        assert_eq!(
            err,
            StoreError::UnknownPickupPoint {
                stop: "JNTU".to_string(),
                bus_number: "BUS NO-4".to_string()
            }
        );

        let err = store
            .add_student(NewStudent {
                name: Some("Sai Teja".to_string()),
                department: Some(crate::models::Department::It),
                year: Some(5),
                route: Some("BUS NO-4".to_string()),
                ..NewStudent::default()
            })
            .await
            .unwrap_err();
        assert_eq!(err, StoreError::InvalidYear(5));
        assert_eq!(store.list_students(&StudentFilter::default()).await.len(), 25);
    }

    #[actix_web::test]
    async fn fee_overview_search() {
        let store = store();
        let all = store.fee_overview(None).await;
        assert_eq!(all.len(), 24);

        let pending = store.fee_overview(Some("pending")).await;
        assert_eq!(pending.len(), 8);
        assert!(pending.iter().all(|r| r.status == FeeState::Pending));

        let by_reg = store.fee_overview(Some("bt20001")).await;
        assert_eq!(by_reg.len(), 1);
        assert_eq!(by_reg[0].name, "Amit Kumar");
        assert!(by_reg[0].paid_date.is_some());
    }
}
