//! Initial data loaded into a fresh [`Store`](super::Store).
//!
//! Students whose id is divisible by 3 carry an open `Pending` entry for the
//! current (2024-2025 Even) semester; everyone else has settled it. The
//! dashboard and the fee views read that state back from the ledger.

use chrono::NaiveDate;

use crate::models::{
    BusRoute, Department, Driver, Payment, PaymentMode, PaymentStatus, Schedule, Semester, Student,
};

pub(crate) fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

fn route(
    id: u32,
    bus_number: &str,
    capacity: u32,
    driver: (&str, &str, &str),
    schedule: [&str; 4],
    stops: &[&str],
) -> BusRoute {
    BusRoute {
        id,
        bus_number: bus_number.to_string(),
        stops: stops.iter().map(|s| s.to_string()).collect(),
        capacity,
        driver: Driver {
            name: driver.0.to_string(),
            license: driver.1.to_string(),
            contact: driver.2.to_string(),
        },
        schedule: Schedule {
            morning_pickup: schedule[0].to_string(),
            morning_arrival: schedule[1].to_string(),
            evening_departure: schedule[2].to_string(),
            evening_drop: schedule[3].to_string(),
        },
    }
}

pub fn routes() -> Vec<BusRoute> {
    vec![
        route(
            1,
            "BUS NO-1",
            52,
            ("Ramesh Babu", "AP02 20110045123", "9848012345"),
            ["06:55 AM", "08:40 AM", "04:30 PM", "06:10 PM"],
            &[
                "Tarakarampuram",
                "Gandhi Nagar",
                "Chowdamma Temple",
                "Vasavi College",
                "Kadiri Gate",
                "Bathalapalli",
                "Sanjeevapuram",
                "Mannela",
                "Krsihnamreddypalli",
                "SKU",
                "Akuthotapalli",
                "Sethu school",
                "SVIT",
            ],
        ),
        route(
            2,
            "BUS NO-6",
            48,
            ("Srinivasulu K", "AP02 20090031877", "9848023456"),
            ["06:45 AM", "08:40 AM", "04:30 PM", "06:20 PM"],
            &[
                "Yashoda School",
                "Yerragunta",
                "Kethireddy colony",
                "Sai Baba Temple",
                "RTC Bus stand",
                "DMM PS",
                "Pothukunta PS",
                "Pothukunta Colony",
                "Kunuthuru",
                "Mammilapalli",
                "Mukthapuram",
                "Parvadevarapalli",
                "Maruru",
                "Gollapalli",
                "SVIT",
            ],
        ),
        route(
            3,
            "BUS NO-4",
            40,
            ("Narasimha Reddy", "AP02 20150078342", "9848034567"),
            ["07:10 AM", "08:45 AM", "04:30 PM", "06:00 PM"],
            &[
                "Sangameshwara cicle",
                "I-Town PS",
                "Poola Angadi/TDP BUSTOP",
                "Post office",
                "Gooty Road Marramma Gudi",
                "Venugopal Nagar",
                "Sreenivasa Nagar",
                "Bus Stand",
                "Ravi petrol bunk",
                "SVIT",
            ],
        ),
        route(
            4,
            "BUS NO-5",
            40,
            ("Hussain Basha", "AP02 20120056710", "9848045678"),
            ["07:05 AM", "08:45 AM", "04:30 PM", "06:05 PM"],
            &[
                "Somuladoddi",
                "Bellary Bypass",
                "Syndicate Nagar",
                "Kalyanadurgam Bypass",
                "St.Anns School",
                "U-turn",
                "Rudrampeta",
                "D-mart",
                "Shakshi office",
                "SVIT",
            ],
        ),
        route(
            5,
            "BUS NO-7",
            45,
            ("Venkataramana P", "AP02 20100049921", "9848056789"),
            ["07:00 AM", "08:45 AM", "04:30 PM", "06:05 PM"],
            &[
                "Nayak Nagar Gate",
                "Gampanna Apartments",
                "Vidyut nagar circle",
                "Housing Board",
                "RTO Office",
                "Saradha Nagar",
                "Collector Office",
                "Pangal Road",
                "Rapthadu",
                "SVIT",
            ],
        ),
        route(
            6,
            "BUS NO-9",
            56,
            ("Mallikarjuna S", "AP02 20080027654", "9848067890"),
            ["06:40 AM", "08:40 AM", "04:30 PM", "06:25 PM"],
            &[
                "Vidyuth Nagar",
                "Jesus nagar",
                "Sai Nagar",
                "KSR Clg",
                "Municipal Office",
                "Raghuveera Towers",
                "Tower Clock",
                "PTC Grounds",
                "Kovvur nagar",
                "Lakshmi nagar nagulakatta",
                "Vidyaranga school",
                "Renuka yellamma temple",
                "Triveni homes",
                "Nalanda college",
                "Y T Shiva Reddy House",
                "Garlica",
                "SVIT",
            ],
        ),
        route(
            7,
            "BUS NO-02",
            50,
            ("Prasad Rao M", "AP02 20140063390", "9848078901"),
            ["06:50 AM", "08:40 AM", "04:30 PM", "06:15 PM"],
            &[
                "Chinmayi nagar",
                "JNTU",
                "Sangamesh circle",
                "Pallavi towers",
                "Surya nagar",
                "Srikanta circle",
                "Bus stand",
                "TTD Kalyanamandapam",
                "2nd Road Mitra Hotel",
                "3rd Road GR function Hall",
                "4th Bangaramma Temople",
                "Santhi Nagar",
                "Somnath Nagar",
                "Tapovanam",
                "SVIT",
            ],
        ),
    ]
}

fn student(
    id: u32,
    reg_no: &str,
    name: &str,
    department: Department,
    year: u8,
    route: &str,
    pickup_point: &str,
) -> Student {
    Student {
        id,
        reg_no: reg_no.to_string(),
        name: name.to_string(),
        department,
        year,
        route: route.to_string(),
        pickup_point: pickup_point.to_string(),
        contact_no: format!("98765432{:02}", id + 9),
    }
}

pub fn students() -> Vec<Student> {
    use Department::{Civil, Cse, Ece, Eee, It, Mech};

    vec![
        student(1, "BT20001", "Amit Kumar", Cse, 3, "BUS NO-1", "Gandhi Nagar"),
        student(2, "BT21015", "Priya Sharma", Cse, 2, "BUS NO-6", "RTC Bus stand"),
        student(3, "BT22032", "Rahul Singh", Cse, 1, "BUS NO-4", "Bus Stand"),
        student(4, "BT19048", "Anjali Patel", Cse, 4, "BUS NO-1", "Kadiri Gate"),
        student(5, "BT22055", "Karthik Rajan", Ece, 1, "BUS NO-5", "Syndicate Nagar"),
        student(6, "BT21066", "Shreya Reddy", Ece, 2, "BUS NO-6", "Yerragunta"),
        student(7, "BT20077", "Vijay Kumar", Ece, 3, "BUS NO-4", "Post office"),
        student(8, "BT19088", "Meena Kumari", Ece, 4, "BUS NO-7", "Housing Board"),
        student(9, "BT22099", "Rajesh Khanna", Mech, 1, "BUS NO-1", "Bathalapalli"),
        student(10, "BT21100", "Surya Prakash", Mech, 2, "BUS NO-5", "D-mart"),
        student(11, "BT20111", "Akash Patel", Mech, 3, "BUS NO-7", "RTO Office"),
        student(12, "BT19122", "Dinesh Kumar", Mech, 4, "BUS NO-6", "Kunuthuru"),
        student(13, "BT22133", "Anand Raj", Civil, 1, "BUS NO-4", "Venugopal Nagar"),
        student(14, "BT21144", "Lakshmi Narayan", Civil, 2, "BUS NO-1", "SKU"),
        student(15, "BT20155", "Venkatesh S", Civil, 3, "BUS NO-5", "Rudrampeta"),
        student(16, "BT19166", "Divya Prakash", Civil, 4, "BUS NO-7", "Collector Office"),
        student(17, "BT22177", "Ravi Shankar", It, 1, "BUS NO-9", "Tower Clock"),
        student(18, "BT21188", "Swathi Reddy", It, 2, "BUS NO-02", "JNTU"),
        student(19, "BT20199", "Kiran Kumar", It, 3, "BUS NO-1", "Chowdamma Temple"),
        student(20, "BT19200", "Pooja Hegde", It, 4, "BUS NO-02", "Tapovanam"),
        student(21, "BT22211", "Mohammed Ali", Eee, 1, "BUS NO-9", "Sai Nagar"),
        student(22, "BT21222", "Ananya Singh", Eee, 2, "BUS NO-1", "Mannela"),
        student(23, "BT20233", "Rakesh Mishra", Eee, 3, "BUS NO-9", "PTC Grounds"),
        student(24, "BT19244", "Neha Sharma", Eee, 4, "BUS NO-02", "Surya nagar"),
    ]
}

/// Historical ledger for `students`, every entry charged at `fee`.
///
/// - year 2+ students: 2023-2024 Odd, paid
/// - everyone: 2024-2025 Odd, paid
/// - 2024-2025 Even: paid, or a Pending placeholder when `id % 3 == 0`
pub fn payments(students: &[Student], fee: f64) -> Vec<Payment> {
    let mut ledger = Vec::new();
    let mut push = |student_id: u32,
                    date: NaiveDate,
                    academic_year: &str,
                    semester: Semester,
                    payment_mode: PaymentMode,
                    status: PaymentStatus| {
        let id = ledger.len() as u32 + 1;
        ledger.push(Payment {
            id,
            student_id,
            transaction_id: format!("TXN{:06}", 120_000 + id * 113),
            amount: fee,
            date,
            academic_year: academic_year.to_string(),
            semester,
            payment_mode,
            status,
            remarks: None,
        });
    };

    for s in students {
        let spread = s.id % 20 + 1;
        if s.year >= 2 {
            let mode = if s.id % 2 == 0 {
                PaymentMode::Cash
            } else {
                PaymentMode::Online
            };
            push(
                s.id,
                day(2023, 9, spread),
                "2023-2024",
                Semester::Odd,
                mode,
                PaymentStatus::Success,
            );
        }

        let mode = if s.id % 4 == 0 {
            PaymentMode::Cheque
        } else {
            PaymentMode::Online
        };
        push(
            s.id,
            day(2024, 9, spread),
            "2024-2025",
            Semester::Odd,
            mode,
            PaymentStatus::Success,
        );

        if s.id % 3 == 0 {
            push(
                s.id,
                day(2025, 3, 15),
                "2024-2025",
                Semester::Even,
                PaymentMode::Online,
                PaymentStatus::Pending,
            );
        } else {
            push(
                s.id,
                day(2025, 3, s.id % 10 + 1),
                "2024-2025",
                Semester::Even,
                PaymentMode::Upi,
                PaymentStatus::Success,
            );
        }
    }

    ledger
}
