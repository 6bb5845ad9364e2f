use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BusRoute {
    pub id: u32,
    pub bus_number: String,
    /// Ordered stop names; the dashboard calls this list `route`.
    #[serde(rename = "route")]
    pub stops: Vec<String>,
    pub capacity: u32,
    pub driver: Driver,
    pub schedule: Schedule,
}

impl BusRoute {
    pub fn matches_number(&self, bus_number: &str) -> bool {
        self.bus_number.eq_ignore_ascii_case(bus_number.trim())
    }

    pub fn has_stop(&self, stop: &str) -> bool {
        self.stops.iter().any(|s| s == stop)
    }

    /// "<first stop> to <last stop>", the label used in route pickers.
    pub fn display_name(&self) -> String {
        match (self.stops.first(), self.stops.last()) {
            (Some(first), Some(last)) => format!("{} to {}", first, last),
            _ => self.bus_number.clone(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    pub name: String,
    pub license: String,
    pub contact: String,
}

impl Default for Driver {
    fn default() -> Self {
        Self {
            name: "To be assigned".to_string(),
            license: "N/A".to_string(),
            contact: "N/A".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub morning_pickup: String,
    pub morning_arrival: String,
    pub evening_departure: String,
    pub evening_drop: String,
}

impl Default for Schedule {
    fn default() -> Self {
        Self {
            morning_pickup: "07:00 AM".to_string(),
            morning_arrival: "08:45 AM".to_string(),
            evening_departure: "04:30 PM".to_string(),
            evening_drop: "06:15 PM".to_string(),
        }
    }
}

pub const DEFAULT_CAPACITY: u32 = 50;

/// Body of an upsert. Every field is optional on the wire so that missing
/// values can be reported with a readable message instead of a serde error.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct RouteInput {
    pub id: Option<u32>,
    pub bus_number: Option<String>,
    #[serde(rename = "route", alias = "stops")]
    pub stops: Option<Vec<String>>,
    pub capacity: Option<u32>,
    pub driver: Option<Driver>,
    pub schedule: Option<Schedule>,
}

#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RouteSummary {
    pub bus_number: String,
    pub name: String,
}

impl From<&BusRoute> for RouteSummary {
    fn from(route: &BusRoute) -> Self {
        Self {
            bus_number: route.bus_number.clone(),
            name: route.display_name(),
        }
    }
}
