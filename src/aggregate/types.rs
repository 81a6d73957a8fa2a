use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One staff member from the registry, normalized for reporting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub service_provider: bool,
}

/// One contiguous working interval for one staff member on one date.
/// Times are already in display form; the location id is kept as the raw
/// JSON scalar since upstream sends both strings and integers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftRecord {
    pub start: String,
    pub end: String,
    pub location_id: Value,
}

/// One appointment part attributed to one staff member.
///
/// A multi-part appointment yields one record per responsible staff member,
/// each carrying the shared appointment id, total price and status, so that
/// every staff member's view is self-contained. Start/end keep the raw ISO
/// timestamps; rendering formats them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentRecord {
    pub id: String,
    pub start_time: String,
    pub end_time: String,
    pub duration_mins: i64,
    pub client_name: String,
    pub client_phone: String,
    pub client_email: String,
    pub service_id: String,
    pub service_name: String,
    pub price: String,
    pub total_price: String,
    pub status: String,
    pub notes: String,
    pub client_notes: String,
}

/// Everything scheduled for one staff member on one date.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DaySchedule {
    pub shifts: Vec<ShiftRecord>,
    pub appointments: Vec<AppointmentRecord>,
}

/// Final denormalized structure: date -> staff id -> day schedule.
/// BTreeMaps keep iteration and serialization order deterministic.
pub type CompositeSchedule = BTreeMap<String, BTreeMap<String, DaySchedule>>;

/// Normalized staff registry restricted to service providers.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StaffDirectory {
    pub by_id: HashMap<String, StaffProfile>,
}

impl StaffDirectory {
    /// Profiles ordered ascending by the numeric value of the id string
    /// ("5" before "11"). Ids are validated numeric when the directory is
    /// built, so the parse here cannot fail for stored entries.
    pub fn ordered(&self) -> Vec<&StaffProfile> {
        let mut profiles: Vec<&StaffProfile> = self.by_id.values().collect();
        profiles.sort_by_key(|p| p.id.parse::<u64>().unwrap_or(u64::MAX));
        profiles
    }
}
