use std::collections::BTreeMap;

use serde_json::Value;

use super::appointments::appointments_by_staff;
use super::types::{CompositeSchedule, DaySchedule, ShiftRecord, StaffDirectory};
use crate::extract::{get_path, get_string_or};
use crate::timefmt::format_time;

/// One loaded day document: its date plus the raw shifts and appointments.
#[derive(Debug, Clone)]
pub struct DaySnapshot {
    pub date: String,
    document: Value,
}

impl DaySnapshot {
    pub fn new(document: Value) -> Self {
        let date = get_string_or(&document, "date", "Unknown date");
        DaySnapshot { date, document }
    }

    fn shifts_by_staff(&self) -> Option<&Value> {
        self.document.get("shiftsByStaffIdAndDay")
    }

    fn appointments(&self) -> &Value {
        static NULL: Value = Value::Null;
        get_path(&self.document, &["appointments", "byId"]).unwrap_or(&NULL)
    }
}

/// Pulls one staff member's shifts for the snapshot's date, times formatted
/// for display. The inner date key is expected to equal the snapshot's own
/// date; a mismatch is simply not found and yields no shifts.
fn staff_shifts(shifts_by_staff: Option<&Value>, staff_id: &str, date: &str) -> Vec<ShiftRecord> {
    let day_shifts = shifts_by_staff
        .and_then(|s| s.get(staff_id))
        .and_then(|s| s.get(date))
        .and_then(Value::as_array);

    let day_shifts = match day_shifts {
        Some(shifts) => shifts,
        None => return Vec::new(),
    };

    day_shifts
        .iter()
        .map(|shift| ShiftRecord {
            start: format_time(&get_string_or(shift, "startAtLocal", "")),
            end: format_time(&get_string_or(shift, "endAtLocal", "")),
            location_id: shift
                .get("locationId")
                .cloned()
                .unwrap_or_else(|| Value::String("Unknown".to_string())),
        })
        .collect()
}

/// Merges one or more day snapshots into the composite date -> staff ->
/// schedule structure. Every service provider in the directory gets an
/// entry per date, empty or not. Snapshots are processed in the order
/// given; two snapshots carrying the same date overwrite, last one wins.
pub fn aggregate_snapshots(
    directory: &StaffDirectory,
    snapshots: &[DaySnapshot],
    catalog: Option<&Value>,
) -> CompositeSchedule {
    let mut composite = CompositeSchedule::new();

    for snapshot in snapshots {
        let mut by_staff = appointments_by_staff(snapshot.appointments(), catalog);
        let shifts_data = snapshot.shifts_by_staff();

        let mut day: BTreeMap<String, DaySchedule> = BTreeMap::new();
        for profile in directory.ordered() {
            day.insert(
                profile.id.clone(),
                DaySchedule {
                    shifts: staff_shifts(shifts_data, &profile.id, &snapshot.date),
                    appointments: by_staff.remove(&profile.id).unwrap_or_default(),
                },
            );
        }

        composite.insert(snapshot.date.clone(), day);
    }

    composite
}
