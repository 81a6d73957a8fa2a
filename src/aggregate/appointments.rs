use std::collections::HashMap;

use serde_json::Value;

use super::staff::compose_name;
use super::types::AppointmentRecord;
use crate::extract::{get_i64_or, get_string_or, scalar_to_string};

pub const UNKNOWN_SERVICE: &str = "Unknown Service";
pub const UNKNOWN_CLIENT: &str = "Unknown Client";

/// Resolves a service id against the catalog's name field.
fn service_name(catalog: Option<&Value>, service_id: &str) -> String {
    catalog
        .and_then(|c| c.get(service_id))
        .map(|svc| get_string_or(svc, "name", UNKNOWN_SERVICE))
        .unwrap_or_else(|| UNKNOWN_SERVICE.to_string())
}

/// Explodes a day's raw appointments into per-staff records.
///
/// Every appointment part attributed to a staff id produces one record
/// joining in the appointment's client and (via the optional catalog) its
/// service. Parts without a staff id cannot be attributed to anyone and are
/// dropped. Each staff member's list comes back stable-sorted ascending by
/// raw start timestamp.
pub fn appointments_by_staff(
    appointments: &Value,
    catalog: Option<&Value>,
) -> HashMap<String, Vec<AppointmentRecord>> {
    let mut by_staff: HashMap<String, Vec<AppointmentRecord>> = HashMap::new();

    let appointments = match appointments.as_object() {
        Some(map) => map,
        None => return by_staff,
    };

    for (appointment_id, appointment) in appointments {
        let empty = Value::Null;
        let client = appointment.get("client").unwrap_or(&empty);
        let client_first = get_string_or(client, "firstName", "");
        let client_last = get_string_or(client, "lastName", "");
        let composed = compose_name(&client_first, &client_last);
        let client_name = if composed.is_empty() {
            UNKNOWN_CLIENT.to_string()
        } else {
            composed
        };

        let parts = match appointment.get("appointmentParts").and_then(Value::as_array) {
            Some(parts) => parts,
            None => continue,
        };

        for part in parts {
            let staff_id = scalar_to_string(part.get("staffId"), "");
            if staff_id.is_empty() {
                // Unattributable part, skip rather than fail the appointment
                continue;
            }

            let service_id = scalar_to_string(part.get("serviceId"), "");
            by_staff
                .entry(staff_id)
                .or_default()
                .push(AppointmentRecord {
                    id: appointment_id.clone(),
                    start_time: get_string_or(part, "startAtLocal", ""),
                    end_time: get_string_or(part, "endAtLocal", ""),
                    duration_mins: get_i64_or(part, "durationInMins", 0),
                    client_name: client_name.clone(),
                    client_phone: get_string_or(client, "phone", ""),
                    client_email: get_string_or(client, "email", ""),
                    service_name: service_name(catalog, &service_id),
                    service_id,
                    price: scalar_to_string(part.get("price"), "0"),
                    total_price: scalar_to_string(appointment.get("totalPrice"), "0"),
                    status: get_string_or(appointment, "workflowStatus", "Unknown"),
                    notes: get_string_or(appointment, "notes", ""),
                    client_notes: get_string_or(client, "notes", ""),
                });
        }
    }

    for records in by_staff.values_mut() {
        records.sort_by(|a, b| a.start_time.cmp(&b.start_time));
    }

    by_staff
}
