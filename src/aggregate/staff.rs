use serde_json::Value;

use super::types::{StaffDirectory, StaffProfile};
use crate::error::ScheduleError;
use crate::extract::{get_bool_or, get_path, get_string_or};

// Logical path of the staff-by-id map inside the registry export.
const STAFF_BY_ID_PATH: [&str; 5] = ["auth", "sharedData", "selectors", "staff", "byId"];

/// Composes a display name from optional first/last name fields.
/// A null last name collapses to empty before concatenation.
pub fn compose_name(first: &str, last: &str) -> String {
    format!("{} {}", first, last).trim().to_string()
}

/// Normalizes one raw registry entry into a profile.
/// Ids must be numeric strings (the directory is enumerated in numeric
/// order); anything else is a validation error for this entry alone.
pub fn parse_staff_entry(staff_id: &str, raw: &Value) -> Result<StaffProfile, ScheduleError> {
    if staff_id.parse::<u64>().is_err() {
        return Err(ScheduleError::Validation(format!(
            "staff id '{}' is not numeric",
            staff_id
        )));
    }

    let first = get_string_or(raw, "firstName", "Unknown");
    let last = get_string_or(raw, "lastName", "");

    Ok(StaffProfile {
        id: staff_id.to_string(),
        name: compose_name(&first, &last),
        email: get_string_or(raw, "email", "No email"),
        service_provider: get_bool_or(raw, "serviceProvider", false),
    })
}

/// Parses every entry of the registry's staff map, in numeric id order
/// where possible. Entries that fail validation are skipped with a warning.
fn parse_registry(registry: &Value) -> Vec<StaffProfile> {
    let staff_map = match get_path(registry, &STAFF_BY_ID_PATH).and_then(Value::as_object) {
        Some(map) => map,
        None => return Vec::new(),
    };

    let mut profiles = Vec::new();
    for (staff_id, raw) in staff_map {
        match parse_staff_entry(staff_id, raw) {
            Ok(profile) => profiles.push(profile),
            Err(e) => log::warn!("skipping staff entry: {}", e),
        }
    }
    profiles.sort_by_key(|p| p.id.parse::<u64>().unwrap_or(u64::MAX));
    profiles
}

/// Builds the service-provider directory from the raw staff registry.
/// Only entries whose provider flag is true are kept.
pub fn build_staff_directory(registry: &Value) -> StaffDirectory {
    let mut directory = StaffDirectory::default();
    for profile in parse_registry(registry) {
        if profile.service_provider {
            directory.by_id.insert(profile.id.clone(), profile);
        }
    }
    directory
}

/// All registry entries, providers and not, for the directory report.
pub fn all_staff_profiles(registry: &Value) -> Vec<StaffProfile> {
    parse_registry(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn registry(staff: Value) -> Value {
        json!({"auth": {"sharedData": {"selectors": {"staff": {"byId": staff}}}}})
    }

    #[test]
    fn keeps_only_service_providers() {
        let doc = registry(json!({
            "5": {"firstName": "Admin", "lastName": "Person", "serviceProvider": false},
            "11": {"firstName": "Sasha", "lastName": null, "serviceProvider": true},
        }));
        let directory = build_staff_directory(&doc);
        assert_eq!(directory.by_id.len(), 1);
        let sasha = &directory.by_id["11"];
        assert_eq!(sasha.name, "Sasha");
        assert!(sasha.service_provider);
    }

    #[test]
    fn name_defaults_and_null_last_name() {
        let doc = registry(json!({
            "3": {"lastName": "Jones", "serviceProvider": true},
            "4": {"firstName": "Ana", "lastName": null, "serviceProvider": true},
        }));
        let directory = build_staff_directory(&doc);
        assert_eq!(directory.by_id["3"].name, "Unknown Jones");
        assert_eq!(directory.by_id["4"].name, "Ana");
    }

    #[test]
    fn email_defaults_to_sentinel() {
        let doc = registry(json!({"7": {"firstName": "Lee", "serviceProvider": true}}));
        assert_eq!(build_staff_directory(&doc).by_id["7"].email, "No email");
    }

    #[test]
    fn non_numeric_id_fails_validation_without_stopping_others() {
        let doc = registry(json!({
            "abc": {"firstName": "Bad", "serviceProvider": true},
            "2": {"firstName": "Good", "serviceProvider": true},
        }));
        assert!(parse_staff_entry("abc", &json!({})).is_err());
        let directory = build_staff_directory(&doc);
        assert_eq!(directory.by_id.len(), 1);
        assert!(directory.by_id.contains_key("2"));
    }

    #[test]
    fn ordered_sorts_by_numeric_id_value() {
        let doc = registry(json!({
            "11": {"firstName": "B", "serviceProvider": true},
            "5": {"firstName": "A", "serviceProvider": true},
        }));
        let directory = build_staff_directory(&doc);
        let ids: Vec<&str> = directory.ordered().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["5", "11"]);
    }

    #[test]
    fn missing_registry_path_yields_empty_directory() {
        assert!(build_staff_directory(&json!({"auth": {}})).by_id.is_empty());
        assert!(build_staff_directory(&json!(null)).by_id.is_empty());
    }
}
