use serde_json::json;

use schedule_report::aggregate::{aggregate_snapshots, build_staff_directory, DaySnapshot};

// End-to-end run over the three input documents: one provider and one
// non-provider in the registry, one shift and one single-part appointment in
// the day snapshot, empty service catalog.
#[test]
fn single_day_single_provider_scenario() {
    let registry = json!({
        "auth": {"sharedData": {"selectors": {"staff": {"byId": {
            "11": {"firstName": "Sasha", "lastName": null, "serviceProvider": true},
            "5": {"firstName": "Front", "lastName": "Desk",
                  "email": "desk@example.com", "serviceProvider": false},
        }}}}}
    });

    let snapshot = DaySnapshot::new(json!({
        "date": "2025-07-26",
        "shiftsByStaffIdAndDay": {
            "11": {"2025-07-26": [{
                "startAtLocal": "2025-07-26T09:00:00",
                "endAtLocal": "2025-07-26T17:00:00",
                "locationId": 2
            }]}
        },
        "appointments": {"byId": {
            "42": {
                "client": {"firstName": "Jo"},
                "appointmentParts": [{
                    "staffId": 11,
                    "startAtLocal": "2025-07-26T09:15:00",
                    "endAtLocal": "2025-07-26T09:45:00",
                    "durationInMins": 30,
                    "serviceId": "3"
                }]
            }
        }}
    }));

    let catalog = json!({});
    let directory = build_staff_directory(&registry);

    // Only the provider makes it into the directory
    assert_eq!(directory.by_id.len(), 1);
    assert_eq!(directory.by_id["11"].name, "Sasha");

    let composite = aggregate_snapshots(&directory, &[snapshot], Some(&catalog));
    let day = &composite["2025-07-26"];
    assert_eq!(day.len(), 1);

    let schedule = &day["11"];
    assert_eq!(schedule.shifts.len(), 1);
    assert_eq!(schedule.shifts[0].start, "09:00");
    assert_eq!(schedule.shifts[0].end, "17:00");
    assert_eq!(schedule.shifts[0].location_id, json!(2));

    assert_eq!(schedule.appointments.len(), 1);
    let appt = &schedule.appointments[0];
    assert_eq!(appt.id, "42");
    assert_eq!(appt.client_name, "Jo");
    assert_eq!(appt.service_name, "Unknown Service");
    assert_eq!(appt.duration_mins, 30);
    assert_eq!(appt.start_time, "2025-07-26T09:15:00");
}

#[test]
fn two_snapshots_same_date_last_one_wins() {
    let registry = json!({
        "auth": {"sharedData": {"selectors": {"staff": {"byId": {
            "11": {"firstName": "Sasha", "serviceProvider": true},
        }}}}}
    });

    let day = |appointment_id: &str| {
        DaySnapshot::new(json!({
            "date": "2025-07-26",
            "shiftsByStaffIdAndDay": {},
            "appointments": {"byId": {
                appointment_id: {
                    "client": {"firstName": "Jo"},
                    "appointmentParts": [{"staffId": "11",
                                          "startAtLocal": "2025-07-26T10:00:00"}]
                }
            }}
        }))
    };

    let directory = build_staff_directory(&registry);
    let composite = aggregate_snapshots(&directory, &[day("first"), day("second")], None);

    assert_eq!(composite.len(), 1);
    let appointments = &composite["2025-07-26"]["11"].appointments;
    assert_eq!(appointments.len(), 1);
    assert_eq!(appointments[0].id, "second");
}

#[test]
fn composite_serializes_to_plain_nested_maps() {
    let registry = json!({
        "auth": {"sharedData": {"selectors": {"staff": {"byId": {
            "11": {"firstName": "Sasha", "serviceProvider": true},
        }}}}}
    });
    let snapshot = DaySnapshot::new(json!({
        "date": "2025-07-26",
        "shiftsByStaffIdAndDay": {},
        "appointments": {"byId": {}}
    }));

    let directory = build_staff_directory(&registry);
    let composite = aggregate_snapshots(&directory, &[snapshot], None);

    let serialized = serde_json::to_value(&composite).unwrap();
    let day = &serialized["2025-07-26"]["11"];
    assert_eq!(day["shifts"], json!([]));
    assert_eq!(day["appointments"], json!([]));
}
