use serde_json::Value;

use crate::aggregate::{CompositeSchedule, DaySchedule, StaffDirectory, StaffProfile};
use crate::timefmt::{format_date, format_time};

const WIDE_RULE: &str = "============================================================";
const RULE: &str = "------------------------------------------------------------";

/// Renders a location id scalar (string or int) for display.
fn location_label(location_id: &Value) -> String {
    match location_id {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => "Unknown".to_string(),
    }
}

/// Prints the staff directory table: every registry entry, providers and
/// not, ordered by numeric id.
pub fn print_staff_directory(profiles: &[StaffProfile]) {
    println!("{}", WIDE_RULE);
    println!("STAFF DIRECTORY");
    println!("{}", WIDE_RULE);

    if profiles.is_empty() {
        println!("No staff data found");
        return;
    }

    for profile in profiles {
        let status = if profile.service_provider {
            "Service Provider"
        } else {
            "Non-Service Provider"
        };
        println!(
            "ID: {:2} | Name: {:25} | Email: {:30} | {}",
            profile.id, profile.name, profile.email, status
        );
    }
}

fn print_day_schedule(schedule: &DaySchedule) {
    println!("  SHIFTS:");
    if schedule.shifts.is_empty() {
        println!("    No shifts scheduled");
    } else {
        for (i, shift) in schedule.shifts.iter().enumerate() {
            println!(
                "    Shift {}: {} - {} (Location {})",
                i + 1,
                shift.start,
                shift.end,
                location_label(&shift.location_id)
            );
        }
    }

    println!("  APPOINTMENTS:");
    if schedule.appointments.is_empty() {
        println!("    No appointments scheduled");
    } else {
        for (i, appt) in schedule.appointments.iter().enumerate() {
            println!(
                "    Appt {}: {}-{} | {} | {}min | ${} | {}",
                i + 1,
                format_time(&appt.start_time),
                format_time(&appt.end_time),
                appt.client_name,
                appt.duration_mins,
                appt.total_price,
                appt.status
            );
            println!("           Service: {}", appt.service_name);
            if !appt.client_notes.is_empty() {
                // Truncate long notes for readability
                let notes: String = if appt.client_notes.chars().count() > 80 {
                    format!(
                        "{}...",
                        appt.client_notes.chars().take(80).collect::<String>()
                    )
                } else {
                    appt.client_notes.clone()
                };
                println!("           Notes: {}", notes);
            }
            if !appt.client_phone.is_empty() {
                println!("           Phone: {}", appt.client_phone);
            }
        }
    }
}

/// Prints shifts and appointments per date, per service provider, walking
/// the composite structure read-only.
pub fn print_schedule_report(directory: &StaffDirectory, composite: &CompositeSchedule) {
    println!();
    println!("{}", WIDE_RULE);
    println!("STAFF SCHEDULES & APPOINTMENTS");
    println!("{}", WIDE_RULE);

    if directory.by_id.is_empty() || composite.is_empty() {
        println!("No staff or shift data found");
        return;
    }

    for (date, day) in composite {
        println!("Date: {} ({})", date, format_date(date));
        println!("{}", RULE);

        for profile in directory.ordered() {
            println!("\nStaff ID {}: {}", profile.id, profile.name);
            println!("----------------------------------------");
            match day.get(&profile.id) {
                Some(schedule) => print_day_schedule(schedule),
                None => println!("  No data for this date"),
            }
            println!();
        }
    }
}
