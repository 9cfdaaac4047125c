use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::domain::TimeSlot;

static SERVICES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("general", "General Medicine"),
        ("general-checkup", "General Check-up"),
        ("physiotherapy", "Physiotherapy & Rehabilitation"),
        ("orthopedics", "Orthopedics"),
        ("pediatrics", "Pediatrics"),
        ("cardiology", "Cardiology"),
        ("dermatology", "Dermatology"),
        ("gynecology", "Obstetrics & Gynecology"),
        ("dental", "Dental Care"),
        ("ent", "Ear, Nose & Throat (ENT)"),
        ("lab-tests", "Laboratory & Diagnostics"),
        ("vaccination", "Vaccination & Immunization"),
    ])
});

pub fn time_slot_label(slot: TimeSlot) -> &'static str {
    match slot {
        TimeSlot::Morning => "Morning (9:00 AM - 12:00 PM)",
        TimeSlot::Afternoon => "Afternoon (12:00 PM - 3:00 PM)",
        TimeSlot::Evening => "Evening (3:00 PM - 6:00 PM)",
    }
}

/// Department name for a service code, or the code itself when unknown.
pub fn service_label(code: &str) -> &str {
    SERVICES.get(code).copied().unwrap_or(code)
}
