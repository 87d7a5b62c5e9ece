//! Test fixtures: a small seeded fleet for integration and CLI tests

use crate::database::AeromxDatabase;
use crate::error::Result;
use crate::models::{
    Aircraft, ComponentTime, CyclesDueConfig, DaysDueConfig, DaysIntervalType, HoursDueConfig,
    ItemType, MaintenanceTask, TrackType,
};
use chrono::NaiveDate;
use std::path::Path;
use uuid::Uuid;

/// Deterministic fixture uuids so tests can address seeded records
#[must_use]
pub fn fixture_aircraft_uuid() -> Uuid {
    Uuid::parse_str("6f2c1a70-0b4e-4a44-9b3e-6d5a1c9f0001").unwrap_or_else(|_| Uuid::nil())
}

#[must_use]
pub fn fixture_task_uuid() -> Uuid {
    Uuid::parse_str("6f2c1a70-0b4e-4a44-9b3e-6d5a1c9f0002").unwrap_or_else(|_| Uuid::nil())
}

/// Create a database file at `path` seeded with one aircraft, component
/// times, and a pair of maintenance tasks
///
/// # Errors
/// Returns an error if the database cannot be created or seeded
pub fn create_test_database<P: AsRef<Path>>(path: P) -> Result<AeromxDatabase> {
    let db = AeromxDatabase::new(path)?;
    seed(&db)?;
    Ok(db)
}

/// Seed a database with the standard fixture fleet
///
/// # Errors
/// Returns an error if any insert fails
pub fn seed(db: &AeromxDatabase) -> Result<()> {
    let aircraft = Aircraft {
        uuid: fixture_aircraft_uuid(),
        tail_number: "N123AB".to_string(),
        model: "C172S".to_string(),
        active: true,
    };
    db.save_aircraft(&aircraft)?;

    for (component, hours, cycles) in [
        ("Airframe", 1250.0, 900),
        ("Engine 1", 1250.0, 900),
        ("Propeller 1", 1250.0, 900),
    ] {
        db.set_component_time(
            aircraft.uuid,
            component,
            ComponentTime {
                time_hours: hours,
                cycles,
            },
        )?;
    }

    let hundred_hour = MaintenanceTask {
        uuid: fixture_task_uuid(),
        aircraft_uuid: aircraft.uuid,
        title: "100hr Inspection".to_string(),
        reference_number: Some("WO-1042".to_string()),
        part_number: None,
        serial_number: None,
        item_type: ItemType::Inspection,
        associated_component: Some("Engine 1".to_string()),
        details: None,
        active: true,
        track_type: TrackType::Interval,
        last_completed_date: NaiveDate::from_ymd_opt(2024, 1, 15),
        last_completed_hours: Some(1200.0),
        last_completed_cycles: Some(840),
        completion_notes: None,
        hours_due: HoursDueConfig {
            enabled: true,
            due: Some(100.0),
            tolerance: 5.0,
            alert_prior: None,
        },
        cycles_due: CyclesDueConfig::default(),
        days_due: DaysDueConfig::default(),
    };
    db.save_task(&hundred_hour)?;

    let annual = MaintenanceTask {
        uuid: Uuid::new_v4(),
        aircraft_uuid: aircraft.uuid,
        title: "Annual Inspection".to_string(),
        reference_number: None,
        part_number: None,
        serial_number: None,
        item_type: ItemType::Inspection,
        associated_component: None,
        details: None,
        active: true,
        track_type: TrackType::Interval,
        last_completed_date: NaiveDate::from_ymd_opt(2024, 3, 20),
        last_completed_hours: None,
        last_completed_cycles: None,
        completion_notes: None,
        hours_due: HoursDueConfig::default(),
        cycles_due: CyclesDueConfig::default(),
        days_due: DaysDueConfig {
            enabled: true,
            interval_type: Some(DaysIntervalType::MonthsEom),
            value: Some("12".to_string()),
            tolerance: 0,
            alert_prior: None,
        },
    };
    db.save_task(&annual)?;

    Ok(())
}
