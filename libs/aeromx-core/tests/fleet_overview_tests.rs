//! Fleet overview end-to-end: database snapshot through most-urgent selection

use aeromx_core::fleet::{evaluate_tasks, most_urgent};
use aeromx_core::models::{
    CyclesDueConfig, DaysDueConfig, DaysIntervalType, HoursDueConfig, ItemType, MaintenanceTask,
    TaskFilters, TrackType,
};
use aeromx_core::status::Classification;
use aeromx_core::test_utils::{create_test_database, fixture_aircraft_uuid};
use chrono::NaiveDate;
use tempfile::NamedTempFile;
use uuid::Uuid;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn test_most_urgent_from_seeded_database() {
    let temp_file = NamedTempFile::new().unwrap();
    let db = create_test_database(temp_file.path()).unwrap();
    let aircraft_uuid = fixture_aircraft_uuid();

    let tasks = db
        .get_tasks(&TaskFilters {
            aircraft_uuid: Some(aircraft_uuid),
            ..Default::default()
        })
        .unwrap();
    let times = db.get_component_times(aircraft_uuid).unwrap();

    // Fixture: 100hr due at 1300 engine hours with engine at 1250 (50 to go);
    // annual due 2025-03-31. Early in 2024 the hours item is tighter.
    let top = most_urgent(&tasks, &times, "Airframe", d(2024, 6, 1)).unwrap();
    assert_eq!(top.task.title, "100hr Inspection");
    assert!((top.status.remaining - 50.0).abs() < f64::EPSILON);
    assert_eq!(top.status.classification, Classification::Ok);
}

#[test]
fn test_overdue_item_wins_over_tighter_upcoming() {
    let aircraft_uuid = Uuid::new_v4();
    let overdue = MaintenanceTask {
        uuid: Uuid::new_v4(),
        aircraft_uuid,
        title: "ELT Battery".to_string(),
        reference_number: None,
        part_number: None,
        serial_number: None,
        item_type: ItemType::ComponentReplacement,
        associated_component: None,
        details: None,
        active: true,
        track_type: TrackType::Interval,
        last_completed_date: Some(d(2023, 1, 1)),
        last_completed_hours: None,
        last_completed_cycles: None,
        completion_notes: None,
        hours_due: HoursDueConfig::default(),
        cycles_due: CyclesDueConfig::default(),
        days_due: DaysDueConfig {
            enabled: true,
            interval_type: Some(DaysIntervalType::YearsSpecificDay),
            value: Some("1".to_string()),
            tolerance: 0,
            alert_prior: None,
        },
    };
    let mut upcoming = overdue.clone();
    upcoming.uuid = Uuid::new_v4();
    upcoming.title = "Transponder Check".to_string();
    upcoming.last_completed_date = Some(d(2024, 5, 1));
    upcoming.days_due.interval_type = Some(DaysIntervalType::Days);
    upcoming.days_due.value = Some("30".to_string());

    // Overdue since 2024-01-01; upcoming due 2024-05-31 (2 days out).
    let tasks = vec![upcoming, overdue];
    let top = most_urgent(&tasks, &std::collections::HashMap::new(), "Airframe", d(2024, 5, 29))
        .unwrap();
    assert_eq!(top.task.title, "ELT Battery");
    assert!(top.status.overdue);
}

#[test]
fn test_invalid_input_excluded_from_top_pick() {
    let aircraft_uuid = Uuid::new_v4();
    let invalid = MaintenanceTask {
        uuid: Uuid::new_v4(),
        aircraft_uuid,
        title: "Bad Data".to_string(),
        reference_number: None,
        part_number: None,
        serial_number: None,
        item_type: ItemType::Other,
        associated_component: None,
        details: None,
        active: true,
        track_type: TrackType::OneTime,
        last_completed_date: None,
        last_completed_hours: None,
        last_completed_cycles: None,
        completion_notes: None,
        hours_due: HoursDueConfig::default(),
        cycles_due: CyclesDueConfig::default(),
        days_due: DaysDueConfig {
            enabled: true,
            interval_type: None,
            value: Some("whenever".to_string()),
            tolerance: 0,
            alert_prior: None,
        },
    };
    let mut healthy = invalid.clone();
    healthy.uuid = Uuid::new_v4();
    healthy.title = "Pitot Check".to_string();
    healthy.days_due.value = Some("2024-09-01".to_string());

    let tasks = vec![invalid, healthy];
    let top = most_urgent(&tasks, &std::collections::HashMap::new(), "Airframe", d(2024, 6, 1))
        .unwrap();
    assert_eq!(top.task.title, "Pitot Check");

    let evaluated = evaluate_tasks(&tasks, &std::collections::HashMap::new(), "Airframe", d(2024, 6, 1));
    assert!(evaluated
        .iter()
        .any(|e| e.status.classification == Classification::InvalidInput));
}
