//! Remaining/status evaluation: how much runway is left to a due point, and
//! how urgent it is
//!
//! Precedence is fixed: a due date governs whenever present, then hours, then
//! cycles. Data-quality problems never error out of evaluation; they surface
//! as their own classifications.

use crate::due::DueProjection;
use crate::models::{ComponentTime, MaintenanceTask, TrackType};
use aeromx_common::constants::{
    DEFAULT_ALERT_CYCLES_PRIOR, DEFAULT_ALERT_DAYS_PRIOR, DEFAULT_ALERT_HOURS_PRIOR,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Unit of the remaining amount in a [`RemainingStatus`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DueUnit {
    #[serde(rename = "days")]
    Days,
    #[serde(rename = "hrs")]
    Hours,
    #[serde(rename = "cycles")]
    Cycles,
    #[serde(rename = "n/a")]
    None,
}

impl fmt::Display for DueUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Days => write!(f, "days"),
            Self::Hours => write!(f, "hrs"),
            Self::Cycles => write!(f, "cycles"),
            Self::None => write!(f, "N/A"),
        }
    }
}

/// Urgency classification of a maintenance task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    /// Comfortably ahead of the due point
    #[serde(rename = "ok")]
    Ok,
    /// Inside the alert-prior window before the due point
    #[serde(rename = "due_soon")]
    DueSoon,
    /// Past the due point but within the configured tolerance
    #[serde(rename = "grace_period")]
    GracePeriod,
    /// Past the due point and beyond tolerance
    #[serde(rename = "overdue")]
    Overdue,
    /// The associated component has no recorded times
    #[serde(rename = "missing_component_time")]
    MissingComponentTime,
    /// The task's due configuration cannot be interpreted
    #[serde(rename = "invalid_input")]
    InvalidInput,
    /// Interval calendar task with no completion baseline to project from
    #[serde(rename = "never_completed")]
    NeverCompleted,
    /// Nothing to evaluate (no due type enabled)
    #[serde(rename = "n/a")]
    NotApplicable,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => write!(f, "OK"),
            Self::DueSoon => write!(f, "Due Soon"),
            Self::GracePeriod => write!(f, "Grace Period"),
            Self::Overdue => write!(f, "Overdue"),
            Self::MissingComponentTime => write!(f, "Missing Component Time"),
            Self::InvalidInput => write!(f, "Invalid Input"),
            Self::NeverCompleted => write!(f, "Never Completed"),
            Self::NotApplicable => write!(f, "N/A"),
        }
    }
}

/// Display-ready evaluation result for one maintenance task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemainingStatus {
    /// Human-readable remaining text, e.g. "50.0 hrs" or "-3 days"
    pub text: String,
    /// Signed remaining amount; `f64::INFINITY` when no finite amount applies
    pub remaining: f64,
    /// Unit of `remaining`
    pub unit: DueUnit,
    /// Whether the due point has been passed
    pub overdue: bool,
    /// Urgency classification
    pub classification: Classification,
}

impl RemainingStatus {
    fn sentinel(text: &str, unit: DueUnit, classification: Classification) -> Self {
        Self {
            text: text.to_string(),
            remaining: f64::INFINITY,
            unit,
            overdue: false,
            classification,
        }
    }
}

/// Evaluate remaining runway and urgency for one task.
///
/// `component_times` is a consistent snapshot of the owning aircraft's
/// component usage, keyed by component name. `default_component` is used when
/// the task names no component of its own. `today` is passed explicitly so
/// identical inputs always produce identical output.
#[must_use]
pub fn evaluate_status(
    task: &MaintenanceTask,
    projection: &DueProjection,
    component_times: &HashMap<String, ComponentTime>,
    default_component: &str,
    today: NaiveDate,
) -> RemainingStatus {
    // A one-time task's stored due date is its whole contract; garbage there
    // is surfaced immediately. An interval task with a malformed days value
    // simply projects no date and still gets its hours/cycles thresholds.
    if projection.invalid_due_date && task.track_type == TrackType::OneTime {
        return RemainingStatus::sentinel("Invalid Date", DueUnit::None, Classification::InvalidInput);
    }

    // A due date governs whenever present; hours and cycles are ignored.
    if let Some(due_date) = projection.due_date {
        let remaining = crate::dates::days_between(today, due_date);
        let tolerance = f64::from(task.days_due.tolerance);
        let alert_prior = task
            .days_due
            .alert_prior
            .map_or(f64::from(DEFAULT_ALERT_DAYS_PRIOR), f64::from);
        #[allow(clippy::cast_precision_loss)]
        let remaining = remaining as f64;
        return classify_finite(
            format!("{remaining:.0} days"),
            remaining,
            DueUnit::Days,
            tolerance,
            alert_prior,
        );
    }

    let component = task.component_name(default_component);
    let times = component_times.get(component);

    if let Some(due_at_hours) = projection.due_at_hours {
        let Some(times) = times else {
            return RemainingStatus::sentinel(
                "Missing Component Time",
                DueUnit::Hours,
                Classification::MissingComponentTime,
            );
        };
        let remaining = round_tenth(due_at_hours - times.time_hours);
        let alert_prior = task.hours_due.alert_prior.unwrap_or(DEFAULT_ALERT_HOURS_PRIOR);
        return classify_finite(
            format!("{remaining:.1} hrs"),
            remaining,
            DueUnit::Hours,
            task.hours_due.tolerance,
            alert_prior,
        );
    }

    if let Some(due_at_cycles) = projection.due_at_cycles {
        let Some(times) = times else {
            return RemainingStatus::sentinel(
                "Missing Component Time",
                DueUnit::Cycles,
                Classification::MissingComponentTime,
            );
        };
        let remaining = f64::from(due_at_cycles) - f64::from(times.cycles);
        let alert_prior = task
            .cycles_due
            .alert_prior
            .map_or(f64::from(DEFAULT_ALERT_CYCLES_PRIOR), f64::from);
        return classify_finite(
            format!("{remaining:.0} cycles"),
            remaining,
            DueUnit::Cycles,
            f64::from(task.cycles_due.tolerance),
            alert_prior,
        );
    }

    if projection.invalid_due_date {
        return RemainingStatus::sentinel("Invalid Date", DueUnit::None, Classification::InvalidInput);
    }

    if projection.baseline_missing {
        return RemainingStatus::sentinel(
            "Never Completed",
            DueUnit::None,
            Classification::NeverCompleted,
        );
    }

    RemainingStatus::sentinel("Check Due Info", DueUnit::None, Classification::NotApplicable)
}

fn classify_finite(
    text: String,
    remaining: f64,
    unit: DueUnit,
    tolerance: f64,
    alert_prior: f64,
) -> RemainingStatus {
    let overdue = remaining < 0.0;
    let classification = if overdue {
        // Boundary inclusive: exactly -tolerance is still grace
        if remaining.abs() <= tolerance {
            Classification::GracePeriod
        } else {
            Classification::Overdue
        }
    } else if remaining < alert_prior {
        Classification::DueSoon
    } else {
        Classification::Ok
    };

    RemainingStatus {
        text,
        remaining,
        unit,
        overdue,
        classification,
    }
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::due::project_due;
    use crate::models::{
        CyclesDueConfig, DaysDueConfig, DaysIntervalType, HoursDueConfig, ItemType, TrackType,
    };
    use uuid::Uuid;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn engine_task(hours_due: HoursDueConfig) -> MaintenanceTask {
        MaintenanceTask {
            uuid: Uuid::new_v4(),
            aircraft_uuid: Uuid::new_v4(),
            title: "Oil Change".to_string(),
            reference_number: None,
            part_number: None,
            serial_number: None,
            item_type: ItemType::Inspection,
            associated_component: Some("Engine 1".to_string()),
            details: None,
            active: true,
            track_type: TrackType::Interval,
            last_completed_date: Some(d(2024, 1, 15)),
            last_completed_hours: Some(1200.0),
            last_completed_cycles: Some(840),
            completion_notes: None,
            hours_due,
            cycles_due: CyclesDueConfig::default(),
            days_due: DaysDueConfig::default(),
        }
    }

    fn times(component: &str, hours: f64, cycles: u32) -> HashMap<String, ComponentTime> {
        let mut map = HashMap::new();
        map.insert(
            component.to_string(),
            ComponentTime {
                time_hours: hours,
                cycles,
            },
        );
        map
    }

    #[test]
    fn test_scenario_hours_ok() {
        // hoursDue=100 from baseline 1200 → due at 1300; current 1250 → 50.0 OK
        let task = engine_task(HoursDueConfig {
            enabled: true,
            due: Some(100.0),
            ..Default::default()
        });
        let projection = project_due(&task);
        assert_eq!(projection.due_at_hours, Some(1300.0));

        let status = evaluate_status(
            &task,
            &projection,
            &times("Engine 1", 1250.0, 900),
            "Airframe",
            d(2024, 6, 1),
        );

        assert_eq!(status.unit, DueUnit::Hours);
        assert!((status.remaining - 50.0).abs() < f64::EPSILON);
        assert!(!status.overdue);
        assert_eq!(status.classification, Classification::Ok);
        assert_eq!(status.text, "50.0 hrs");
    }

    #[test]
    fn test_scenario_hours_due_soon() {
        let task = engine_task(HoursDueConfig {
            enabled: true,
            due: Some(100.0),
            ..Default::default()
        });
        let projection = project_due(&task);

        let status = evaluate_status(
            &task,
            &projection,
            &times("Engine 1", 1290.0, 900),
            "Airframe",
            d(2024, 6, 1),
        );

        // 10 remaining < 25 default alert-prior
        assert!((status.remaining - 10.0).abs() < f64::EPSILON);
        assert_eq!(status.classification, Classification::DueSoon);
    }

    #[test]
    fn test_scenario_hours_overdue_beyond_tolerance() {
        let task = engine_task(HoursDueConfig {
            enabled: true,
            due: Some(100.0),
            tolerance: 5.0,
            alert_prior: None,
        });
        let projection = project_due(&task);

        let status = evaluate_status(
            &task,
            &projection,
            &times("Engine 1", 1310.0, 900),
            "Airframe",
            d(2024, 6, 1),
        );

        assert!((status.remaining + 10.0).abs() < f64::EPSILON);
        assert!(status.overdue);
        assert_eq!(status.classification, Classification::Overdue);
    }

    #[test]
    fn test_scenario_hours_grace_period() {
        let task = engine_task(HoursDueConfig {
            enabled: true,
            due: Some(100.0),
            tolerance: 15.0,
            alert_prior: None,
        });
        let projection = project_due(&task);

        let status = evaluate_status(
            &task,
            &projection,
            &times("Engine 1", 1310.0, 900),
            "Airframe",
            d(2024, 6, 1),
        );

        assert!(status.overdue);
        assert_eq!(status.classification, Classification::GracePeriod);
    }

    #[test]
    fn test_grace_boundary_is_inclusive() {
        let task = engine_task(HoursDueConfig {
            enabled: true,
            due: Some(100.0),
            tolerance: 10.0,
            alert_prior: None,
        });
        let projection = project_due(&task);

        // Exactly -tolerance
        let status = evaluate_status(
            &task,
            &projection,
            &times("Engine 1", 1310.0, 900),
            "Airframe",
            d(2024, 6, 1),
        );

        assert!((status.remaining + 10.0).abs() < f64::EPSILON);
        assert_eq!(status.classification, Classification::GracePeriod);
    }

    #[test]
    fn test_missing_component_time() {
        // Component time map has no entry for the task's component
        let mut task = engine_task(HoursDueConfig {
            enabled: true,
            due: Some(100.0),
            ..Default::default()
        });
        task.associated_component = Some("APU".to_string());
        let projection = project_due(&task);

        let status = evaluate_status(
            &task,
            &projection,
            &times("Engine 1", 99_999.0, 900),
            "Airframe",
            d(2024, 6, 1),
        );

        assert_eq!(status.classification, Classification::MissingComponentTime);
        assert_eq!(status.unit, DueUnit::Hours);
        assert!(!status.overdue);
        assert!(status.remaining.is_infinite());
    }

    #[test]
    fn test_missing_component_time_for_cycles() {
        let mut task = engine_task(HoursDueConfig::default());
        task.cycles_due = CyclesDueConfig {
            enabled: true,
            due: Some(100),
            ..Default::default()
        };
        task.associated_component = Some("Propeller 1".to_string());
        let projection = project_due(&task);

        let status = evaluate_status(
            &task,
            &projection,
            &HashMap::new(),
            "Airframe",
            d(2024, 6, 1),
        );

        assert_eq!(status.classification, Classification::MissingComponentTime);
        assert_eq!(status.unit, DueUnit::Cycles);
    }

    #[test]
    fn test_date_takes_precedence_over_hours_and_cycles() {
        let mut task = engine_task(HoursDueConfig {
            enabled: true,
            due: Some(100.0),
            ..Default::default()
        });
        task.days_due = DaysDueConfig {
            enabled: true,
            interval_type: Some(DaysIntervalType::Days),
            value: Some("90".to_string()),
            ..Default::default()
        };
        task.cycles_due = CyclesDueConfig {
            enabled: true,
            due: Some(1),
            ..Default::default()
        };
        let projection = project_due(&task);

        // Component is massively over the hours threshold, but the due date
        // (2024-04-14) still governs.
        let status = evaluate_status(
            &task,
            &projection,
            &times("Engine 1", 99_999.0, 99_999),
            "Airframe",
            d(2024, 4, 4),
        );

        assert_eq!(status.unit, DueUnit::Days);
        assert!((status.remaining - 10.0).abs() < f64::EPSILON);
        assert!(!status.overdue);
    }

    #[test]
    fn test_date_overdue_and_grace() {
        let mut task = engine_task(HoursDueConfig::default());
        task.days_due = DaysDueConfig {
            enabled: true,
            interval_type: Some(DaysIntervalType::Days),
            value: Some("90".to_string()),
            tolerance: 5,
            alert_prior: None,
        };
        let projection = project_due(&task);
        assert_eq!(projection.due_date, Some(d(2024, 4, 14)));

        // 3 days past due, within 5-day tolerance
        let status = evaluate_status(&task, &projection, &HashMap::new(), "Airframe", d(2024, 4, 17));
        assert!(status.overdue);
        assert!((status.remaining + 3.0).abs() < f64::EPSILON);
        assert_eq!(status.classification, Classification::GracePeriod);
        assert_eq!(status.text, "-3 days");

        // 8 days past due, beyond tolerance
        let status = evaluate_status(&task, &projection, &HashMap::new(), "Airframe", d(2024, 4, 22));
        assert_eq!(status.classification, Classification::Overdue);
    }

    #[test]
    fn test_date_due_soon_default_window() {
        let mut task = engine_task(HoursDueConfig::default());
        task.days_due = DaysDueConfig {
            enabled: true,
            interval_type: Some(DaysIntervalType::Days),
            value: Some("90".to_string()),
            ..Default::default()
        };
        let projection = project_due(&task);

        // 20 days out < 30-day default alert window
        let status = evaluate_status(&task, &projection, &HashMap::new(), "Airframe", d(2024, 3, 25));
        assert_eq!(status.classification, Classification::DueSoon);

        // 40 days out is OK
        let status = evaluate_status(&task, &projection, &HashMap::new(), "Airframe", d(2024, 3, 5));
        assert_eq!(status.classification, Classification::Ok);
    }

    #[test]
    fn test_cycles_evaluation() {
        let mut task = engine_task(HoursDueConfig::default());
        task.cycles_due = CyclesDueConfig {
            enabled: true,
            due: Some(200),
            tolerance: 0,
            alert_prior: Some(20),
        };
        let projection = project_due(&task);
        assert_eq!(projection.due_at_cycles, Some(1040));

        let status = evaluate_status(
            &task,
            &projection,
            &times("Engine 1", 1250.0, 1030),
            "Airframe",
            d(2024, 6, 1),
        );

        assert_eq!(status.unit, DueUnit::Cycles);
        assert!((status.remaining - 10.0).abs() < f64::EPSILON);
        assert_eq!(status.classification, Classification::DueSoon);
        assert_eq!(status.text, "10 cycles");
    }

    #[test]
    fn test_invalid_due_date_classification() {
        let mut task = engine_task(HoursDueConfig::default());
        task.track_type = TrackType::OneTime;
        task.days_due = DaysDueConfig {
            enabled: true,
            interval_type: None,
            value: Some("not-a-date".to_string()),
            ..Default::default()
        };
        let projection = project_due(&task);

        let status = evaluate_status(&task, &projection, &HashMap::new(), "Airframe", d(2024, 6, 1));

        assert_eq!(status.classification, Classification::InvalidInput);
        assert_eq!(status.text, "Invalid Date");
        assert!(!status.overdue);
        assert!(status.remaining.is_infinite());
    }

    #[test]
    fn test_interval_malformed_days_value_falls_through_to_hours() {
        // A garbage days value must not mask an overdue hours threshold
        let mut task = engine_task(HoursDueConfig {
            enabled: true,
            due: Some(100.0),
            ..Default::default()
        });
        task.days_due = DaysDueConfig {
            enabled: true,
            interval_type: Some(DaysIntervalType::Days),
            value: Some("ninety".to_string()),
            ..Default::default()
        };
        let projection = project_due(&task);
        assert!(projection.invalid_due_date);
        assert_eq!(projection.due_at_hours, Some(1300.0));

        let status = evaluate_status(
            &task,
            &projection,
            &times("Engine 1", 1310.0, 900),
            "Airframe",
            d(2024, 6, 1),
        );

        assert_eq!(status.unit, DueUnit::Hours);
        assert!((status.remaining + 10.0).abs() < f64::EPSILON);
        assert!(status.overdue);
        assert_eq!(status.classification, Classification::Overdue);
        assert_eq!(status.text, "-10.0 hrs");
    }

    #[test]
    fn test_interval_missing_interval_type_falls_through_to_cycles() {
        let mut task = engine_task(HoursDueConfig::default());
        task.days_due = DaysDueConfig {
            enabled: true,
            interval_type: None,
            value: Some("90".to_string()),
            ..Default::default()
        };
        task.cycles_due = CyclesDueConfig {
            enabled: true,
            due: Some(200),
            ..Default::default()
        };
        let projection = project_due(&task);

        let status = evaluate_status(
            &task,
            &projection,
            &times("Engine 1", 1250.0, 900),
            "Airframe",
            d(2024, 6, 1),
        );

        assert_eq!(status.unit, DueUnit::Cycles);
        assert!((status.remaining - 140.0).abs() < f64::EPSILON);
        assert_eq!(status.classification, Classification::Ok);
    }

    #[test]
    fn test_interval_malformed_days_value_with_no_other_basis() {
        let mut task = engine_task(HoursDueConfig::default());
        task.days_due = DaysDueConfig {
            enabled: true,
            interval_type: Some(DaysIntervalType::Days),
            value: Some("ninety".to_string()),
            ..Default::default()
        };
        let projection = project_due(&task);

        let status = evaluate_status(&task, &projection, &HashMap::new(), "Airframe", d(2024, 6, 1));

        assert_eq!(status.classification, Classification::InvalidInput);
        assert_eq!(status.text, "Invalid Date");
        assert!(!status.overdue);
    }

    #[test]
    fn test_never_completed_classification() {
        let mut task = engine_task(HoursDueConfig::default());
        task.last_completed_date = None;
        task.days_due = DaysDueConfig {
            enabled: true,
            interval_type: Some(DaysIntervalType::Days),
            value: Some("365".to_string()),
            ..Default::default()
        };
        let projection = project_due(&task);

        let status = evaluate_status(&task, &projection, &HashMap::new(), "Airframe", d(2024, 6, 1));

        assert_eq!(status.classification, Classification::NeverCompleted);
        assert_eq!(status.text, "Never Completed");
    }

    #[test]
    fn test_never_completed_falls_through_to_hours() {
        // Days baseline missing, but an hours threshold still exists
        let mut task = engine_task(HoursDueConfig {
            enabled: true,
            due: Some(100.0),
            ..Default::default()
        });
        task.last_completed_date = None;
        task.days_due = DaysDueConfig {
            enabled: true,
            interval_type: Some(DaysIntervalType::Days),
            value: Some("365".to_string()),
            ..Default::default()
        };
        let projection = project_due(&task);

        let status = evaluate_status(
            &task,
            &projection,
            &times("Engine 1", 1250.0, 900),
            "Airframe",
            d(2024, 6, 1),
        );

        assert_eq!(status.unit, DueUnit::Hours);
        assert_eq!(status.classification, Classification::Ok);
    }

    #[test]
    fn test_nothing_enabled_is_not_applicable() {
        let task = engine_task(HoursDueConfig::default());
        let projection = project_due(&task);

        let status = evaluate_status(&task, &projection, &HashMap::new(), "Airframe", d(2024, 6, 1));

        assert_eq!(status.unit, DueUnit::None);
        assert_eq!(status.classification, Classification::NotApplicable);
        assert_eq!(status.text, "Check Due Info");
        assert!(!status.overdue);
    }

    #[test]
    fn test_default_component_fallback_lookup() {
        let mut task = engine_task(HoursDueConfig {
            enabled: true,
            due: Some(100.0),
            ..Default::default()
        });
        task.associated_component = None;

        let projection = project_due(&task);
        let status = evaluate_status(
            &task,
            &projection,
            &times("Airframe", 1250.0, 900),
            "Airframe",
            d(2024, 6, 1),
        );

        assert_eq!(status.classification, Classification::Ok);
        assert!((status.remaining - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_hours_remaining_rounds_to_one_decimal() {
        let task = engine_task(HoursDueConfig {
            enabled: true,
            due: Some(100.0),
            ..Default::default()
        });
        let projection = project_due(&task);

        let status = evaluate_status(
            &task,
            &projection,
            &times("Engine 1", 1250.04, 900),
            "Airframe",
            d(2024, 6, 1),
        );

        assert!((status.remaining - 50.0).abs() < f64::EPSILON);
        assert_eq!(status.text, "50.0 hrs");
    }

    #[test]
    fn test_classification_display() {
        assert_eq!(Classification::Ok.to_string(), "OK");
        assert_eq!(Classification::DueSoon.to_string(), "Due Soon");
        assert_eq!(Classification::GracePeriod.to_string(), "Grace Period");
        assert_eq!(Classification::Overdue.to_string(), "Overdue");
        assert_eq!(
            Classification::MissingComponentTime.to_string(),
            "Missing Component Time"
        );
        assert_eq!(Classification::InvalidInput.to_string(), "Invalid Input");
        assert_eq!(Classification::NeverCompleted.to_string(), "Never Completed");
        assert_eq!(Classification::NotApplicable.to_string(), "N/A");
    }

    #[test]
    fn test_unit_display() {
        assert_eq!(DueUnit::Days.to_string(), "days");
        assert_eq!(DueUnit::Hours.to_string(), "hrs");
        assert_eq!(DueUnit::Cycles.to_string(), "cycles");
        assert_eq!(DueUnit::None.to_string(), "N/A");
    }
}
