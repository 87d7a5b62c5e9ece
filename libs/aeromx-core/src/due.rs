//! Due-projection: converting a maintenance task's tracking configuration
//! into absolute due points
//!
//! Projection is baseline-relative and pure. A task may project a due date,
//! a due-at-hours threshold, and a due-at-cycles threshold simultaneously;
//! which one governs is decided during evaluation, not here.

use crate::dates;
use crate::models::{DaysIntervalType, MaintenanceTask, TrackType};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Absolute due points projected from one maintenance task
///
/// Derived on every read, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DueProjection {
    /// Calendar due date, when calendar tracking is enabled and resolvable
    pub due_date: Option<NaiveDate>,
    /// Absolute hours threshold on the associated component
    pub due_at_hours: Option<f64>,
    /// Absolute cycles threshold on the associated component
    pub due_at_cycles: Option<u32>,
    /// Calendar tracking is enabled but its value cannot produce a date
    pub invalid_due_date: bool,
    /// Interval calendar tracking is enabled but the task has never been
    /// completed, so no baseline date exists to project from
    pub baseline_missing: bool,
}

impl DueProjection {
    /// Whether the projection carries no due point at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.due_date.is_none() && self.due_at_hours.is_none() && self.due_at_cycles.is_none()
    }

    /// The due date formatted per the `YYYY-MM-DD` contract, if present
    #[must_use]
    pub fn due_date_string(&self) -> Option<String> {
        self.due_date.map(dates::format_date)
    }
}

/// Project a task's tracking configuration into absolute due points.
///
/// `DontAlert` tasks project nothing. `Interval` tasks project baseline +
/// interval for each enabled sub-record, with hours/cycles baselines
/// defaulting to zero. A days-tracked `Interval` task with no completion
/// baseline projects no date and flags `baseline_missing` instead of
/// pretending it was completed today. `OneTime` tasks carry their stored
/// values verbatim as absolute thresholds.
#[must_use]
pub fn project_due(task: &MaintenanceTask) -> DueProjection {
    let mut projection = DueProjection::default();

    match task.track_type {
        TrackType::DontAlert => {}
        TrackType::Interval => {
            if task.days_due.enabled {
                project_interval_date(task, &mut projection);
            }
            if task.hours_due.enabled {
                if let Some(due) = task.hours_due.due {
                    let baseline = task.last_completed_hours.unwrap_or(0.0);
                    projection.due_at_hours = Some(baseline + due);
                }
            }
            if task.cycles_due.enabled {
                if let Some(due) = task.cycles_due.due {
                    let baseline = task.last_completed_cycles.unwrap_or(0);
                    projection.due_at_cycles = Some(baseline.saturating_add(due));
                }
            }
        }
        TrackType::OneTime => {
            if task.days_due.enabled {
                match task.days_due.value.as_deref().map(str::trim) {
                    Some(value) if !value.is_empty() => match dates::parse_date(value) {
                        Ok(date) => projection.due_date = Some(date),
                        Err(_) => projection.invalid_due_date = true,
                    },
                    _ => projection.invalid_due_date = true,
                }
            }
            if task.hours_due.enabled {
                projection.due_at_hours = task.hours_due.due;
            }
            if task.cycles_due.enabled {
                projection.due_at_cycles = task.cycles_due.due;
            }
        }
    }

    projection
}

fn project_interval_date(task: &MaintenanceTask, projection: &mut DueProjection) {
    let Some(interval_type) = task.days_due.interval_type else {
        projection.invalid_due_date = true;
        return;
    };

    let interval = task
        .days_due
        .value
        .as_deref()
        .map(str::trim)
        .and_then(|v| v.parse::<u32>().ok())
        .filter(|n| *n > 0);
    let Some(interval) = interval else {
        projection.invalid_due_date = true;
        return;
    };

    let Some(baseline) = task.last_completed_date else {
        projection.baseline_missing = true;
        return;
    };

    let due = match interval_type {
        DaysIntervalType::Days => dates::add_days(baseline, i64::from(interval)),
        DaysIntervalType::MonthsSpecificDay => dates::add_months_same_day(baseline, interval),
        DaysIntervalType::MonthsEom => dates::add_months_eom(baseline, interval),
        DaysIntervalType::YearsSpecificDay => dates::add_years(baseline, interval),
    };

    match due {
        Ok(date) => projection.due_date = Some(date),
        Err(_) => projection.invalid_due_date = true,
    }
}
