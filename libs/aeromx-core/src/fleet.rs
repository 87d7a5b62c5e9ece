//! Fleet overview aggregation: selecting the single most urgent maintenance
//! item per aircraft for summary views

use crate::due::{project_due, DueProjection};
use crate::models::{ComponentTime, MaintenanceTask, TrackType};
use crate::status::{evaluate_status, Classification, RemainingStatus};
use chrono::NaiveDate;
use std::cmp::Ordering;
use std::collections::HashMap;

/// One task paired with its computed projection and status
#[derive(Debug, Clone)]
pub struct EvaluatedTask<'a> {
    /// The evaluated task
    pub task: &'a MaintenanceTask,
    /// Its due projection
    pub projection: DueProjection,
    /// Its remaining/status evaluation
    pub status: RemainingStatus,
}

/// Urgency ordering: overdue before non-overdue, then ascending by signed
/// remaining (more negative first among overdue, smaller positive first among
/// upcoming). `InvalidInput` entries are excluded from urgency and sort last.
#[must_use]
pub fn urgency_cmp(a: &RemainingStatus, b: &RemainingStatus) -> Ordering {
    let a_invalid = a.classification == Classification::InvalidInput;
    let b_invalid = b.classification == Classification::InvalidInput;
    match (a_invalid, b_invalid) {
        (true, false) => return Ordering::Greater,
        (false, true) => return Ordering::Less,
        _ => {}
    }

    match (a.overdue, b.overdue) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => a
            .remaining
            .partial_cmp(&b.remaining)
            .unwrap_or(Ordering::Equal),
    }
}

/// Project and evaluate every active, alerting task against one snapshot
#[must_use]
pub fn evaluate_tasks<'a>(
    tasks: &'a [MaintenanceTask],
    component_times: &HashMap<String, ComponentTime>,
    default_component: &str,
    today: NaiveDate,
) -> Vec<EvaluatedTask<'a>> {
    tasks
        .iter()
        .filter(|t| t.active && t.track_type != TrackType::DontAlert)
        .map(|task| {
            let projection = project_due(task);
            let status =
                evaluate_status(task, &projection, component_times, default_component, today);
            EvaluatedTask {
                task,
                projection,
                status,
            }
        })
        .collect()
}

/// The single most urgent maintenance item for one aircraft, as surfaced on
/// fleet-wide summary views
#[must_use]
pub fn most_urgent<'a>(
    tasks: &'a [MaintenanceTask],
    component_times: &HashMap<String, ComponentTime>,
    default_component: &str,
    today: NaiveDate,
) -> Option<EvaluatedTask<'a>> {
    evaluate_tasks(tasks, component_times, default_component, today)
        .into_iter()
        .min_by(|a, b| urgency_cmp(&a.status, &b.status))
}
