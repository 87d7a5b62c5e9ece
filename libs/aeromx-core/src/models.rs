//! Data models for aeromx maintenance tracking entities

use crate::error::{AeromxError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How a maintenance task's due point is tracked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrackType {
    /// Due point recurs relative to the last completion baseline
    #[serde(rename = "interval")]
    Interval,
    /// Due point is an absolute date/hours/cycles value, completed once
    #[serde(rename = "one_time")]
    OneTime,
    /// Task is recorded but never alerts
    #[serde(rename = "dont_alert")]
    DontAlert,
}

/// Kind of maintenance requirement a task represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemType {
    #[serde(rename = "inspection")]
    Inspection,
    #[serde(rename = "service_bulletin")]
    ServiceBulletin,
    #[serde(rename = "airworthiness_directive")]
    AirworthinessDirective,
    #[serde(rename = "component_replacement")]
    ComponentReplacement,
    #[serde(rename = "overhaul")]
    Overhaul,
    #[serde(rename = "life_limited_part")]
    LifeLimitedPart,
    #[serde(rename = "other")]
    Other,
}

/// Calendar arithmetic applied to an interval task's days-due value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DaysIntervalType {
    /// Baseline date + N calendar days
    #[serde(rename = "days")]
    Days,
    /// Baseline date + N months, same day-of-month (calendar-clamped)
    #[serde(rename = "months_specific_day")]
    MonthsSpecificDay,
    /// End of the month N months after the baseline date
    #[serde(rename = "months_eom")]
    MonthsEom,
    /// Baseline date + N years
    #[serde(rename = "years_specific_day")]
    YearsSpecificDay,
}

/// Hours-based due configuration for a maintenance task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct HoursDueConfig {
    /// Whether hours tracking is enabled for this task
    pub enabled: bool,
    /// Hours after baseline (Interval) or absolute hours threshold (OneTime)
    pub due: Option<f64>,
    /// Grace amount in hours once overdue
    pub tolerance: f64,
    /// Hours before due at which to flag "Due Soon" (default 25.0 when None)
    pub alert_prior: Option<f64>,
}

/// Cycles-based due configuration for a maintenance task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CyclesDueConfig {
    /// Whether cycles tracking is enabled for this task
    pub enabled: bool,
    /// Cycles after baseline (Interval) or absolute cycles threshold (OneTime)
    pub due: Option<u32>,
    /// Grace amount in cycles once overdue
    pub tolerance: u32,
    /// Cycles before due at which to flag "Due Soon" (default 50 when None)
    pub alert_prior: Option<u32>,
}

/// Calendar-based due configuration for a maintenance task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DaysDueConfig {
    /// Whether calendar tracking is enabled for this task
    pub enabled: bool,
    /// Interval arithmetic; meaningful only when track type is Interval
    pub interval_type: Option<DaysIntervalType>,
    /// Interval magnitude (Interval) or absolute `YYYY-MM-DD` date (OneTime)
    pub value: Option<String>,
    /// Grace amount in days once overdue
    pub tolerance: u32,
    /// Days before due at which to flag "Due Soon" (default 30 when None)
    pub alert_prior: Option<u32>,
}

/// One trackable maintenance requirement for one aircraft
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaintenanceTask {
    /// Unique identifier
    pub uuid: Uuid,
    /// Owning aircraft
    pub aircraft_uuid: Uuid,
    /// Task title
    pub title: String,
    /// Reference number (work order, chapter, AD number)
    pub reference_number: Option<String>,
    /// Part number
    pub part_number: Option<String>,
    /// Serial number
    pub serial_number: Option<String>,
    /// Kind of requirement
    pub item_type: ItemType,
    /// Component the task is tracked against; caller default applies when None
    pub associated_component: Option<String>,
    /// Free-text details
    pub details: Option<String>,
    /// Whether the task is active
    pub active: bool,
    /// How the due point is tracked
    pub track_type: TrackType,
    /// Baseline: date of last completion
    pub last_completed_date: Option<NaiveDate>,
    /// Baseline: component hours at last completion
    pub last_completed_hours: Option<f64>,
    /// Baseline: component cycles at last completion
    pub last_completed_cycles: Option<u32>,
    /// Free-text notes about the last completion
    pub completion_notes: Option<String>,
    /// Hours-due configuration
    pub hours_due: HoursDueConfig,
    /// Cycles-due configuration
    pub cycles_due: CyclesDueConfig,
    /// Calendar-due configuration
    pub days_due: DaysDueConfig,
}

impl MaintenanceTask {
    /// Validate the enabled due sub-records: each enabled sub-record must
    /// carry a present, positive due value. For Interval tasks the days value
    /// must be a positive integer; for OneTime tasks it must be a valid
    /// `YYYY-MM-DD` date.
    ///
    /// # Errors
    /// Returns `AeromxError::Validation` describing the first violation found
    pub fn validate(&self) -> Result<()> {
        if self.hours_due.enabled {
            match self.hours_due.due {
                Some(h) if h > 0.0 => {}
                _ => {
                    return Err(AeromxError::validation(
                        "hours due is enabled but no positive hours value is set",
                    ))
                }
            }
        }

        if self.cycles_due.enabled {
            match self.cycles_due.due {
                Some(c) if c > 0 => {}
                _ => {
                    return Err(AeromxError::validation(
                        "cycles due is enabled but no positive cycles value is set",
                    ))
                }
            }
        }

        if self.days_due.enabled {
            let value = self.days_due.value.as_deref().unwrap_or("").trim();
            if value.is_empty() {
                return Err(AeromxError::validation(
                    "days due is enabled but no due value is set",
                ));
            }
            match self.track_type {
                TrackType::Interval => {
                    if self.days_due.interval_type.is_none() {
                        return Err(AeromxError::validation(
                            "days due is enabled but no interval type is set",
                        ));
                    }
                    match value.parse::<u32>() {
                        Ok(n) if n > 0 => {}
                        _ => {
                            return Err(AeromxError::validation(format!(
                                "days due value '{value}' is not a positive whole number"
                            )))
                        }
                    }
                }
                TrackType::OneTime => {
                    if crate::dates::parse_date(value).is_err() {
                        return Err(AeromxError::validation(format!(
                            "days due value '{value}' is not a valid YYYY-MM-DD date"
                        )));
                    }
                }
                TrackType::DontAlert => {}
            }
        }

        Ok(())
    }

    /// Component name this task is evaluated against, trimmed, falling back
    /// to `default_component` when absent or blank
    #[must_use]
    pub fn component_name<'a>(&'a self, default_component: &'a str) -> &'a str {
        match self.associated_component.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name,
            _ => default_component,
        }
    }
}

/// Current cumulative usage of one named component on one aircraft
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct ComponentTime {
    /// Cumulative hours
    pub time_hours: f64,
    /// Cumulative cycles
    pub cycles: u32,
}

/// Aircraft registry entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Aircraft {
    /// Unique identifier
    pub uuid: Uuid,
    /// Registration / tail number
    pub tail_number: String,
    /// Aircraft model designation
    pub model: String,
    /// Whether the aircraft is in service
    pub active: bool,
}

/// One recorded flight leg; accumulates into component times when saved
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightLeg {
    /// Unique identifier
    pub uuid: Uuid,
    /// Aircraft the leg was flown on
    pub aircraft_uuid: Uuid,
    /// Date of the leg
    pub date: NaiveDate,
    /// Flight duration in hours
    pub flight_hours: f64,
    /// APU run time in hours
    pub apu_hours: f64,
    /// Free-text notes
    pub notes: Option<String>,
}

/// Maintenance task filters for queries
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TaskFilters {
    /// Filter by owning aircraft
    pub aircraft_uuid: Option<Uuid>,
    /// Filter by item type
    pub item_type: Option<ItemType>,
    /// Filter by track type
    pub track_type: Option<TrackType>,
    /// Filter by active flag
    pub active: Option<bool>,
    /// Search query against title and reference number
    pub search_query: Option<String>,
    /// Limit results
    pub limit: Option<usize>,
    /// Offset for pagination
    pub offset: Option<usize>,
}
