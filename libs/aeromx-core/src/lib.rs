//! Aeromx Core - Maintenance due calculation and aircraft records
//!
//! The heart of this crate is the maintenance due calculator: a pure,
//! deterministic pipeline from a task's tracking configuration to a
//! display-ready urgency status.
//!
//! - [`due::project_due`] turns a task's interval/one-time configuration and
//!   last-completed baseline into absolute due points (date, hours, cycles).
//! - [`status::evaluate_status`] measures remaining runway against a
//!   component-time snapshot and classifies urgency (OK, Due Soon, Grace
//!   Period, Overdue, and the data-quality statuses).
//! - [`fleet::most_urgent`] picks the single most pressing item per aircraft
//!   for fleet overview displays.
//!
//! Persistence lives in [`database::AeromxDatabase`]; the calculator itself
//! owns no state and performs no I/O.
//!
//! # Quick Start
//!
//! ```no_run
//! use aeromx_core::{AeromxDatabase, TaskFilters};
//! use aeromx_core::fleet::most_urgent;
//! use chrono::Utc;
//!
//! # fn example() -> aeromx_core::Result<()> {
//! let db = AeromxDatabase::new("aeromx.sqlite")?;
//! let aircraft = db.get_aircraft_by_tail("N123AB")?;
//! let tasks = db.get_tasks(&TaskFilters {
//!     aircraft_uuid: Some(aircraft.uuid),
//!     ..Default::default()
//! })?;
//! let times = db.get_component_times(aircraft.uuid)?;
//!
//! if let Some(item) = most_urgent(&tasks, &times, "Airframe", Utc::now().date_naive()) {
//!     println!("{}: {} ({})", item.task.title, item.status.text, item.status.classification);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod database;
pub mod dates;
pub mod due;
pub mod error;
pub mod fleet;
pub mod flightlog;
pub mod models;
pub mod query;
pub mod status;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::AeromxConfig;
pub use database::AeromxDatabase;
pub use due::{project_due, DueProjection};
pub use error::{AeromxError, Result};
pub use fleet::{evaluate_tasks, most_urgent, urgency_cmp, EvaluatedTask};
pub use models::*;
pub use query::TaskQueryBuilder;
pub use status::{evaluate_status, Classification, DueUnit, RemainingStatus};

/// Re-export commonly used types
pub use chrono::NaiveDate;
pub use uuid::Uuid;
