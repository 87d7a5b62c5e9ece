//! Constants shared across the aeromx workspace

/// Default database filename
pub const DATABASE_FILENAME: &str = "aeromx.sqlite";

/// Default data directory name (under the user's home directory)
pub const DATA_DIR: &str = ".aeromx";

/// Default query limit
pub const DEFAULT_QUERY_LIMIT: usize = 100;

/// Maximum query limit
pub const MAX_QUERY_LIMIT: usize = 1000;

/// Canonical calendar date format for persisted and displayed dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Default component a maintenance task is tracked against when it does not
/// name one of its own
pub const DEFAULT_COMPONENT: &str = "Airframe";

/// Days before a date-tracked due point at which a task is flagged "Due Soon"
/// when the task carries no alert-prior of its own
pub const DEFAULT_ALERT_DAYS_PRIOR: u32 = 30;

/// Hours before an hours-tracked due point at which a task is flagged
/// "Due Soon" when the task carries no alert-prior of its own
pub const DEFAULT_ALERT_HOURS_PRIOR: f64 = 25.0;

/// Cycles before a cycles-tracked due point at which a task is flagged
/// "Due Soon" when the task carries no alert-prior of its own
pub const DEFAULT_ALERT_CYCLES_PRIOR: u32 = 50;
