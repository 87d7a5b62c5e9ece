//! Aeromx CLI library: argument definitions and table printers
//!
//! Printers write to a caller-supplied `Write` so tests can capture output.

pub mod logging;

use aeromx_common::constants::DEFAULT_COMPONENT;
use aeromx_core::fleet::EvaluatedTask;
use aeromx_core::models::{Aircraft, ComponentTime, MaintenanceTask, TrackType};
use aeromx_core::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::collections::HashMap;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "aeromx")]
#[command(about = "Maintenance due tracking for small aviation operators")]
#[command(version)]
pub struct Cli {
    /// Database path (defaults to the aeromx default location)
    #[arg(long, short)]
    pub database: Option<PathBuf>,

    /// Fall back to default database path if specified path doesn't exist
    #[arg(long)]
    pub fallback_to_default: bool,

    /// Verbose output
    #[arg(long, short)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// List the fleet
    Aircraft,
    /// Maintenance status table for one aircraft
    Status {
        /// Aircraft tail number
        tail: String,
    },
    /// Fleet overview: the most urgent item per aircraft
    Fleet,
    /// List maintenance tasks for one aircraft
    Tasks {
        /// Aircraft tail number
        tail: String,
        /// Only active tasks
        #[arg(long)]
        active: bool,
        /// Search query against title and reference number
        #[arg(long, short)]
        search: Option<String>,
        /// Limit number of results
        #[arg(long, short)]
        limit: Option<usize>,
    },
    /// Record a flight leg and accumulate component times
    LogLeg {
        /// Aircraft tail number
        tail: String,
        /// Leg date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Flight duration in hours
        #[arg(long)]
        hours: f64,
        /// APU run time in hours
        #[arg(long, default_value_t = 0.0)]
        apu_hours: f64,
        /// Free-text notes (e.g. route)
        #[arg(long)]
        notes: Option<String>,
    },
    /// Show component times for one aircraft
    Times {
        /// Aircraft tail number
        tail: String,
    },
}

/// Print the aircraft registry
///
/// # Errors
/// Returns an error if writing to the output fails
pub fn print_aircraft_list(aircraft: &[Aircraft], writer: &mut impl Write) -> Result<()> {
    if aircraft.is_empty() {
        writeln!(writer, "No aircraft registered")?;
        return Ok(());
    }
    writeln!(writer, "{:<10} {:<12} {}", "TAIL", "MODEL", "STATUS")?;
    for craft in aircraft {
        writeln!(
            writer,
            "{:<10} {:<12} {}",
            craft.tail_number,
            craft.model,
            if craft.active { "active" } else { "inactive" }
        )?;
    }
    Ok(())
}

/// Print one aircraft's per-task maintenance status table
///
/// # Errors
/// Returns an error if writing to the output fails
pub fn print_status_table(items: &[EvaluatedTask<'_>], writer: &mut impl Write) -> Result<()> {
    if items.is_empty() {
        writeln!(writer, "No alerting maintenance tasks")?;
        return Ok(());
    }
    writeln!(
        writer,
        "{:<28} {:<12} {:<16} {}",
        "TASK", "DUE", "REMAINING", "STATUS"
    )?;
    for item in items {
        let due = item
            .projection
            .due_date_string()
            .or_else(|| item.projection.due_at_hours.map(|h| format!("{h:.1} hrs")))
            .or_else(|| item.projection.due_at_cycles.map(|c| format!("{c} cyc")))
            .unwrap_or_else(|| "-".to_string());
        writeln!(
            writer,
            "{:<28} {:<12} {:<16} {}",
            truncate(&item.task.title, 27),
            due,
            item.status.text,
            item.status.classification,
        )?;
    }
    Ok(())
}

/// Print the fleet overview (most urgent item per aircraft)
///
/// # Errors
/// Returns an error if writing to the output fails
pub fn print_fleet_overview(
    rows: &[(Aircraft, Option<(String, String, String)>)],
    writer: &mut impl Write,
) -> Result<()> {
    writeln!(
        writer,
        "{:<10} {:<28} {:<16} {}",
        "TAIL", "NEXT DUE ITEM", "REMAINING", "STATUS"
    )?;
    for (craft, urgent) in rows {
        match urgent {
            Some((title, remaining, classification)) => writeln!(
                writer,
                "{:<10} {:<28} {:<16} {}",
                craft.tail_number,
                truncate(title, 27),
                remaining,
                classification
            )?,
            None => writeln!(writer, "{:<10} -", craft.tail_number)?,
        }
    }
    Ok(())
}

/// Print a maintenance task list
///
/// # Errors
/// Returns an error if writing to the output fails
pub fn print_tasks(tasks: &[MaintenanceTask], writer: &mut impl Write) -> Result<()> {
    if tasks.is_empty() {
        writeln!(writer, "No maintenance tasks found")?;
        return Ok(());
    }
    writeln!(
        writer,
        "{:<28} {:<10} {:<14} {}",
        "TASK", "REF", "COMPONENT", "TRACKING"
    )?;
    for task in tasks {
        let tracking = match task.track_type {
            TrackType::Interval => "interval",
            TrackType::OneTime => "one-time",
            TrackType::DontAlert => "no alert",
        };
        writeln!(
            writer,
            "{:<28} {:<10} {:<14} {}",
            truncate(&task.title, 27),
            task.reference_number.as_deref().unwrap_or("-"),
            task.component_name(DEFAULT_COMPONENT),
            tracking,
        )?;
    }
    Ok(())
}

/// Print component times sorted by component name
///
/// # Errors
/// Returns an error if writing to the output fails
pub fn print_component_times(
    times: &HashMap<String, ComponentTime>,
    writer: &mut impl Write,
) -> Result<()> {
    if times.is_empty() {
        writeln!(writer, "No component times recorded")?;
        return Ok(());
    }
    writeln!(writer, "{:<14} {:>10} {:>8}", "COMPONENT", "HOURS", "CYCLES")?;
    let mut names: Vec<&String> = times.keys().collect();
    names.sort();
    for name in names {
        let time = times[name];
        writeln!(
            writer,
            "{:<14} {:>10.1} {:>8}",
            name, time.time_hours, time.cycles
        )?;
    }
    Ok(())
}

fn truncate(s: &str, max_len: usize) -> String {
    aeromx_common::utils::truncate_string(s, max_len)
}
