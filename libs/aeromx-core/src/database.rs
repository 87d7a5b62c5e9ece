//! SQLite persistence for aircraft, maintenance tasks, component times, and
//! flight legs
//!
//! The calculator never touches this layer directly; callers read a snapshot
//! (tasks plus component times) and hand it to the pure functions in
//! [`crate::due`], [`crate::status`], and [`crate::fleet`].

use crate::config::AeromxConfig;
use crate::error::{AeromxError, Result};
use crate::flightlog::apply_leg;
use crate::models::{
    Aircraft, ComponentTime, CyclesDueConfig, DaysDueConfig, DaysIntervalType, FlightLeg,
    HoursDueConfig, ItemType, MaintenanceTask, TaskFilters, TrackType,
};
use chrono::NaiveDate;
use rusqlite::{params, Connection, Row};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;
use uuid::Uuid;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS aircraft (
    uuid TEXT PRIMARY KEY,
    tail_number TEXT NOT NULL UNIQUE,
    model TEXT NOT NULL,
    active INTEGER NOT NULL DEFAULT 1
);

CREATE TABLE IF NOT EXISTS maintenance_task (
    uuid TEXT PRIMARY KEY,
    aircraft_uuid TEXT NOT NULL REFERENCES aircraft(uuid),
    title TEXT NOT NULL,
    reference_number TEXT,
    part_number TEXT,
    serial_number TEXT,
    item_type TEXT NOT NULL,
    associated_component TEXT,
    details TEXT,
    active INTEGER NOT NULL DEFAULT 1,
    track_type TEXT NOT NULL,
    last_completed_date TEXT,
    last_completed_hours REAL,
    last_completed_cycles INTEGER,
    completion_notes TEXT,
    hours_due_enabled INTEGER NOT NULL DEFAULT 0,
    hours_due REAL,
    hours_tolerance REAL NOT NULL DEFAULT 0,
    hours_alert_prior REAL,
    cycles_due_enabled INTEGER NOT NULL DEFAULT 0,
    cycles_due INTEGER,
    cycles_tolerance INTEGER NOT NULL DEFAULT 0,
    cycles_alert_prior INTEGER,
    days_due_enabled INTEGER NOT NULL DEFAULT 0,
    days_interval_type TEXT,
    days_due_value TEXT,
    days_tolerance INTEGER NOT NULL DEFAULT 0,
    days_alert_prior INTEGER
);

CREATE INDEX IF NOT EXISTS idx_task_aircraft ON maintenance_task(aircraft_uuid);

CREATE TABLE IF NOT EXISTS component_time (
    aircraft_uuid TEXT NOT NULL REFERENCES aircraft(uuid),
    component TEXT NOT NULL,
    time_hours REAL NOT NULL DEFAULT 0,
    cycles INTEGER NOT NULL DEFAULT 0,
    PRIMARY KEY (aircraft_uuid, component)
);

CREATE TABLE IF NOT EXISTS flight_leg (
    uuid TEXT PRIMARY KEY,
    aircraft_uuid TEXT NOT NULL REFERENCES aircraft(uuid),
    date TEXT NOT NULL,
    flight_hours REAL NOT NULL,
    apu_hours REAL NOT NULL DEFAULT 0,
    notes TEXT
);

CREATE INDEX IF NOT EXISTS idx_leg_aircraft ON flight_leg(aircraft_uuid, date);
";

/// Main database access struct
pub struct AeromxDatabase {
    conn: Connection,
}

impl AeromxDatabase {
    /// Open (creating the schema if needed) a database at the given path
    ///
    /// # Errors
    /// Returns `AeromxError::Database` if the file cannot be opened
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let conn = Connection::open(db_path)?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }

    /// Open a database using a configuration's effective path
    ///
    /// # Errors
    /// Returns `AeromxError::Configuration` if no database path resolves
    pub fn with_config(config: &AeromxConfig) -> Result<Self> {
        let path = config.get_effective_database_path()?;
        Self::new(path)
    }

    /// In-memory database, used by tests and ad-hoc tooling
    ///
    /// # Errors
    /// Returns `AeromxError::Database` on connection failure
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }

    // ---- aircraft ----

    /// Insert or replace an aircraft record
    ///
    /// # Errors
    /// Returns `AeromxError::Database` on statement failure
    pub fn save_aircraft(&self, aircraft: &Aircraft) -> Result<()> {
        debug!(tail = %aircraft.tail_number, "saving aircraft");
        self.conn.execute(
            "INSERT OR REPLACE INTO aircraft (uuid, tail_number, model, active)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                aircraft.uuid.to_string(),
                aircraft.tail_number,
                aircraft.model,
                aircraft.active,
            ],
        )?;
        Ok(())
    }

    /// Fetch one aircraft by uuid
    ///
    /// # Errors
    /// Returns `AeromxError::AircraftNotFound` when no row matches
    pub fn get_aircraft(&self, uuid: Uuid) -> Result<Aircraft> {
        let mut stmt = self
            .conn
            .prepare("SELECT uuid, tail_number, model, active FROM aircraft WHERE uuid = ?1")?;
        let mut rows = stmt.query_map(params![uuid.to_string()], map_aircraft)?;
        rows.next()
            .transpose()?
            .ok_or_else(|| AeromxError::AircraftNotFound {
                ident: uuid.to_string(),
            })
    }

    /// Fetch one aircraft by tail number
    ///
    /// # Errors
    /// Returns `AeromxError::AircraftNotFound` when no row matches
    pub fn get_aircraft_by_tail(&self, tail_number: &str) -> Result<Aircraft> {
        let mut stmt = self.conn.prepare(
            "SELECT uuid, tail_number, model, active FROM aircraft WHERE tail_number = ?1",
        )?;
        let mut rows = stmt.query_map(params![tail_number], map_aircraft)?;
        rows.next()
            .transpose()?
            .ok_or_else(|| AeromxError::AircraftNotFound {
                ident: tail_number.to_string(),
            })
    }

    /// List all aircraft, active first, then by tail number
    ///
    /// # Errors
    /// Returns `AeromxError::Database` on statement failure
    pub fn get_aircraft_list(&self) -> Result<Vec<Aircraft>> {
        let mut stmt = self.conn.prepare(
            "SELECT uuid, tail_number, model, active FROM aircraft
             ORDER BY active DESC, tail_number",
        )?;
        let rows = stmt.query_map([], map_aircraft)?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    // ---- maintenance tasks ----

    /// Insert or replace a maintenance task
    ///
    /// # Errors
    /// Returns `AeromxError::Database` on statement failure
    pub fn save_task(&self, task: &MaintenanceTask) -> Result<()> {
        debug!(task = %task.title, "saving maintenance task");
        self.conn.execute(
            "INSERT OR REPLACE INTO maintenance_task (
                uuid, aircraft_uuid, title, reference_number, part_number, serial_number,
                item_type, associated_component, details, active, track_type,
                last_completed_date, last_completed_hours, last_completed_cycles, completion_notes,
                hours_due_enabled, hours_due, hours_tolerance, hours_alert_prior,
                cycles_due_enabled, cycles_due, cycles_tolerance, cycles_alert_prior,
                days_due_enabled, days_interval_type, days_due_value, days_tolerance, days_alert_prior
             ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14,
                       ?15, ?16, ?17, ?18, ?19, ?20, ?21, ?22, ?23, ?24, ?25, ?26, ?27, ?28)",
            params![
                task.uuid.to_string(),
                task.aircraft_uuid.to_string(),
                task.title,
                task.reference_number,
                task.part_number,
                task.serial_number,
                item_type_str(task.item_type),
                task.associated_component,
                task.details,
                task.active,
                track_type_str(task.track_type),
                task.last_completed_date.map(|d| d.format("%Y-%m-%d").to_string()),
                task.last_completed_hours,
                task.last_completed_cycles,
                task.completion_notes,
                task.hours_due.enabled,
                task.hours_due.due,
                task.hours_due.tolerance,
                task.hours_due.alert_prior,
                task.cycles_due.enabled,
                task.cycles_due.due,
                task.cycles_due.tolerance,
                task.cycles_due.alert_prior,
                task.days_due.enabled,
                task.days_due.interval_type.map(interval_type_str),
                task.days_due.value,
                task.days_due.tolerance,
                task.days_due.alert_prior,
            ],
        )?;
        Ok(())
    }

    /// Fetch one maintenance task by uuid
    ///
    /// # Errors
    /// Returns `AeromxError::TaskNotFound` when no row matches
    pub fn get_task(&self, uuid: Uuid) -> Result<MaintenanceTask> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TASK_SELECT} WHERE uuid = ?1"))?;
        let mut rows = stmt.query_map(params![uuid.to_string()], map_task)?;
        rows.next()
            .transpose()?
            .ok_or_else(|| AeromxError::TaskNotFound {
                uuid: uuid.to_string(),
            })
    }

    /// List maintenance tasks matching the given filters
    ///
    /// # Errors
    /// Returns `AeromxError::Database` on statement failure
    pub fn get_tasks(&self, filters: &TaskFilters) -> Result<Vec<MaintenanceTask>> {
        let mut sql = format!("{TASK_SELECT} WHERE 1=1");
        let mut params_vec: Vec<Box<dyn rusqlite::types::ToSql>> = Vec::new();

        if let Some(aircraft_uuid) = filters.aircraft_uuid {
            sql.push_str(" AND aircraft_uuid = ?");
            params_vec.push(Box::new(aircraft_uuid.to_string()));
        }
        if let Some(item_type) = filters.item_type {
            sql.push_str(" AND item_type = ?");
            params_vec.push(Box::new(item_type_str(item_type).to_string()));
        }
        if let Some(track_type) = filters.track_type {
            sql.push_str(" AND track_type = ?");
            params_vec.push(Box::new(track_type_str(track_type).to_string()));
        }
        if let Some(active) = filters.active {
            sql.push_str(" AND active = ?");
            params_vec.push(Box::new(active));
        }
        if let Some(query) = &filters.search_query {
            sql.push_str(" AND (title LIKE ? OR reference_number LIKE ?)");
            let pattern = format!("%{query}%");
            params_vec.push(Box::new(pattern.clone()));
            params_vec.push(Box::new(pattern));
        }

        sql.push_str(" ORDER BY title");

        if let Some(limit) = filters.limit {
            sql.push_str(" LIMIT ?");
            params_vec.push(Box::new(limit as i64));
            if let Some(offset) = filters.offset {
                sql.push_str(" OFFSET ?");
                params_vec.push(Box::new(offset as i64));
            }
        }

        let mut stmt = self.conn.prepare(&sql)?;
        let param_refs: Vec<&dyn rusqlite::types::ToSql> =
            params_vec.iter().map(AsRef::as_ref).collect();
        let rows = stmt.query_map(&param_refs[..], map_task)?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    // ---- component times ----

    /// Snapshot of an aircraft's component times, keyed by component name
    ///
    /// # Errors
    /// Returns `AeromxError::Database` on statement failure
    pub fn get_component_times(&self, aircraft_uuid: Uuid) -> Result<HashMap<String, ComponentTime>> {
        component_times_on(&self.conn, aircraft_uuid)
    }

    /// Insert or replace one component's cumulative times
    ///
    /// # Errors
    /// Returns `AeromxError::Database` on statement failure
    pub fn set_component_time(
        &self,
        aircraft_uuid: Uuid,
        component: &str,
        time: ComponentTime,
    ) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO component_time (aircraft_uuid, component, time_hours, cycles)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                aircraft_uuid.to_string(),
                component,
                time.time_hours,
                time.cycles
            ],
        )?;
        Ok(())
    }

    // ---- flight legs ----

    /// Persist a flight leg and accumulate the aircraft's component times in
    /// the same transaction
    ///
    /// # Errors
    /// Returns `AeromxError::Database` on statement or transaction failure
    pub fn record_flight_leg(&mut self, leg: &FlightLeg) -> Result<()> {
        debug!(aircraft = %leg.aircraft_uuid, hours = leg.flight_hours, "recording flight leg");
        let tx = self.conn.transaction()?;

        tx.execute(
            "INSERT INTO flight_leg (uuid, aircraft_uuid, date, flight_hours, apu_hours, notes)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                leg.uuid.to_string(),
                leg.aircraft_uuid.to_string(),
                leg.date.format("%Y-%m-%d").to_string(),
                leg.flight_hours,
                leg.apu_hours,
                leg.notes,
            ],
        )?;

        let mut times = component_times_on(&tx, leg.aircraft_uuid)?;
        apply_leg(&mut times, leg);
        for (component, time) in &times {
            tx.execute(
                "UPDATE component_time SET time_hours = ?1, cycles = ?2
                 WHERE aircraft_uuid = ?3 AND component = ?4",
                params![
                    time.time_hours,
                    time.cycles,
                    leg.aircraft_uuid.to_string(),
                    component
                ],
            )?;
        }

        tx.commit()?;
        Ok(())
    }

    /// Flight legs for one aircraft, newest first
    ///
    /// # Errors
    /// Returns `AeromxError::Database` on statement failure
    pub fn get_flight_legs(&self, aircraft_uuid: Uuid) -> Result<Vec<FlightLeg>> {
        let mut stmt = self.conn.prepare(
            "SELECT uuid, aircraft_uuid, date, flight_hours, apu_hours, notes
             FROM flight_leg WHERE aircraft_uuid = ?1 ORDER BY date DESC",
        )?;
        let rows = stmt.query_map(params![aircraft_uuid.to_string()], |row| {
            Ok(FlightLeg {
                uuid: parse_uuid(&row.get::<_, String>("uuid")?),
                aircraft_uuid: parse_uuid(&row.get::<_, String>("aircraft_uuid")?),
                date: parse_stored_date(row.get::<_, String>("date")?.as_str()),
                flight_hours: row.get("flight_hours")?,
                apu_hours: row.get("apu_hours")?,
                notes: row.get("notes")?,
            })
        })?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }
}

const TASK_SELECT: &str = "SELECT uuid, aircraft_uuid, title, reference_number, part_number,
    serial_number, item_type, associated_component, details, active, track_type,
    last_completed_date, last_completed_hours, last_completed_cycles, completion_notes,
    hours_due_enabled, hours_due, hours_tolerance, hours_alert_prior,
    cycles_due_enabled, cycles_due, cycles_tolerance, cycles_alert_prior,
    days_due_enabled, days_interval_type, days_due_value, days_tolerance, days_alert_prior
    FROM maintenance_task";

fn component_times_on(
    conn: &Connection,
    aircraft_uuid: Uuid,
) -> Result<HashMap<String, ComponentTime>> {
    let mut stmt = conn.prepare(
        "SELECT component, time_hours, cycles FROM component_time WHERE aircraft_uuid = ?1",
    )?;
    let rows = stmt.query_map(params![aircraft_uuid.to_string()], |row| {
        Ok((
            row.get::<_, String>("component")?,
            ComponentTime {
                time_hours: row.get("time_hours")?,
                cycles: row.get("cycles")?,
            },
        ))
    })?;
    let mut map = HashMap::new();
    for entry in rows {
        let (component, time) = entry?;
        map.insert(component, time);
    }
    Ok(map)
}

fn map_aircraft(row: &Row<'_>) -> rusqlite::Result<Aircraft> {
    Ok(Aircraft {
        uuid: parse_uuid(&row.get::<_, String>("uuid")?),
        tail_number: row.get("tail_number")?,
        model: row.get("model")?,
        active: row.get("active")?,
    })
}

fn map_task(row: &Row<'_>) -> rusqlite::Result<MaintenanceTask> {
    Ok(MaintenanceTask {
        uuid: parse_uuid(&row.get::<_, String>("uuid")?),
        aircraft_uuid: parse_uuid(&row.get::<_, String>("aircraft_uuid")?),
        title: row.get("title")?,
        reference_number: row.get("reference_number")?,
        part_number: row.get("part_number")?,
        serial_number: row.get("serial_number")?,
        item_type: item_type_from(row.get::<_, String>("item_type")?.as_str()),
        associated_component: row.get("associated_component")?,
        details: row.get("details")?,
        active: row.get("active")?,
        track_type: track_type_from(row.get::<_, String>("track_type")?.as_str()),
        last_completed_date: row
            .get::<_, Option<String>>("last_completed_date")?
            .and_then(|s| NaiveDate::parse_from_str(&s, "%Y-%m-%d").ok()),
        last_completed_hours: row.get("last_completed_hours")?,
        last_completed_cycles: row.get("last_completed_cycles")?,
        completion_notes: row.get("completion_notes")?,
        hours_due: HoursDueConfig {
            enabled: row.get("hours_due_enabled")?,
            due: row.get("hours_due")?,
            tolerance: row.get("hours_tolerance")?,
            alert_prior: row.get("hours_alert_prior")?,
        },
        cycles_due: CyclesDueConfig {
            enabled: row.get("cycles_due_enabled")?,
            due: row.get("cycles_due")?,
            tolerance: row.get("cycles_tolerance")?,
            alert_prior: row.get("cycles_alert_prior")?,
        },
        days_due: DaysDueConfig {
            enabled: row.get("days_due_enabled")?,
            interval_type: row
                .get::<_, Option<String>>("days_interval_type")?
                .as_deref()
                .and_then(interval_type_from),
            value: row.get("days_due_value")?,
            tolerance: row.get("days_tolerance")?,
            alert_prior: row.get("days_alert_prior")?,
        },
    })
}

fn parse_uuid(s: &str) -> Uuid {
    Uuid::parse_str(s).unwrap_or_else(|_| Uuid::nil())
}

fn parse_stored_date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .unwrap_or_else(|_| NaiveDate::from_ymd_opt(1970, 1, 1).unwrap_or_default())
}

fn track_type_str(t: TrackType) -> &'static str {
    match t {
        TrackType::Interval => "interval",
        TrackType::OneTime => "one_time",
        TrackType::DontAlert => "dont_alert",
    }
}

fn track_type_from(s: &str) -> TrackType {
    match s {
        "interval" => TrackType::Interval,
        "one_time" => TrackType::OneTime,
        _ => TrackType::DontAlert,
    }
}

fn item_type_str(t: ItemType) -> &'static str {
    match t {
        ItemType::Inspection => "inspection",
        ItemType::ServiceBulletin => "service_bulletin",
        ItemType::AirworthinessDirective => "airworthiness_directive",
        ItemType::ComponentReplacement => "component_replacement",
        ItemType::Overhaul => "overhaul",
        ItemType::LifeLimitedPart => "life_limited_part",
        ItemType::Other => "other",
    }
}

fn item_type_from(s: &str) -> ItemType {
    match s {
        "inspection" => ItemType::Inspection,
        "service_bulletin" => ItemType::ServiceBulletin,
        "airworthiness_directive" => ItemType::AirworthinessDirective,
        "component_replacement" => ItemType::ComponentReplacement,
        "overhaul" => ItemType::Overhaul,
        "life_limited_part" => ItemType::LifeLimitedPart,
        _ => ItemType::Other,
    }
}

fn interval_type_str(t: DaysIntervalType) -> &'static str {
    match t {
        DaysIntervalType::Days => "days",
        DaysIntervalType::MonthsSpecificDay => "months_specific_day",
        DaysIntervalType::MonthsEom => "months_eom",
        DaysIntervalType::YearsSpecificDay => "years_specific_day",
    }
}

fn interval_type_from(s: &str) -> Option<DaysIntervalType> {
    match s {
        "days" => Some(DaysIntervalType::Days),
        "months_specific_day" => Some(DaysIntervalType::MonthsSpecificDay),
        "months_eom" => Some(DaysIntervalType::MonthsEom),
        "years_specific_day" => Some(DaysIntervalType::YearsSpecificDay),
        _ => None,
    }
}
