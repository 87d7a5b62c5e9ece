//! Aeromx CLI - maintenance due tracking for small aviation operators

use aeromx_cli::{
    logging, print_aircraft_list, print_component_times, print_fleet_overview, print_status_table,
    print_tasks, Cli, Commands,
};
use aeromx_common::constants::DEFAULT_COMPONENT;
use aeromx_core::fleet::{evaluate_tasks, most_urgent};
use aeromx_core::models::{FlightLeg, TaskFilters};
use aeromx_core::{AeromxConfig, AeromxDatabase};
use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use uuid::Uuid;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = if let Some(db_path) = cli.database {
        AeromxConfig::new(db_path, cli.fallback_to_default)
    } else {
        AeromxConfig::from_env()
    };

    tracing::debug!(path = %config.get_effective_database_path()?.display(), "opening database");
    let mut db = AeromxDatabase::with_config(&config)?;
    let today = Utc::now().date_naive();
    let stdout = &mut std::io::stdout();

    match cli.command {
        Commands::Aircraft => {
            let aircraft = db.get_aircraft_list()?;
            print_aircraft_list(&aircraft, stdout)?;
        }
        Commands::Status { tail } => {
            let aircraft = db.get_aircraft_by_tail(&tail)?;
            let tasks = db.get_tasks(&TaskFilters {
                aircraft_uuid: Some(aircraft.uuid),
                ..Default::default()
            })?;
            let times = db.get_component_times(aircraft.uuid)?;
            let evaluated = evaluate_tasks(&tasks, &times, DEFAULT_COMPONENT, today);
            print_status_table(&evaluated, stdout)?;
        }
        Commands::Fleet => {
            let fleet = db.get_aircraft_list()?;
            let mut rows = Vec::with_capacity(fleet.len());
            for aircraft in fleet {
                let tasks = db.get_tasks(&TaskFilters {
                    aircraft_uuid: Some(aircraft.uuid),
                    ..Default::default()
                })?;
                let times = db.get_component_times(aircraft.uuid)?;
                let urgent = most_urgent(&tasks, &times, DEFAULT_COMPONENT, today).map(|item| {
                    (
                        item.task.title.clone(),
                        item.status.text.clone(),
                        item.status.classification.to_string(),
                    )
                });
                rows.push((aircraft, urgent));
            }
            print_fleet_overview(&rows, stdout)?;
        }
        Commands::Tasks {
            tail,
            active,
            search,
            limit,
        } => {
            let aircraft = db.get_aircraft_by_tail(&tail)?;
            let tasks = db.get_tasks(&TaskFilters {
                aircraft_uuid: Some(aircraft.uuid),
                active: active.then_some(true),
                search_query: search,
                limit,
                ..Default::default()
            })?;
            print_tasks(&tasks, stdout)?;
        }
        Commands::LogLeg {
            tail,
            date,
            hours,
            apu_hours,
            notes,
        } => {
            let aircraft = db.get_aircraft_by_tail(&tail)?;
            let leg = FlightLeg {
                uuid: Uuid::new_v4(),
                aircraft_uuid: aircraft.uuid,
                date: date.unwrap_or(today),
                flight_hours: hours,
                apu_hours,
                notes,
            };
            db.record_flight_leg(&leg)?;
            let times = db.get_component_times(aircraft.uuid)?;
            print_component_times(&times, stdout)?;
        }
        Commands::Times { tail } => {
            let aircraft = db.get_aircraft_by_tail(&tail)?;
            let times = db.get_component_times(aircraft.uuid)?;
            print_component_times(&times, stdout)?;
        }
    }

    Ok(())
}
