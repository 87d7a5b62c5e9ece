//! Flight-leg accumulation into component times
//!
//! When a leg is saved, tracked components gain usage additively: airframe,
//! engines, and propellers gain the leg's flight hours and one cycle; the APU
//! gains APU run hours only.

use crate::models::{ComponentTime, FlightLeg};
use std::collections::HashMap;

/// Whether a component accumulates flight hours and a cycle per leg
#[must_use]
pub fn accrues_flight_time(component: &str) -> bool {
    let name = component.trim().to_lowercase();
    name == "airframe" || name.starts_with("engine") || name.starts_with("propeller")
}

/// Whether a component accumulates APU run time per leg
#[must_use]
pub fn accrues_apu_time(component: &str) -> bool {
    component.trim().eq_ignore_ascii_case("apu")
}

/// Apply one flight leg to a component-time map in place
pub fn apply_leg(times: &mut HashMap<String, ComponentTime>, leg: &FlightLeg) {
    for (component, time) in times.iter_mut() {
        if accrues_flight_time(component) {
            time.time_hours += leg.flight_hours;
            time.cycles = time.cycles.saturating_add(1);
        } else if accrues_apu_time(component) {
            time.time_hours += leg.apu_hours;
        }
    }
}
