//! Orbital animation module
//!
//! This module owns the simulation clock and the per-frame update that
//! places planets and moons and spins every body.

use bevy::prelude::*;

use crate::core::{AppState, SolarConfig};

pub mod motion;
pub mod time;

pub use time::{SimulationClock, TimeControl, advance_simulation_clock};

/// Frame phases, run in this order.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    Clock,
    Animate,
    Camera,
}

/// Plugin for the simulation clock and body animation
pub struct OrbitalPlugin;

impl Plugin for OrbitalPlugin {
    fn build(&self, app: &mut App) {
        let config = app
            .world()
            .get_resource::<SolarConfig>()
            .cloned()
            .unwrap_or_default();

        app.insert_resource(SimulationClock::from_config(&config))
            .insert_resource(TimeControl::from_config(&config))
            .configure_sets(
                Update,
                (
                    SimulationSet::Clock,
                    SimulationSet::Animate,
                    SimulationSet::Camera,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    advance_simulation_clock.in_set(SimulationSet::Clock),
                    (
                        motion::drift_solar_system,
                        motion::spin_sun,
                        motion::orbit_planets,
                        motion::spin_planets,
                        motion::orbit_moons,
                    )
                        .in_set(SimulationSet::Animate),
                )
                    .run_if(in_state(AppState::Running)),
            );
    }
}
