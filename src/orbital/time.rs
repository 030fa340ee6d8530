//! Scaled simulation time

use bevy::prelude::*;

use crate::core::SolarConfig;

/// Galaxy time advances this much per second of scaled time.
pub const GALAXY_TIME_RATE: f64 = 0.06;

/// Simulation clock resource
///
/// `scaled_secs` is the absolute scaled time every body angle is derived
/// from; `galaxy_secs` drives the slow drift of the whole system.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct SimulationClock {
    pub scaled_secs: f64,
    pub galaxy_secs: f64,
    pub time_scale: f32,
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self {
            scaled_secs: 0.0,
            galaxy_secs: 0.0,
            time_scale: 1.0,
        }
    }
}

impl SimulationClock {
    pub fn from_config(config: &SolarConfig) -> Self {
        Self {
            time_scale: config.default_time_scale(),
            ..default()
        }
    }

    /// Advance by a real-time delta. Negative or non-finite input is ignored.
    pub fn advance(&mut self, delta_secs: f32) {
        let scaled = delta_secs as f64 * self.time_scale as f64;
        if !scaled.is_finite() || scaled <= 0.0 {
            return;
        }
        self.scaled_secs += scaled;
        self.galaxy_secs += GALAXY_TIME_RATE * scaled;
    }
}

/// The selectable time-speed presets and which one is active.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct TimeControl {
    pub presets: Vec<f32>,
    pub active: usize,
}

impl TimeControl {
    pub fn from_config(config: &SolarConfig) -> Self {
        Self {
            presets: config.time_presets.clone(),
            active: config.default_preset,
        }
    }

    /// Activate a preset, returning its multiplier. Out of range is a no-op.
    pub fn select(&mut self, index: usize) -> Option<f32> {
        let speed = *self.presets.get(index)?;
        self.active = index;
        Some(speed)
    }
}

/// System to advance the simulation clock by the frame delta
pub fn advance_simulation_clock(time: Res<Time>, mut clock: ResMut<SimulationClock>) {
    clock.advance(time.delta_secs());
}
