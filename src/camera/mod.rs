//! Camera module
//!
//! Free-fly and focus camera modes. Input systems run before the focus
//! follow so a reset requested this frame lands before rendering.

use bevy::prelude::*;

pub mod controller;
pub mod systems;

pub use controller::{CameraMode, CameraState, default_camera_transform};

use crate::orbital::SimulationSet;

/// Marker component for the main camera
#[derive(Component)]
pub struct MainCamera;

/// Plugin for camera controls
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraState>().add_systems(
            Update,
            (
                systems::free_fly_movement,
                systems::orbit_drag,
                systems::zoom_camera,
                systems::apply_camera_reset,
                systems::follow_focus_target,
            )
                .chain()
                .in_set(SimulationSet::Camera),
        );
    }
}
