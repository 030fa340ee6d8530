//! Scene module
//!
//! Builds the solar system hierarchy once textures are ready and keeps the
//! ring/moon visibility toggles applied.

use bevy::prelude::*;

use crate::core::{AppState, SolarConfig};

pub mod components;
pub mod spawn;
pub mod visibility;

pub use components::{
    DecorationLayer, MoonPivot, MoonSurface, OrbitRing, PlanetGroup, PlanetSurface,
    SolarSystemRoot, StarField, Sun,
};
pub use spawn::spawn_solar_system;
pub use visibility::{VisibilitySettings, apply_visibility_settings};

/// Plugin for scene construction and visibility
pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        let settings = app
            .world()
            .get_resource::<SolarConfig>()
            .map(VisibilitySettings::from_config)
            .unwrap_or_default();

        app.insert_resource(settings)
            .add_systems(OnEnter(AppState::Running), spawn_solar_system)
            .add_systems(
                Update,
                apply_visibility_settings.run_if(resource_changed::<VisibilitySettings>),
            );
    }
}
