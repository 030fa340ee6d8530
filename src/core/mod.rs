//! Configuration and application state shared by every plugin.

use bevy::prelude::*;

pub mod config;
pub mod state;

pub use config::SolarConfig;
pub use state::AppState;

/// Loads [`SolarConfig`] and registers [`AppState`].
///
/// Must be added after `DefaultPlugins` so the log subscriber exists and
/// before any plugin whose resources are built from the config.
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(SolarConfig::load_or_default())
            .init_state::<AppState>();
    }
}
