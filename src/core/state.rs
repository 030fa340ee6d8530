//! Top-level application state.

use bevy::prelude::*;

/// The scene is only built once every texture request has settled.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AppState {
    #[default]
    Loading,
    Running,
}
