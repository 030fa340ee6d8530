//! Celestial body data
//!
//! The sun, planet and moon tables, their decorations and the descriptive
//! facts shown in the info overlay.

use bevy::prelude::*;

pub mod catalog;

pub use catalog::{
    BodyCatalog, Decoration, DecorationKind, MoonSpec, PlanetSpec, SUN_ID, display_name,
    hex_color,
};

/// Name of a body, attached to every entity that represents one.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BodyId(pub &'static str);

/// Plugin registering the body catalog
pub struct BodiesPlugin;

impl Plugin for BodiesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BodyCatalog>();
    }
}
