//! Orbit ring and moon visibility toggles

use bevy::prelude::*;

use crate::core::SolarConfig;
use crate::scene::{MoonSurface, OrbitRing};

#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilitySettings {
    pub show_orbits: bool,
    pub show_moons: bool,
}

impl Default for VisibilitySettings {
    fn default() -> Self {
        Self {
            show_orbits: true,
            show_moons: true,
        }
    }
}

impl VisibilitySettings {
    pub fn from_config(config: &SolarConfig) -> Self {
        Self {
            show_orbits: config.show_orbits,
            show_moons: config.show_moons,
        }
    }
}

pub fn visibility_for(shown: bool) -> Visibility {
    if shown {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    }
}

/// Push the current flags onto every ring and moon mesh.
pub fn apply_visibility_settings(
    settings: Res<VisibilitySettings>,
    mut rings: Query<&mut Visibility, (With<OrbitRing>, Without<MoonSurface>)>,
    mut moons: Query<&mut Visibility, (With<MoonSurface>, Without<OrbitRing>)>,
) {
    let ring_visibility = visibility_for(settings.show_orbits);
    for mut visibility in &mut rings {
        visibility.set_if_neq(ring_visibility);
    }

    let moon_visibility = visibility_for(settings.show_moons);
    for mut visibility in &mut moons {
        visibility.set_if_neq(moon_visibility);
    }
}
