//! Scene hierarchy markers

use bevy::prelude::*;

/// Root frame that drifts through the galaxy; parent of everything below.
#[derive(Component)]
pub struct SolarSystemRoot;

#[derive(Component)]
pub struct Sun;

/// Positioned on the planet's orbit. Parent of the surface, decorations and
/// moon pivots.
#[derive(Component)]
pub struct PlanetGroup;

/// The spinning planet mesh.
#[derive(Component)]
pub struct PlanetSurface;

/// Rotating frame carrying one moon around its planet.
#[derive(Component)]
pub struct MoonPivot;

/// The moon mesh, offset from its pivot by the orbit distance.
#[derive(Component)]
pub struct MoonSurface;

#[derive(Component)]
pub struct OrbitRing;

/// Clouds, atmosphere or ring layer attached to a planet group.
#[derive(Component)]
pub struct DecorationLayer;

/// Background sphere and point stars.
#[derive(Component)]
pub struct StarField;
