//! Scene bootstrap
//!
//! Runs once after the texture batch settles and builds the full body
//! hierarchy from the catalog. Nothing is added or removed afterwards.

use bevy::light::NotShadowCaster;
use bevy::math::primitives::Annulus;
use bevy::prelude::*;
use std::f32::consts::FRAC_PI_2;

use crate::bodies::catalog::{STARS_TEXTURE, SunSpec};
use crate::bodies::{
    BodyCatalog, BodyId, Decoration, DecorationKind, MoonSpec, PlanetSpec, SUN_ID, display_name,
    hex_color,
};
use crate::scene::visibility::{VisibilitySettings, visibility_for};
use crate::scene::{
    DecorationLayer, MoonPivot, MoonSurface, OrbitRing, PlanetGroup, PlanetSurface,
    SolarSystemRoot, StarField, Sun,
};
use crate::textures::TextureLibrary;

const ORBIT_RING_HALF_WIDTH: f32 = 0.2;
const ORBIT_RING_COLOR: u32 = 0x888888;
const STAR_SPHERE_RADIUS: f32 = 1500.0;
const STAR_COUNT: usize = 2000;
const STAR_FIELD_EXTENT: f32 = 1000.0;
const STAR_SEED: u32 = 0x5eed_1234;

/// Meshes and materials being built for the scene.
struct SceneBuilder<'a, 'w, 's> {
    commands: Commands<'w, 's>,
    meshes: &'a mut Assets<Mesh>,
    materials: &'a mut Assets<StandardMaterial>,
    library: &'a TextureLibrary,
    catalog: &'a BodyCatalog,
    settings: VisibilitySettings,
}

pub fn spawn_solar_system(
    commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    library: Res<TextureLibrary>,
    catalog: Res<BodyCatalog>,
    settings: Res<VisibilitySettings>,
) {
    let mut builder = SceneBuilder {
        commands,
        meshes: &mut meshes,
        materials: &mut materials,
        library: &library,
        catalog: &catalog,
        settings: *settings,
    };

    let root = builder
        .commands
        .spawn((
            SolarSystemRoot,
            Transform::default(),
            Visibility::default(),
            Name::new("Solar System"),
        ))
        .id();

    builder.spawn_sun(&catalog.sun, root);
    for planet in &catalog.planets {
        builder.spawn_planet(planet, root);
        builder.spawn_orbit_ring(planet, root);
    }
    builder.spawn_star_field();

    info!(
        "Solar system built: {} planets, {} moons",
        catalog.planets.len(),
        catalog.moons.len()
    );
}

impl SceneBuilder<'_, '_, '_> {
    fn spawn_sun(&mut self, sun: &SunSpec, root: Entity) {
        let mut material = self
            .library
            .surface_material(sun.texture, hex_color(sun.color));
        material.unlit = true;

        self.commands.spawn((
            Sun,
            BodyId(SUN_ID),
            Mesh3d(self.meshes.add(Sphere::new(sun.radius).mesh().uv(64, 32))),
            MeshMaterial3d(self.materials.add(material)),
            Transform::default(),
            NotShadowCaster,
            Name::new("Sun"),
            ChildOf(root),
        ));

        self.commands.spawn((
            PointLight {
                intensity: 2.0e8,
                range: 1000.0,
                radius: sun.radius,
                shadows_enabled: true,
                ..default()
            },
            Transform::default(),
            Name::new("Sun Light"),
            ChildOf(root),
        ));
    }

    fn spawn_planet(&mut self, planet: &PlanetSpec, root: Entity) {
        let group = self
            .commands
            .spawn((
                PlanetGroup,
                BodyId(planet.id),
                Transform::from_xyz(planet.distance, 0.0, 0.0),
                Visibility::default(),
                Name::new(display_name(planet.id)),
                ChildOf(root),
            ))
            .id();

        let material = self
            .library
            .surface_material(planet.texture, hex_color(planet.color));
        self.commands.spawn((
            PlanetSurface,
            BodyId(planet.id),
            Mesh3d(self.meshes.add(Sphere::new(planet.radius).mesh().uv(64, 32))),
            MeshMaterial3d(self.materials.add(material)),
            Transform::default(),
            ChildOf(group),
        ));

        for decoration in planet.decorations {
            self.spawn_decoration(planet, decoration, group);
        }

        let catalog = self.catalog;
        for moon_id in planet.moons {
            let Some(moon) = catalog.moon(moon_id) else {
                warn!("{} lists unknown moon {}; skipping", planet.id, moon_id);
                continue;
            };
            self.spawn_moon(moon, group);
        }
    }

    fn spawn_decoration(&mut self, planet: &PlanetSpec, decoration: &Decoration, group: Entity) {
        let Some(texture) = self.library.texture(decoration.texture) else {
            debug!(
                "{} decoration {} unavailable; skipping",
                planet.id, decoration.texture
            );
            return;
        };

        let radius = planet.radius * decoration.scale;
        let (mesh, transform) = match decoration.kind {
            DecorationKind::Shell => (
                self.meshes.add(Sphere::new(radius).mesh().uv(64, 32)),
                Transform::default(),
            ),
            DecorationKind::Ring { inner, outer } => (
                self.meshes
                    .add(Annulus::new(radius * inner, radius * outer).mesh().resolution(64)),
                Transform::from_rotation(Quat::from_rotation_x(-FRAC_PI_2)),
            ),
        };

        let material = StandardMaterial {
            base_color: Color::WHITE.with_alpha(decoration.opacity),
            base_color_texture: Some(texture),
            alpha_mode: AlphaMode::Blend,
            perceptual_roughness: 1.0,
            cull_mode: None,
            double_sided: true,
            ..default()
        };

        self.commands.spawn((
            DecorationLayer,
            Mesh3d(mesh),
            MeshMaterial3d(self.materials.add(material)),
            transform,
            NotShadowCaster,
            ChildOf(group),
        ));
    }

    fn spawn_moon(&mut self, moon: &MoonSpec, group: Entity) {
        let pivot = self
            .commands
            .spawn((
                MoonPivot,
                BodyId(moon.id),
                Transform::default(),
                Visibility::default(),
                Name::new(display_name(moon.id)),
                ChildOf(group),
            ))
            .id();

        let material = self
            .library
            .surface_material(moon.texture, hex_color(moon.color));
        self.commands.spawn((
            MoonSurface,
            BodyId(moon.id),
            Mesh3d(self.meshes.add(Sphere::new(moon.radius).mesh().uv(32, 16))),
            MeshMaterial3d(self.materials.add(material)),
            Transform::from_xyz(moon.distance, 0.0, 0.0),
            visibility_for(self.settings.show_moons),
            ChildOf(pivot),
        ));
    }

    fn spawn_orbit_ring(&mut self, planet: &PlanetSpec, root: Entity) {
        let inner = (planet.distance - ORBIT_RING_HALF_WIDTH).max(0.0);
        let outer = planet.distance + ORBIT_RING_HALF_WIDTH;
        let material = StandardMaterial {
            base_color: hex_color(ORBIT_RING_COLOR).with_alpha(0.5),
            alpha_mode: AlphaMode::Blend,
            unlit: true,
            cull_mode: None,
            double_sided: true,
            ..default()
        };

        self.commands.spawn((
            OrbitRing,
            Mesh3d(self.meshes.add(Annulus::new(inner, outer).mesh().resolution(128))),
            MeshMaterial3d(self.materials.add(material)),
            Transform::from_rotation(Quat::from_rotation_x(-FRAC_PI_2)),
            visibility_for(self.settings.show_orbits),
            NotShadowCaster,
            Name::new(format!("{} Orbit", display_name(planet.id))),
            ChildOf(root),
        ));
    }

    /// Milky Way background sphere plus scattered point stars. Not parented
    /// to the root, so it stays fixed while the system drifts.
    fn spawn_star_field(&mut self) {
        let texture = self.library.texture(STARS_TEXTURE);
        let base_color = if texture.is_some() {
            Color::WHITE
        } else {
            hex_color(0x111111)
        };
        let sphere_material = StandardMaterial {
            base_color: base_color.with_alpha(0.8),
            base_color_texture: texture,
            alpha_mode: AlphaMode::Blend,
            unlit: true,
            cull_mode: None,
            double_sided: true,
            ..default()
        };
        self.commands.spawn((
            StarField,
            Mesh3d(self.meshes.add(Sphere::new(STAR_SPHERE_RADIUS).mesh().uv(64, 32))),
            MeshMaterial3d(self.materials.add(sphere_material)),
            Transform::default(),
            NotShadowCaster,
            Name::new("Star Sphere"),
        ));

        let star_mesh = self.meshes.add(Sphere::new(0.25).mesh().uv(8, 6));
        let star_material = self.materials.add(StandardMaterial {
            base_color: Color::WHITE.with_alpha(0.6),
            alpha_mode: AlphaMode::Blend,
            unlit: true,
            ..default()
        });
        for position in star_positions(STAR_COUNT, STAR_SEED) {
            self.commands.spawn((
                StarField,
                Mesh3d(star_mesh.clone()),
                MeshMaterial3d(star_material.clone()),
                Transform::from_translation(position),
                NotShadowCaster,
            ));
        }
    }
}

/// Deterministic star positions in a cube of side `STAR_FIELD_EXTENT`
/// centred on the origin.
/// Simple LCG so the sky is identical between runs without an RNG crate.
pub fn star_positions(count: usize, seed: u32) -> Vec<Vec3> {
    let mut state = seed;
    let mut next = move || {
        state = state.wrapping_mul(1664525).wrapping_add(1013904223);
        (state as f32 / u32::MAX as f32 - 0.5) * STAR_FIELD_EXTENT
    };
    (0..count)
        .map(|_| {
            let x = next();
            let y = next();
            let z = next();
            Vec3::new(x, y, z)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_positions_deterministic_and_bounded() {
        let a = star_positions(STAR_COUNT, STAR_SEED);
        let b = star_positions(STAR_COUNT, STAR_SEED);
        assert_eq!(a.len(), STAR_COUNT);
        assert_eq!(a, b);

        let half = STAR_FIELD_EXTENT / 2.0;
        assert!(a.iter().all(|p| p.abs().max_element() <= half));
        assert_ne!(a[0], a[1]);
    }

    #[test]
    fn test_different_seeds_differ() {
        assert_ne!(star_positions(4, 1), star_positions(4, 2));
    }
}
