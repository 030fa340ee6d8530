//! Camera input and focus-follow systems

use bevy::input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll, MouseScrollUnit};
use bevy::prelude::*;

use crate::bodies::{BodyCatalog, BodyId, SUN_ID};
use crate::camera::MainCamera;
use crate::camera::controller::{
    CameraState, MovementKeys, SUN_FOCUS_OFFSET, WHEEL_LINE_STEP, WHEEL_PIXEL_STEP,
    default_camera_transform, focus_pose, free_fly_translation, orbit_about_origin,
    planet_focus_offset, zoom_about_origin,
};
use crate::core::SolarConfig;
use crate::scene::{PlanetGroup, SolarSystemRoot};

/// The main camera, disjoint from the scene transforms read alongside it.
type CameraFilter = (
    With<MainCamera>,
    Without<SolarSystemRoot>,
    Without<PlanetGroup>,
);

/// True while the pointer is over (or pressing) any UI button; mouse
/// drags and wheel steps there belong to the panel, not the camera.
fn pointer_over_ui(interactions: &Query<&Interaction>) -> bool {
    interactions
        .iter()
        .any(|interaction| *interaction != Interaction::None)
}

/// WASD / Space / Ctrl translation while flying freely.
pub fn free_fly_movement(
    time: Res<Time>,
    keys: Res<ButtonInput<KeyCode>>,
    state: Res<CameraState>,
    config: Res<SolarConfig>,
    mut camera: Single<&mut Transform, CameraFilter>,
) {
    if state.focused().is_some() {
        return;
    }
    let movement = MovementKeys::from_input(&keys);
    if !movement.any() {
        return;
    }

    let step = config.camera_speed * time.delta_secs();
    let forward = camera.forward().as_vec3();
    camera.translation += free_fly_translation(forward, movement, step);
}

/// Left-drag orbits the camera about the origin.
pub fn orbit_drag(
    buttons: Res<ButtonInput<MouseButton>>,
    motion: Res<AccumulatedMouseMotion>,
    state: Res<CameraState>,
    config: Res<SolarConfig>,
    interactions: Query<&Interaction>,
    mut camera: Single<&mut Transform, CameraFilter>,
) {
    if state.focused().is_some() || !buttons.pressed(MouseButton::Left) {
        return;
    }
    if pointer_over_ui(&interactions) {
        return;
    }
    if motion.delta == Vec2::ZERO {
        return;
    }

    camera.translation =
        orbit_about_origin(camera.translation, motion.delta, config.drag_sensitivity);
    camera.look_at(Vec3::ZERO, Vec3::Y);
}

/// Wheel moves the camera toward or away from the origin.
pub fn zoom_camera(
    scroll: Res<AccumulatedMouseScroll>,
    state: Res<CameraState>,
    config: Res<SolarConfig>,
    interactions: Query<&Interaction>,
    mut camera: Single<&mut Transform, CameraFilter>,
) {
    if state.focused().is_some() || pointer_over_ui(&interactions) {
        return;
    }
    // Scrolling down (negative y) zooms out.
    let delta = match scroll.unit {
        MouseScrollUnit::Line => -scroll.delta.y * WHEEL_LINE_STEP,
        MouseScrollUnit::Pixel => -scroll.delta.y * WHEEL_PIXEL_STEP,
    };
    if delta == 0.0 {
        return;
    }

    camera.translation = zoom_about_origin(
        camera.translation,
        delta,
        config.min_zoom_distance,
        config.max_zoom_distance,
    );
}

pub fn apply_camera_reset(
    mut state: ResMut<CameraState>,
    mut camera: Single<&mut Transform, CameraFilter>,
) {
    if !state.pending_reset {
        return;
    }
    state.pending_reset = false;
    **camera = default_camera_transform();
}

/// Place the camera at the focused body's world position plus its offset.
pub fn follow_focus_target(
    state: Res<CameraState>,
    catalog: Res<BodyCatalog>,
    roots: Query<&Transform, With<SolarSystemRoot>>,
    groups: Query<(&BodyId, &Transform), With<PlanetGroup>>,
    mut camera: Single<&mut Transform, CameraFilter>,
) {
    let Some(id) = state.focused() else {
        return;
    };
    let Ok(root) = roots.single() else {
        return;
    };

    let (local_target, offset) = if id.0 == SUN_ID {
        (Vec3::ZERO, SUN_FOCUS_OFFSET)
    } else {
        let Some(planet) = catalog.planet(id.0) else {
            return;
        };
        let Some((_, group)) = groups.iter().find(|(group_id, _)| **group_id == id) else {
            return;
        };
        (group.translation, planet_focus_offset(planet.radius))
    };

    **camera = focus_pose(root, local_target, offset);
}
