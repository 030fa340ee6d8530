//! Camera state and the math behind each control.
//!
//! Free-fly orbiting uses spherical coordinates about the world origin with
//! the polar angle measured from +Y and the azimuth from +Z toward +X.

use bevy::prelude::*;
use std::f32::consts::{FRAC_PI_2, PI};

use crate::bodies::BodyId;

pub const DEFAULT_CAMERA_POSITION: Vec3 = Vec3::new(0.0, 50.0, 150.0);
/// Polar angle keeps at least this far from either pole.
pub const MIN_POLAR_ANGLE: f32 = 0.1;
pub const SUN_FOCUS_OFFSET: Vec3 = Vec3::new(0.0, 5.0, 15.0);
/// Minimum focus distance for small planets.
pub const MIN_FOCUS_DISTANCE: f32 = 8.0;
/// Zoom distance per wheel line.
pub const WHEEL_LINE_STEP: f32 = 10.0;
/// Zoom distance per wheel pixel.
pub const WHEEL_PIXEL_STEP: f32 = 0.1;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CameraMode {
    #[default]
    FreeFly,
    Focused(BodyId),
}

/// Active camera mode plus a one-shot request to restore the default pose.
#[derive(Resource, Debug, Default)]
pub struct CameraState {
    pub mode: CameraMode,
    pub pending_reset: bool,
}

impl CameraState {
    pub fn focused(&self) -> Option<BodyId> {
        match self.mode {
            CameraMode::Focused(id) => Some(id),
            CameraMode::FreeFly => None,
        }
    }

    /// Focus `id`, or return to free flight if it is already focused.
    pub fn toggle_focus(&mut self, id: BodyId) {
        if self.focused() == Some(id) {
            self.release();
        } else {
            self.mode = CameraMode::Focused(id);
        }
    }

    /// Back to free flight at the default pose.
    pub fn release(&mut self) {
        self.mode = CameraMode::FreeFly;
        self.pending_reset = true;
    }
}

pub fn default_camera_transform() -> Transform {
    Transform::from_translation(DEFAULT_CAMERA_POSITION).looking_at(Vec3::ZERO, Vec3::Y)
}

/// World-space offset from a planet to the focused camera; larger planets
/// are viewed from further away.
pub fn planet_focus_offset(radius: f32) -> Vec3 {
    Vec3::new(
        0.0,
        radius * 3.0,
        (radius * 8.0).max(MIN_FOCUS_DISTANCE),
    )
}

/// Camera pose looking at a point given in the root frame's local space.
/// The offset is applied in world space and does not follow the root's
/// rotation.
pub fn focus_pose(root: &Transform, local_target: Vec3, offset: Vec3) -> Transform {
    let target = root.transform_point(local_target);
    Transform::from_translation(target + offset).looking_at(target, Vec3::Y)
}

/// Snapshot of the latched movement keys for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MovementKeys {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl MovementKeys {
    pub fn from_input(keys: &ButtonInput<KeyCode>) -> Self {
        Self {
            forward: keys.pressed(KeyCode::KeyW),
            back: keys.pressed(KeyCode::KeyS),
            left: keys.pressed(KeyCode::KeyA),
            right: keys.pressed(KeyCode::KeyD),
            up: keys.pressed(KeyCode::Space),
            down: keys.any_pressed([KeyCode::ControlLeft, KeyCode::ControlRight]),
        }
    }

    pub fn any(&self) -> bool {
        self.forward || self.back || self.left || self.right || self.up || self.down
    }
}

/// Translation for one frame of free flight. Forward/back follow the view
/// direction, left/right the horizontal right vector, up/down world Y.
pub fn free_fly_translation(forward: Vec3, keys: MovementKeys, step: f32) -> Vec3 {
    let forward = forward.normalize_or_zero();
    let right = forward.cross(Vec3::Y).normalize_or_zero();

    let mut movement = Vec3::ZERO;
    if keys.forward {
        movement += forward * step;
    }
    if keys.back {
        movement -= forward * step;
    }
    if keys.right {
        movement += right * step;
    }
    if keys.left {
        movement -= right * step;
    }
    if keys.up {
        movement += Vec3::Y * step;
    }
    if keys.down {
        movement -= Vec3::Y * step;
    }
    movement
}

pub fn clamp_polar(polar: f32) -> f32 {
    if !polar.is_finite() {
        return FRAC_PI_2;
    }
    polar.clamp(MIN_POLAR_ANGLE, PI - MIN_POLAR_ANGLE)
}

/// Polar angle of a position about the origin, measured from +Y.
pub fn polar_angle(position: Vec3) -> f32 {
    let radius = position.length();
    if radius <= f32::EPSILON {
        return FRAC_PI_2;
    }
    (position.y / radius).clamp(-1.0, 1.0).acos()
}

/// Rotate a position about the origin by a mouse drag (pixels).
pub fn orbit_about_origin(position: Vec3, drag: Vec2, sensitivity: f32) -> Vec3 {
    let radius = position.length();
    if radius <= f32::EPSILON {
        return position;
    }

    let azimuth = position.x.atan2(position.z) - drag.x * sensitivity;
    let polar = clamp_polar(polar_angle(position) + drag.y * sensitivity);

    let (sin_polar, cos_polar) = polar.sin_cos();
    let (sin_azimuth, cos_azimuth) = azimuth.sin_cos();
    Vec3::new(
        radius * sin_polar * sin_azimuth,
        radius * cos_polar,
        radius * sin_polar * cos_azimuth,
    )
}

/// Move along the ray from the origin, keeping the distance in [min, max].
pub fn zoom_about_origin(position: Vec3, delta: f32, min: f32, max: f32) -> Vec3 {
    let distance = position.length();
    let direction = if distance > f32::EPSILON {
        position / distance
    } else {
        Vec3::Z
    };
    direction * (distance + delta).clamp(min, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EARTH: BodyId = BodyId("earth");
    const MARS: BodyId = BodyId("mars");

    /// Small deterministic sequence in [-1, 1).
    fn pseudo_random(count: usize, mut seed: u32) -> Vec<f32> {
        (0..count)
            .map(|_| {
                seed = seed.wrapping_mul(1664525).wrapping_add(1013904223);
                seed as f32 / u32::MAX as f32 * 2.0 - 1.0
            })
            .collect()
    }

    #[test]
    fn test_toggle_focus_semantics() {
        let mut state = CameraState::default();
        assert_eq!(state.mode, CameraMode::FreeFly);

        state.toggle_focus(EARTH);
        assert_eq!(state.focused(), Some(EARTH));
        assert!(!state.pending_reset);

        state.toggle_focus(MARS);
        assert_eq!(state.focused(), Some(MARS));
        assert!(!state.pending_reset);

        state.toggle_focus(MARS);
        assert_eq!(state.mode, CameraMode::FreeFly);
        assert!(state.pending_reset);
    }

    #[test]
    fn test_polar_angle_never_reaches_poles() {
        let values = pseudo_random(4000, 7);
        let mut position = DEFAULT_CAMERA_POSITION;
        for pair in values.chunks(2) {
            // Large drags to slam into both clamps repeatedly.
            let drag = Vec2::new(pair[0] * 400.0, pair[1] * 400.0);
            position = orbit_about_origin(position, drag, 0.01);
            let polar = polar_angle(position);
            assert!(polar > 0.0 && polar < PI, "polar {polar}");
            assert!(polar >= MIN_POLAR_ANGLE - 1e-3);
            assert!(polar <= PI - MIN_POLAR_ANGLE + 1e-3);
        }
    }

    #[test]
    fn test_orbit_preserves_radius() {
        let start = DEFAULT_CAMERA_POSITION;
        let moved = orbit_about_origin(start, Vec2::new(35.0, -12.0), 0.01);
        assert!((moved.length() - start.length()).abs() < 1e-3);
    }

    #[test]
    fn test_zoom_distance_stays_in_range() {
        let values = pseudo_random(1000, 99);
        let mut position = DEFAULT_CAMERA_POSITION;
        for v in values {
            position = zoom_about_origin(position, v * 300.0, 10.0, 500.0);
            let distance = position.length();
            assert!((10.0 - 1e-3..=500.0 + 1e-3).contains(&distance), "{distance}");
        }
    }

    #[test]
    fn test_zoom_from_origin_is_defined() {
        let position = zoom_about_origin(Vec3::ZERO, 5.0, 10.0, 500.0);
        assert_eq!(position, Vec3::new(0.0, 0.0, 10.0));
    }

    #[test]
    fn test_free_fly_translation() {
        let forward = Vec3::NEG_Z;
        let keys = MovementKeys {
            forward: true,
            right: true,
            up: true,
            ..default()
        };
        let movement = free_fly_translation(forward, keys, 2.0);
        assert!(movement.abs_diff_eq(Vec3::new(2.0, 2.0, -2.0), 1e-6));

        let opposed = MovementKeys {
            forward: true,
            back: true,
            ..default()
        };
        assert_eq!(free_fly_translation(forward, opposed, 2.0), Vec3::ZERO);
        assert_eq!(
            free_fly_translation(forward, MovementKeys::default(), 2.0),
            Vec3::ZERO
        );
    }

    #[test]
    fn test_planet_focus_offset_scales_with_radius() {
        assert_eq!(planet_focus_offset(0.5), Vec3::new(0.0, 1.5, 8.0));
        assert_eq!(planet_focus_offset(5.0), Vec3::new(0.0, 15.0, 40.0));
    }

    #[test]
    fn test_focus_offset_is_fixed_in_world_space() {
        let root = Transform::from_xyz(3.0, 0.0, 4.0).with_rotation(Quat::from_rotation_y(1.1));
        let offset = planet_focus_offset(1.0);

        for local in [Vec3::new(25.0, 0.0, 0.0), Vec3::new(0.0, 0.0, -25.0)] {
            let pose = focus_pose(&root, local, offset);
            let target = root.transform_point(local);
            assert!((pose.translation - target).abs_diff_eq(offset, 1e-4));
            assert!(pose.forward().as_vec3().abs_diff_eq(-offset.normalize(), 1e-4));
        }
    }

    #[test]
    fn test_movement_keys_from_input() {
        let mut input = ButtonInput::<KeyCode>::default();
        input.press(KeyCode::KeyW);
        input.press(KeyCode::ControlRight);
        let keys = MovementKeys::from_input(&input);
        assert!(keys.forward && keys.down);
        assert!(!keys.back && !keys.up);
        assert!(keys.any());
    }
}
