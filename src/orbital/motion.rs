//! Per-frame body animation
//!
//! Every angle is a pure function of the absolute clock, so the state at a
//! given time is the same whether it was reached in one step or many.

use bevy::prelude::*;
use std::f64::consts::TAU;

use crate::bodies::{BodyCatalog, BodyId};
use crate::orbital::SimulationClock;
use crate::scene::{MoonPivot, PlanetGroup, PlanetSurface, SolarSystemRoot, Sun};

/// Radius of the root frame's circular drift.
pub const DRIFT_AMPLITUDE: f64 = 5.0;
/// Angular frequency of the drift, per unit of galaxy time.
pub const DRIFT_FREQUENCY: f64 = 0.1;
/// Root frame yaw per unit of scaled time.
pub const SYSTEM_YAW_RATE: f64 = 0.06;
pub const SUN_SPIN_RATE: f64 = 0.6;
/// Orbit angle per unit of scaled time for a speed factor of 1.
pub const ORBIT_RATE: f64 = 0.1;
/// Self-rotation per unit of scaled time for a rotation factor of 1.
pub const SPIN_RATE: f64 = 1.2;
pub const MOON_ORBIT_RATE: f64 = 0.2;

/// Reduce to [0, 2π) before narrowing to f32.
pub fn wrap_angle(angle: f64) -> f32 {
    angle.rem_euclid(TAU) as f32
}

pub fn orbital_angle(scaled_secs: f64, orbit_speed: f32) -> f64 {
    scaled_secs * orbit_speed as f64 * ORBIT_RATE
}

pub fn spin_angle(scaled_secs: f64, rotation_speed: f32) -> f64 {
    scaled_secs * rotation_speed as f64 * SPIN_RATE
}

pub fn moon_angle(scaled_secs: f64, orbit_speed: f32) -> f64 {
    scaled_secs * orbit_speed as f64 * MOON_ORBIT_RATE
}

pub fn sun_spin_angle(scaled_secs: f64) -> f64 {
    scaled_secs * SUN_SPIN_RATE
}

pub fn system_yaw(scaled_secs: f64) -> f64 {
    scaled_secs * SYSTEM_YAW_RATE
}

/// Position on a circle of radius `distance` in the XZ plane.
pub fn orbital_position(distance: f32, angle: f64) -> Vec3 {
    let (sin, cos) = angle.sin_cos();
    let distance = distance as f64;
    Vec3::new((distance * cos) as f32, 0.0, (distance * sin) as f32)
}

/// Offset of the whole system as it drifts through the galaxy.
pub fn galaxy_drift(galaxy_secs: f64) -> Vec3 {
    let phase = galaxy_secs * DRIFT_FREQUENCY;
    Vec3::new(
        (DRIFT_AMPLITUDE * phase.sin()) as f32,
        0.0,
        (DRIFT_AMPLITUDE * phase.cos()) as f32,
    )
}

pub fn drift_solar_system(
    clock: Res<SimulationClock>,
    mut roots: Query<&mut Transform, With<SolarSystemRoot>>,
) {
    for mut transform in &mut roots {
        transform.translation = galaxy_drift(clock.galaxy_secs);
        transform.rotation = Quat::from_rotation_y(wrap_angle(system_yaw(clock.scaled_secs)));
    }
}

pub fn spin_sun(clock: Res<SimulationClock>, mut suns: Query<&mut Transform, With<Sun>>) {
    for mut transform in &mut suns {
        transform.rotation = Quat::from_rotation_y(wrap_angle(sun_spin_angle(clock.scaled_secs)));
    }
}

pub fn orbit_planets(
    clock: Res<SimulationClock>,
    catalog: Res<BodyCatalog>,
    mut groups: Query<(&BodyId, &mut Transform), With<PlanetGroup>>,
) {
    for (id, mut transform) in &mut groups {
        let Some(planet) = catalog.planet(id.0) else {
            continue;
        };
        let angle = orbital_angle(clock.scaled_secs, planet.orbit_speed);
        transform.translation = orbital_position(planet.distance, angle);
    }
}

pub fn spin_planets(
    clock: Res<SimulationClock>,
    catalog: Res<BodyCatalog>,
    mut surfaces: Query<(&BodyId, &mut Transform), With<PlanetSurface>>,
) {
    for (id, mut transform) in &mut surfaces {
        let Some(planet) = catalog.planet(id.0) else {
            continue;
        };
        let angle = spin_angle(clock.scaled_secs, planet.rotation_speed);
        transform.rotation = Quat::from_rotation_y(wrap_angle(angle));
    }
}

pub fn orbit_moons(
    clock: Res<SimulationClock>,
    catalog: Res<BodyCatalog>,
    mut pivots: Query<(&BodyId, &mut Transform), With<MoonPivot>>,
) {
    for (id, mut transform) in &mut pivots {
        let Some(moon) = catalog.moon(id.0) else {
            continue;
        };
        let angle = moon_angle(clock.scaled_secs, moon.orbit_speed);
        transform.rotation = Quat::from_rotation_y(wrap_angle(angle));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;

    #[test]
    fn test_orbital_angle_is_linear_in_time() {
        let earth = orbital_angle(10.0, 1.0);
        let mars = orbital_angle(10.0, 0.53);
        assert_eq!(earth, 10.0 * 1.0 * ORBIT_RATE);
        assert_eq!(mars, 10.0 * 0.53f32 as f64 * ORBIT_RATE);
        assert!((earth / mars - 1.0 / 0.53).abs() < 1e-6);
    }

    #[test]
    fn test_replay_matches_direct_evaluation() {
        let mut clock = SimulationClock::default();
        for _ in 0..200 {
            clock.advance(0.5);
        }
        assert_eq!(clock.scaled_secs, 100.0);

        let direct = SimulationClock {
            scaled_secs: 100.0,
            ..default()
        };
        for speed in [4.15, 1.0, 0.53, 0.006] {
            assert_eq!(
                orbital_angle(clock.scaled_secs, speed),
                orbital_angle(direct.scaled_secs, speed)
            );
            assert_eq!(
                orbital_position(35.0, orbital_angle(clock.scaled_secs, speed)),
                orbital_position(35.0, orbital_angle(direct.scaled_secs, speed))
            );
        }
    }

    #[test]
    fn test_total_angle_scales_with_time_scale() {
        let deltas = [0.016, 0.017, 0.033, 0.001, 0.25];
        let advanced = |time_scale: f32| {
            let mut clock = SimulationClock {
                time_scale,
                ..default()
            };
            for dt in deltas {
                clock.advance(dt);
            }
            clock
        };

        for (s1, s2) in [(1.0f32, 2.0f32), (0.1, 5.0), (3.0, 0.5)] {
            let a = advanced(s1);
            let b = advanced(s2);
            let expected = s1 as f64 / s2 as f64;
            let ratio_orbit = orbital_angle(a.scaled_secs, 1.0) / orbital_angle(b.scaled_secs, 1.0);
            let ratio_spin = spin_angle(a.scaled_secs, 2.4) / spin_angle(b.scaled_secs, 2.4);
            let ratio_moon = moon_angle(a.scaled_secs, 13.4) / moon_angle(b.scaled_secs, 13.4);
            let ratio_galaxy = a.galaxy_secs / b.galaxy_secs;
            for ratio in [ratio_orbit, ratio_spin, ratio_moon, ratio_galaxy] {
                assert!((ratio - expected).abs() < 1e-9, "{ratio} != {expected}");
            }
        }
    }

    #[test]
    fn test_orbital_position_on_circle() {
        let p = orbital_position(25.0, 0.0);
        assert_eq!(p, Vec3::new(25.0, 0.0, 0.0));
        let q = orbital_position(25.0, std::f64::consts::FRAC_PI_2);
        assert!(q.x.abs() < 1e-5);
        assert!((q.z - 25.0).abs() < 1e-5);
        assert!((orbital_position(15.0, 1.234).length() - 15.0).abs() < 1e-4);
    }

    #[test]
    fn test_wrap_angle_range() {
        for angle in [-10.0, 0.0, TAU, 1e7, 123.456] {
            let wrapped = wrap_angle(angle);
            assert!((0.0..=TAU as f32).contains(&wrapped));
        }
    }

    #[test]
    fn test_galaxy_drift_radius() {
        assert_eq!(galaxy_drift(0.0), Vec3::new(0.0, 0.0, 5.0));
        assert!((galaxy_drift(42.0).length() - DRIFT_AMPLITUDE as f32).abs() < 1e-5);
    }

    #[test]
    fn test_orbit_planets_skips_unknown_bodies() {
        let mut world = World::new();
        world.insert_resource(SimulationClock {
            scaled_secs: 10.0,
            ..default()
        });
        world.insert_resource(BodyCatalog::default());

        let earth = world
            .spawn((PlanetGroup, BodyId("earth"), Transform::default()))
            .id();
        let vulcan = world
            .spawn((
                PlanetGroup,
                BodyId("vulcan"),
                Transform::from_xyz(1.0, 2.0, 3.0),
            ))
            .id();

        world.run_system_once(orbit_planets).unwrap();

        let expected = orbital_position(25.0, orbital_angle(10.0, 1.0));
        assert_eq!(world.get::<Transform>(earth).unwrap().translation, expected);
        assert_eq!(
            world.get::<Transform>(vulcan).unwrap().translation,
            Vec3::new(1.0, 2.0, 3.0)
        );
    }

    #[test]
    fn test_moon_pivot_rotation_is_set_not_accumulated() {
        let mut world = World::new();
        world.insert_resource(SimulationClock {
            scaled_secs: 3.0,
            ..default()
        });
        world.insert_resource(BodyCatalog::default());
        let pivot = world
            .spawn((MoonPivot, BodyId("io"), Transform::default()))
            .id();

        world.run_system_once(orbit_moons).unwrap();
        world.run_system_once(orbit_moons).unwrap();

        let expected = Quat::from_rotation_y(wrap_angle(moon_angle(3.0, 10.0)));
        let rotation = world.get::<Transform>(pivot).unwrap().rotation;
        assert!(rotation.abs_diff_eq(expected, 1e-6));
    }
}
