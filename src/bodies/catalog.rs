//! Static body data
//!
//! Distances, sizes and speeds are artistic scene constants, not physical
//! values. Speed factors are relative to Earth (1.0).

use bevy::prelude::*;

/// Id of the sun; planets and moons use their lowercase names.
pub const SUN_ID: &str = "sun";

/// Secondary visual layer drawn around a planet.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DecorationKind {
    /// Concentric sphere, `scale` times the planet radius.
    Shell,
    /// Flat annulus in the orbital plane, radii relative to the planet radius.
    Ring { inner: f32, outer: f32 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Decoration {
    pub kind: DecorationKind,
    pub scale: f32,
    pub opacity: f32,
    pub texture: &'static str,
}

/// Label/value rows shown in the info overlay.
pub type Facts = &'static [(&'static str, &'static str)];

#[derive(Clone, Copy, Debug)]
pub struct SunSpec {
    pub radius: f32,
    pub color: u32,
    pub texture: Option<&'static str>,
    pub facts: Facts,
}

#[derive(Clone, Copy, Debug)]
pub struct PlanetSpec {
    pub id: &'static str,
    pub distance: f32,
    pub radius: f32,
    pub orbit_speed: f32,
    pub rotation_speed: f32,
    pub color: u32,
    pub texture: Option<&'static str>,
    pub moons: &'static [&'static str],
    pub decorations: &'static [Decoration],
    pub facts: Facts,
}

#[derive(Clone, Copy, Debug)]
pub struct MoonSpec {
    pub id: &'static str,
    pub distance: f32,
    pub radius: f32,
    pub orbit_speed: f32,
    pub color: u32,
    pub texture: Option<&'static str>,
}

pub const SUN: SunSpec = SunSpec {
    radius: 5.0,
    color: 0xffff00,
    texture: Some("sun"),
    facts: &[
        ("Type", "G-type main-sequence star"),
        ("Temperature", "5,778 K"),
        ("Rotation", "25.05 days (equator)"),
    ],
};

pub const PLANETS: &[PlanetSpec] = &[
    PlanetSpec {
        id: "mercury",
        distance: 15.0,
        radius: 0.4,
        orbit_speed: 4.15,
        rotation_speed: 0.017,
        color: 0x8c7853,
        texture: Some("mercury"),
        moons: &[],
        decorations: &[],
        facts: &[
            ("Orbit Period", "88 days"),
            ("Rotation Period", "58.6 days"),
            ("Distance from Sun", "0.39 AU"),
        ],
    },
    PlanetSpec {
        id: "venus",
        distance: 20.0,
        radius: 0.9,
        orbit_speed: 1.62,
        rotation_speed: -0.004,
        color: 0xffa500,
        texture: Some("venus"),
        moons: &[],
        decorations: &[Decoration {
            kind: DecorationKind::Shell,
            scale: 1.02,
            opacity: 0.6,
            texture: "venus_atmosphere",
        }],
        facts: &[
            ("Orbit Period", "225 days"),
            ("Rotation Period", "243 days"),
            ("Distance from Sun", "0.72 AU"),
        ],
    },
    PlanetSpec {
        id: "earth",
        distance: 25.0,
        radius: 1.0,
        orbit_speed: 1.0,
        rotation_speed: 1.0,
        color: 0x6b93d6,
        texture: Some("earth"),
        moons: &["moon"],
        decorations: &[Decoration {
            kind: DecorationKind::Shell,
            scale: 1.01,
            opacity: 0.4,
            texture: "earth_clouds",
        }],
        facts: &[
            ("Orbit Period", "365.25 days"),
            ("Rotation Period", "1 day"),
            ("Distance from Sun", "1 AU"),
        ],
    },
    PlanetSpec {
        id: "mars",
        distance: 35.0,
        radius: 0.5,
        orbit_speed: 0.53,
        rotation_speed: 0.97,
        color: 0xcd5c5c,
        texture: Some("mars"),
        moons: &[],
        decorations: &[],
        facts: &[
            ("Orbit Period", "687 days"),
            ("Rotation Period", "1.03 days"),
            ("Distance from Sun", "1.52 AU"),
        ],
    },
    PlanetSpec {
        id: "jupiter",
        distance: 55.0,
        radius: 5.0,
        orbit_speed: 0.084,
        rotation_speed: 2.4,
        color: 0xd8ca9d,
        texture: Some("jupiter"),
        moons: &["io", "europa", "ganymede", "callisto"],
        decorations: &[],
        facts: &[
            ("Orbit Period", "11.86 years"),
            ("Rotation Period", "9.93 hours"),
            ("Distance from Sun", "5.2 AU"),
        ],
    },
    PlanetSpec {
        id: "saturn",
        distance: 75.0,
        radius: 4.0,
        orbit_speed: 0.034,
        rotation_speed: 2.2,
        color: 0xfad5a5,
        texture: Some("saturn"),
        moons: &["titan", "enceladus"],
        decorations: &[Decoration {
            kind: DecorationKind::Ring {
                inner: 1.2,
                outer: 2.0,
            },
            scale: 1.0,
            opacity: 0.8,
            texture: "saturn_rings",
        }],
        facts: &[
            ("Orbit Period", "29.46 years"),
            ("Rotation Period", "10.7 hours"),
            ("Distance from Sun", "9.58 AU"),
        ],
    },
    PlanetSpec {
        id: "uranus",
        distance: 95.0,
        radius: 2.0,
        orbit_speed: 0.012,
        rotation_speed: 1.4,
        color: 0x4fd0e4,
        texture: Some("uranus"),
        moons: &[],
        decorations: &[],
        facts: &[
            ("Orbit Period", "84.01 years"),
            ("Rotation Period", "17.24 hours"),
            ("Distance from Sun", "19.22 AU"),
        ],
    },
    PlanetSpec {
        id: "neptune",
        distance: 115.0,
        radius: 2.0,
        orbit_speed: 0.006,
        rotation_speed: 1.5,
        color: 0x4b70dd,
        texture: Some("neptune"),
        moons: &[],
        decorations: &[],
        facts: &[
            ("Orbit Period", "164.8 years"),
            ("Rotation Period", "16.1 hours"),
            ("Distance from Sun", "30.1 AU"),
        ],
    },
];

pub const MOONS: &[MoonSpec] = &[
    MoonSpec {
        id: "moon",
        distance: 2.0,
        radius: 0.27,
        orbit_speed: 13.4,
        color: 0x888888,
        texture: Some("moon"),
    },
    MoonSpec {
        id: "io",
        distance: 3.0,
        radius: 0.3,
        orbit_speed: 10.0,
        color: 0xffff99,
        texture: None,
    },
    MoonSpec {
        id: "europa",
        distance: 4.0,
        radius: 0.25,
        orbit_speed: 8.0,
        color: 0xaaaaff,
        texture: None,
    },
    MoonSpec {
        id: "ganymede",
        distance: 5.0,
        radius: 0.4,
        orbit_speed: 6.0,
        color: 0x999999,
        texture: None,
    },
    MoonSpec {
        id: "callisto",
        distance: 6.0,
        radius: 0.35,
        orbit_speed: 4.0,
        color: 0x666666,
        texture: None,
    },
    MoonSpec {
        id: "titan",
        distance: 5.0,
        radius: 0.4,
        orbit_speed: 7.0,
        color: 0xffa500,
        texture: None,
    },
    MoonSpec {
        id: "enceladus",
        distance: 3.0,
        radius: 0.15,
        orbit_speed: 12.0,
        color: 0xffffff,
        texture: None,
    },
];

/// Texture key to file name (relative to the configured texture dir).
pub const TEXTURE_FILES: &[(&str, &str)] = &[
    ("sun", "8k_sun.jpg"),
    ("mercury", "8k_mercury.jpg"),
    ("venus", "8k_venus_surface.jpg"),
    ("venus_atmosphere", "4k_venus_atmosphere.jpg"),
    ("earth", "8k_earth_daymap.jpg"),
    ("earth_clouds", "8k_earth_clouds.jpg"),
    ("mars", "8k_mars.jpg"),
    ("jupiter", "8k_jupiter.jpg"),
    ("saturn", "8k_saturn.jpg"),
    ("saturn_rings", "8k_saturn_ring_alpha.png"),
    ("uranus", "2k_uranus.jpg"),
    ("neptune", "2k_neptune.jpg"),
    ("moon", "8k_moon.jpg"),
    ("stars", "8k_stars_milky_way.jpg"),
];

/// Key of the background star sphere texture.
pub const STARS_TEXTURE: &str = "stars";

/// Resource wrapping the body tables so systems never reach for constants
/// directly and tests can supply partial catalogs.
#[derive(Resource, Clone, Debug)]
pub struct BodyCatalog {
    pub sun: SunSpec,
    pub planets: Vec<PlanetSpec>,
    pub moons: Vec<MoonSpec>,
}

impl Default for BodyCatalog {
    fn default() -> Self {
        Self {
            sun: SUN,
            planets: PLANETS.to_vec(),
            moons: MOONS.to_vec(),
        }
    }
}

impl BodyCatalog {
    pub fn planet(&self, id: &str) -> Option<&PlanetSpec> {
        self.planets.iter().find(|p| p.id == id)
    }

    pub fn moon(&self, id: &str) -> Option<&MoonSpec> {
        self.moons.iter().find(|m| m.id == id)
    }

    /// Ids that can be focused: the sun followed by the planets.
    pub fn focusable_ids(&self) -> Vec<&'static str> {
        std::iter::once(SUN_ID)
            .chain(self.planets.iter().map(|p| p.id))
            .collect()
    }

    pub fn facts(&self, id: &str) -> Option<Facts> {
        if id == SUN_ID {
            return Some(self.sun.facts);
        }
        self.planet(id).map(|p| p.facts)
    }
}

/// Convert a `0xRRGGBB` value to a Bevy color.
pub fn hex_color(hex: u32) -> Color {
    Color::srgb_u8(
        ((hex >> 16) & 0xff) as u8,
        ((hex >> 8) & 0xff) as u8,
        (hex & 0xff) as u8,
    )
}

/// "mars" -> "Mars"
pub fn display_name(id: &str) -> String {
    let mut chars = id.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
