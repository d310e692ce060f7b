//! Material definitions
//!
//! Four spawnable materials plus the `Empty` tombstone. Ids follow the order
//! the brush hotkeys use (1 = sand, 2 = water, 3 = fire, 4 = stone).

use serde::{Deserialize, Serialize};

pub type MaterialId = u8;

pub const MAT_SAND: MaterialId = 0;
pub const MAT_WATER: MaterialId = 1;
pub const MAT_FIRE: MaterialId = 2;
pub const MAT_STONE: MaterialId = 3;
pub const MAT_EMPTY: MaterialId = 4;

/// Fire green channel is `FIRE_GREEN_BASE + rand(0..FIRE_GREEN_SPREAD)`.
pub const FIRE_GREEN_BASE: u8 = 69;
pub const FIRE_GREEN_SPREAD: u32 = 50;

/// Plain 8-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Opaque ABGR (little-endian bytes [R,G,B,A]) for direct canvas copy.
    #[inline]
    pub fn to_abgr(self) -> u32 {
        0xFF00_0000 | ((self.b as u32) << 16) | ((self.g as u32) << 8) | (self.r as u32)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Material {
    Sand = MAT_SAND,
    Water = MAT_WATER,
    Fire = MAT_FIRE,
    Stone = MAT_STONE,
    Empty = MAT_EMPTY,
}

impl Material {
    /// Everything a brush can paint, in hotkey order.
    pub const SPAWNABLE: [Material; 4] = [
        Material::Sand,
        Material::Water,
        Material::Fire,
        Material::Stone,
    ];

    #[inline]
    pub fn id(self) -> MaterialId {
        self as MaterialId
    }

    pub fn from_id(id: MaterialId) -> Option<Self> {
        match id {
            MAT_SAND => Some(Material::Sand),
            MAT_WATER => Some(Material::Water),
            MAT_FIRE => Some(Material::Fire),
            MAT_STONE => Some(Material::Stone),
            MAT_EMPTY => Some(Material::Empty),
            _ => None,
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Material::Empty
    }

    pub fn key(self) -> &'static str {
        match self {
            Material::Sand => "base:sand",
            Material::Water => "base:water",
            Material::Fire => "base:fire",
            Material::Stone => "base:stone",
            Material::Empty => "base:empty",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Material::Sand => "Sand",
            Material::Water => "Water",
            Material::Fire => "Fire",
            Material::Stone => "Stone",
            Material::Empty => "Empty",
        }
    }

    /// Base display color. Fire's green channel is jittered per particle.
    pub fn base_color(self) -> Rgb {
        match self {
            Material::Sand => Rgb::new(194, 178, 128),
            Material::Water => Rgb::new(30, 144, 255),
            Material::Fire => Rgb::new(255, FIRE_GREEN_BASE, 0),
            Material::Stone => Rgb::new(100, 100, 100),
            Material::Empty => Rgb::new(0, 0, 0),
        }
    }

    /// Brush sampling step: stone is stamped solid, the rest every other cell.
    #[inline]
    pub fn stamp_step(self) -> i32 {
        match self {
            Material::Stone => 1,
            _ => 2,
        }
    }
}

#[derive(Serialize)]
struct MaterialManifest {
    format_version: u32,
    materials: Vec<MaterialManifestEntry>,
}

#[derive(Serialize)]
struct MaterialManifestEntry {
    id: MaterialId,
    key: &'static str,
    name: &'static str,
    color: Rgb,
    hotkey: u8,
}

/// Palette description for the UI: one entry per spawnable material.
pub fn material_manifest_json() -> String {
    let materials = Material::SPAWNABLE
        .iter()
        .enumerate()
        .map(|(i, &m)| MaterialManifestEntry {
            id: m.id(),
            key: m.key(),
            name: m.name(),
            color: m.base_color(),
            hotkey: (i + 1) as u8,
        })
        .collect();

    let out = MaterialManifest {
        format_version: 1,
        materials,
    };
    serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
}
