use serde::Serialize;

use crate::core::RandomSource;
use crate::domain::materials::{Material, Rgb, FIRE_GREEN_SPREAD};

/// A single live unit of material.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Particle {
    pub x: i32,
    pub y: i32,
    pub material: Material,
    pub color: Rgb,
    /// Remaining lifetime (fire only, 0 for everything else)
    pub lifetime: i32,
    /// Set once the particle's rule has run this tick
    pub processed: bool,
}

impl Particle {
    /// Build a freshly spawned particle. Only fire consumes randomness.
    pub fn spawn<R: RandomSource>(x: i32, y: i32, material: Material, fire_lifetime: i32, rng: &mut R) -> Self {
        let mut color = material.base_color();
        let mut lifetime = 0;
        if material == Material::Fire {
            color.g = color.g.saturating_add(rng.below(FIRE_GREEN_SPREAD) as u8);
            lifetime = fire_lifetime;
        }

        Self {
            x,
            y,
            material,
            color,
            lifetime,
            processed: false,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.material.is_empty()
    }

    #[inline]
    pub fn view(&self) -> ParticleView {
        ParticleView {
            x: self.x,
            y: self.y,
            color: self.color,
        }
    }
}

/// What the presentation layer paints: position and color only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ParticleView {
    pub x: i32,
    pub y: i32,
    pub color: Rgb,
}
