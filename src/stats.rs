//! Cosmetic power-level numbers for the detail page.
//!
//! Drawn from a generator seeded by the alien id, so the same alien always
//! shows the same numbers.

use crate::catalog::Alien;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlienStats {
    /// 60..=99
    pub power_level: u8,
    /// 70..=99
    pub speed: u8,
    /// 60..=99
    pub strength: u8,
    /// 50..=99
    pub intelligence: u8,
}

impl AlienStats {
    pub fn for_alien(alien: &Alien) -> Self {
        let mut rng = rng_for(&alien.id);
        Self {
            power_level: rng.random_range(60..100),
            speed: rng.random_range(70..100),
            strength: rng.random_range(60..100),
            intelligence: rng.random_range(50..100),
        }
    }

    /// Label/value pairs in display order.
    pub fn rows(&self) -> [(&'static str, u8); 4] {
        [
            ("POWER LEVEL", self.power_level),
            ("SPEED", self.speed),
            ("STRENGTH", self.strength),
            ("INTELLIGENCE", self.intelligence),
        ]
    }
}

/// Generator seeded from the id bytes, folded into the seed buffer.
fn rng_for(id: &str) -> SmallRng {
    let mut seed = <SmallRng as SeedableRng>::Seed::default();
    let slots: &mut [u8] = seed.as_mut();
    let width = slots.len();
    for (position, byte) in id.bytes().enumerate() {
        slots[position % width] ^= byte.rotate_left((position / width) as u32);
    }
    SmallRng::from_seed(seed)
}
