//! # Particles Module
//!
//! Break particle bursts. The renderer owns the actual particle simulation; this crate
//! only tells it where a block broke and what it was made of.

use cgmath::Point3;

use super::voxels::block::block_type::BlockType;

/// Seconds a break burst stays alive.
pub const BURST_LIFETIME: f32 = 0.5;

/// Receives block break effects.
pub trait ParticleSystem {
    /// Starts a burst for `block` at an exact (non-truncated) world position.
    fn initialize(&mut self, block: BlockType, position: Point3<f32>);

    /// Ages running bursts by `dt` seconds.
    fn tick(&mut self, _dt: f32) {}
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParticleBurst {
    pub block: BlockType,
    pub position: Point3<f32>,
    pub remaining: f32,
}

/// Keeps track of live break bursts.
#[derive(Debug, Default)]
pub struct BreakParticles {
    pub bursts: Vec<ParticleBurst>,
}

impl BreakParticles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> &[ParticleBurst] {
        &self.bursts
    }
}

impl ParticleSystem for BreakParticles {
    fn initialize(&mut self, block: BlockType, position: Point3<f32>) {
        self.bursts.push(ParticleBurst {
            block,
            position,
            remaining: BURST_LIFETIME,
        });
    }

    fn tick(&mut self, dt: f32) {
        for burst in self.bursts.iter_mut() {
            burst.remaining -= dt;
        }
        self.bursts.retain(|burst| burst.remaining > 0.0);
    }
}
