//! # Ray Cast
//!
//! Samples points along the direction a player faces.
//!
//! The forward vector starts as `+Z`, is rotated about the X axis by the pitch and then
//! about the Y axis by `180 - yaw` degrees, and is scaled to the reach distance. Sample
//! `i` of `N` lies at `origin + forward * (i / N)`, so sample 0 is the origin itself and
//! the last sample stops one step short of full reach.
//!
//! Voxel coordinates are obtained with a plain `as i32` cast, which truncates toward
//! zero. A sample at `x = -0.5` therefore lands in voxel column 0, not -1.

use cgmath::{Basis3, Deg, Point3, Rotation, Rotation3, Vector3};

use crate::engine_state::player::Player;

/// A point on the cast and the voxel it falls into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CastSample {
    /// Exact world position of the sample.
    pub position: Point3<f32>,
    /// Truncated voxel coordinate of the sample.
    pub voxel: Point3<i32>,
}

/// Lazy, restartable sequence of samples along a facing ray.
#[derive(Debug, Clone)]
pub struct RayCast {
    origin: Point3<f32>,
    forward: Vector3<f32>,
    steps: u32,
    current: u32,
}

impl RayCast {
    /// Builds a cast from an eye position and an orientation in degrees.
    ///
    /// # Arguments
    /// * `origin` - World position the cast starts from
    /// * `pitch` - Rotation about the X axis, positive looks down
    /// * `yaw` - Heading; 180 faces `+Z`, 0 faces `-Z`
    /// * `reach` - Length of the forward vector
    /// * `steps` - Number of samples taken
    pub fn new(origin: Point3<f32>, pitch: f32, yaw: f32, reach: f32, steps: u32) -> Self {
        let pitch_rotation: Basis3<f32> = Rotation3::from_angle_x(Deg(pitch));
        let yaw_rotation: Basis3<f32> = Rotation3::from_angle_y(Deg(-yaw + 180.0));
        let facing = yaw_rotation.rotate_vector(pitch_rotation.rotate_vector(Vector3::unit_z()));

        Self {
            origin,
            forward: facing * reach,
            steps,
            current: 0,
        }
    }

    /// Builds a cast from the player's current position and rotation.
    pub fn from_player(player: &Player, reach: f32, steps: u32) -> Self {
        let rotation = player.get_rot();
        Self::new(player.get_pos(), rotation.x, rotation.y, reach, steps)
    }

    /// The scaled forward vector.
    pub fn forward(&self) -> Vector3<f32> {
        self.forward
    }
}

impl Iterator for RayCast {
    type Item = CastSample;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current >= self.steps {
            return None;
        }

        let percentage = self.current as f32 / self.steps as f32;
        self.current += 1;

        let position = self.origin + self.forward * percentage;
        let voxel = Point3::new(position.x as i32, position.y as i32, position.z as i32);
        Some(CastSample { position, voxel })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.steps - self.current) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RayCast {}
