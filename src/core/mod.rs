//! # Core Module
//!
//! Shared handle types used across the interaction core.
//!
//! ## Key Components
//! - `StResource`: Single-threaded reference-counted resource with interior mutability
//!
//! The world's chunk mesh registry hands out `StResource` clones so that a mesh can be
//! regenerated while the world that owns the registry is borrowed for reading.
//!
//! ## Usage
//! ```rust
//! use voxel_interaction::core::StResource;
//!
//! let counter = StResource::new(0);
//! *counter.get_mut() += 1;
//! assert_eq!(*counter.get(), 1);
//! ```

pub mod st_resource;

pub use st_resource::StResource;
