//! client_runtime: host-side wiring for the control core.
//!
//! Owns the actor body, orbit camera state, pickups and the static collision
//! index, and drives the fixed tick order the solvers assume:
//! input sample -> motion/physics -> camera.

#![deny(warnings, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::missing_panics_doc)]

pub mod collision;
pub mod config;
pub mod scene;
pub mod telemetry;

pub use scene::{Body, Scene, ScenePickup};
