//! Client control core: orbit camera, planar motion and pickup solvers.
//!
//! Everything here is pure math over `glam` types. The host loop
//! (`client_runtime`) owns collision probes, integration and tick ordering;
//! this crate only turns sampled input plus probe results into state updates.

#![deny(warnings, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::missing_panics_doc)]

pub mod input {
    /// Input snapshot for one frame of local player intent.
    ///
    /// - `move_x`/`move_z` are analog movement axes in `[-1, 1]`
    /// - `look_dx`/`look_dy` are raw pointer deltas for the tick
    /// - `jump_pressed` is one-shot: the host sets it on key-press and clears
    ///   it after the tick so holding the key does not repeat-jump
    #[derive(Default, Debug, Clone, Copy)]
    pub struct InputState {
        pub move_x: f32,
        pub move_z: f32,
        pub jump_pressed: bool,
        pub look_dx: f32,
        pub look_dy: f32,
        pub scroll: f32,
    }

    impl InputState {
        pub fn clear(&mut self) {
            *self = Self::default();
        }
    }
}

pub mod systems {
    pub mod motion;
    pub mod orbit;
    pub mod pickup;
}
