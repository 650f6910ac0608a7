//! Scene: one actor, one orbit camera, pickups, and the tick driver.

use client_core::input::InputState;
use client_core::systems::motion::{self, MotionConfig, MotionState};
use client_core::systems::orbit::{self, CameraPose, OrbitConfig, OrbitState};
use client_core::systems::pickup::{Pickup, PickupEvent};
use glam::{Vec2, Vec3};
use tracing::info;

use crate::collision::StaticScene;

const GRAVITY_MPS2: f32 = 9.81;

/// Rigid-body-like actor: position + velocity with velocity-space corrections.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Body {
    pub pos: Vec3,
    pub vel: Vec3,
}

impl Body {
    #[must_use]
    pub fn new(pos: Vec3) -> Self {
        Self {
            pos,
            vel: Vec3::ZERO,
        }
    }

    /// Instantaneous horizontal correction; the vertical component is left to
    /// gravity and jumps.
    pub fn apply_velocity_delta_xz(&mut self, dv: Vec2) {
        self.vel.x += dv.x;
        self.vel.z += dv.y;
    }

    pub fn apply_jump(&mut self, d: motion::JumpDecision) {
        if !d.apply {
            return;
        }
        if let Some(v) = d.vertical_override {
            self.vel.y = v;
        }
        self.vel.y += d.impulse;
    }
}

/// A placed pickup; removed from the scene once consumed.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScenePickup {
    pub pos: Vec3,
    pub radius: f32,
    pub pickup: Pickup,
}

/// Owns per-actor state and enforces the tick phases. Each `Scene` is
/// exclusive to one actor; nothing here is shared or locked.
#[derive(Clone, Debug)]
pub struct Scene {
    pub body: Body,
    pub statics: StaticScene,
    pub pickups: Vec<ScenePickup>,
    motion_cfg: MotionConfig,
    orbit_cfg: OrbitConfig,
    orbit: OrbitState,
    motion_state: MotionState,
    pose: CameraPose,
    input: InputState,
    collected: u32,
}

impl Scene {
    #[must_use]
    pub fn new(
        body_pos: Vec3,
        camera_pos: Vec3,
        motion_cfg: MotionConfig,
        orbit_cfg: OrbitConfig,
        statics: StaticScene,
    ) -> Self {
        let motion_cfg = motion_cfg.sanitized();
        let orbit_cfg = orbit_cfg.sanitized();
        let orbit = OrbitState::from_pose(camera_pos, body_pos, &orbit_cfg, 0.0, 0.0);
        let pose = orbit::compute_pose(&orbit);
        Self {
            body: Body::new(body_pos),
            statics,
            pickups: Vec::new(),
            motion_cfg,
            orbit_cfg,
            orbit,
            motion_state: MotionState::default(),
            pose,
            input: InputState::default(),
            collected: 0,
        }
    }

    #[must_use]
    pub fn pose(&self) -> CameraPose {
        self.pose
    }

    #[must_use]
    pub fn orbit(&self) -> OrbitState {
        self.orbit
    }

    #[must_use]
    pub fn is_grounded(&self) -> bool {
        self.motion_state.is_grounded
    }

    #[must_use]
    pub fn collected(&self) -> u32 {
        self.collected
    }

    /// Advance one tick: input sample, then motion/physics, then camera.
    /// The pose is recomputed strictly after integration so it never lags the
    /// body by a frame.
    pub fn tick(&mut self, input: &InputState, dt: f32) {
        // Phase 1: input sample.
        self.input = *input;

        // Phase 2: motion solve + prototype integration.
        let grounded = motion::grounded(
            |len| self.statics.probe_ground(self.body.pos, len),
            &self.motion_cfg,
        );
        self.motion_state.is_grounded = grounded;
        self.motion_state.horizontal_vel = Vec2::new(self.body.vel.x, self.body.vel.z);

        let desired = motion::desired_direction(
            self.input.move_x,
            self.input.move_z,
            self.pose.forward(),
            self.pose.right(),
        );
        let desired = motion::deflect_against_walls(desired, grounded, &self.motion_cfg, {
            let statics = &self.statics;
            let pos = self.body.pos;
            move |dir, radius, dist| statics.sweep_walls(pos, dir, radius, dist)
        });
        let dv = motion::velocity_delta(
            desired,
            self.motion_cfg.move_speed,
            self.motion_state.horizontal_vel,
        );
        self.body.apply_velocity_delta_xz(dv);

        let jump = motion::decide_jump(
            grounded,
            self.input.jump_pressed,
            self.body.vel.y,
            self.motion_cfg.jump_force,
        );
        if jump.apply {
            info!(target: "motion", vel_y = self.body.vel.y, "jump");
        }
        self.body.apply_jump(jump);

        if !grounded {
            self.body.vel.y -= GRAVITY_MPS2 * dt;
        }
        self.body.pos += self.body.vel * dt;
        let floor = self.statics.ground_height + self.motion_cfg.sphere_radius;
        if self.body.pos.y < floor && self.body.vel.y <= 0.0 {
            self.body.pos.y = floor;
            self.body.vel.y = 0.0;
        }

        self.resolve_pickups();

        // Phase 3: camera solve against the post-integration body.
        orbit::apply_look_input(
            &mut self.orbit,
            self.input.look_dx,
            self.input.look_dy,
            dt,
            &self.orbit_cfg,
        );
        orbit::apply_zoom_input(&mut self.orbit, self.input.scroll, &self.orbit_cfg);
        orbit::advance_follow(&mut self.orbit, self.body.pos, dt, &self.orbit_cfg);
        self.pose = orbit::compute_pose(&self.orbit);
    }

    fn resolve_pickups(&mut self) {
        let body_pos = self.body.pos;
        let reach = self.motion_cfg.sphere_radius;
        let mut collected = 0u32;
        self.pickups.retain_mut(|p| {
            let r = p.radius + reach;
            let touching = p.pos.distance_squared(body_pos) <= r * r;
            match p.pickup.on_contact(touching) {
                Some(PickupEvent::Collected) => {
                    info!(target: "pickups", pos = ?p.pos, "collected");
                    collected += 1;
                    false
                }
                None => !p.pickup.state.consumed,
            }
        });
        self.collected += collected;
    }
}
