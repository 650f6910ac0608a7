//! Headless scripted run of the control core: roll forward over a pickup,
//! jump, steer into a side wall while airborne (and slide along it), then
//! swing the camera. Poses and state are logged once a second.

use anyhow::Result;
use client_core::input::InputState;
use client_core::systems::pickup::Pickup;
use client_runtime::collision::{Aabb, StaticScene};
use client_runtime::{Scene, ScenePickup, config, telemetry};
use glam::Vec3;
use tracing::info;

const DT: f32 = 1.0 / 60.0;

fn main() -> Result<()> {
    let telem = data_runtime::configs::telemetry::load_default()?;
    telemetry::init_telemetry(&telem);

    let orbit_cfg = config::orbit_config(&data_runtime::configs::orbit_camera::load_default()?);
    let motion_cfg = config::motion_config(&data_runtime::configs::motion::load_default()?);

    // A long wall to the +X side of the path.
    let statics = StaticScene {
        ground_height: 0.0,
        walls: vec![Aabb::new(
            Vec3::new(1.2, 0.0, -8.0),
            Vec3::new(2.2, 4.0, 40.0),
        )],
    };
    let mut scene = Scene::new(
        Vec3::new(0.0, motion_cfg.sphere_radius, 0.0),
        Vec3::new(0.0, 2.0, -6.0),
        motion_cfg,
        orbit_cfg,
        statics,
    );
    scene.pickups.push(ScenePickup {
        pos: Vec3::new(0.0, 0.5, 3.0),
        radius: 0.5,
        pickup: Pickup::default(),
    });

    info!(target: "demo", pose = ?scene.pose(), "start");
    for frame in 0..360u32 {
        let mut input = InputState {
            move_z: 1.0,
            ..Default::default()
        };
        if frame == 120 {
            input.jump_pressed = true;
        }
        if (121..180).contains(&frame) {
            // Airborne: push into the wall; deflection keeps the slide.
            input.move_x = 1.0;
        }
        if (240..300).contains(&frame) {
            input.look_dx = 1.0;
        }
        scene.tick(&input, DT);
        if frame.is_multiple_of(60) {
            info!(
                target: "demo",
                frame,
                pos = ?scene.body.pos,
                grounded = scene.is_grounded(),
                collected = scene.collected(),
                eye = ?scene.pose().eye,
            );
        }
    }
    info!(target: "demo", collected = scene.collected(), "done");
    Ok(())
}
