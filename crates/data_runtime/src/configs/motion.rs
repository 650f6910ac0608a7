//! Sphere actor motion configuration loaded from data/config/motion.toml.

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct MotionCfg {
    pub move_speed: Option<f32>,
    pub jump_force: Option<f32>,
    pub ground_check_distance: Option<f32>,
    pub wall_check_distance: Option<f32>,
    pub sphere_radius: Option<f32>,
}

impl Default for MotionCfg {
    fn default() -> Self {
        Self {
            move_speed: Some(8.0),
            jump_force: Some(5.0),
            ground_check_distance: Some(0.1),
            wall_check_distance: Some(0.6),
            sphere_radius: Some(0.5),
        }
    }
}

pub fn load_default() -> Result<MotionCfg> {
    let path = crate::data_root().join("config/motion.toml");
    let mut cfg = if path.is_file() {
        let txt =
            std::fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
        toml::from_str::<MotionCfg>(&txt).context("parse motion TOML")?
    } else {
        MotionCfg::default()
    };
    if let Ok(s) = std::env::var("MOVE_SPEED") {
        cfg.move_speed = s.parse().ok();
    }
    if let Ok(s) = std::env::var("JUMP_FORCE") {
        cfg.jump_force = s.parse().ok();
    }
    if let Ok(s) = std::env::var("SPHERE_RADIUS") {
        cfg.sphere_radius = s.parse().ok();
    }
    Ok(cfg)
}
