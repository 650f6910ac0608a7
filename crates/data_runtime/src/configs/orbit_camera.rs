//! Orbit camera configuration loaded from data/config/orbit_camera.toml.

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct OrbitCameraCfg {
    pub focus_offset: Option<[f32; 3]>,
    pub min_distance: Option<f32>,
    pub max_distance: Option<f32>,
    pub yaw_sens_deg_per_count: Option<f32>,
    pub pitch_sens_deg_per_count: Option<f32>,
    pub min_pitch_deg: Option<f32>,
    pub max_pitch_deg: Option<f32>,
    pub invert_y: Option<bool>,
    pub zoom_sens: Option<f32>,
    pub follow_smoothing: Option<f32>,
}

impl Default for OrbitCameraCfg {
    fn default() -> Self {
        Self {
            focus_offset: Some([0.0, 0.5, 0.0]),
            min_distance: Some(2.0),
            max_distance: Some(12.0),
            yaw_sens_deg_per_count: Some(120.0),
            pitch_sens_deg_per_count: Some(90.0),
            min_pitch_deg: Some(-80.0),
            max_pitch_deg: Some(80.0),
            invert_y: Some(false),
            zoom_sens: Some(2.0),
            follow_smoothing: Some(0.15),
        }
    }
}

pub fn load_default() -> Result<OrbitCameraCfg> {
    let path = crate::data_root().join("config/orbit_camera.toml");
    let mut cfg = if path.is_file() {
        let txt =
            std::fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
        toml::from_str::<OrbitCameraCfg>(&txt).context("parse orbit_camera TOML")?
    } else {
        OrbitCameraCfg::default()
    };
    // Env overrides for quick tuning (optional)
    if let Ok(s) = std::env::var("YAW_SENS_DEG") {
        cfg.yaw_sens_deg_per_count = s.parse().ok();
    }
    if let Ok(s) = std::env::var("PITCH_SENS_DEG") {
        cfg.pitch_sens_deg_per_count = s.parse().ok();
    }
    if let Ok(v) = std::env::var("INVERT_Y") {
        cfg.invert_y = v.parse().ok();
    }
    if let Ok(v) = std::env::var("MIN_PITCH_DEG") {
        cfg.min_pitch_deg = v.parse().ok();
    }
    if let Ok(v) = std::env::var("MAX_PITCH_DEG") {
        cfg.max_pitch_deg = v.parse().ok();
    }
    if let Ok(v) = std::env::var("ZOOM_SENS") {
        cfg.zoom_sens = v.parse().ok();
    }
    if let Ok(v) = std::env::var("FOLLOW_SMOOTHING") {
        cfg.follow_smoothing = v.parse().ok();
    }
    Ok(cfg)
}
