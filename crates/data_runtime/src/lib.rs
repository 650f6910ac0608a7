//! data_runtime: TOML config schemas and loaders for the prototype.
//!
//! Every schema is all-`Option` with a `Default`; loaders fall back to the
//! defaults when the file is absent and apply env-var overrides on top, so a
//! bad or missing config never aborts startup.

pub mod configs {
    pub mod motion;
    pub mod orbit_camera;
    pub mod telemetry;
}

use std::path::PathBuf;

/// Workspace `data/` root (falls back to the crate-local dir for vendored use).
#[must_use]
pub fn data_root() -> PathBuf {
    let here = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    let ws = here.join("../../data");
    if ws.is_dir() { ws } else { here.join("data") }
}
