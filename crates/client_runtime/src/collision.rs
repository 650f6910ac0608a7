//! Static collision probes: flat ground plane + axis-aligned wall boxes.
//!
//! Provides the two capabilities the motion solver injects: a downward ground
//! probe and a horizontal sphere sweep returning the nearest surface normal.

use glam::{Vec2, Vec3};
use smallvec::SmallVec;

const RAY_EPS: f32 = 1e-8;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    #[must_use]
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }

    #[must_use]
    pub fn inflated(&self, r: f32) -> Self {
        Self {
            min: self.min - Vec3::splat(r),
            max: self.max + Vec3::splat(r),
        }
    }
}

/// Immutable collision environment for one scene.
#[derive(Clone, Debug, Default)]
pub struct StaticScene {
    pub ground_height: f32,
    pub walls: Vec<Aabb>,
}

impl StaticScene {
    /// Downward probe: does a cast of `len` from `pos` reach the ground plane?
    #[must_use]
    pub fn probe_ground(&self, pos: Vec3, len: f32) -> bool {
        pos.y - self.ground_height <= len
    }

    /// Sweep a sphere of `radius` from `pos` along the XZ direction `dir` for
    /// up to `dist`; returns the surface normal of the nearest wall hit.
    #[must_use]
    pub fn sweep_walls(&self, pos: Vec3, dir: Vec2, radius: f32, dist: f32) -> Option<Vec3> {
        let d = dir.normalize_or_zero();
        if d.length_squared() < RAY_EPS {
            return None;
        }
        let dir3 = Vec3::new(d.x, 0.0, d.y);
        let mut hits: SmallVec<[(f32, Vec3); 4]> = SmallVec::new();
        for w in &self.walls {
            if let Some((t, n)) = ray_vs_aabb(pos, dir3, &w.inflated(radius)) {
                if t <= dist {
                    hits.push((t, n));
                }
            }
        }
        hits.into_iter()
            .min_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(_, n)| n)
    }
}

/// Slab test; returns entry distance and the face normal at entry.
fn ray_vs_aabb(origin: Vec3, dir: Vec3, b: &Aabb) -> Option<(f32, Vec3)> {
    let mut t_enter = f32::NEG_INFINITY;
    let mut t_exit = f32::INFINITY;
    let mut normal = Vec3::ZERO;
    for axis in 0..3 {
        let o = origin[axis];
        let d = dir[axis];
        if d.abs() < RAY_EPS {
            if o < b.min[axis] || o > b.max[axis] {
                return None;
            }
            continue;
        }
        let inv = 1.0 / d;
        let mut t0 = (b.min[axis] - o) * inv;
        let mut t1 = (b.max[axis] - o) * inv;
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }
        if t0 > t_enter {
            t_enter = t0;
            normal = Vec3::ZERO;
            normal[axis] = -d.signum();
        }
        t_exit = t_exit.min(t1);
        if t_enter > t_exit {
            return None;
        }
    }
    if t_exit < 0.0 {
        return None;
    }
    Some((t_enter.max(0.0), normal))
}
