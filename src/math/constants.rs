// Copyright @yucwang 2026

pub type Float = f32;

pub type Vector2f = nalgebra::Vector2<Float>;
pub type Vector3f = nalgebra::Vector3<Float>;

pub const PI: Float = 3.14159265359;

// Lower clip for every traced ray, keeps bounce origins off their own
// surface.
pub const RAY_EPSILON: Float = 1e-3;

pub const MAX_TRACE_DEPTH: u32 = 50;
pub const DEFAULT_SAMPLES_PER_PIXEL: u32 = 100;
