//! Spatial query service (overlap sphere + ray cast)
//!
//! Детекция не знает про физику напрямую: только про trait `SpatialQuery`.
//! ECS реализация (`WorldBodies`) читает `Body` + `Transform` + `Name`.
//! Формы axis-aligned, rotation не учитывается.

pub mod body;
pub mod query;


pub use body::Body;
pub use query::{nearest_ray_hit, overlapping_bodies, RayHit, SpatialQuery, WorldBodies};
