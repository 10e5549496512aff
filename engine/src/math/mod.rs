//! Geometry Primitives
//!
//! Thin plane/sphere/frustum layer on top of [`glam`] vector math. Everything
//! the culling kernels consume geometrically lives here; the kernels
//! themselves are in [`crate::cull`].

pub mod frustum;
pub mod plane;
pub mod sphere;

pub use frustum::{
    Frustum, PLANE_BOTTOM, PLANE_COUNT, PLANE_FAR, PLANE_LEFT, PLANE_NEAR, PLANE_RIGHT, PLANE_TOP,
};
pub use plane::Plane;
pub use sphere::Sphere;
