pub mod aabb;
pub mod transform;

pub use glam::{DMat3, DMat4, DVec2, DVec3};
pub use aabb::Aabb3;
pub use transform::{rotate_y, Transform};

pub type Point2 = DVec2;
pub type Point3 = DVec3;
pub type Vector3 = DVec3;
