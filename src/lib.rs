#[macro_use]
extern crate serde_derive;

pub use crate::camera::{Camera, Viewport};
pub use crate::color::Color24;
pub use crate::geometry::{Ground, Material, Sphere};
pub use crate::intersection::{RayHit, Surface};
pub use crate::light::{AmbientLight, DirectionalLight, PointLight};
pub use crate::ray::Ray;
pub use crate::scene::Scene;
pub use crate::skybox::Skybox;
pub use crate::vec3::Vec3;

pub mod camera;
pub mod color;
pub mod geometry;
pub mod intersection;
pub mod light;
pub mod ray;
pub mod scene;
pub mod skybox;
pub mod vec3;
