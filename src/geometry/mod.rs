use crate::color::{deserialize_color, Color24};

mod ground;
mod sphere;

pub use self::ground::Ground;
pub use self::sphere::Sphere;

#[derive(Copy, Clone, Debug, Deserialize, PartialEq)]
pub struct Material {
    #[serde(deserialize_with = "deserialize_color")]
    pub color: Color24,
    /// Phong exponent. Values at or below -1 mark a surface without a
    /// highlight.
    pub specular: f64,
}
