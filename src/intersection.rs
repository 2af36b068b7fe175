use crate::geometry::Material;
use crate::vec3::Vec3;

/// Which kind of surface a ray landed on.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Surface {
    Ground,
    Sphere,
}

/// Nearest qualifying intersection of a ray with the scene, materialized
/// with the data shading needs. A miss is `None` at the `trace` call site,
/// so every `RayHit` in existence describes a real surface point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RayHit {
    pub surface: Surface,
    pub position: Vec3<f64>,
    pub normal: Vec3<f64>,
    pub material: Material,
}

impl RayHit {
    pub fn new(surface: Surface, position: Vec3<f64>, normal: Vec3<f64>, material: Material) -> Self {
        Self {
            surface,
            position,
            normal,
            material,
        }
    }
}
