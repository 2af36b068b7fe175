use crate::geometry::Material;
use crate::ray::Ray;

///
///
/// The ground is the infinite plane at `y = 0` with an upward normal. Unlike
/// a general plane it needs no orientation data, only a surface material.
#[derive(Copy, Clone, Debug, Deserialize)]
pub struct Ground {
    pub material: Material,
}

impl Ground {
    /// Parameter at which the ray crosses `y = 0`. Rays parallel to the
    /// plane (or starting on it) produce a non-finite value, which fails any
    /// range comparison downstream.
    #[inline]
    pub fn intersection(&self, ray: &Ray) -> f64 {
        -ray.origin().y / ray.direction().y
    }
}

#[test]
fn crossing_from_above() {
    use crate::color::Color24;
    use crate::vec3::Vec3;

    let ground = Ground {
        material: Material {
            color: Color24::new(255.0, 255.0, 255.0),
            specular: -1.0,
        },
    };
    let ray = Ray::new(Vec3::new(0.0, 5.0, 0.0), Vec3::new(0.0, -1.0, 0.0));

    assert_eq!(5.0, ground.intersection(&ray));
}

#[test]
fn parallel_ray_is_non_finite() {
    use crate::color::Color24;
    use crate::vec3::Vec3;

    let ground = Ground {
        material: Material {
            color: Color24::new(255.0, 255.0, 255.0),
            specular: -1.0,
        },
    };
    let ray = Ray::new(Vec3::new(0.0, 5.0, 0.0), Vec3::new(1.0, 0.0, 0.0));

    assert!(!ground.intersection(&ray).is_finite());
}
