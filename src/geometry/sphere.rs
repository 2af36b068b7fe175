use crate::geometry::Material;
use crate::ray::Ray;
use crate::vec3::Vec3;

#[derive(Copy, Clone, Debug, Deserialize)]
pub struct Sphere {
    pub center: Vec3<f64>,
    pub radius: f64,
    pub material: Material,
}

impl Sphere {
    /// Both roots of the ray-sphere quadratic, unordered. `None` when the
    /// ray misses entirely. The caller decides which roots fall inside its
    /// validity window.
    pub fn roots(&self, ray: &Ray) -> Option<(f64, f64)> {
        let oc = ray.origin() - self.center;

        let a = ray.direction().dot(ray.direction());
        let b = 2.0 * oc.dot(ray.direction());
        let c = oc.dot(&oc) - self.radius.powi(2);

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrt = discriminant.sqrt();
        let denominator = 2.0 * a;

        Some(((-b + sqrt) / denominator, (-b - sqrt) / denominator))
    }
}

#[cfg(test)]
fn material() -> Material {
    use crate::color::Color24;

    Material {
        color: Color24::new(255.0, 255.0, 255.0),
        specular: -1.0,
    }
}

#[test]
fn roots_through_center() {
    let sphere = Sphere {
        center: Vec3::new(0.0, 0.0, 5.0),
        radius: 1.0,
        material: material(),
    };
    let ray = Ray::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0));

    assert_eq!(Some((6.0, 4.0)), sphere.roots(&ray));
}

#[test]
fn tangent_roots_coincide() {
    let sphere = Sphere {
        center: Vec3::new(0.0, 1.0, 5.0),
        radius: 1.0,
        material: material(),
    };
    let ray = Ray::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0));

    let (t1, t2) = sphere.roots(&ray).unwrap();
    assert_eq!(t1, t2);
    assert_eq!(5.0, t1);
}

#[test]
fn miss_has_no_roots() {
    let sphere = Sphere {
        center: Vec3::new(0.0, 3.0, 5.0),
        radius: 1.0,
        material: material(),
    };
    let ray = Ray::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0));

    assert_eq!(None, sphere.roots(&ray));
}
