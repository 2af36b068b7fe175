use crate::vec3::Vec3;

/// Half-line traced through the scene. The direction is stored exactly as
/// given; unnormalized directions are valid input for every consumer.
#[derive(Debug)]
pub struct Ray {
    origin: Vec3<f64>,
    direction: Vec3<f64>,
}

impl Ray {
    pub fn new(origin: Vec3<f64>, direction: Vec3<f64>) -> Self {
        Self { origin, direction }
    }

    #[inline]
    pub fn origin(&self) -> Vec3<f64> {
        self.origin
    }

    #[inline]
    pub fn direction(&self) -> &Vec3<f64> {
        &self.direction
    }

    #[inline]
    pub fn offset(&self, t: f64) -> Vec3<f64> {
        self.origin + self.direction.scale(t)
    }
}

#[test]
fn offset_along_direction() {
    let ray = Ray::new(Vec3::new(0.0, 5.0, 0.0), Vec3::new(0.0, -1.0, 0.0));

    assert_eq!(Vec3::new(0.0, 0.0, 0.0), ray.offset(5.0));
}
