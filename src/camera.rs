use crate::ray::Ray;
use crate::vec3::Vec3;

/// Size of the image plane at `z = 1`, in world units.
#[derive(Copy, Clone, Debug)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

pub struct Camera {
    pub origin: Vec3<f64>,
    /// Rotation around the vertical axis, radians.
    pub yaw: f64,
    /// Rotation around the horizontal axis, radians.
    pub pitch: f64,
    pub viewport: Viewport,
}

impl Camera {
    /// Ray from the camera origin through the center of pixel `(x, y)` of a
    /// `width` x `height` image.
    pub fn ray_through(&self, x: u32, y: u32, width: u32, height: u32) -> Ray {
        let sx = x as f64 + width as f64 / -2.0;
        let sy = height as f64 / 2.0 - y as f64;

        let vx = sx * self.viewport.width / width as f64;
        let vy = sy * self.viewport.height / height as f64;

        Ray::new(self.origin, self.rotate(Vec3::new(vx, vy, 1.0)))
    }

    // Pitch around X, then yaw around Y.
    fn rotate(&self, v: Vec3<f64>) -> Vec3<f64> {
        let (pitch_sin, pitch_cos) = self.pitch.sin_cos();
        let (yaw_sin, yaw_cos) = self.yaw.sin_cos();

        let y = v.y * pitch_cos - v.z * pitch_sin;
        let z = v.y * pitch_sin + v.z * pitch_cos;

        let x = v.x * yaw_cos + z * yaw_sin;
        let z = z * yaw_cos - v.x * yaw_sin;

        Vec3::new(x, y, z)
    }
}

#[cfg(test)]
fn camera() -> Camera {
    Camera {
        origin: Vec3::new(0.0, 1.0, -2.0),
        yaw: 0.0,
        pitch: 0.0,
        viewport: Viewport {
            width: 1.0,
            height: 1.0,
        },
    }
}

#[test]
fn center_pixel_looks_forward() {
    let ray = camera().ray_through(400, 400, 800, 800);

    assert_eq!(Vec3::new(0.0, 1.0, -2.0), ray.origin());
    assert_eq!(&Vec3::new(0.0, 0.0, 1.0), ray.direction());
}

#[test]
fn zero_angles_are_identity() {
    let v = Vec3::new(0.3, -0.2, 1.0);

    assert_eq!(v, camera().rotate(v));
}

#[test]
fn quarter_yaw_turns_forward_to_right() {
    use std::f64::consts::FRAC_PI_2;

    let mut camera = camera();
    camera.yaw = FRAC_PI_2;

    let v = camera.rotate(Vec3::new(0.0, 0.0, 1.0));

    assert!((v.x - 1.0).abs() < 1e-12);
    assert!(v.y.abs() < 1e-12);
    assert!(v.z.abs() < 1e-12);
}
