use std::error::Error;
use std::f64::consts::PI;
use std::path::Path;

use image::RgbImage;

use crate::color::Color24;
use crate::vec3::Vec3;

/// Equirectangular environment map sampled by miss rays.
pub struct Skybox {
    image: RgbImage,
}

impl Skybox {
    pub fn new(image: RgbImage) -> Self {
        Self { image }
    }

    pub fn load<P: AsRef<Path>>(path: &P) -> Result<Self, Box<dyn Error>> {
        let image = image::open(path)?.to_rgb8();

        Ok(Skybox::new(image))
    }

    /// Color of the environment along `direction`. The direction does not
    /// have to be unit length; a degenerate direction saturates to texel
    /// (0, 0) rather than panicking.
    pub fn sample(&self, direction: &Vec3<f64>) -> Color24 {
        let (width, height) = self.image.dimensions();

        let u = 0.5 + direction.z.atan2(direction.x) / (2.0 * PI);
        let v = 0.5 - (direction.y / direction.len()).asin() / PI;

        let x = ((u * width as f64) as u32).min(width - 1);
        let y = ((v * height as f64) as u32).min(height - 1);

        Color24::from(*self.image.get_pixel(x, y))
    }
}

#[test]
fn solid_sky_samples_its_color() {
    use image::Rgb;

    let skybox = Skybox::new(RgbImage::from_pixel(4, 2, Rgb([10, 200, 30])));

    assert_eq!(
        Color24::new(10.0, 200.0, 30.0),
        skybox.sample(&Vec3::new(0.3, -0.2, 0.8))
    );
    assert_eq!(
        Color24::new(10.0, 200.0, 30.0),
        skybox.sample(&Vec3::new(0.0, 1.0, 0.0))
    );
}
