use std::ops::Mul;

use image::Rgb;
use serde::{Deserialize, Deserializer};

/// Three-channel color on a nominal 0..=255 scale. Channels stay floating
/// point so that intensity scaling never saturates; clamping belongs to the
/// conversion into the output pixel type.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Color24 {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color24 {
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

impl Mul<f64> for Color24 {
    type Output = Color24;

    #[inline]
    fn mul(self, intensity: f64) -> Self::Output {
        Color24 {
            r: self.r * intensity,
            g: self.g * intensity,
            b: self.b * intensity,
        }
    }
}

impl From<Rgb<u8>> for Color24 {
    fn from(rgb: Rgb<u8>) -> Self {
        Color24::new(rgb[0] as f64, rgb[1] as f64, rgb[2] as f64)
    }
}

impl From<Color24> for Rgb<u8> {
    fn from(color: Color24) -> Self {
        let clamp = |c: f64| if c > 255.0 { 255 } else { c as u8 };

        Rgb([clamp(color.r), clamp(color.g), clamp(color.b)])
    }
}

pub fn deserialize_color<'de, D>(de: D) -> Result<Color24, D::Error>
where
    D: Deserializer<'de>,
{
    let (r, g, b): (u8, u8, u8) = Deserialize::deserialize(de)?;

    Ok(Color24::new(r as f64, g as f64, b as f64))
}

#[test]
fn scale_without_clamp() {
    let color = Color24::new(100.0, 150.0, 200.0);

    assert_eq!(Color24::new(200.0, 300.0, 400.0), color * 2.0);
}

#[test]
fn clamp_on_pixel_conversion() {
    let pixel = Rgb::from(Color24::new(300.0, 120.7, 0.0));

    assert_eq!(Rgb([255, 120, 0]), pixel);
}
