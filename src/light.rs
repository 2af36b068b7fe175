use crate::vec3::Vec3;

#[derive(Copy, Clone, Debug, Deserialize)]
pub struct AmbientLight {
    pub intensity: f64,
}

#[derive(Copy, Clone, Debug, Deserialize)]
pub struct PointLight {
    pub intensity: f64,
    pub position: Vec3<f64>,
}

#[derive(Copy, Clone, Debug, Deserialize)]
pub struct DirectionalLight {
    pub intensity: f64,
    pub direction: Vec3<f64>,
}

impl PointLight {
    pub fn illumination(
        &self,
        point: Vec3<f64>,
        normal: Vec3<f64>,
        view: Vec3<f64>,
        specular: f64,
    ) -> f64 {
        phong(self.position - point, self.intensity, normal, view, specular)
    }
}

impl DirectionalLight {
    pub fn illumination(&self, normal: Vec3<f64>, view: Vec3<f64>, specular: f64) -> f64 {
        phong(self.direction, self.intensity, normal, view, specular)
    }
}

/// Diffuse plus optional specular contribution of a single light arriving
/// along `light`. Divisions by the vector lengths are explicit, so neither
/// the normal nor the light vector has to be unit length.
fn phong(light: Vec3<f64>, intensity: f64, normal: Vec3<f64>, view: Vec3<f64>, specular: f64) -> f64 {
    let mut total = 0.0;

    let diffuse = light.dot(&normal);
    if diffuse > 0.0 {
        total += intensity * diffuse / (normal.len() * light.len());
    }

    // Exponents at or below -1 mean the surface has no highlight.
    if specular > -1.0 {
        let reflection = normal.scale(2.0 * normal.dot(&light));
        let r_dot_v = view.dot(&reflection);
        if r_dot_v > 0.0 {
            total += intensity * (r_dot_v / (reflection.len() * view.len())).powf(specular);
        }
    }

    total
}

#[test]
fn light_behind_surface_adds_no_diffuse() {
    let light = PointLight {
        intensity: 1.0,
        position: Vec3::new(0.0, -2.0, 0.0),
    };

    let illumination = light.illumination(
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(0.0, -1.0, 0.0),
        -1.0,
    );

    assert_eq!(0.0, illumination);
}

#[test]
fn diffuse_normalizes_both_vectors() {
    let light = DirectionalLight {
        intensity: 0.8,
        direction: Vec3::new(0.0, 4.0, 0.0),
    };

    // A normal of length 2 must give the same diffuse term as a unit one.
    let scaled = light.illumination(Vec3::new(0.0, 2.0, 0.0), Vec3::new(0.0, -1.0, 0.0), -1.0);
    let unit = light.illumination(Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, -1.0, 0.0), -1.0);

    assert_eq!(0.8, scaled);
    assert_eq!(unit, scaled);
}
