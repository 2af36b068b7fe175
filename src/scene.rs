use std::error::Error;
use std::fs::File;
use std::path::Path;

use serde::Deserialize;

use crate::color::{deserialize_color, Color24};
use crate::geometry::{Ground, Sphere};
use crate::intersection::{RayHit, Surface};
use crate::light::{AmbientLight, DirectionalLight, PointLight};
use crate::ray::Ray;
use crate::skybox::Skybox;
use crate::vec3::Vec3;

/// Sphere intersections within one direction-length of the ray origin are
/// discarded. The viewport plane sits at `z = 1`, so this doubles as the
/// near plane.
const NEAR_PLANE: f64 = 1.0;

pub struct Scene {
    pub spheres: Vec<Sphere>,
    pub ground: Option<Ground>,

    pub ambient_lights: Vec<AmbientLight>,
    pub point_lights: Vec<PointLight>,
    pub directional_lights: Vec<DirectionalLight>,

    pub skybox: Option<Skybox>,
    pub background: Color24,
}

impl Scene {
    pub fn new(background: Color24) -> Self {
        Self {
            spheres: Vec::new(),
            ground: None,
            ambient_lights: Vec::new(),
            point_lights: Vec::new(),
            directional_lights: Vec::new(),
            skybox: None,
            background,
        }
    }

    pub fn load<P: AsRef<Path>>(path: &P) -> Result<Self, Box<dyn Error>> {
        let file = File::open(path)?;
        let value: serde_json::Value = serde_json::from_reader(file)?;

        Scene::parse(&value)
    }

    fn parse(value: &serde_json::Value) -> Result<Self, Box<dyn Error>> {
        let root = &value["scene"];

        let background = match &root["background"] {
            serde_json::Value::Null => Color24::new(30.0, 30.0, 30.0),
            background => deserialize_color(background)?,
        };

        let mut scene = Scene::new(background);

        if let Some(spheres) = root["spheres"].as_array() {
            for sphere in spheres {
                scene.spheres.push(Deserialize::deserialize(sphere)?);
            }
        }

        if !root["ground"].is_null() {
            scene.ground = Some(Deserialize::deserialize(&root["ground"])?);
        }

        if let Some(path) = root["skybox"]["path"].as_str() {
            scene.skybox = Some(Skybox::load(&path)?);
        }

        let lights = &root["lights"];
        if let Some(ambient) = lights["ambient"].as_array() {
            for light in ambient {
                scene.ambient_lights.push(Deserialize::deserialize(light)?);
            }
        }
        if let Some(point) = lights["point"].as_array() {
            for light in point {
                scene.point_lights.push(Deserialize::deserialize(light)?);
            }
        }
        if let Some(directional) = lights["directional"].as_array() {
            for light in directional {
                scene.directional_lights.push(Deserialize::deserialize(light)?);
            }
        }

        Ok(scene)
    }

    /// Nearest visible surface point along `ray`, or `None` when the ray
    /// leaves the scene.
    pub fn trace(&self, ray: &Ray) -> Option<RayHit> {
        let sphere = self
            .spheres
            .iter()
            .filter_map(|sphere| {
                let (t1, t2) = sphere.roots(ray)?;
                let t = f64::min(
                    if t1 > NEAR_PLANE { t1 } else { f64::INFINITY },
                    if t2 > NEAR_PLANE { t2 } else { f64::INFINITY },
                );

                if t.is_finite() {
                    Some((t, sphere))
                } else {
                    None
                }
            })
            .fold(None, |closest: Option<(f64, &Sphere)>, candidate| {
                match closest {
                    Some((t, _)) if t <= candidate.0 => closest,
                    _ => Some(candidate),
                }
            });

        let closest_t = sphere.map_or(f64::INFINITY, |(t, _)| t);

        // The ground may only override a strictly closer sphere hit.
        if let Some(ground) = &self.ground {
            let t = ground.intersection(ray);
            if t > 0.0 && t < closest_t {
                return Some(RayHit::new(
                    Surface::Ground,
                    ray.offset(t),
                    Vec3::new(0.0, 1.0, 0.0),
                    ground.material,
                ));
            }
        }

        sphere.map(|(t, sphere)| {
            let position = ray.offset(t);
            let normal = (position - sphere.center).unit();

            RayHit::new(Surface::Sphere, position, normal, sphere.material)
        })
    }

    /// Final color for `ray`: direct lighting at the hit point, or the
    /// environment (skybox, then flat background) on a miss.
    pub fn shade(&self, ray: &Ray, hit: Option<&RayHit>) -> Color24 {
        match hit {
            Some(hit) => self.compute_lighting(
                hit.material.color,
                hit.position,
                hit.normal,
                *ray.direction(),
                hit.material.specular,
            ),
            None => match &self.skybox {
                Some(skybox) => skybox.sample(ray.direction()),
                None => self.background,
            },
        }
    }

    fn compute_lighting(
        &self,
        base: Color24,
        point: Vec3<f64>,
        normal: Vec3<f64>,
        view: Vec3<f64>,
        specular: f64,
    ) -> Color24 {
        let mut intensity: f64 = self.ambient_lights.iter().map(|light| light.intensity).sum();

        intensity += self
            .point_lights
            .iter()
            .map(|light| light.illumination(point, normal, view, specular))
            .sum::<f64>();

        intensity += self
            .directional_lights
            .iter()
            .map(|light| light.illumination(normal, view, specular))
            .sum::<f64>();

        base * intensity
    }
}

#[cfg(test)]
mod tests {
    use image::{Rgb, RgbImage};

    use crate::geometry::Material;

    use super::*;

    fn matte(r: f64, g: f64, b: f64) -> Material {
        Material {
            color: Color24::new(r, g, b),
            specular: -1.0,
        }
    }

    fn sphere(center: Vec3<f64>, radius: f64) -> Sphere {
        Sphere {
            center,
            radius,
            material: matte(220.0, 40.0, 40.0),
        }
    }

    fn scene() -> Scene {
        Scene::new(Color24::new(25.0, 25.0, 40.0))
    }

    #[test]
    fn near_plane_rejects_close_root() {
        let mut scene = scene();
        // Roots at t = 0.5 and t = 1.5; only the far one qualifies.
        scene.spheres.push(sphere(Vec3::new(0.0, 0.0, 1.0), 0.5));

        let ray = Ray::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0));
        let hit = scene.trace(&ray).unwrap();

        assert_eq!(Surface::Sphere, hit.surface);
        assert_eq!(Vec3::new(0.0, 0.0, 1.5), hit.position);
    }

    #[test]
    fn sphere_inside_near_zone_is_missed() {
        let mut scene = scene();
        // Both roots below the near plane.
        scene.spheres.push(sphere(Vec3::new(0.0, 0.0, 0.5), 0.25));

        let ray = Ray::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0));

        assert_eq!(None, scene.trace(&ray));
    }

    #[test]
    fn closer_sphere_occludes_ground() {
        let mut scene = scene();
        scene.spheres.push(sphere(Vec3::new(0.0, 4.0, 0.0), 1.0));
        scene.ground = Some(Ground {
            material: matte(235.0, 220.0, 120.0),
        });

        // Sphere at t = 5, ground at t = 10.
        let ray = Ray::new(Vec3::new(0.0, 10.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
        let hit = scene.trace(&ray).unwrap();

        assert_eq!(Surface::Sphere, hit.surface);
        assert_eq!(Vec3::new(0.0, 5.0, 0.0), hit.position);
    }

    #[test]
    fn closer_ground_occludes_sphere() {
        let mut scene = scene();
        scene.spheres.push(sphere(Vec3::new(0.0, -4.0, 0.0), 1.0));
        scene.ground = Some(Ground {
            material: matte(235.0, 220.0, 120.0),
        });

        // Ground at t = 2, sphere roots at t = 5 and t = 7.
        let ray = Ray::new(Vec3::new(0.0, 2.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
        let hit = scene.trace(&ray).unwrap();

        assert_eq!(Surface::Ground, hit.surface);
        assert_eq!(Vec3::new(0.0, 0.0, 0.0), hit.position);
    }

    #[test]
    fn ground_only_scene() {
        let mut scene = scene();
        scene.ground = Some(Ground {
            material: matte(235.0, 220.0, 120.0),
        });

        let ray = Ray::new(Vec3::new(0.0, 5.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
        let hit = scene.trace(&ray).unwrap();

        assert_eq!(Surface::Ground, hit.surface);
        assert_eq!(Vec3::new(0.0, 0.0, 0.0), hit.position);
        assert_eq!(Vec3::new(0.0, 1.0, 0.0), hit.normal);
    }

    #[test]
    fn ray_parallel_to_ground_misses() {
        let mut scene = scene();
        scene.ground = Some(Ground {
            material: matte(235.0, 220.0, 120.0),
        });

        let ray = Ray::new(Vec3::new(0.0, 5.0, 0.0), Vec3::new(1.0, 0.0, 0.0));

        assert_eq!(None, scene.trace(&ray));
    }

    #[test]
    fn miss_prefers_skybox_over_background() {
        let mut scene = scene();
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, 1.0, 1.0));

        assert_eq!(scene.background, scene.shade(&ray, None));

        scene.skybox = Some(Skybox::new(RgbImage::from_pixel(4, 2, Rgb([10, 200, 30]))));

        assert_eq!(Color24::new(10.0, 200.0, 30.0), scene.shade(&ray, None));
    }

    #[test]
    fn ambient_lights_add_linearly() {
        let mut scene = scene();
        scene.ambient_lights.push(AmbientLight { intensity: 0.2 });
        scene.ambient_lights.push(AmbientLight { intensity: 0.3 });

        let lit = scene.compute_lighting(
            Color24::new(100.0, 40.0, 250.0),
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
            -1.0,
        );

        assert_eq!(Color24::new(50.0, 20.0, 125.0), lit);
    }

    #[test]
    fn specular_sentinel_disables_highlight() {
        let mut scene = scene();
        scene.point_lights.push(PointLight {
            intensity: 0.5,
            position: Vec3::new(0.0, 2.0, 0.0),
        });

        let base = Color24::new(100.0, 40.0, 250.0);
        let point = Vec3::new(0.0, 0.0, 0.0);
        let normal = Vec3::new(0.0, 1.0, 0.0);

        // A view along the reflection: the exponent decides.
        let view = Vec3::new(0.0, 1.0, 0.0);
        let shiny = scene.compute_lighting(base, point, normal, view, 2.0);
        let dull = scene.compute_lighting(base, point, normal, view, -1.0);

        assert_eq!(base * 1.0, shiny);
        assert_eq!(base * 0.5, dull);
        assert_ne!(shiny, dull);

        // A view facing away from the reflection: the exponent is moot.
        let view = Vec3::new(0.0, -1.0, 0.0);
        let shiny = scene.compute_lighting(base, point, normal, view, 2.0);
        let dull = scene.compute_lighting(base, point, normal, view, -1.0);

        assert_eq!(shiny, dull);
    }

    #[test]
    fn trace_and_shade_are_deterministic() {
        let mut scene = scene();
        scene.spheres.push(sphere(Vec3::new(0.3, 1.0, 5.0), 1.0));
        scene.ground = Some(Ground {
            material: matte(235.0, 220.0, 120.0),
        });
        scene.ambient_lights.push(AmbientLight { intensity: 0.2 });
        scene.point_lights.push(PointLight {
            intensity: 0.6,
            position: Vec3::new(2.0, 1.0, 0.0),
        });
        scene.directional_lights.push(DirectionalLight {
            intensity: 0.2,
            direction: Vec3::new(1.0, 4.0, 4.0),
        });

        let ray = Ray::new(Vec3::new(0.0, 1.0, -2.0), Vec3::new(0.05, -0.02, 1.0));

        let first = scene.trace(&ray);
        let second = scene.trace(&ray);
        assert_eq!(first, second);

        assert_eq!(
            scene.shade(&ray, first.as_ref()),
            scene.shade(&ray, second.as_ref())
        );
    }

    #[test]
    fn scene_document_parses() {
        let value = serde_json::json!({
            "scene": {
                "background": [25, 25, 40],
                "ground": { "material": { "color": [235, 220, 120], "specular": -1.0 } },
                "spheres": [
                    { "center": { "x": 0.0, "y": 1.0, "z": 5.0 }, "radius": 1.0,
                      "material": { "color": [220, 40, 40], "specular": 500.0 } }
                ],
                "lights": {
                    "ambient": [ { "intensity": 0.2 } ],
                    "point": [ { "intensity": 0.6,
                                 "position": { "x": 2.0, "y": 1.0, "z": 0.0 } } ],
                    "directional": [ { "intensity": 0.2,
                                       "direction": { "x": 1.0, "y": 4.0, "z": 4.0 } } ]
                }
            }
        });

        let scene = Scene::parse(&value).unwrap();

        assert_eq!(Color24::new(25.0, 25.0, 40.0), scene.background);
        assert_eq!(1, scene.spheres.len());
        assert_eq!(500.0, scene.spheres[0].material.specular);
        assert_eq!(-1.0, scene.ground.unwrap().material.specular);
        assert_eq!(1, scene.ambient_lights.len());
        assert_eq!(1, scene.point_lights.len());
        assert_eq!(1, scene.directional_lights.len());
        assert!(scene.skybox.is_none());
    }

    #[test]
    fn absent_collections_are_empty() {
        let scene = Scene::parse(&serde_json::json!({ "scene": {} })).unwrap();

        assert!(scene.spheres.is_empty());
        assert!(scene.ground.is_none());
        assert!(scene.ambient_lights.is_empty());

        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(None, scene.trace(&ray));
    }
}
