use std::error::Error;
use std::time::Instant;

use image::{ImageBuffer, Rgb};
use rayon::prelude::*;
use sdl2::{event::Event, gfx::framerate::FPSManager, keyboard::Keycode};

use prism::{Camera, Scene, Vec3, Viewport};

fn main() -> Result<(), Box<dyn Error>> {
    let width = 800;
    let height = 800;

    let scene = Scene::load(&"scene.json")?;

    let mut camera = Camera {
        origin: Vec3::new(0.0, 1.0, -2.0),
        yaw: 0.0,
        pitch: 0.0,
        viewport: Viewport {
            width: 1.0,
            height: 1.0,
        },
    };

    let ctx = sdl2::init()?;
    let video = ctx.video()?;
    let window = video.window("Prism", width, height).position_centered().opengl().build()?;
    ctx.mouse().show_cursor(false);

    let mut canvas = window.into_canvas().accelerated().present_vsync().target_texture().build()?;
    let texture_creator = canvas.texture_creator();
    canvas.clear();

    let mut fps = FPSManager::new();
    fps.set_framerate(25)?;

    let mut events = ctx.event_pump()?;
    let mut texture = texture_creator.create_texture_streaming(None, width, height)?;
    'mainloop: loop {
        const SPEED: f64 = 0.05;
        for event in events.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                }
                | Event::KeyDown {
                    keycode: Some(Keycode::Q), ..
                } => break 'mainloop,
                Event::KeyDown {
                    keycode: Some(Keycode::W), ..
                } => {
                    camera.origin.z += SPEED;
                }
                Event::KeyDown {
                    keycode: Some(Keycode::A), ..
                } => {
                    camera.origin.x -= SPEED;
                }
                Event::KeyDown {
                    keycode: Some(Keycode::S), ..
                } => {
                    camera.origin.z -= SPEED;
                }
                Event::KeyDown {
                    keycode: Some(Keycode::D), ..
                } => {
                    camera.origin.x += SPEED;
                }
                Event::KeyDown {
                    keycode: Some(Keycode::P), ..
                } => {
                    save_render(&scene, &camera, width, height)?;
                    println!("Saved render.png");
                }
                Event::MouseMotion {
                    xrel, yrel, ..
                } => {
                    camera.pitch += (-yrel as f64) / 100.0;
                    camera.yaw += (xrel as f64) / 100.0;
                }
                _event => {}
            }
        }

        println!("Start drawing ...");
        let now = Instant::now();

        texture.with_lock(None, |buf, _pitch| {
            buf.par_chunks_mut(4).enumerate().for_each(|(n, c)| {
                let x = (n % (width as usize)) as u32;
                let y = (n / (width as usize)) as u32;

                let ray = camera.ray_through(x, y, width, height);
                let hit = scene.trace(&ray);
                let color = Rgb::from(scene.shade(&ray, hit.as_ref()));

                c[0] = color[2];
                c[1] = color[1];
                c[2] = color[0];
                c[3] = 0;
            });
        })?;

        canvas.clear();
        canvas.copy(&texture, None, None)?;

        let elapsed = now.elapsed();
        println!("Finished, elapsed: {:.3} ms", elapsed.as_millis() as f64);
        canvas.present();
        fps.delay();
    }

    Ok(())
}

fn save_render(scene: &Scene, camera: &Camera, width: u32, height: u32) -> Result<(), Box<dyn Error>> {
    let mut pixels = vec![0u8; (width * height * 3) as usize];

    pixels.par_chunks_mut(3).enumerate().for_each(|(n, px)| {
        let x = (n % (width as usize)) as u32;
        let y = (n / (width as usize)) as u32;

        let ray = camera.ray_through(x, y, width, height);
        let hit = scene.trace(&ray);
        let color = Rgb::from(scene.shade(&ray, hit.as_ref()));

        px[0] = color[0];
        px[1] = color[1];
        px[2] = color[2];
    });

    let image: ImageBuffer<Rgb<u8>, Vec<u8>> =
        ImageBuffer::from_raw(width, height, pixels).ok_or("render buffer size mismatch")?;
    image.save("render.png")?;

    Ok(())
}
