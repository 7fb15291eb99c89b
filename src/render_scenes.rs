#![deny(clippy::all)]

use raycast::{output, PpmFormat, RenderOptions, Scene};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

fn main() -> raycast::Result<()> {
    env_logger::init();

    let scenes = [
        "scenes/spheres.json",
        "scenes/planes.json",
        "scenes/overlap.json",
    ];
    let render_options = RenderOptions::new(640, 480);
    let output_dir = "renders";
    let iterations = 3;

    fs::create_dir_all(output_dir)?;

    for scene in &scenes {
        let scene_path = Path::new(scene);

        let mut output_filename = PathBuf::from(output_dir);
        output_filename.push(scene_path.file_stem().unwrap_or_default());
        output_filename.set_extension("ppm");

        let scene = Scene::from_path(scene_path)?.build_raytracing_scene(render_options)?;

        let mut duration_sum = Duration::new(0, 0);

        println!("Raycasting {}...", scene_path.display());
        for i in 0..iterations {
            print!("└ Iteration {}: tracing...", i + 1);
            io::stdout().flush()?;

            let (buffer, duration) = scene.raytrace_to_buffer(false);
            duration_sum += duration;

            println!("\r│ Iteration {}: rendered in {:.3?}", i + 1, duration);

            if i == iterations - 1 {
                println!("│ Avg time: {:.3?}", duration_sum / iterations);
                output::save(&buffer, &output_filename, PpmFormat::Binary)?;
                println!("└ Wrote rendered image to {}", output_filename.display());
            }
        }
        println!();
    }

    Ok(())
}
