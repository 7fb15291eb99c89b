#![deny(clippy::all)]

use clap::{value_t, App, Arg, ArgMatches};
use raycast::{output, PpmFormat, RenderOptions, Scene};
use std::path::Path;
use std::process;
use std::time::Instant;

fn is_positive_integer(value: String) -> Result<(), String> {
    match value.parse::<u32>() {
        Ok(v) if v > 0 => Ok(()),
        _ => Err(format!("\"{}\" is not a positive integer", value)),
    }
}

fn init_logger(verbosity: u64) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run(matches: &ArgMatches) -> raycast::Result<()> {
    let width = value_t!(matches, "width", u32).unwrap_or_else(|e| e.exit());
    let height = value_t!(matches, "height", u32).unwrap_or_else(|e| e.exit());
    let ppm_format = value_t!(matches, "format", PpmFormat).unwrap_or_else(|e| e.exit());
    let scene_path = Path::new(matches.value_of("scene").unwrap());
    let output_path = Path::new(matches.value_of("output").unwrap());
    let use_progress = !matches.is_present("noprogress");

    let now = Instant::now();
    let scene = Scene::from_path(scene_path)?;
    let scene = scene.build_raytracing_scene(RenderOptions::new(width, height))?;
    println!(
        "Took {:?} to load and validate scene with {} primitives.",
        now.elapsed(),
        scene.get_num_objects()
    );

    let (buffer, duration) = scene.raytrace_to_buffer(use_progress);
    output::save(&buffer, output_path, ppm_format)?;
    println!(
        "Output written to {} in {:.3?}",
        output_path.display(),
        duration
    );

    Ok(())
}

fn main() {
    let matches = App::new("raycast")
        .about("Casts one ray per pixel into a scene of spheres and planes")
        .arg(
            Arg::with_name("width")
                .index(1)
                .required(true)
                .validator(is_positive_integer)
                .help("Output width in pixels"),
        )
        .arg(
            Arg::with_name("height")
                .index(2)
                .required(true)
                .validator(is_positive_integer)
                .help("Output height in pixels"),
        )
        .arg(
            Arg::with_name("scene")
                .index(3)
                .required(true)
                .help("Input scene as a json file"),
        )
        .arg(
            Arg::with_name("output")
                .index(4)
                .required(true)
                .help(
                    "Output image file\n\
                     .ppm files are written as netpbm, other extensions by format",
                ),
        )
        .arg(
            Arg::with_name("format")
                .long("format")
                .takes_value(true)
                .possible_values(&["p3", "p6"])
                .default_value("p3")
                .help("Encoding used for .ppm output"),
        )
        .arg(
            Arg::with_name("noprogress")
                .long("no-progress")
                .help("Hide progress bar"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("Increase log verbosity, may be repeated"),
        )
        .get_matches();

    init_logger(matches.occurrences_of("verbose"));

    if let Err(err) = run(&matches) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}
