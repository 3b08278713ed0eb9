//! Headless driver of the Giza scene: generates the world once and reports what the
//! renderer would receive.

use std::process::ExitCode;

use glam::Vec3;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use giza::config::WorldConfig;
use giza::worldgen::WorldComposer;
use giza::scene::{color_to_rgb, SceneState, TimeOfDay, FOG_NEAR, FOG_FAR};
use giza::scene::{RIM_LIGHT_COLOR, RIM_LIGHT_INTENSITY, RIM_LIGHT_POSITION};
use giza::tour::{tour_pose, TourCamera, CAMERA_FOV, DEFAULT_CAMERA_POSITION};

mod config;


/// Simulated frames per second of the tour, the camera smoothing is per frame.
const FRAME_RATE: u32 = 60;


pub fn main() -> ExitCode {

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut world_config = WorldConfig::default();
    if let Some(seed) = config::seed() {
        world_config.seed = seed;
    }

    let mut composer = match WorldComposer::new(world_config) {
        Ok(composer) => composer,
        Err(e) => {
            error!("invalid world configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    info!("generating world with seed {}", composer.config().seed);
    let world = composer.compose();
    info!("generated {} voxels", world.len());

    let batches = world.batches();
    for (material, positions) in batches.iter() {

        let emissive = match material.emissive() {
            Some((color, intensity)) => format!("#{color:06x} x{intensity}"),
            None => "none".to_string(),
        };

        info!("batch {:<10} {:>6} instances, color {} rough {} metal {} emissive {} box {}{}{}{}",
            material.name(), positions.len(),
            fmt_vec(color_to_rgb(material.color())), material.roughness(), material.metalness(),
            emissive, fmt_vec(material.box_size()),
            if material.is_transparent() { " transparent" } else { "" },
            if material.casts_shadow() { "" } else { " no-cast" },
            if material.receives_shadow() { "" } else { " no-receive" });

    }
    info!("{} instances in {} batches", batches.total(), batches.iter().count());

    for time in TimeOfDay::ALL {
        let lighting = time.lighting();
        info!("lighting {:<11} light #{:06x} x{} ambient #{:06x} x{} fog #{:06x} {}..{} d={} stars={}",
            time.name(),
            lighting.light_color, lighting.intensity,
            lighting.ambient_color, lighting.ambient_intensity,
            lighting.fog_color, FOG_NEAR, FOG_FAR, lighting.fog_density,
            lighting.stars);
    }

    info!("rim light #{RIM_LIGHT_COLOR:06x} x{RIM_LIGHT_INTENSITY} at {}", fmt_vec(RIM_LIGHT_POSITION));
    info!("camera fov {CAMERA_FOV} at {} looking at the origin", fmt_vec(DEFAULT_CAMERA_POSITION));

    let mut scene = SceneState::default();
    scene.toggle_tour();
    info!("tour started at {}", scene.time_of_day.name());

    let mut camera = TourCamera::default();
    for frame in 0..=config::tour_seconds().saturating_mul(FRAME_RATE) {

        let elapsed = frame as f32 / FRAME_RATE as f32;
        camera.update(elapsed);
        if frame % FRAME_RATE != 0 {
            continue;
        }

        let second = frame / FRAME_RATE;
        let pose = tour_pose(elapsed);
        info!("tour {second:>3}s path {} camera {} looking at {}",
            fmt_vec(pose.position), fmt_vec(camera.position), fmt_vec(pose.target));

    }

    ExitCode::SUCCESS

}

fn fmt_vec(v: Vec3) -> String {
    format!("({:.1}, {:.1}, {:.1})", v.x, v.y, v.z)
}
