//! Chaserig - headless driver for the chase camera rig
//!
//! Runs the camera and locomotion against a scripted stick input and moves a
//! tagged player around a scene, logging what the rig produces.

mod settings;

use std::f32::consts::TAU;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chaserig_core::{EntityId, GameTime, Quat, Transform, Vec3};
use chaserig_game::locomotion::{DIRECTION_PARAM, SPEED_PARAM};
use chaserig_game::{
    AnimatorParameters, ChaseCamera, InputSample, LocomotionController, LocomotionResolver,
    Scene, ScriptedInput, SubjectLocator,
};
use tracing::{debug, info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::settings::{DemoSettings, RigSettings};

const SAVE_DEFAULTS_FLAG: &str = "--save-defaults";

/// Stick input for the demo: push forward, sweep a full circle, then let go
fn demo_script(frames: u32) -> ScriptedInput {
    let sweep = frames / 2;
    let mut samples = Vec::with_capacity(frames as usize);

    samples.extend((0..frames / 4).map(|_| InputSample::new(0.0, 1.0)));
    samples.extend((0..sweep).map(|i| {
        let angle = i as f32 / sweep.max(1) as f32 * TAU;
        InputSample::new(angle.sin(), angle.cos())
    }));
    samples.push(InputSample::ZERO);

    ScriptedInput::new(samples)
}

/// Stand-in movement collaborator: turn by the damped direction and walk
/// forward by the stick speed.
fn move_subject(
    scene: &mut Scene,
    player: EntityId,
    animator: &AnimatorParameters,
    demo: &DemoSettings,
    dt: f32,
) {
    let Some(transform) = scene.transform_mut(player) else {
        return;
    };

    let direction = animator.get(DIRECTION_PARAM).unwrap_or(0.0);
    let speed = animator.get(SPEED_PARAM).unwrap_or(0.0);

    transform.rotate(Quat::from_rotation_y(direction * dt));
    let step = transform.forward() * speed.sqrt() * demo.walk_speed * dt;
    transform.translate(step);
}

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("Failed to set subscriber")?;

    info!("Starting chaserig...");

    let arg = std::env::args().nth(1);
    if arg.as_deref() == Some(SAVE_DEFAULTS_FLAG) {
        return RigSettings::default()
            .save()
            .context("Failed to save default settings");
    }

    let settings = RigSettings::load(arg.map(PathBuf::from).as_deref());
    settings.validate().context("Invalid rig settings")?;

    let mut scene = Scene::new();
    let mut camera = ChaseCamera::new(
        settings.camera.clone(),
        Transform::from_position(Vec3::new(0.0, 2.0, -10.0)),
    )
    .context("Failed to create chase camera")?;

    // The camera looks before the player exists and binds on a later frame
    camera.bind_subject(&scene);
    let player = scene.spawn(settings.camera.subject_tag.clone(), Transform::default());

    let resolver =
        LocomotionResolver::new(settings.locomotion.clone()).context("Failed to create resolver")?;
    let controller = LocomotionController::new(resolver);
    let mut input = demo_script(settings.demo.frames);
    let mut animator = AnimatorParameters::new();
    let mut time = GameTime::new(settings.time.clone());

    let log_interval = settings.demo.log_interval.max(1);

    for frame in 0..settings.demo.frames {
        time.update(settings.demo.frame_delta);
        let dt = time.delta_time;

        camera.update(&scene, dt);

        let Some(pose) = scene.pose(player) else {
            warn!("Player missing, skipping locomotion");
            continue;
        };
        let output = controller.update(
            &mut input,
            pose.forward,
            camera.forward(),
            Some(&mut animator),
            dt,
        );

        move_subject(&mut scene, player, &animator, &settings.demo, dt);

        if frame % log_interval == 0 {
            info!(
                "frame {:>4}  player {:>6.2} {:>6.2} {:>6.2}  camera {:>6.2} {:>6.2} {:>6.2}  direction {:>6.3}  speed {:.3}",
                frame,
                pose.position.x,
                pose.position.y,
                pose.position.z,
                camera.position().x,
                camera.position().y,
                camera.position().z,
                output.direction,
                output.speed,
            );
            for line in camera.debug_lines(&pose) {
                debug!(
                    "debug line {:?} -> {:?} color {:?}",
                    line.start,
                    line.end,
                    line.color.to_array()
                );
            }
        }
    }

    info!(
        "Finished {} frames ({:.2}s simulated)",
        time.frame_count, time.total_time
    );
    Ok(())
}
