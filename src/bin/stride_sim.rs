//! stride-sim: headless run of the character controller on the demo course.
//!
//! Usage:
//!   cargo run --bin stride-sim -- [config.json] [seconds]
//! Example:
//!   RUST_LOG=debug cargo run --bin stride-sim -- tuning.json 20

use rigid_stride_engine::config::ControllerConfig;
use rigid_stride_engine::game::{CourseConfig, CourseSimulation, InputScript};

/// Extra time simulated after the last scripted event
const SETTLE_SECONDS: f64 = 2.0;

fn run() -> rigid_stride_engine::Result<()> {
    let mut args = std::env::args().skip(1);

    let config = match args.next() {
        Some(path) => ControllerConfig::from_json_file(&path)?,
        None => ControllerConfig::default(),
    };

    let script = InputScript::demo();
    let seconds = match args.next() {
        Some(raw) => match raw.parse::<f64>() {
            Ok(value) if value.is_finite() && value > 0.0 => value,
            _ => {
                log::warn!("ignoring run length '{raw}', using the script length");
                script.duration() + SETTLE_SECONDS
            }
        },
        None => script.duration() + SETTLE_SECONDS,
    };

    let mut sim = CourseSimulation::new(config, &CourseConfig::default(), script)?;
    log::info!("running the demo course for {seconds:.1}s");
    sim.run_for(seconds);

    let summary = sim.summary();
    let body = sim.controller().body();
    log::info!(
        "done: {} steps ({} skipped), {} grounded, {} jumps",
        summary.steps,
        summary.skipped_steps,
        summary.grounded_steps,
        summary.jumps
    );
    log::info!(
        "sprinted {} steps, crouched {} steps, {} contact exits",
        summary.sprint_steps,
        summary.crouch_steps,
        summary.contact_exits
    );
    log::info!(
        "top speed {:.2} m/s, peak height {:.2} m, final position {:?}",
        summary.max_horizontal_speed,
        summary.max_height,
        body.position
    );
    Ok(())
}

fn main() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .try_init();

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
