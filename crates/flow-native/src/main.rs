//! Headless native host for the coverflow engine.
//!
//! Drives a scripted browse session through the same boundary interfaces a
//! rendering frontend would use: discrete advance/retreat events, a
//! wall-clock frame delta, the TOML settings store, and read-back of the
//! per-item placements and controller diagnostics. Rendering, camera
//! control, and the on-screen parameter editor live outside this host.

mod settings;

use anyhow::Result;
use flow_core::{Coverflow, SLIDE_COUNT};
use rand::Rng;
use std::path::Path;
use std::thread;
use std::time::{Duration, Instant};

const SETTINGS_PATH: &str = "settings.toml";
const FRAME: Duration = Duration::from_millis(16);

#[derive(Clone, Copy, Debug)]
enum BrowseEvent {
    Advance,
    Retreat,
}

/// A browse session as a user might perform it: skim forward, overshoot,
/// come back, return to the start. Dwell is how long to idle after the
/// event before the next one.
fn browse_script() -> Vec<(BrowseEvent, Duration)> {
    use BrowseEvent::*;
    let mut script = Vec::new();
    for _ in 0..5 {
        script.push((Advance, Duration::from_millis(400)));
    }
    script.push((Advance, Duration::from_millis(1500)));
    script.push((Retreat, Duration::from_millis(300)));
    script.push((Retreat, Duration::from_millis(1500)));
    for _ in 0..6 {
        script.push((Retreat, Duration::from_millis(250)));
    }
    script.push((Retreat, Duration::from_millis(1000)));
    script
}

fn main() -> Result<()> {
    env_logger::init();

    let config = settings::load(Path::new(SETTINGS_PATH))?;
    let mut flow = Coverflow::new(SLIDE_COUNT, config)?;

    // Per-item identity for the diagnostic output, in place of meshes.
    let mut rng = rand::thread_rng();
    let colors: Vec<[u8; 3]> = (0..SLIDE_COUNT).map(|_| rng.gen()).collect();
    for (i, c) in colors.iter().enumerate() {
        log::debug!("item {i}: color #{:02x}{:02x}{:02x}", c[0], c[1], c[2]);
    }

    let mut last = Instant::now();
    for (event, dwell) in browse_script() {
        match event {
            BrowseEvent::Advance => flow.advance(),
            BrowseEvent::Retreat => flow.retreat(),
        }
        log::info!("{:?} -> focus {}", event, flow.focused());

        let dwell_end = Instant::now() + dwell;
        while Instant::now() < dwell_end {
            thread::sleep(FRAME);
            let now = Instant::now();
            let dt = (now - last).as_secs_f64();
            last = now;

            let focused_index = flow.focused();
            let focused = flow.update(dt)[focused_index];
            let state = flow.state();
            log::debug!(
                "pos {:+.3} vel {:+.3} | focus {} at offset {:+.3} angle {:+.1} depth {:.3}",
                state.position,
                state.velocity,
                focused_index,
                focused.offset,
                focused.angle_deg,
                focused.depth
            );
        }
    }

    let state = flow.state();
    log::info!(
        "session end: focus {} pos {:+.4} vel {:+.4}",
        flow.focused(),
        state.position,
        state.velocity
    );

    settings::save(Path::new(SETTINGS_PATH), flow.config())?;
    Ok(())
}
