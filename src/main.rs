//! Treasure Dash entry point
//!
//! Headless demo runner: the autopilot chases treasure and dodges nothing,
//! playing until a hazard catches it or the tick cap is reached. Pass a
//! seed as the first argument to reproduce a run.

use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};

use treasure_dash::Clock;
use treasure_dash::consts::TICK_INTERVAL_MS;
use treasure_dash::platform::{DemoInput, FileScoreStore, LogAudio, LogRenderer};

const SCORE_FILE: &str = "treasure_dash_highscore.json";
/// Demo runs stop here even if the autopilot refuses to die (~5 minutes)
const DEMO_TICK_CAP: u64 = 9_000;

fn main() -> Result<()> {
    env_logger::init();

    let seed = match std::env::args().nth(1) {
        Some(arg) => arg.parse().context("seed must be an integer")?,
        None => SystemTime::now().duration_since(UNIX_EPOCH)?.as_millis() as u64,
    };

    let mut clock = Clock::new(
        seed,
        DemoInput,
        LogRenderer,
        LogAudio,
        FileScoreStore::new(SCORE_FILE),
    )
    .context("failed to set up the run")?;

    clock.init();
    while clock.step()? {
        if clock.state().current_tick >= DEMO_TICK_CAP {
            log::info!("demo tick cap reached");
            break;
        }
        thread::sleep(Duration::from_millis(TICK_INTERVAL_MS));
    }

    println!(
        "seed {seed}: survived {} ticks, score {} (best {})",
        clock.state().current_tick,
        clock.state().score.value,
        clock.state().score.hi
    );
    Ok(())
}
