//! Horde Dodge entry point
//!
//! Headless demo: runs one idle-mode session at the fixed timestep with the
//! log renderer as the HUD. Usage:
//!
//! ```text
//! horde-dodge [seed] [config.json]
//! ```

use std::path::Path;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use horde_dodge::consts::SIM_DT;
use horde_dodge::{GameConfig, GamePhase, LogRenderer, Session, TickInput};

/// Stop the demo after this much survived time.
const DEMO_CAP_SECS: u64 = 120;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0)
        });
    let config = match args.next() {
        Some(path) => GameConfig::load_or_default(Path::new(&path)),
        None => GameConfig::default(),
    };

    log::info!("Horde Dodge starting (seed {seed})");

    let mut session = Session::new(config, seed, LogRenderer);
    session.start();

    let input = TickInput {
        idle_mode: true,
        ..TickInput::default()
    };
    let frame = Duration::from_secs_f32(SIM_DT);

    while session.phase() == GamePhase::Running {
        session.tick(&input);
        if session.state().elapsed_secs >= DEMO_CAP_SECS {
            log::info!("demo cap reached, stopping");
            break;
        }
        std::thread::sleep(frame);
    }

    println!("survived {} seconds", session.state().elapsed_secs);
}
