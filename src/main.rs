//! Neon Pong headless runner
//!
//! Drives the simulation with simulated frame time and no window. Handy for
//! soak-testing the core and trying out tuning files.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;
    use std::process::ExitCode;

    use clap::Parser;

    use neon_pong::audio::{self, LogSink};
    use neon_pong::consts::FRAME_MS;
    use neon_pong::sim::{MatchContext, MatchPhase, Side, TickInput, tick};
    use neon_pong::Settings;

    #[derive(Parser)]
    #[command(name = "neon-pong")]
    #[command(version)]
    #[command(about = "Run a headless human-vs-AI pong match", long_about = None)]
    struct Cli {
        /// Random seed for reproducibility (random when omitted)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Maximum number of ticks to simulate
        #[arg(short, long, default_value = "36000")]
        ticks: u64,

        /// JSON file overriding the default tuning
        #[arg(long)]
        settings: Option<PathBuf>,

        /// Steer the player paddle toward the ball
        #[arg(short, long)]
        autoplay: bool,

        /// Print the final snapshot as JSON
        #[arg(long)]
        snapshot: bool,
    }

    /// Follow the ball with a little slack so the paddle doesn't buzz
    fn steer(ctx: &MatchContext, input: &mut TickInput) {
        let diff = ctx.ball.pos.y - ctx.player.center_y();
        input.up = diff < -10.0;
        input.down = diff > 10.0;
    }

    pub fn run() -> ExitCode {
        env_logger::init();
        let cli = Cli::parse();

        let settings = match cli.settings {
            Some(path) => match Settings::load(&path) {
                Ok(settings) => settings,
                Err(err) => {
                    eprintln!("{err}");
                    return ExitCode::FAILURE;
                }
            },
            None => Settings::default(),
        };

        let seed = cli.seed.unwrap_or_else(rand::random);
        log::info!("Neon Pong (headless) starting with seed {seed}");

        let mut ctx = MatchContext::new(settings, seed);
        ctx.start();

        let mut sink = LogSink;
        let mut input = TickInput::default();
        for frame in 0..cli.ticks {
            input.now_ms = frame as f64 * FRAME_MS;
            if cli.autoplay {
                steer(&ctx, &mut input);
            }

            let events = tick(&mut ctx, &input);
            audio::dispatch(&mut sink, &events);

            if ctx.phase == MatchPhase::GameOver {
                break;
            }
        }

        let (player, ai) = ctx.final_score();
        match ctx.winner() {
            Some(Side::Player) => println!("YOU WIN! Final Score: {player} - {ai}"),
            Some(Side::Ai) => println!("AI WINS! Final Score: {player} - {ai}"),
            None => println!(
                "Stopped after {} ticks. Score: {player} - {ai}",
                ctx.time_ticks
            ),
        }

        if cli.snapshot {
            match serde_json::to_string_pretty(&ctx.snapshot()) {
                Ok(json) => println!("{json}"),
                Err(err) => log::error!("Failed to serialize snapshot: {err}"),
            }
        }

        ExitCode::SUCCESS
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The browser host drives `neon_pong::sim::tick` directly
}
