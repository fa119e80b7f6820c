//! Console front end: two players sharing one terminal.

use std::io::{self, BufRead, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use clap::{Parser, ValueEnum};
use log::warn;

use tricksy_battle::{
    Game, GameEvent, GameOptions, MoveChooser, PlayError, Seat, SelectionRequest,
};

#[derive(Parser)]
#[command(name = "tricksy-battle")]
#[command(about = "Two-player trick-taking card game")]
struct Args {
    /// Shuffle seed (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,

    /// Name of Player 1
    #[arg(long, default_value = "Player 1")]
    player_one: String,

    /// Name of Player 2
    #[arg(long, default_value = "Player 2")]
    player_two: String,

    /// Seat that leads the first round (random if omitted)
    #[arg(long)]
    first_leader: Option<LeaderArg>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LeaderArg {
    One,
    Two,
}

impl From<LeaderArg> for Seat {
    fn from(arg: LeaderArg) -> Self {
        match arg {
            LeaderArg::One => Self::One,
            LeaderArg::Two => Self::Two,
        }
    }
}

struct StdinChooser<R> {
    input: R,
}

impl<R: BufRead> MoveChooser for StdinChooser<R> {
    fn select(&mut self, request: &SelectionRequest<'_>) -> Option<String> {
        print!("{request}");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line),
            Err(err) => {
                warn!("failed to read selection: {err}");
                None
            }
        }
    }
}

fn print_event(event: &GameEvent) {
    if matches!(
        event,
        GameEvent::RoundStarted { .. }
            | GameEvent::HandsReplenished { .. }
            | GameEvent::GameOver { .. }
    ) {
        println!();
    }
    println!("{event}");
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });

    let mut options = GameOptions::default().with_player_names(args.player_one, args.player_two);
    if let Some(leader) = args.first_leader {
        options = options.with_first_leader(leader.into());
    }

    let mut game = Game::new(options, seed);
    let mut chooser = StdinChooser {
        input: io::stdin().lock(),
    };
    let mut notifier = print_event;

    match game.play(&mut chooser, &mut notifier) {
        Ok(_) => {}
        Err(PlayError::InputClosed) => {
            println!();
            println!("Input closed. Goodbye.");
        }
        Err(err) => println!("Game error: {err}"),
    }
}
