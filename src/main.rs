#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use broadside::{
    init_logging, play_game, render_engine, AiPlayer, CliPlayer, GameConfig, GameEngine,
    GameError, GameReport, Seat, BOARD_SIZE,
};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args, Clone, Debug)]
#[cfg(feature = "std")]
struct GameArgs {
    #[arg(long, default_value_t = BOARD_SIZE, help = "Board edge length (1-26)")]
    size: usize,
    #[arg(
        long,
        value_delimiter = ',',
        default_value = "5,4,3,3,2",
        help = "Ship lengths, comma separated"
    )]
    fleet: Vec<usize>,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
}

#[derive(clap::Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer on this terminal.
    Play {
        #[command(flatten)]
        game: GameArgs,
    },
    /// Let two computer players fight and print a JSON summary per game.
    Sim {
        #[command(flatten)]
        game: GameArgs,
        #[arg(long, default_value_t = 1)]
        games: usize,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { game } => {
            let config =
                GameConfig::from_lengths(game.size, &game.fleet).map_err(|e| anyhow::anyhow!(e))?;
            if let Some(s) = game.seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let mut rng = make_rng(game.seed);
            let mut human = CliPlayer::stdio();
            let mut computer = AiPlayer::new(config.board_size());
            let mut engine = GameEngine::new(config).map_err(|e| anyhow::anyhow!(e))?;
            engine
                .setup(&mut rng, &mut human, &mut computer)
                .map_err(|e| anyhow::anyhow!(e))?;

            match play_game(&mut engine, &mut human, &mut computer, &mut rng) {
                Ok(report) => {
                    println!("\nGAME OVER\n");
                    println!("{}", render_engine(&engine));
                    match report.winner {
                        Seat::First => println!("VICTORY! You sank the whole enemy fleet."),
                        Seat::Second => println!("DEFEAT. All your ships have been destroyed."),
                    }
                    println!("Shots fired: {}, hits: {}", report.first.guesses, report.first.hits);
                }
                Err(GameError::InputClosed) => println!("\nInput closed, leaving the game."),
                Err(e) => return Err(anyhow::anyhow!(e)),
            }
        }
        Commands::Sim { game, games } => {
            let config =
                GameConfig::from_lengths(game.size, &game.fleet).map_err(|e| anyhow::anyhow!(e))?;
            for i in 0..games {
                let seed = game.seed.map(|s| s.wrapping_add(i as u64));
                let mut rng = make_rng(seed);
                let report = simulate(&config, &mut rng).map_err(|e| anyhow::anyhow!(e))?;
                let result = serde_json::json!({
                    "game": i,
                    "seed": seed,
                    "report": report,
                });
                println!("{}", serde_json::to_string(&result)?);
            }
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
fn simulate(config: &GameConfig, rng: &mut SmallRng) -> Result<GameReport, GameError> {
    let mut p1 = AiPlayer::new(config.board_size());
    let mut p2 = AiPlayer::new(config.board_size());
    let mut engine = GameEngine::new(config.clone())?;
    engine.setup(rng, &mut p1, &mut p2)?;
    play_game(&mut engine, &mut p1, &mut p2, rng)
}
