#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use battleshipper::{
    init_logging, place_fleet, sim::simulate, ui, InMemoryRegistry, Player,
};
#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use log::info;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::{Rng, SeedableRng};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Play random-vs-random matches through the in-memory registry.
    Simulate {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = 1)]
        games: u64,
        #[arg(long, help = "Print one JSON report per game instead of text")]
        json: bool,
    },
    /// Place a random fleet and show it with the remaining free cells.
    Board {
        #[arg(long, help = "Fix RNG seed for a reproducible fleet (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn seed_or_random(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| rand::rng().random())
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate { seed, games, json } => {
            let base = seed_or_random(seed);
            let registry = InMemoryRegistry::init();
            for i in 0..games {
                let game_seed = base.wrapping_add(i);
                let report = simulate(&registry, game_seed, "Anomander", "Whiskeyjack").await?;
                if json {
                    println!("{}", serde_json::to_string(&report)?);
                } else {
                    println!(
                        "seed {}: {} wins after {} shots (sunk A:{} B:{})",
                        report.seed,
                        report.winner_name,
                        report.shots,
                        report.sunk_by_a,
                        report.sunk_by_b
                    );
                }
            }
            info!("{} game(s) finished", registry.game_count().await);
        }
        Commands::Board { seed } => {
            let seed = seed_or_random(seed);
            println!("Using seed: {}", seed);
            let mut rng = SmallRng::seed_from_u64(seed);
            let mut player = Player::with_rng("fleet", &mut rng);
            place_fleet(&mut rng, &mut player)?;
            println!("Fleet:");
            print!("{}", ui::render_fleet(&player));
            println!("\nAvailable cells:");
            print!("{}", ui::render_availability(&player.available_cells()));
        }
    }
    Ok(())
}
