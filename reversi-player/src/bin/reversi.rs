use anyhow::{bail, Result};
use clap::{Parser, Subcommand, ValueEnum};
use env_logger::{Env, Target};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use reversi_explore::explore::{
    collect_breadth_first, collect_deduplicated_breadth_first, sample_within_depth_range,
};
use reversi_explore::hash::{bit_bias, HashFunction};
use reversi_explore::{Board, BoardSequence, BoardSet, Turn};
use reversi_player::play_tournament;
use reversi_player::policies::PolicyKind;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(
    name = "reversi",
    about = "Explore, sample and play Reversi positions",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Collect every canonical position at a given depth from the opening.
    Bfs {
        #[arg(long)]
        plies: usize,
        /// Expand each distinct position once, keeping them in a hash set.
        #[arg(long)]
        dedup: bool,
        #[arg(long, value_enum, default_value_t = Side::Black)]
        turn: Side,
    },
    /// Sample positions by random play to depths drawn from a range.
    Sample {
        #[arg(long)]
        min_plies: usize,
        #[arg(long)]
        max_plies: usize,
        #[arg(long, default_value_t = 10)]
        samples: usize,
        #[arg(long)]
        seed: Option<u64>,
        /// Print every sampled board.
        #[arg(long)]
        show: bool,
    },
    /// Score each candidate hash function on explored and sampled boards.
    HashBias {
        #[arg(long)]
        plies: usize,
        #[arg(long, default_value_t = 10_000)]
        samples: usize,
        #[arg(long, default_value_t = 6)]
        min_plies: usize,
        #[arg(long, default_value_t = 60)]
        max_plies: usize,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Play a series of games between two policies.
    Tournament {
        /// random, greedy, or mcts:<playouts>
        #[arg(long)]
        black: PolicyKind,
        #[arg(long)]
        white: PolicyKind,
        #[arg(long, default_value_t = 100)]
        games: u32,
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Side {
    Black,
    White,
}

impl From<Side> for Turn {
    fn from(side: Side) -> Self {
        match side {
            Side::Black => Turn::Black,
            Side::White => Turn::White,
        }
    }
}

fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn bfs(plies: usize, dedup: bool, turn: Turn) {
    let start = Instant::now();
    let count = if dedup {
        let mut set = BoardSet::new();
        collect_deduplicated_breadth_first(Board::opening(), turn, plies, &mut set);
        set.len() as u64
    } else {
        let mut sequence = BoardSequence::new();
        collect_breadth_first(Board::opening(), turn, plies, &mut sequence)
    };

    let noun = if dedup { "distinct boards" } else { "boards" };
    println!(
        "Num {}: {}  (found in {:.3}s)",
        noun,
        count,
        start.elapsed().as_secs_f64()
    );
}

fn sample(
    min_plies: usize,
    max_plies: usize,
    samples: usize,
    seed: Option<u64>,
    show: bool,
) -> Result<()> {
    let mut rng = rng_from(seed);
    let mut sequence = BoardSequence::new();

    let start = Instant::now();
    sample_within_depth_range(
        Board::opening(),
        Turn::Black,
        min_plies,
        max_plies,
        &mut rng,
        samples,
        &mut sequence,
    )?;
    let elapsed = start.elapsed();

    if show {
        for board in sequence.iter() {
            println!("{}", board);
        }
    }
    println!(
        "Num samples: {}  (drawn in {:.3}s)",
        sequence.len(),
        elapsed.as_secs_f64()
    );
    Ok(())
}

fn hash_bias(
    plies: usize,
    samples: usize,
    min_plies: usize,
    max_plies: usize,
    seed: Option<u64>,
) -> Result<()> {
    let mut rng = rng_from(seed);
    let mut sampled = BoardSequence::new();
    sample_within_depth_range(
        Board::opening(),
        Turn::Black,
        min_plies,
        max_plies,
        &mut rng,
        samples,
        &mut sampled,
    )?;

    let mut explored = BoardSequence::new();
    collect_breadth_first(Board::opening(), Turn::Black, plies, &mut explored);

    println!("{:<36} {:>10} {:>10}", "hash", "sampled", "explored");
    for hash in HashFunction::CANDIDATES {
        println!(
            "{:<36} {:>10.5} {:>10.5}",
            hash.to_string(),
            bit_bias(sampled.iter(), &hash),
            bit_bias(explored.iter(), &hash)
        );
    }
    Ok(())
}

fn tournament(black: PolicyKind, white: PolicyKind, games: u32, seed: Option<u64>) -> Result<()> {
    if games == 0 {
        bail!("a tournament needs at least one game");
    }

    let seed = seed.unwrap_or_else(rand::random);
    info!("tournament seed {}", seed);

    let mut black_policy = black.build(seed);
    let mut white_policy = white.build(seed.wrapping_add(1));

    let start = Instant::now();
    let tally = play_tournament(black_policy.as_mut(), white_policy.as_mut(), games);
    println!(
        "{} (black) vs {} (white): {}  ({:.3}s)",
        black,
        white,
        tally,
        start.elapsed().as_secs_f64()
    );
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Bfs { plies, dedup, turn } => bfs(plies, dedup, turn.into()),
        Command::Sample {
            min_plies,
            max_plies,
            samples,
            seed,
            show,
        } => sample(min_plies, max_plies, samples, seed, show)?,
        Command::HashBias {
            plies,
            samples,
            min_plies,
            max_plies,
            seed,
        } => hash_bias(plies, samples, min_plies, max_plies, seed)?,
        Command::Tournament {
            black,
            white,
            games,
            seed,
        } => tournament(black, white, games, seed)?,
    }

    Ok(())
}
