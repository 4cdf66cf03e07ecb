use anyhow::Context;
use blockyard_game::{Game, GameConfig, Outcome};
use blockyard_input::{Action, parse_command};
use blockyard_kernel::{VoxelWorld, WorldEvent};
use blockyard_terrain::TerrainGenerator;
use blockyard_tools::{Hud, WorldInspector};
use clap::{Parser, Subcommand};
use std::io::{BufRead, BufReader};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "blockyard-cli", about = "Voxel building sandbox in the terminal")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// YAML config file (defaults are used when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and resolved configuration
    Info,
    /// Generate terrain and print a world summary
    Generate {
        /// Side length of the generated footprint
        #[arg(short, long)]
        size: Option<u32>,
        /// RNG seed for reproducible terrain
        #[arg(long)]
        seed: Option<u64>,
        /// One tree per this many columns on average (0 disables trees)
        #[arg(short, long)]
        tree_chance: Option<u32>,
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Apply text commands to a new session (stdin unless --script is given)
    Play {
        /// File of commands, one per line
        #[arg(short, long)]
        script: Option<PathBuf>,
        /// RNG seed for reproducible terrain
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => GameConfig::default(),
    };

    match cli.command {
        Commands::Info => {
            println!("blockyard-cli v{}", env!("CARGO_PKG_VERSION"));
            println!(
                "terrain: size={} tree_chance=1/{} seed={}",
                config.terrain.size,
                config.terrain.tree_chance,
                config
                    .terrain
                    .seed
                    .map_or_else(|| "random".to_string(), |s| s.to_string())
            );
            println!("spawn: {:?}", config.spawn);
            println!(
                "inventory: {}",
                Hud::inventory_line(&config.inventory, &Default::default()).trim_end()
            );
        }
        Commands::Generate {
            size,
            seed,
            tree_chance,
            json,
        } => {
            if let Some(size) = size {
                config.terrain.size = size;
            }
            if let Some(tree_chance) = tree_chance {
                config.terrain.tree_chance = tree_chance;
            }
            if seed.is_some() {
                config.terrain.seed = seed;
            }

            let mut world = VoxelWorld::new();
            let report = TerrainGenerator::new(config.terrain.clone())
                .context("invalid terrain options")?
                .generate(&mut world);
            let summary = WorldInspector::summary(&world);
            if json {
                let out = serde_json::json!({ "report": report, "summary": summary });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("{report}");
                println!("{summary}");
            }
        }
        Commands::Play { script, seed } => {
            if seed.is_some() {
                config.terrain.seed = seed;
            }
            let reader: Box<dyn BufRead> = match &script {
                Some(path) => Box::new(BufReader::new(
                    std::fs::File::open(path)
                        .with_context(|| format!("failed to open script {}", path.display()))?,
                )),
                None => Box::new(BufReader::new(std::io::stdin())),
            };
            play(&config, reader)?;
        }
    }

    Ok(())
}

fn play(config: &GameConfig, reader: Box<dyn BufRead>) -> anyhow::Result<()> {
    let (mut game, report) = Game::new(config).context("invalid terrain options")?;
    tracing::info!(seed = report.seed, voxels = game.world().len(), "session started");
    println!("{report}");
    println!("{}", Hud::status(game.ledger(), game.selection()));

    for (number, line) in reader.lines().enumerate() {
        let line = line.context("failed to read command")?;
        let action = match parse_command(&line) {
            Ok(Action::Noop) => continue,
            Ok(action) => action,
            Err(e) => {
                println!("line {}: {e}", number + 1);
                continue;
            }
        };

        let mutates = action.mutates_world();
        match game.apply(action) {
            Ok(Outcome::Quit) => break,
            Ok(outcome) => println!("{}", describe(&outcome)),
            Err(e) => println!("line {}: {e}", number + 1),
        }
        if mutates {
            for event in game.drain_events() {
                let record = event.record();
                let removed = matches!(event, WorldEvent::Removed(_));
                tracing::debug!(coord = %record.coord, kind = %record.kind, removed, "world changed");
            }
        }
        println!("{}", Hud::status(game.ledger(), game.selection()));
    }

    println!("{}", WorldInspector::summary(game.world()));
    Ok(())
}

fn describe(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Placed(r) => format!("placed {} at {}", r.kind, r.coord),
        Outcome::Removed(r) => format!("removed {} at {}", r.kind, r.coord),
        Outcome::Built(n) => format!("quick build placed {n} blocks"),
        Outcome::Selected(kind) => format!("selected {kind}"),
        Outcome::ModeChanged(mode) => format!("mode: {}", Hud::mode_label(*mode)),
        Outcome::Quit => "bye".to_string(),
        Outcome::Nothing => String::new(),
    }
}
