use std::path::PathBuf;
use std::process;

use clap::Parser;
use tabgen::{render_chord, TabConfig, Tone};
use tracing_subscriber::EnvFilter;

/// Print the most playable guitar tabs for major chords
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Chord roots such as C, F# or Eb (default: all twelve tones)
    #[arg(value_name = "CHORD")]
    chords: Vec<String>,

    /// Tabs to print per chord (overrides config)
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    count: Option<i64>,

    /// Path to config YAML
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log search progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let default_level = if args.verbose { "tabgen=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut config = match &args.config {
        Some(path) => match TabConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        None => TabConfig::default(),
    };
    if let Some(count) = args.count {
        config.count = count;
    }

    let chords: Vec<String> = if args.chords.is_empty() {
        Tone::ALL.iter().map(|tone| tone.to_string()).collect()
    } else {
        args.chords
    };

    for chord in &chords {
        let diagrams = match render_chord(chord, &config) {
            Ok(diagrams) => diagrams,
            Err(e) => {
                eprintln!("Error for chord '{}': {}", chord, e);
                process::exit(1);
            }
        };

        println!("tone {}: ", chord);
        for diagram in diagrams {
            println!("{}", diagram);
        }
    }
}
