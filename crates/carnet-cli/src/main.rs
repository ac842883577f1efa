//! Command-line drills over a carnet card file.
//!
//! Cards live in a TOML file (`cards.toml` by default). Every command loads
//! it, and commands that change cards write it back.

mod commands;

use std::path::PathBuf;

use carnet::{Card, CardFile, Config, Filters, Quality};
use clap::{Parser, Subcommand};
use tracing::info;

// ============================================================================
// CLI Arguments
// ============================================================================

/// Spaced-repetition drills for French vocabulary.
#[derive(Parser, Debug)]
#[command(name = "carnet")]
#[command(version, about, long_about = None)]
struct Args {
    /// Card file
    #[arg(long, default_value = "cards.toml", global = true)]
    cards: PathBuf,

    /// Configuration file (defaults are used if it does not exist)
    #[arg(long, default_value = "carnet.toml", global = true)]
    config: PathBuf,

    /// Print JSON instead of text
    #[arg(long, default_value_t = false, global = true)]
    json: bool,

    /// Enable verbose logging (use multiple times for more verbosity)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add a card, due immediately
    Add {
        /// Question side
        front: String,
        /// Answer side
        back: String,
        /// Tag (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,
        /// Topic
        #[arg(long)]
        topic: Option<String>,
        /// Part of speech
        #[arg(long = "pos")]
        part_of_speech: Option<String>,
    },

    /// Delete a card
    Remove {
        /// Card id
        id: u64,
    },

    /// List cards due now, oldest first
    Due {
        /// Show at most this many cards
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Answer a card: 0-5 or again, hard, good, easy
    Review {
        /// Card id
        id: u64,
        /// Answer quality
        quality: Quality,
    },

    /// Show the interval each answer would give a card
    Preview {
        /// Card id
        id: u64,
    },

    /// Print the order a filtered drill would present cards in
    Drill {
        /// Topic pill (repeatable)
        #[arg(long = "topic")]
        topics: Vec<String>,
        /// Tag pill (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,
        /// Part-of-speech pill (repeatable)
        #[arg(long = "pos")]
        parts_of_speech: Vec<String>,
        /// Number of steps to print
        #[arg(long, default_value_t = 10)]
        count: usize,
        /// Seed for a reproducible order
        #[arg(long)]
        seed: Option<u64>,
        /// Keep file order instead of shuffling
        #[arg(long, default_value_t = false)]
        ordered: bool,
        /// Pick each step at random, allowing repeats
        #[arg(long, default_value_t = false)]
        with_replacement: bool,
    },

    /// Summarize the card file
    Stats,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize tracing
    let log_level = match args.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::open(&args.config)?;
    let mut file = CardFile::open(&args.cards)?;
    info!(
        cards = %args.cards.display(),
        count = file.cards.len(),
        algorithm = ?config.scheduler.algorithm,
        "loaded"
    );

    let mut out = commands::Output::new(args.json, std::io::stdout().lock());
    let now = chrono::Utc::now();

    let changed = match args.command {
        Command::Add {
            front,
            back,
            tags,
            topic,
            part_of_speech,
        } => {
            let mut card = Card::new(front, back, now).with_tags(tags);
            card.topic = topic;
            card.part_of_speech = part_of_speech;
            commands::add(&mut file, &mut out, card)?;
            true
        }
        Command::Remove { id } => {
            commands::remove(&mut file, &mut out, id)?;
            true
        }
        Command::Due { limit } => {
            commands::list_due(&file, &mut out, limit, now)?;
            false
        }
        Command::Review { id, quality } => {
            let scheduler = config.scheduler()?;
            commands::review(&mut file, &mut out, &scheduler, id, quality, now)?;
            true
        }
        Command::Preview { id } => {
            let scheduler = config.scheduler()?;
            commands::preview(&file, &mut out, &scheduler, id, now)?;
            false
        }
        Command::Drill {
            topics,
            tags,
            parts_of_speech,
            count,
            seed,
            ordered,
            with_replacement,
        } => {
            let filters = Filters::new()
                .topics(topics)
                .tags(tags)
                .parts_of_speech(parts_of_speech);
            let mut prefs = config.deck;
            if ordered {
                prefs.randomize = false;
            }
            if with_replacement {
                prefs.without_replacement = false;
            }
            commands::drill(&file, &mut out, &filters, prefs, count, seed)?;
            false
        }
        Command::Stats => {
            commands::stats(&file, &mut out, now)?;
            false
        }
    };

    if changed {
        file.write_toml(&args.cards)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_review_accepts_grade_names() {
        let args = Args::try_parse_from(["carnet", "review", "3", "good"]).unwrap();
        match args.command {
            Command::Review { id, quality } => {
                assert_eq!(id, 3);
                assert_eq!(quality, Quality::GOOD);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_review_rejects_out_of_range_quality() {
        assert!(Args::try_parse_from(["carnet", "review", "3", "6"]).is_err());
    }

    #[test]
    fn test_drill_repeatable_pills() {
        let args = Args::try_parse_from([
            "carnet", "-vv", "drill", "--tag", "a1", "--tag", "a2", "--pos", "verb", "--seed",
            "5",
        ])
        .unwrap();
        assert_eq!(args.verbose, 2);
        match args.command {
            Command::Drill {
                tags,
                parts_of_speech,
                seed,
                count,
                ..
            } => {
                assert_eq!(tags, vec!["a1", "a2"]);
                assert_eq!(parts_of_speech, vec!["verb"]);
                assert_eq!(seed, Some(5));
                assert_eq!(count, 10);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
