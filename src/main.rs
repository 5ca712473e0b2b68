//! Lexicut CLI - exhaustive dictionary segmentation.
//!
//! Command-line interface for enumerating segmentations of a sentence
//! against a dictionary file.

use clap::{Parser, Subcommand, ValueEnum};
use lexicut::{segment_all, Dictionary, Result};
use log::error;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lexicut")]
#[command(version)]
#[command(about = "Exhaustive dictionary segmentation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// On-disk dictionary format.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum DictFormat {
    /// One `token<TAB>weight` entry per line.
    Tsv,
    /// A single JSON object mapping tokens to weights.
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Enumerate every segmentation of a sentence
    Cut {
        /// Dictionary file
        #[arg(short, long)]
        dict: PathBuf,

        /// Dictionary file format
        #[arg(short, long, value_enum, default_value = "tsv")]
        format: DictFormat,

        /// Sentence to segment
        sentence: String,
    },

    /// Look up a single token in the dictionary
    Check {
        /// Dictionary file
        #[arg(short, long)]
        dict: PathBuf,

        /// Dictionary file format
        #[arg(short, long, value_enum, default_value = "tsv")]
        format: DictFormat,

        /// Token to look up
        token: String,
    },
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let result = match cli.command {
        Commands::Cut {
            dict,
            format,
            sentence,
        } => cut_sentence(dict, format, sentence),

        Commands::Check {
            dict,
            format,
            token,
        } => check_token(dict, format, token),
    };

    if let Err(e) = result {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_dictionary(path: PathBuf, format: DictFormat) -> Result<Dictionary> {
    match format {
        DictFormat::Tsv => Dictionary::from_tsv_path(path),
        DictFormat::Json => Dictionary::from_json_path(path),
    }
}

fn cut_sentence(dict_path: PathBuf, format: DictFormat, sentence: String) -> Result<()> {
    let dict = load_dictionary(dict_path, format)?;
    let cuts = segment_all(&sentence, &dict);

    for cut in &cuts {
        println!("{}", cut.join(" / "));
    }
    println!("{} segmentation(s)", cuts.len());
    Ok(())
}

fn check_token(dict_path: PathBuf, format: DictFormat, token: String) -> Result<()> {
    let dict = load_dictionary(dict_path, format)?;

    match dict.weight(&token) {
        Some(weight) => println!("{}: present (weight {})", token, weight),
        None => println!("{}: absent", token),
    }
    Ok(())
}
