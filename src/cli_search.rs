use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use song_catalog_server::catalog::{load_catalog, Song, DEFAULT_DATA_FILE};

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to the JSON file holding the songs array.
    #[clap(default_value = DEFAULT_DATA_FILE)]
    pub data_path: PathBuf,
}

fn print_song(song: &Song) {
    println!("{} - {} - {}", song.id, song.title, song.artist);
}

fn main() -> Result<()> {
    let cli_args = CliArgs::parse();
    println!("Cli Search loading songs at {}...", cli_args.data_path.display());

    let catalog = load_catalog(&cli_args.data_path)
        .with_context(|| format!("Could not load {}", cli_args.data_path.display()))?;
    println!("Done! {} songs loaded.", catalog.len());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        println!("Please enter your search query:");
        io::stdout().flush()?;

        let user_input = match lines.next() {
            Some(line) => line?,
            None => return Ok(()),
        };
        let user_input = user_input.trim();

        match catalog.search(user_input) {
            Err(err) => println!("{}", err),
            Ok(results) if results.is_empty() => {
                println!("No matches found for \"{}\".", user_input)
            }
            Ok(results) => {
                println!("Found {} matches for \"{}\":\n", results.len(), user_input);
                for song in results {
                    print_song(song);
                }
            }
        }
        println!();
    }
}
