// Command-line presentation layer.
//
// Thin glue over the lookup service: parses arguments, formats results and
// error messages. Owns no lookup or tracking logic.

use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::loader;
use crate::lookup::{LookupError, LookupService};
use crate::store::{self, StoreClient};

/// Fuzzy suggestions shown after a failed exact search.
const SUGGESTION_LIMIT: u32 = 5;

#[derive(Parser)]
#[command(name = "km", version, about = "Dictionary lookup with missing-word tracking")]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search for a word
    #[command(alias = "s")]
    Search {
        word: String,
        /// Print the entry as JSON
        #[arg(long)]
        json: bool,
    },
    /// List words containing a substring
    Fuzzy {
        term: String,
        /// Number of matches to display
        #[arg(short, long, default_value_t = 10)]
        limit: u32,
    },
    /// Show the most frequently searched words that were not found
    #[command(alias = "m")]
    Missing {
        /// Number of missing words to display
        #[arg(short, long, default_value_t = 10)]
        limit: u32,
    },
    /// Load dictionary entries from a JSON word file
    Load { file: PathBuf },
}

/// Parse arguments, open the store, and dispatch the command.
///
/// The database path is resolved exactly once here and the resulting client
/// is shared for the rest of the process.
pub async fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let db_path = store::resolve_db_path()?;
    let client = Arc::new(StoreClient::open(db_path).await?);
    store::initialize_schema(&client).await?;

    let service = LookupService::new(client.clone());

    match cli.command {
        Command::Search { word, json } => search_command(&service, &word, json).await,
        Command::Fuzzy { term, limit } => fuzzy_command(&service, &term, limit).await,
        Command::Missing { limit } => missing_command(&service, limit).await,
        Command::Load { file } => load_command(&client, &file).await,
    }
}

async fn search_command(
    service: &LookupService,
    word: &str,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    match service.search(word).await {
        Ok(entry) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&entry)?);
            } else {
                println!("Meaning: {}", entry.meaning);
                if let Some(synonyms) = &entry.synonyms {
                    println!("Synonyms: {}", synonyms);
                }
                if let Some(conjugation) = &entry.conjugation {
                    println!("Conjugation: {}", conjugation);
                }
            }
            Ok(())
        }
        Err(LookupError::NotFound(term)) => {
            println!("Word '{}' not found.", term);
            let suggestions = service
                .fuzzy_search(&term, SUGGESTION_LIMIT)
                .await
                .unwrap_or_default();
            if !suggestions.is_empty() {
                println!("Did you mean:");
                for entry in suggestions {
                    println!("  {}", entry.word);
                }
            }
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

async fn fuzzy_command(
    service: &LookupService,
    term: &str,
    limit: u32,
) -> Result<(), Box<dyn Error>> {
    let entries = service.fuzzy_search(term, limit).await?;
    if entries.is_empty() {
        println!("No words matching '{}'.", term);
        return Ok(());
    }
    for entry in entries {
        println!("{:<24} {}", entry.word, entry.meaning);
    }
    Ok(())
}

async fn missing_command(service: &LookupService, limit: u32) -> Result<(), Box<dyn Error>> {
    let missing = service.missing_words(limit).await?;
    if missing.is_empty() {
        println!("No missing words recorded yet.");
        return Ok(());
    }

    println!("Words searched but not found:");
    println!();
    println!("{:<24} {:>6}   {}", "WORD", "COUNT", "LAST SEARCHED");
    for item in missing {
        println!(
            "{:<24} {:>6}   {}",
            item.word,
            item.search_count,
            item.last_searched_at.format("%Y-%m-%d %H:%M:%S")
        );
    }
    Ok(())
}

async fn load_command(client: &Arc<StoreClient>, file: &PathBuf) -> Result<(), Box<dyn Error>> {
    let count = loader::load_words(client, file).await?;
    println!("Loaded {} entries.", count);
    Ok(())
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
