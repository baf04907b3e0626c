mod docx;
mod merge;
mod parser;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "synopsis_merge", about = "Merge DOCX synopsis + script documents into JSON")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a synopsis document and preview its entries
    Synopsis {
        /// Synopsis .docx file
        file: PathBuf,
    },
    /// Parse a script document and print its voice-text map
    Script {
        /// Script .docx file
        file: PathBuf,
    },
    /// Merge synopsis + script into one JSON file
    Merge {
        /// Synopsis .docx file
        synopsis: PathBuf,
        /// Script .docx file
        script: PathBuf,
        /// Output path (default: synopsis name with _merged.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Entries shown when previewing a parsed synopsis.
const PREVIEW_ENTRIES: usize = 3;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Synopsis { file } => {
            let text = docx::extract_raw_text(&read_file(&file)?)?;
            let entries = parser::parse_synopsis(&text);
            println!("Parsed {} entries from {}", entries.len(), file.display());
            let preview = &entries[..entries.len().min(PREVIEW_ENTRIES)];
            println!("{}", serde_json::to_string_pretty(preview)?);
            Ok(())
        }
        Commands::Script { file } => {
            let data = read_file(&file)?;
            let text = docx::extract_raw_text(&data)?;
            let comments = docx::extract_comments(&data)?;
            let map = parser::parse_script(&text, &comments);
            println!(
                "Parsed {} voice segment(s), {} reviewer comment(s) from {}",
                map.len(),
                comments.len(),
                file.display()
            );
            for id in map.ids() {
                let voice = map.voice(id).unwrap_or_default();
                println!("{:>4}: {}", id, truncate(voice, 80));
                if let Some(comment) = map.comment(id) {
                    println!("      [comment] {}", truncate(comment, 80));
                }
            }
            Ok(())
        }
        Commands::Merge {
            synopsis,
            script,
            output,
        } => {
            let synopsis_text = docx::extract_raw_text(&read_file(&synopsis)?)?;
            let entries = parser::parse_synopsis(&synopsis_text);
            info!("Synopsis: {} entries", entries.len());

            let script_data = read_file(&script)?;
            let script_text = docx::extract_raw_text(&script_data)?;
            let comments = docx::extract_comments(&script_data)?;
            let map = parser::parse_script(&script_text, &comments);
            info!("Script: {} voice segment(s)", map.len());
            if map.is_empty() {
                warn!("Script document produced no voice segments");
            }

            let merged = merge::merge(entries, &map);
            let out = output.unwrap_or_else(|| merge::merged_path(&synopsis));
            std::fs::write(&out, serde_json::to_string_pretty(&merged)?)?;
            println!("Wrote {} entries to {}", merged.len(), out.display());
            Ok(())
        }
    }
}

fn read_file(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max).collect();
        format!("{}...", truncated)
    }
}
