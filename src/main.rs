//! Command-line front end for the name engine.
//!
//! Usage:
//!   ism-forge generate --father Akmal --mother Nilufar --gender boy
//!   ism-forge validate Amir
//!   ism-forge meaning Kamola --json
//!   ism-forge list --gender girl

use anyhow::Result;
use clap::{Parser, Subcommand};
use ism_forge::config::Config;
use ism_forge::{GenderFilter, NameEngine};
use serde_json::json;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ism-forge", version)]
#[command(about = "Suggest child names from the parents' names", long_about = None)]
struct Cli {
    /// Print pretty JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank corpus names against the parents' names
    Generate {
        #[arg(long)]
        father: String,
        #[arg(long)]
        mother: String,
        /// boy, girl or all
        #[arg(long, default_value = "all")]
        gender: String,
    },
    /// Check whether a name is in the corpus
    Validate { name: String },
    /// Show the recorded meaning of a name
    Meaning { name: String },
    /// List corpus names
    List {
        #[arg(long, default_value = "all")]
        gender: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ism_forge=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;
    let engine = NameEngine::from_config(&config)?;
    info!("Corpus ready ({} names)", engine.corpus().len());

    match cli.command {
        Commands::Generate {
            father,
            mother,
            gender,
        } => {
            let names = engine.generate_str(&father, &mother, &gender).await?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&names)?);
            } else if names.is_empty() {
                println!("No matching names");
            } else {
                for (i, n) in names.iter().enumerate() {
                    println!(
                        "{:>2}. {:<12} {:>3}  {:<4}  {} ({})",
                        i + 1,
                        n.name,
                        n.confidence,
                        n.gender,
                        n.meaning,
                        n.origin
                    );
                }
            }
        }
        Commands::Validate { name } => {
            let known = engine.validate_name(&name);
            let suggestion = if known {
                None
            } else {
                engine.corpus().suggest(&name)
            };
            if cli.json {
                let out = json!({ "name": name.trim(), "known": known, "suggestion": suggestion });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else if known {
                println!("{} is in the corpus", name.trim());
            } else {
                match suggestion {
                    Some(closest) => {
                        println!("{} is not in the corpus. Did you mean '{}'?", name.trim(), closest)
                    }
                    None => println!("{} is not in the corpus", name.trim()),
                }
            }
        }
        Commands::Meaning { name } => {
            let entry = engine.name_meaning(&name);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&entry)?);
            } else {
                match entry {
                    Some(m) => println!("{}: {} ({})", name, m.meaning, m.origin),
                    None => println!("No meaning recorded for {}", name),
                }
            }
        }
        Commands::List { gender } => {
            let filter: GenderFilter = gender.parse()?;
            let names: Vec<(&str, ism_forge::Gender)> = engine.corpus().pool(filter).collect();
            if cli.json {
                let out: Vec<_> = names
                    .iter()
                    .map(|(n, g)| json!({ "name": n, "gender": g }))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                for (n, g) in names {
                    println!("{}\t{}", n, g);
                }
            }
        }
    }

    Ok(())
}
