use anyhow::Result;
use clap::{Parser, Subcommand};
use feira_core::{Categorizer, Config};
use tracing::warn;

#[derive(Parser)]
#[command(name = "feira")]
#[command(about = "Grocery list helper CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Categorize grocery items with a generative model
    Categorize {
        /// Item names to categorize
        #[arg(required = true)]
        items: Vec<String>,

        /// Print the mapping as JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    // Load .env
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Categorize { items, json } => {
            categorize_command(items, json).await?;
        }
    }

    Ok(())
}

async fn categorize_command(items: Vec<String>, json: bool) -> Result<()> {
    let config = Config::from_env();
    let categorizer = Categorizer::new(config);

    let mapping = categorizer.categorize(&items).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&mapping)?);
        return Ok(());
    }

    if mapping.is_empty() {
        warn!("No items were categorized");
        return Ok(());
    }

    // Keep the caller's item order; uncategorized items show a dash.
    for name in &items {
        match mapping.get(name) {
            Some(category) => println!("{name}: {category}"),
            None => println!("{name}: -"),
        }
    }

    Ok(())
}
