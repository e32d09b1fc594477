use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use samsum_core::{classify, harvest_products, normalize_text};
use samsum_observability::{init_tracing, AppMetrics};
use samsum_widget::{ChatWidget, WidgetConfig, WidgetError};

#[derive(Debug, Parser)]
#[command(name = "samsum")]
#[command(about = "Samsum Center storefront assistant")]
struct Cli {
    /// Simulated typing pause before each reply, in milliseconds.
    #[arg(long, env = "SAMSUM_TYPING_DELAY_MS", default_value_t = 1000)]
    typing_delay_ms: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Interactive chat session against the rule table.
    Chat,
    /// Classify one line and print the reply as JSON, with no typing delay.
    Classify { text: String },
    /// Harvest {id, name, price} entries from a saved listing page.
    Harvest { path: PathBuf },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing("samsum_cli");
    let cli = Cli::parse();

    match cli.command {
        Command::Chat => {
            run_chat(Duration::from_millis(cli.typing_delay_ms)).await?;
        }
        Command::Classify { text } => {
            let reply = classify(&normalize_text(&text));
            println!("{}", serde_json::to_string_pretty(&reply)?);
        }
        Command::Harvest { path } => {
            let fragment = fs::read_to_string(&path)
                .with_context(|| format!("failed reading listing page {}", path.display()))?;
            let products = harvest_products(&fragment);
            println!("{}", serde_json::to_string_pretty(&products)?);
        }
    }

    Ok(())
}

async fn run_chat(typing_delay: Duration) -> Result<()> {
    let widget = ChatWidget::new(
        WidgetConfig {
            typing_delay,
            products: Vec::new(),
        },
        AppMetrics::shared(),
    );

    for entry in widget.transcript() {
        print_bot_entry(&entry.text, &entry.suggestions);
    }
    println!("(type 'exit' to quit)\n");

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }

        let message = line.trim();
        if message.eq_ignore_ascii_case("exit") || message.eq_ignore_ascii_case("quit") {
            widget.close();
            break;
        }

        match widget.submit(message).await {
            Ok(Some(reply)) => print_bot_entry(&reply.text, &reply.suggestions),
            Ok(None) => continue,
            Err(WidgetError::Closed) => break,
        }
    }

    Ok(())
}

fn print_bot_entry(text: &str, suggestions: &[String]) {
    println!("\n{}\n", text);
    if !suggestions.is_empty() {
        println!("Gợi ý:");
        for suggestion in suggestions {
            println!("- {suggestion}");
        }
        println!();
    }
}
