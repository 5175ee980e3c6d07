mod display;

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use mvp_advice::{AdviceView, DashboardView, classify};
use mvp_core::{DashboardStats, PlanResponse};
use serde::Serialize;
use tracing::info;

#[derive(Parser)]
#[command(name = "mvp")]
#[command(about = "MVp medication safety plan tools", version)]
struct Cli {
    /// Output format
    #[arg(long, value_enum, env = "MVP_FORMAT", default_value = "text", global = true)]
    format: Format,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify raw advice text into timing, warnings, delay and replacements
    Classify {
        /// Advice text file (stdin when omitted)
        #[arg(long)]
        input: Option<PathBuf>,
        /// Heading shown above the advice
        #[arg(long)]
        medication: Option<String>,
    },
    /// Render a saved plan response (JSON)
    Render {
        #[arg(long)]
        input: PathBuf,
    },
    /// Render dashboard cards from saved feedback statistics (JSON)
    Dashboard {
        #[arg(long)]
        input: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();
    info!("mvp v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();

    match cli.command {
        Commands::Classify { input, medication } => {
            let raw = match &input {
                Some(path) => read_file(path)?,
                None => {
                    let mut buf = String::new();
                    std::io::stdin()
                        .read_to_string(&mut buf)
                        .context("reading advice from stdin")?;
                    buf
                }
            };
            let mut view = AdviceView::from_advice(&classify(&raw));
            if let Some(m) = medication {
                view = view.with_medication(m);
            }
            emit(cli.format, &view, display::advice_card)?;
        }
        Commands::Render { input } => {
            let response: PlanResponse = read_json(&input)?;
            let advice = classify(response.advice_text());
            let mut view = AdviceView::from_advice(&advice);
            if !response.med.trim().is_empty() {
                view = view.with_medication(response.med.clone());
            }
            emit(cli.format, &view, display::advice_card)?;
        }
        Commands::Dashboard { input } => {
            let stats: DashboardStats = read_json(&input)?;
            info!(medications = stats.0.len(), "loaded dashboard stats");
            let view = DashboardView::from_stats(&stats);
            emit(cli.format, &view, display::dashboard_cards)?;
        }
    }

    Ok(())
}

fn read_file(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let text = read_file(path)?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

fn emit<T: Serialize>(format: Format, value: &T, text: fn(&T) -> String) -> anyhow::Result<()> {
    match format {
        Format::Text => print!("{}", text(value)),
        Format::Json => println!("{}", serde_json::to_string_pretty(value)?),
    }
    Ok(())
}
