use anyhow::Result;
use clap::Parser;
use colored::*;
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use revsent_cli::{
    display_banner, display_status, handle_input_with_history, print_help, PromptInput,
    TerminalCharts, TerminalView,
};
use revsent_core::{AnalysisRequest, AnalysisService, ReviewAnalysisController, SubmitOutcome};
use revsent_http::{parse_base_url, HttpAnalysisClient, ServerConfig};

#[derive(Parser, Debug)]
#[command(name = "revsent")]
#[command(about = "Analyze product review sentiment from the terminal", long_about = None)]
struct Cli {
    /// Product page URL to analyze once, then exit
    #[arg(short, long)]
    url: Option<String>,

    /// Analysis server base URL (overrides REVSENT_SERVER_URL)
    #[arg(short, long)]
    server: Option<String>,

    /// Request timeout in seconds (overrides REVSENT_TIMEOUT_SECS)
    #[arg(short, long)]
    timeout: Option<u64>,
}

impl Cli {
    fn server_config(&self) -> Result<ServerConfig> {
        let mut config = ServerConfig::from_env()?;

        if let Some(server) = &self.server {
            config.base_url = parse_base_url(server)?;
        }
        if let Some(secs) = self.timeout {
            config.timeout = Some(Duration::from_secs(secs));
        }

        Ok(config)
    }
}

/// A line typed at the interactive prompt
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Exit,
    Help,
    Status,
    /// Anything else, including an empty line, is the form's `product_url`
    Analyze(String),
}

impl Command {
    fn parse(input: &str) -> Self {
        match input.to_lowercase().as_str() {
            "exit" | "quit" => Command::Exit,
            "help" => Command::Help,
            "status" => Command::Status,
            _ => Command::Analyze(input.to_string()),
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();
    init_logging();
    let cli = Cli::parse();

    let client = HttpAnalysisClient::new(cli.server_config()?)?;
    tracing::info!(server = %client.config().base_url, "using analysis server");

    let mut controller = ReviewAnalysisController::new(
        client,
        TerminalView::stdio(),
        TerminalCharts::stdout(),
    );

    // One-shot mode
    if let Some(url) = cli.url {
        let outcome = controller.handle_submit(&AnalysisRequest::new(url)).await;
        return Ok(match outcome {
            SubmitOutcome::Rendered => ExitCode::SUCCESS,
            SubmitOutcome::Failed { .. } => ExitCode::FAILURE,
        });
    }

    // Interactive mode
    display_banner();
    display_status(&controller.service().status().await);
    println!();

    let mut history = Vec::new();

    loop {
        let input = match handle_input_with_history(&mut history).await? {
            PromptInput::Line(line) => line,
            PromptInput::Cancelled => continue,
            PromptInput::Closed => break,
        };

        match Command::parse(&input) {
            Command::Exit => {
                println!("{}", "👋 Goodbye!".green());
                break;
            }
            Command::Help => print_help(),
            Command::Status => display_status(&controller.service().status().await),
            Command::Analyze(product_url) => {
                controller
                    .handle_submit(&AnalysisRequest::new(product_url))
                    .await;
                println!();
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
