//! Market research pipeline - main entry point
//!
//! Collects the run inputs, performs the shape checks on the API keys, wires
//! the concrete clients together, and reports the outcome. The core never
//! sees environment variables; keys are resolved here and passed in.

use clap::{Parser, Subcommand};
use market_research::config::ResearchConfig;
use market_research::llm::providers::{OpenAiConfig, OpenAiProvider};
use market_research::observability::{init_default_logging, init_logging, LogFormat};
use market_research::pipeline::sequential::{SequentialEngine, StageModel};
use market_research::report::ReportRenderer;
use market_research::runner::MarketResearchSystem;
use market_research::search::{TavilyConfig, TavilySearch};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Sequential multi-agent market research pipeline
#[derive(Parser)]
#[command(name = "market-research")]
#[command(about = "Generate an AI implementation report for a company and industry")]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the research pipeline and write the report files
    Run {
        /// Override the company from the config file
        #[arg(long)]
        company: Option<String>,

        /// Override the industry from the config file
        #[arg(long)]
        industry: Option<String>,
    },
    /// Validate configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match cli.verbose {
        0 => init_default_logging(),
        1 => init_logging(tracing::Level::DEBUG, LogFormat::Compact),
        _ => init_logging(tracing::Level::TRACE, LogFormat::Compact),
    }

    // Load configuration
    let mut config = match load_configuration(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Run { company, industry } => {
            if let Some(company) = company {
                config.research.company = company;
            }
            if let Some(industry) = industry {
                config.research.industry = industry;
            }
            run_pipeline(config).await
        }
        Commands::Config { show } => handle_config_command(config, show),
    };

    if let Err(e) = result {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn load_configuration(
    config_path: &Option<PathBuf>,
) -> Result<ResearchConfig, Box<dyn std::error::Error>> {
    match config_path {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            Ok(ResearchConfig::load_from_file(path)?)
        }
        None => {
            let default_paths = vec!["research.toml", "config/research.toml"];

            for path_str in default_paths {
                let path = PathBuf::from(path_str);
                if path.exists() {
                    info!("Loading configuration from: {}", path.display());
                    return Ok(ResearchConfig::load_from_file(&path)?);
                }
            }

            error!(
                "No configuration file found. Please provide one with -c/--config or create research.toml"
            );
            process::exit(1);
        }
    }
}

/// Shape checks on the API keys before the core is invoked
///
/// Prefix-only validation; anything beyond that is the provider's job.
fn validate_key_shapes(openai_key: &str, tavily_key: &str) -> Result<(), String> {
    if !openai_key.starts_with("sk-") {
        return Err("OpenAI API key does not start with 'sk-'".to_string());
    }
    if !tavily_key.starts_with("tvly-") {
        return Err("Tavily API key does not start with 'tvly-'".to_string());
    }
    Ok(())
}

async fn run_pipeline(config: ResearchConfig) -> Result<(), Box<dyn std::error::Error>> {
    let openai_key = config.get_llm_api_key()?;
    let tavily_key = config.get_search_api_key()?;

    if let Err(message) = validate_key_shapes(&openai_key, &tavily_key) {
        return Err(message.into());
    }

    let system = build_system(&config, openai_key, tavily_key)?;

    match system.run().await {
        (Some(_markdown), Some(md_path), Some(html_path)) => {
            println!("Report written:");
            println!("  Markdown: {}", md_path.display());
            println!("  HTML:     {}", html_path.display());
            Ok(())
        }
        _ => {
            warn!("The analysis did not complete; please check the log output and try again");
            Err("pipeline run failed".into())
        }
    }
}

/// Bootstrap factory - creates the system with injected dependencies
fn build_system(
    config: &ResearchConfig,
    openai_key: String,
    tavily_key: String,
) -> Result<MarketResearchSystem, Box<dyn std::error::Error>> {
    let provider = OpenAiProvider::new(OpenAiConfig {
        api_key: openai_key,
        ..Default::default()
    })?;

    let search = TavilySearch::new(TavilyConfig {
        api_key: tavily_key,
        max_results: config.search_max_results(),
        search_depth: config.search.search_depth.clone(),
        ..Default::default()
    })?;

    let engine = SequentialEngine::new(
        Arc::new(provider),
        Arc::new(search),
        StageModel {
            model: config.llm.model.clone(),
            temperature: config.llm.temperature,
            max_tokens: config.llm.max_tokens,
        },
    );

    Ok(MarketResearchSystem::new(
        config.research.company.clone(),
        config.research.industry.clone(),
        config.research.variant,
        Box::new(engine),
        ReportRenderer::new(config.research.reports_dir.clone()),
    ))
}

fn handle_config_command(
    config: ResearchConfig,
    show: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if show {
        println!("Current configuration:");
        println!("{}", toml::to_string_pretty(&config)?);
    }

    info!("Configuration validation complete");
    Ok(())
}
