//! promptgen CLI - Prompt enhancement from the terminal
//!
//! Runs the enhancer locally, or against a promptgen-server when a server URL
//! is configured.

mod api;
mod config;

use anyhow::{bail, Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::{Input, Select};
use rand::Rng;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use promptgen::adapters::{JsonFileResultRepository, JsonFileStatsRepository, StatsSeed};
use promptgen::application::{GenerationService, ResultsService, ResultsView, StatsService};
use promptgen::domain::{
    download_artifact, download_file_name, share_data_from_link, share_link, share_text,
    LOADING_FINAL_DELAY_MS, LOADING_STEPS, LOADING_STEP_DELAY_MS, SHARE_TITLE,
};
use promptgen::{
    category_spec, complexity_spec, model_spec, AiModel, Category, ComplexityLevel,
    EnhancedPromptResult, PromptForm, ResultRepository, StatsRecord,
};

use api::PromptgenClient;
use config::Config;

/// Session key of the most recent result in the local store
const LATEST_SESSION: &str = "latest";

#[derive(Parser)]
#[command(name = "promptgen")]
#[command(
    about = "promptgen CLI - Turn short prompts into structured, model-aware prompts",
    long_about = None
)]
#[command(version)]
struct Cli {
    /// Log library diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Enhance a prompt
    Enhance {
        /// Prompt text (will prompt if not provided)
        text: Option<String>,
        /// Target model id (defaults to config)
        #[arg(short, long)]
        model: Option<String>,
        /// Category id (will prompt if not provided)
        #[arg(short, long)]
        category: Option<String>,
        /// Complexity level 1-5 (defaults to config)
        #[arg(short, long)]
        level: Option<i64>,
        /// Use the configured server instead of the local engine
        #[arg(long)]
        remote: bool,
        /// Skip the simulated processing delay
        #[arg(long)]
        no_delay: bool,
    },

    /// Show the latest result with analytics
    Show {
        /// Share link to display instead of the latest result
        #[arg(long)]
        link: Option<String>,
        /// Session key to fetch from the configured server
        #[arg(long)]
        session: Option<String>,
        /// Skip the loading sequence
        #[arg(long)]
        no_delay: bool,
    },

    /// Save the latest result as a text file
    Download {
        /// Output path (defaults to enhanced-prompt-<millis>.txt)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print share text and link for the latest result
    Share {
        /// Base URL for the link (defaults to config)
        #[arg(long)]
        base: Option<String>,
    },

    /// Show usage counters
    Stats {
        /// Ask the configured server
        #[arg(long)]
        remote: bool,
    },

    /// List supported AI models
    Models,

    /// List prompt categories
    Categories,

    /// List complexity levels
    Levels,

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set a configuration value
    Set {
        /// One of: default_model, default_level, server_url, share_base_url, generation_delay_ms
        key: String,
        value: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new("promptgen=debug"))
            .with_writer(std::io::stderr)
            .init();
    }

    match cli.command {
        Commands::Enhance {
            text,
            model,
            category,
            level,
            remote,
            no_delay,
        } => cmd_enhance(text, model, category, level, remote, no_delay).await,
        Commands::Show {
            link,
            session,
            no_delay,
        } => cmd_show(link, session, no_delay).await,
        Commands::Download { output } => cmd_download(output).await,
        Commands::Share { base } => cmd_share(base).await,
        Commands::Stats { remote } => cmd_stats(remote).await,
        Commands::Models => cmd_models(),
        Commands::Categories => cmd_categories(),
        Commands::Levels => cmd_levels(),
        Commands::Config { action } => cmd_config(action.unwrap_or(ConfigAction::Show)),
    }
}

// ============================================
// Local Store
// ============================================

struct LocalStore {
    results: Arc<JsonFileResultRepository>,
    stats: Arc<StatsService<JsonFileStatsRepository, StatsSeed>>,
}

impl LocalStore {
    fn open() -> Result<Self> {
        let data_dir = Config::data_dir()?;
        Ok(Self {
            results: Arc::new(JsonFileResultRepository::new(&data_dir)),
            stats: Arc::new(StatsService::new(
                Arc::new(JsonFileStatsRepository::new(&data_dir)),
                Arc::new(StatsSeed::Embedded),
            )),
        })
    }

    fn results_service(&self) -> ResultsService<JsonFileResultRepository> {
        ResultsService::new(self.results.clone())
    }

    async fn latest(&self) -> Result<EnhancedPromptResult> {
        self.results_service()
            .load(Some(LATEST_SESSION), None)
            .await?
            .map(|view| view.result)
            .context("No prompt data found. Run 'promptgen enhance' first.")
    }
}

fn remote_client(config: &Config) -> Result<PromptgenClient> {
    let url = config
        .server_url
        .as_deref()
        .context("No server configured. Run 'promptgen config set server_url <URL>' first.")?;
    Ok(PromptgenClient::new(url))
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_enhance(
    text: Option<String>,
    model: Option<String>,
    category: Option<String>,
    level: Option<i64>,
    remote: bool,
    no_delay: bool,
) -> Result<()> {
    let config = Config::load()?;

    let text = match text {
        Some(t) => t,
        None => Input::new()
            .with_prompt("Prompt to enhance")
            .interact_text()
            .context("Failed to read input")?,
    };

    let category = match category {
        Some(c) => c,
        None => {
            let names: Vec<&str> = Category::ALL.iter().map(|c| c.display_name()).collect();
            let idx = Select::new()
                .with_prompt("Prompt category")
                .items(&names)
                .default(0)
                .interact()
                .context("Failed to read selection")?;
            Category::ALL[idx].id().to_string()
        }
    };

    let form = PromptForm::new(
        text,
        Some(model.unwrap_or_else(|| config.default_model.clone())),
        Some(category),
        level.unwrap_or(config.default_level as i64),
    );

    // Check locally first so nothing is sent or stored for an invalid form
    if let Err(e) = form.validate() {
        bail!("{}", e);
    }

    let store = LocalStore::open()?;

    let (result, stats) = if remote || config.server_url.is_some() {
        let client = remote_client(&config)?;
        if !client.health().await.unwrap_or(false) {
            bail!(
                "Could not connect to promptgen API at {}",
                config.server_url.as_deref().unwrap_or("-")
            );
        }

        eprintln!("{}", "Generating on server...".dimmed());
        let submission = client.submit(&form).await?;
        eprintln!("{} {}", "Session:".dimmed(), submission.session_key.dimmed());

        // Keep a local copy for show/download/share
        store.results.save(LATEST_SESSION, &submission.result).await?;
        (submission.result, submission.stats)
    } else {
        let delay = if no_delay {
            Duration::ZERO
        } else {
            Duration::from_millis(config.generation_delay_ms)
        };
        let service = GenerationService::new(store.results.clone(), store.stats.clone(), delay);

        eprintln!("{}", "Generating...".dimmed());
        let submission = service
            .submit_to(LATEST_SESSION.to_string(), form)
            .await
            .map_err(|e| anyhow::anyhow!(e.user_message()))?;
        (submission.result, submission.stats)
    };

    println!("{}", result.enhanced);

    eprintln!();
    eprintln!(
        "{} {} / {} / {}",
        "✓".green(),
        result.ai_model.short_name().cyan(),
        result.prompt_type.display_name().cyan(),
        complexity_spec(result.complexity_level).display_name.cyan()
    );
    if let Some(stats) = stats {
        eprintln!(
            "  {} prompts generated so far",
            stats.total_prompts_generated.to_string().green()
        );
    }

    Ok(())
}

async fn cmd_show(link: Option<String>, session: Option<String>, no_delay: bool) -> Result<()> {
    let config = Config::load()?;
    let store = LocalStore::open()?;

    let view = match (link, session) {
        (Some(link), _) => {
            let data = share_data_from_link(&link).context("Link has no 'data' parameter")?;
            store
                .results_service()
                .load(None, Some(data))
                .await?
                .context("No prompt data found in link.")?
        }
        (None, Some(session)) => {
            let result = remote_client(&config)?.result(&session).await?;
            ResultsView::new(result)
        }
        (None, None) => ResultsView::new(store.latest().await?),
    };

    if !no_delay {
        play_loading_steps().await;
    }

    print_view(&view);
    Ok(())
}

/// Staged progress with a random pause per step
async fn play_loading_steps() {
    let (min, max) = LOADING_STEP_DELAY_MS;

    for (text, progress) in LOADING_STEPS {
        eprint!("\r{} {:>3}%  {:<40}", "▸".cyan(), progress, text.dimmed());
        let _ = std::io::stderr().flush();

        let pause = rand::thread_rng().gen_range(min..=max);
        tokio::time::sleep(Duration::from_millis(pause)).await;
    }

    tokio::time::sleep(Duration::from_millis(LOADING_FINAL_DELAY_MS)).await;
    eprintln!();
}

fn print_view(view: &ResultsView) {
    let analytics = &view.analytics;

    if !view.result.original.is_empty() {
        println!("{}", "Original prompt:".bold());
        println!("  {}", view.result.original.dimmed());
        println!();
    }

    println!("{}", "Enhanced prompt:".bold());
    for section in &view.sections {
        println!("  {}", section.title.cyan().bold());
        println!("    {}", section.content);
    }
    println!();

    println!("{}", "Analytics:".bold());
    println!("  Words:         {}", analytics.word_count);
    println!("  Characters:    {}", analytics.char_count);
    println!("  Sections:      {}", analytics.section_count);
    println!("  Optimized for: {}", analytics.optimized_for.cyan());
    println!("  Complexity:    {}", analytics.complexity_label.cyan());
    println!("  Category:      {}", analytics.category_label.cyan());
}

async fn cmd_download(output: Option<PathBuf>) -> Result<()> {
    let result = LocalStore::open()?.latest().await?;

    let now = Local::now();
    let path = output.unwrap_or_else(|| PathBuf::from(download_file_name(now)));

    fs::write(&path, download_artifact(&result, now))
        .with_context(|| format!("Failed to write {:?}", path))?;

    println!("{} Prompt downloaded to {:?}", "✓".green(), path);
    Ok(())
}

async fn cmd_share(base: Option<String>) -> Result<()> {
    let config = Config::load()?;
    let result = LocalStore::open()?.latest().await?;

    let base = base.unwrap_or(config.share_base_url);
    let link = share_link(&base, &result)?;

    println!("{}", SHARE_TITLE.bold());
    println!();
    println!("{}", share_text(&result));
    println!();
    println!("{}", link.cyan());
    Ok(())
}

async fn cmd_stats(remote: bool) -> Result<()> {
    let config = Config::load()?;

    let stats: StatsRecord = if remote {
        remote_client(&config)?.stats().await?
    } else {
        LocalStore::open()?.stats.load().await
    };

    println!("{}", "Stats:".bold());
    println!(
        "  Prompts generated: {}+",
        stats.total_prompts_generated.to_string().green()
    );
    println!("  AI models supported: {}+", stats.ai_models_supported);
    println!("  Success rate: {}%", stats.success_rate);
    println!(
        "  Last updated: {}",
        stats
            .last_updated
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M")
            .to_string()
            .dimmed()
    );
    Ok(())
}

fn cmd_models() -> Result<()> {
    println!("{}", "AI models:".bold());
    for model in AiModel::ALL {
        let spec = model_spec(model);
        let kind = if model.is_image_generator() {
            " (image)".yellow().to_string()
        } else {
            String::new()
        };
        println!(
            "  {:<18} {}{}",
            model.id().cyan(),
            spec.display_name,
            kind
        );
        println!("  {:<18} {}", "", spec.key_features.join(", ").dimmed());
    }
    Ok(())
}

fn cmd_categories() -> Result<()> {
    println!("{}", "Categories:".bold());
    for category in Category::ALL {
        let elements = category_spec(category)
            .map(|spec| spec.key_elements.join(", "))
            .unwrap_or_else(|| "no category guidance".to_string());
        println!(
            "  {:<16} {} {}",
            category.id().cyan(),
            category.display_name(),
            format!("({})", elements).dimmed()
        );
    }
    Ok(())
}

fn cmd_levels() -> Result<()> {
    println!("{}", "Complexity levels:".bold());
    for level in ComplexityLevel::all() {
        let spec = complexity_spec(level);
        let (min, max) = spec.word_range;
        println!(
            "  {} {:<9} {} {}",
            level.to_string().cyan(),
            spec.display_name,
            spec.description,
            format!("[{}-{} words, {} sections]", min, max, spec.section_count).dimmed()
        );
    }
    Ok(())
}

fn cmd_config(action: ConfigAction) -> Result<()> {
    let mut config = Config::load()?;

    match action {
        ConfigAction::Show => {
            println!("{}", "Configuration:".bold());
            println!("  Path: {:?}", Config::config_path()?);
            println!("  Data: {:?}", Config::data_dir()?);
            println!("  Default model: {}", config.model().id().cyan());
            println!("  Default level: {}", config.level());
            println!(
                "  Server URL: {}",
                match &config.server_url {
                    Some(url) => url.green(),
                    None => "Not set (local engine)".dimmed(),
                }
            );
            println!("  Share base URL: {}", config.share_base_url);
            println!("  Generation delay: {} ms", config.generation_delay_ms);
        }
        ConfigAction::Set { key, value } => {
            config.set(&key, &value)?;
            config.save()?;
            println!("{} {} updated", "✓".green(), key);
        }
    }

    Ok(())
}
