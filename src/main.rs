use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use textgen_tui::config::Config;
use textgen_tui::controller::FormController;
use textgen_tui::generation::{normalize_temperature, normalize_token_count, HttpGenerationService};
use textgen_tui::logging::init_tracing;
use textgen_tui::ui;
use textgen_tui::ui::form::{FormIntent, FormState};

/// Terminal form for a text-generation service.
#[derive(Debug, Parser)]
#[command(name = "textgen", version, about)]
struct Cli {
    /// Config file (default: <config dir>/textgen/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override service.base_url
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Initial token count (1-100, fractional values are truncated)
    #[arg(long, value_name = "N")]
    tokens: Option<f64>,

    /// Initial temperature (0.0-1.0)
    #[arg(long, value_name = "T")]
    temperature: Option<f64>,

    /// Generate once for this prompt, print the result and exit
    #[arg(long, value_name = "TEXT")]
    prompt: Option<String>,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing();

    let config = load_config(&cli)?;
    let mut initial = FormState::from_defaults(&config.form);
    if let Some(tokens) = cli.tokens {
        initial.token_count = normalize_token_count(tokens);
    }
    if let Some(temperature) = cli.temperature {
        initial.temperature = normalize_temperature(temperature);
    }

    let service = Arc::new(
        HttpGenerationService::new(&config.service).context("Failed to set up generation service")?,
    );
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    tracing::info!(endpoint = service.endpoint(), "Starting textgen");

    if let Some(prompt) = cli.prompt {
        let mut controller = FormController::new(initial, service);
        controller.dispatch(FormIntent::SetPrompt(prompt));
        let outcome = runtime.block_on(controller.submit());
        println!("{}", controller.state().result_text);
        let failed = outcome.map_or(true, |outcome| outcome.is_error());
        return Ok(if failed {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        });
    }

    ui::run(&config, initial, service, runtime.handle().clone())
        .context("Terminal UI failed")?;
    Ok(ExitCode::SUCCESS)
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let path = cli.config.clone().unwrap_or_else(Config::config_path);
    let mut config =
        Config::load_from(&path).with_context(|| format!("Failed to load {}", path.display()))?;

    if let Some(base_url) = &cli.base_url {
        config.service.base_url = base_url.clone();
        config.validate()?;
    }
    Ok(config)
}
