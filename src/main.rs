//! HealthPath - Main CLI Entry Point

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use healthpath::advice::{AdviceBackend, AdviceSource, FallbackAdviser, OllamaAdviser, RuleBook};
use healthpath::chat::ChatSession;
use healthpath::cli::{Args, Commands, ProfileArgs, Verbosity};
use healthpath::cluster::WellnessModel;
use healthpath::config::Config;
use healthpath::dataset::{synthetic, HealthDataset};
use healthpath::doctor::{print_report, Doctor};
use healthpath::level::WellnessLevel;
use healthpath::ollama::OllamaClient;
use healthpath::profile::HealthProfile;
use healthpath::repl::Repl;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = effective_config(&args)?;

    match &args.command {
        Commands::Assess {
            profile,
            generative,
        } => {
            run_assess(&args, &config, profile, *generative).await?;
        }
        Commands::Chat {
            profile,
            generative,
        } => {
            run_chat(&args, &config, profile, *generative).await?;
        }
        Commands::Doctor => {
            let doctor = Doctor::new(config);
            let checks = doctor.run_diagnostics().await;
            if !print_report(&checks) {
                std::process::exit(1);
            }
        }
        Commands::GenerateData { out, rows, seed } => {
            let written = synthetic::write_csv(out, *rows, *seed)?;
            println!(
                "Wrote {} rows to {} (seed {})",
                written.to_string().bold(),
                out.display(),
                seed
            );
        }
        Commands::Config => {
            println!("# {}", Config::config_path()?.display());
            print!("{}", toml::to_string_pretty(&config)?);
        }
    }

    Ok(())
}

/// Config file values with CLI overrides applied
fn effective_config(args: &Args) -> Result<Config> {
    let mut config = Config::load()?;
    if let Some(dataset) = &args.dataset {
        config.dataset.path = dataset.clone();
    }
    if let Some(url) = &args.url {
        config.ollama.url = url.clone();
    }
    if let Some(model) = &args.model {
        config.ollama.model = model.clone();
    }
    Ok(config)
}

/// Load the dataset and fit the classifier, with a spinner
fn fit_model(args: &Args, config: &Config) -> Result<WellnessModel> {
    let spinner = if args.verbosity() == Verbosity::Quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message("Analyzing your health data...");
        pb
    };

    let dataset = HealthDataset::load(&config.dataset.path)?;
    let model = WellnessModel::fit(&dataset)?;
    spinner.finish_and_clear();
    Ok(model)
}

/// Classify the profile, printing intake warnings
fn classify(model: &WellnessModel, profile: &HealthProfile, args: &Args) -> Result<WellnessLevel> {
    let warnings = profile.validate()?;
    if args.verbosity() != Verbosity::Quiet {
        for warning in &warnings {
            println!("{} {}", "warning:".yellow(), warning);
        }
    }
    Ok(model.classify(profile)?)
}

async fn run_assess(
    args: &Args,
    config: &Config,
    profile_args: &ProfileArgs,
    generative: bool,
) -> Result<()> {
    let profile = profile_args.to_profile();
    let model = fit_model(args, config)?;
    let level = classify(&model, &profile, args)?;

    println!();
    println!(
        "Hello, {}! You're in {}.",
        profile.display_name().bold(),
        level.to_string().bold().green()
    );
    println!("{}", level.blurb());

    let advice = fetch_advice(config, level, &profile, generative).await;
    println!();
    println!("{}", "Health Insight:".bold());
    println!("{}", advice.insight);
    if !advice.tips.is_empty() {
        println!();
        println!("{}", "Your Action Plan:".bold());
        for tip in &advice.tips {
            println!("- {}", tip);
        }
    }
    if generative && advice.backend == AdviceBackend::Rules {
        println!();
        println!(
            "{}",
            "(Ollama was unreachable, showing rule-based advice.)".yellow()
        );
    }

    if args.verbosity() == Verbosity::Verbose {
        let counts = model.level_counts();
        println!();
        println!("{}", "Dataset tier distribution:".bold());
        for level in WellnessLevel::ALL {
            println!("  {}: {} people", level, counts[level.index()]);
        }
    }

    Ok(())
}

/// Select the advice backend and fetch advice; never fails
async fn fetch_advice(
    config: &Config,
    level: WellnessLevel,
    profile: &HealthProfile,
    generative: bool,
) -> healthpath::Advice {
    let rules = RuleBook::new();

    if generative {
        if let Ok(client) = OllamaClient::with_config(&config.ollama.url, &config.ollama.model) {
            let adviser = FallbackAdviser::new(OllamaAdviser::new(client));
            if let Ok(advice) = adviser.advise(level, profile).await {
                return advice;
            }
        }
    }

    // The rule book itself is infallible
    rules
        .advise(level, profile)
        .await
        .unwrap_or_else(|_| healthpath::Advice {
            insight: level.blurb().to_string(),
            tips: Vec::new(),
            backend: AdviceBackend::Rules,
        })
}

async fn run_chat(
    args: &Args,
    config: &Config,
    profile_args: &ProfileArgs,
    generative: bool,
) -> Result<()> {
    let profile = profile_args.to_profile();
    let model = fit_model(args, config)?;
    let level = classify(&model, &profile, args)?;

    println!(
        "Hello, {}! You're in {}. {}",
        profile.display_name().bold(),
        level.to_string().bold().green(),
        level.blurb()
    );

    let mut session = ChatSession::new();
    session.set_assessment(profile, level);

    let client = if generative {
        OllamaClient::with_config(&config.ollama.url, &config.ollama.model).ok()
    } else {
        None
    };

    let mut repl = Repl::new(session, client);
    repl.run().await
}
