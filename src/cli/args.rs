//! Command-line argument parsing for HealthPath
//!
//! Provides clap-based CLI with subcommands and verbosity control.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::profile::{
    ChronicCondition, DietType, HealthProfile, MenstrualRegularity, SmokingHabit, StressLevel,
    TechEngagement,
};

/// HealthPath - clustering-driven wellness insights in your terminal
#[derive(Parser, Debug)]
#[command(name = "healthpath")]
#[command(version)]
#[command(about = "Cluster your health profile into a wellness tier and get advice", long_about = None)]
pub struct Args {
    /// Dataset CSV path (overrides config)
    #[arg(long)]
    pub dataset: Option<PathBuf>,

    /// Ollama base URL (overrides config)
    #[arg(long)]
    pub url: Option<String>,

    /// Ollama model tag (overrides config)
    #[arg(short, long)]
    pub model: Option<String>,

    /// Verbosity level: default (normal), -v (verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress all output except results)
    #[arg(short, long)]
    pub quiet: bool,

    /// Subcommand
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Assess a health profile and print the wellness report
    Assess {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Ask the local Ollama model for the advice text (falls back to rules)
        #[arg(long)]
        generative: bool,
    },

    /// Start the interactive health assistant chat
    Chat {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Route chat questions through the Ollama model when available
        #[arg(long)]
        generative: bool,
    },

    /// Run environment diagnostics (dataset, Ollama server, model)
    Doctor,

    /// Generate a seeded synthetic health dataset CSV
    GenerateData {
        /// Output path
        #[arg(long, default_value = "health_data_synthetic.csv")]
        out: PathBuf,

        /// Number of rows
        #[arg(long, default_value_t = crate::dataset::synthetic::DEFAULT_ROWS)]
        rows: usize,

        /// RNG seed
        #[arg(long, default_value_t = crate::dataset::synthetic::DEFAULT_SEED)]
        seed: u64,
    },

    /// Display current configuration
    Config,
}

/// Health profile fields collected from flags
#[derive(clap::Args, Debug, Clone)]
pub struct ProfileArgs {
    /// Your name (used in the report and chat)
    #[arg(long)]
    pub name: Option<String>,

    /// Age in years
    #[arg(long, default_value_t = 30.0)]
    pub age: f64,

    /// Body Mass Index (weight in kg / height in m^2)
    #[arg(long, default_value_t = 24.0)]
    pub bmi: f64,

    /// Average hours of sleep per night
    #[arg(long, default_value_t = 7.0)]
    pub sleep_hours: f64,

    /// Hours of physical activity per week
    #[arg(long, default_value_t = 3.0)]
    pub activity_hours: f64,

    /// Mental health self-score, 1-10
    #[arg(long, default_value_t = 6.0)]
    pub mental_score: f64,

    /// Alcoholic drinks per week
    #[arg(long, default_value_t = 0.0)]
    pub alcohol: f64,

    /// Daily stress level
    #[arg(long, value_enum, default_value = "medium")]
    pub stress: StressLevel,

    /// Typical diet
    #[arg(long, value_enum, default_value = "balanced")]
    pub diet: DietType,

    /// Chronic condition, if any
    #[arg(long, value_enum, default_value = "none")]
    pub condition: ChronicCondition,

    /// Smoking habit
    #[arg(long, value_enum, default_value = "non-smoker")]
    pub smoking: SmokingHabit,

    /// Menstrual cycle regularity
    #[arg(long, value_enum, default_value = "regular")]
    pub menstrual: MenstrualRegularity,

    /// Technology engagement
    #[arg(long, value_enum, default_value = "medium")]
    pub tech: TechEngagement,
}

impl ProfileArgs {
    /// Build the immutable profile from flags
    pub fn to_profile(&self) -> HealthProfile {
        HealthProfile {
            name: self.name.clone(),
            age: self.age,
            bmi: self.bmi,
            physical_activity_hours: self.activity_hours,
            mental_health_score: self.mental_score,
            sleep_hours: self.sleep_hours,
            alcohol_per_week: self.alcohol,
            chronic_condition: self.condition,
            diet_type: self.diet,
            smoking_habit: self.smoking,
            menstrual_regularity: self.menstrual,
            stress_level: self.stress,
            tech_engagement: self.tech,
        }
    }
}

/// Verbosity level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
}

impl Args {
    /// Get verbosity level based on flags
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else if self.verbose > 0 {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }
}
