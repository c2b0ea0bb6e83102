//! Doctor command for assistant diagnostics
//!
//! Checks the two external prerequisites (dataset on disk, Ollama
//! server) and reports pass/warn/fail per check. Ollama failures are
//! warnings, not failures: the assistant still works on rules alone.

use std::path::Path;

use colored::Colorize;

use crate::cluster::N_CLUSTERS;
use crate::config::Config;
use crate::dataset::HealthDataset;
use crate::ollama::OllamaClient;

/// Health check result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckStatus {
    Pass,
    Warn(String),
    Fail(String),
}

/// Individual health check
#[derive(Debug)]
pub struct Check {
    pub name: String,
    pub status: CheckStatus,
}

/// Doctor diagnostics for the assistant's environment
pub struct Doctor {
    config: Config,
}

impl Doctor {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Run all checks
    pub async fn run_diagnostics(&self) -> Vec<Check> {
        let mut checks = Vec::new();

        checks.push(self.check_dataset());
        checks.push(self.check_ollama_api().await);
        checks.push(self.check_model_installed().await);

        checks
    }

    /// Check 1: dataset exists, parses, and has enough rows to cluster
    fn check_dataset(&self) -> Check {
        let path = &self.config.dataset.path;
        let name = "Dataset".to_string();

        if !Path::new(path).exists() {
            return Check {
                name,
                status: CheckStatus::Fail(format!(
                    "{} not found; run `healthpath generate-data`",
                    path.display()
                )),
            };
        }

        match HealthDataset::load(path) {
            Ok(dataset) if dataset.len() >= N_CLUSTERS => Check {
                name,
                status: CheckStatus::Pass,
            },
            Ok(dataset) => Check {
                name,
                status: CheckStatus::Fail(format!(
                    "only {} rows, need at least {}",
                    dataset.len(),
                    N_CLUSTERS
                )),
            },
            Err(e) => Check {
                name,
                status: CheckStatus::Fail(format!("cannot parse: {}", e)),
            },
        }
    }

    /// Check 2: Ollama API reachable
    async fn check_ollama_api(&self) -> Check {
        let name = "Ollama API".to_string();
        match OllamaClient::with_config(&self.config.ollama.url, &self.config.ollama.model) {
            Ok(client) if client.health_check().await => Check {
                name,
                status: CheckStatus::Pass,
            },
            Ok(_) => Check {
                name,
                status: CheckStatus::Warn(
                    "not reachable; advice will fall back to rules".to_string(),
                ),
            },
            Err(e) => Check {
                name,
                status: CheckStatus::Fail(format!("client error: {}", e)),
            },
        }
    }

    /// Check 3: configured model installed
    async fn check_model_installed(&self) -> Check {
        let name = "Advice model".to_string();
        let client =
            match OllamaClient::with_config(&self.config.ollama.url, &self.config.ollama.model) {
                Ok(client) => client,
                Err(e) => {
                    return Check {
                        name,
                        status: CheckStatus::Fail(format!("client error: {}", e)),
                    }
                }
            };

        match client.list_models().await {
            Ok(models) if models.iter().any(|m| m == &self.config.ollama.model) => Check {
                name,
                status: CheckStatus::Pass,
            },
            Ok(_) => Check {
                name,
                status: CheckStatus::Warn(format!(
                    "model {} not installed; pull it with `ollama pull {}`",
                    self.config.ollama.model, self.config.ollama.model
                )),
            },
            Err(_) => Check {
                name,
                status: CheckStatus::Warn(
                    "cannot list models; advice will fall back to rules".to_string(),
                ),
            },
        }
    }
}

/// Print a diagnostics report; returns false when any check failed
pub fn print_report(checks: &[Check]) -> bool {
    let mut all_ok = true;
    println!("{}", "HealthPath diagnostics".bold());
    for check in checks {
        match &check.status {
            CheckStatus::Pass => {
                println!("  {} {}", "PASS".green(), check.name);
            }
            CheckStatus::Warn(reason) => {
                println!("  {} {}: {}", "WARN".yellow(), check.name, reason);
            }
            CheckStatus::Fail(reason) => {
                all_ok = false;
                println!("  {} {}: {}", "FAIL".red(), check.name, reason);
            }
        }
    }
    all_ok
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn config_with(dataset_path: &Path, ollama_url: &str) -> Config {
        let mut config = Config::default();
        config.dataset.path = dataset_path.to_path_buf();
        config.ollama.url = ollama_url.to_string();
        config
    }

    #[tokio::test]
    async fn test_missing_dataset_fails() {
        let config = config_with(Path::new("/no/such/file.csv"), "http://127.0.0.1:9");
        let doctor = Doctor::new(config);
        let checks = doctor.run_diagnostics().await;
        assert!(matches!(checks[0].status, CheckStatus::Fail(_)));
    }

    #[tokio::test]
    async fn test_unreachable_ollama_warns_not_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "Age,BMI,Physical_Activity_Hours_Per_Week,Chronic_Condition,Mental_Health_Score,\
             Sleep_Hours_Per_Night,Diet_Type,Smoking_Habit,Alcohol_Consumption_Per_Week,\
             Menstrual_Cycle_Regularity,Stress_Level,Tech_Engagement"
        )
        .unwrap();
        for i in 0..4 {
            writeln!(
                file,
                "30,2{}.0,4,None,7,7,Balanced,Non-Smoker,1,Regular,Low,Medium",
                i
            )
            .unwrap();
        }
        file.flush().unwrap();

        let config = config_with(file.path(), "http://127.0.0.1:9");
        let doctor = Doctor::new(config);
        let checks = doctor.run_diagnostics().await;
        assert_eq!(checks[0].status, CheckStatus::Pass);
        assert!(matches!(checks[1].status, CheckStatus::Warn(_)));
        assert!(matches!(checks[2].status, CheckStatus::Warn(_)));
    }
}
