//! Ollama-backed advice generation
//!
//! Builds a coaching prompt from the profile summary and assigned tier,
//! then asks the configured local model for a short reply. Errors
//! propagate so the fallback layer can take over.

use async_trait::async_trait;

use crate::advice::{Advice, AdviceBackend, AdviceSource};
use crate::errors::Result;
use crate::level::WellnessLevel;
use crate::ollama::OllamaClient;
use crate::profile::HealthProfile;

/// Generative advice source backed by a local Ollama model
pub struct OllamaAdviser {
    client: OllamaClient,
}

impl OllamaAdviser {
    pub fn new(client: OllamaClient) -> Self {
        OllamaAdviser { client }
    }

    /// Prompt sent to the model for a classified profile
    pub fn build_prompt(level: WellnessLevel, profile: &HealthProfile) -> String {
        format!(
            "You are a friendly wellness coach. A health assessment placed this user in \
             {} of 4 wellness groups (Group 0 is healthiest, Group 3 needs the most support). \
             Their profile: {}. \
             In 3 short sentences, give encouraging, practical advice tailored to this profile. \
             Do not give medical diagnoses.",
            level,
            profile.summary()
        )
    }

    pub fn client(&self) -> &OllamaClient {
        &self.client
    }
}

#[async_trait]
impl AdviceSource for OllamaAdviser {
    async fn advise(&self, level: WellnessLevel, profile: &HealthProfile) -> Result<Advice> {
        let prompt = Self::build_prompt(level, profile);
        let response = self.client.generate(&prompt).await?;

        Ok(Advice {
            insight: response.trim().to_string(),
            tips: Vec::new(),
            backend: AdviceBackend::Generative,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::StressLevel;

    #[test]
    fn test_prompt_contains_group_and_profile() {
        let profile = HealthProfile {
            name: Some("Avery".to_string()),
            bmi: 27.5,
            stress_level: StressLevel::High,
            ..HealthProfile::default()
        };
        let prompt = OllamaAdviser::build_prompt(WellnessLevel::Strained, &profile);
        assert!(prompt.contains("Group 2"));
        assert!(prompt.contains("Avery"));
        assert!(prompt.contains("27.5"));
        assert!(prompt.contains("High"));
    }

    #[tokio::test]
    async fn test_advise_fails_when_server_unreachable() {
        let client = OllamaClient::with_config("http://127.0.0.1:9", "llama3.2:3b").unwrap();
        let adviser = OllamaAdviser::new(client);
        let result = adviser
            .advise(WellnessLevel::Steady, &HealthProfile::default())
            .await;
        assert!(result.is_err());
    }
}
