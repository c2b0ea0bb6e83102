//! Advice selection: rule book, generative backend, and fallback
//!
//! Both strategies implement `AdviceSource`. The `FallbackAdviser`
//! wraps a generative source around the rule book so the caller always
//! gets non-empty advice even when Ollama is down.

pub mod generative;
pub mod rules;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::level::WellnessLevel;
use crate::profile::HealthProfile;

pub use generative::OllamaAdviser;
pub use rules::RuleBook;

/// Which backend produced a piece of advice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdviceBackend {
    Rules,
    Generative,
}

/// Advice returned to the user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Advice {
    /// One-line insight for the assigned tier
    pub insight: String,
    /// Concrete action tips, possibly empty for generative advice
    pub tips: Vec<String>,
    /// Producing backend
    pub backend: AdviceBackend,
}

impl Advice {
    /// Render as plain text (insight plus bulleted tips)
    pub fn to_text(&self) -> String {
        let mut out = self.insight.clone();
        for tip in &self.tips {
            out.push_str("\n- ");
            out.push_str(tip);
        }
        out
    }
}

/// A source of wellness advice for a classified profile
#[async_trait]
pub trait AdviceSource: Send + Sync {
    async fn advise(&self, level: WellnessLevel, profile: &HealthProfile) -> Result<Advice>;
}

/// Generative advice with rule-book fallback
///
/// Any backend error (unreachable server, timeout, API failure) falls
/// back to the deterministic rules; the fallback itself cannot fail.
pub struct FallbackAdviser<G: AdviceSource> {
    generative: G,
    rules: RuleBook,
}

impl<G: AdviceSource> FallbackAdviser<G> {
    pub fn new(generative: G) -> Self {
        FallbackAdviser {
            generative,
            rules: RuleBook::new(),
        }
    }
}

#[async_trait]
impl<G: AdviceSource> AdviceSource for FallbackAdviser<G> {
    async fn advise(&self, level: WellnessLevel, profile: &HealthProfile) -> Result<Advice> {
        match self.generative.advise(level, profile).await {
            Ok(advice) => Ok(advice),
            Err(_) => self.rules.advise(level, profile).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::HealthPathError;

    struct AlwaysDown;

    #[async_trait]
    impl AdviceSource for AlwaysDown {
        async fn advise(&self, _: WellnessLevel, _: &HealthProfile) -> Result<Advice> {
            Err(HealthPathError::ServiceUnavailable("down".to_string()))
        }
    }

    struct CannedSource;

    #[async_trait]
    impl AdviceSource for CannedSource {
        async fn advise(&self, _: WellnessLevel, _: &HealthProfile) -> Result<Advice> {
            Ok(Advice {
                insight: "canned".to_string(),
                tips: vec![],
                backend: AdviceBackend::Generative,
            })
        }
    }

    #[tokio::test]
    async fn test_fallback_uses_rules_when_backend_down() {
        let adviser = FallbackAdviser::new(AlwaysDown);
        let profile = HealthProfile::default();
        for level in WellnessLevel::ALL {
            let advice = adviser.advise(level, &profile).await.unwrap();
            assert_eq!(advice.backend, AdviceBackend::Rules);
            assert!(!advice.to_text().is_empty());
        }
    }

    #[tokio::test]
    async fn test_fallback_prefers_generative_when_up() {
        let adviser = FallbackAdviser::new(CannedSource);
        let advice = adviser
            .advise(WellnessLevel::Steady, &HealthProfile::default())
            .await
            .unwrap();
        assert_eq!(advice.backend, AdviceBackend::Generative);
        assert_eq!(advice.insight, "canned");
    }

    #[test]
    fn test_advice_to_text_bullets_tips() {
        let advice = Advice {
            insight: "Looking good".to_string(),
            tips: vec!["walk more".to_string(), "sleep earlier".to_string()],
            backend: AdviceBackend::Rules,
        };
        let text = advice.to_text();
        assert!(text.starts_with("Looking good"));
        assert_eq!(text.matches("\n- ").count(), 2);
    }
}
