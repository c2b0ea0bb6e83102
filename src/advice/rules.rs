//! Deterministic rule-book advice
//!
//! Total over all four tiers: the insight is fixed per tier and the
//! action tips are conditioned on the profile. A borderline profile
//! with no matching rule still gets a monitoring tip, so the returned
//! advice is never empty.

use async_trait::async_trait;

use crate::advice::{Advice, AdviceBackend, AdviceSource};
use crate::errors::Result;
use crate::level::WellnessLevel;
use crate::profile::{ChronicCondition, HealthProfile, StressLevel};

/// Static advice lookup keyed by wellness tier
#[derive(Debug, Clone, Default)]
pub struct RuleBook;

impl RuleBook {
    pub fn new() -> Self {
        RuleBook
    }

    /// Fixed per-tier insight line
    pub fn insight(&self, level: WellnessLevel) -> &'static str {
        match level {
            WellnessLevel::Thriving => "You're in awesome health! Keep up the great work!",
            WellnessLevel::Steady => "You're doing well, but a few areas could use attention.",
            WellnessLevel::Strained => {
                "You're facing some health challenges. Let's address them."
            }
            WellnessLevel::Struggling => {
                "You've got significant challenges. Here's how to tackle them."
            }
        }
    }

    /// Profile-conditioned action tips for a tier
    pub fn tips(&self, level: WellnessLevel, profile: &HealthProfile) -> Vec<String> {
        let mut tips = Vec::new();

        match level {
            WellnessLevel::Thriving => {
                tips.push(
                    "Maintain your balanced lifestyle with regular check-ups and light exercise."
                        .to_string(),
                );
            }
            WellnessLevel::Steady => {
                if profile.bmi > 25.0 {
                    tips.push(format!(
                        "Your BMI of {:.1} is slightly high. Try 15-20 minutes of brisk walking 3-4 times a week.",
                        profile.bmi
                    ));
                }
                if profile.sleep_hours < 7.0 {
                    tips.push(format!(
                        "You're getting {:.1} hours of sleep. Aim for 7-8 with a calm bedtime routine.",
                        profile.sleep_hours
                    ));
                }
                if profile.stress_level.is_elevated() {
                    tips.push(format!(
                        "With {} stress, consider 5-10 minutes of daily deep breathing.",
                        profile.stress_level.dataset_value()
                    ));
                }
            }
            WellnessLevel::Strained => {
                if profile.bmi >= 25.0 {
                    tips.push(format!(
                        "Your BMI of {:.1} suggests you're overweight. Start with 20-30 minutes of daily walking and more veggies.",
                        profile.bmi
                    ));
                }
                if profile.sleep_hours < 7.0 {
                    tips.push(format!(
                        "Only {:.1} hours of sleep. Target 7-8 hours by cutting screen time before bed.",
                        profile.sleep_hours
                    ));
                }
                if profile.stress_level.is_elevated() {
                    tips.push(format!(
                        "{} stress? Try 10 minutes of meditation daily.",
                        profile.stress_level.dataset_value()
                    ));
                }
                if profile.mental_health_score <= 3.0 {
                    tips.push(format!(
                        "Your mental health score of {:.0} is low. Consider talking to a friend or professional.",
                        profile.mental_health_score
                    ));
                }
            }
            WellnessLevel::Struggling => {
                if profile.bmi > 30.0 {
                    tips.push(format!(
                        "With a BMI of {:.1}, consult a nutritionist and aim for 20-30 minutes of daily activity.",
                        profile.bmi
                    ));
                }
                if profile.sleep_hours < 6.0 {
                    tips.push(format!(
                        "Critical sleep of {:.1} hours. Prioritize 7-8 hours with a strict schedule.",
                        profile.sleep_hours
                    ));
                }
                if profile.stress_level == StressLevel::High || profile.mental_health_score <= 5.0 {
                    tips.push(
                        "High stress or low mental health? Therapy could really help.".to_string(),
                    );
                }
                if profile.chronic_condition != ChronicCondition::None {
                    tips.push(format!(
                        "For {}, regular doctor visits are key.",
                        profile.chronic_condition.dataset_value()
                    ));
                }
            }
        }

        if tips.is_empty() {
            tips.push(
                "Let's fine-tune your plan. Everything looks borderline, so keep monitoring your habits!"
                    .to_string(),
            );
        }

        tips
    }
}

#[async_trait]
impl AdviceSource for RuleBook {
    async fn advise(&self, level: WellnessLevel, profile: &HealthProfile) -> Result<Advice> {
        Ok(Advice {
            insight: self.insight(level).to_string(),
            tips: self.tips(level, profile),
            backend: AdviceBackend::Rules,
        })
    }
}
