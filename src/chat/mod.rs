//! Rule-based health assistant chat
//!
//! Keyword routing over the user's question, answered from the stored
//! profile and wellness tier. History is bounded so long sessions stay
//! cheap.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::level::WellnessLevel;
use crate::profile::HealthProfile;

/// Maximum chat turns kept in history
const MAX_HISTORY: usize = 200;

/// Who said a chat line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    User,
    Assistant,
}

/// One line of the conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub speaker: Speaker,
    pub text: String,
    pub at: DateTime<Utc>,
}

/// Topics the rule-based router recognizes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Sleep,
    Stress,
    Weight,
    Diet,
    Exercise,
    General,
}

/// Route a free-text question to a topic
pub fn route(question: &str) -> Topic {
    let q = question.to_lowercase();
    if q.contains("sleep") {
        Topic::Sleep
    } else if q.contains("stress") {
        Topic::Stress
    } else if q.contains("bmi") || q.contains("weight") {
        Topic::Weight
    } else if q.contains("diet") {
        Topic::Diet
    } else if q.contains("exercise") || q.contains("activity") {
        Topic::Exercise
    } else {
        Topic::General
    }
}

/// Chat session holding the assessed profile and bounded history
pub struct ChatSession {
    profile: Option<(HealthProfile, WellnessLevel)>,
    history: VecDeque<ChatTurn>,
}

impl ChatSession {
    pub fn new() -> Self {
        ChatSession {
            profile: None,
            history: VecDeque::new(),
        }
    }

    /// Attach an assessed profile so answers become personal
    pub fn set_assessment(&mut self, profile: HealthProfile, level: WellnessLevel) {
        self.profile = Some((profile, level));
    }

    pub fn assessment(&self) -> Option<&(HealthProfile, WellnessLevel)> {
        self.profile.as_ref()
    }

    pub fn history(&self) -> impl Iterator<Item = &ChatTurn> {
        self.history.iter()
    }

    /// Answer a question and record both turns
    pub fn ask(&mut self, question: &str) -> String {
        let response = self.respond(question);
        self.record_exchange(question, &response);
        response
    }

    /// Record an exchange answered elsewhere (generative backend)
    pub fn record_exchange(&mut self, question: &str, answer: &str) {
        self.push(Speaker::User, question.to_string());
        self.push(Speaker::Assistant, answer.to_string());
    }

    /// Rule-based answer without recording, for fallback paths
    pub fn preview_answer(&self, question: &str) -> String {
        self.respond(question)
    }

    fn push(&mut self, speaker: Speaker, text: String) {
        if self.history.len() >= MAX_HISTORY {
            self.history.pop_front();
        }
        self.history.push_back(ChatTurn {
            speaker,
            text,
            at: Utc::now(),
        });
    }

    fn respond(&self, question: &str) -> String {
        let Some((profile, level)) = &self.profile else {
            return "Hi there! Run an assessment first so I can give you personalized health advice!"
                .to_string();
        };

        let name = profile.display_name();
        match route(question) {
            Topic::Sleep => format!(
                "Hi {}! With {:.1} hours of sleep, aim for 7-8 hours nightly. Try a consistent bedtime routine.",
                name, profile.sleep_hours
            ),
            Topic::Stress => format!(
                "Hi {}! For your {} stress, consider 10 minutes of meditation or deep breathing daily.",
                name,
                profile.stress_level.dataset_value()
            ),
            Topic::Weight => {
                let coaching = if profile.bmi < 25.0 {
                    "Maintain it with regular exercise!"
                } else {
                    "Try 20-30 minutes of daily walking to manage it."
                };
                format!("Hi {}! Your BMI is {:.1}. {}", name, profile.bmi, coaching)
            }
            Topic::Diet => {
                let coaching = if profile.diet_type == crate::profile::DietType::Balanced {
                    "keep it balanced!"
                } else {
                    "ensure you get enough nutrients!"
                };
                format!(
                    "Hi {}! Your {} diet is great. Just {}",
                    name,
                    profile.diet_type.dataset_value(),
                    coaching
                )
            }
            Topic::Exercise => {
                let coaching = if profile.physical_activity_hours >= 5.0 {
                    "awesome, keep it up!"
                } else {
                    "aim for 5+ hours!"
                };
                format!(
                    "Hi {}! You're doing {:.1} hours/week. That's {}",
                    name, profile.physical_activity_hours, coaching
                )
            }
            Topic::General => format!(
                "Hi {}! Based on your profile ({}), focus on maintaining your {} diet and {:.1} hours of exercise!",
                name,
                level,
                profile.diet_type.dataset_value(),
                profile.physical_activity_hours
            ),
        }
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}
