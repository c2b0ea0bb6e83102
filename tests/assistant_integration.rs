//! End-to-end tests for the wellness assistant
//!
//! Exercises the full flow (dataset -> classifier -> advice -> chat)
//! without requiring Ollama running.

use healthpath::advice::{AdviceBackend, AdviceSource, FallbackAdviser, OllamaAdviser, RuleBook};
use healthpath::chat::ChatSession;
use healthpath::cluster::WellnessModel;
use healthpath::dataset::{synthetic, HealthDataset, HealthRecord};
use healthpath::level::WellnessLevel;
use healthpath::ollama::OllamaClient;
use healthpath::profile::{HealthProfile, StressLevel};

fn record(bmi: f64, sleep: f64, mental: f64, activity: f64, alcohol: f64, stress: &str) -> HealthRecord {
    HealthRecord {
        age: 35.0,
        bmi,
        physical_activity_hours: activity,
        chronic_condition: "None".to_string(),
        mental_health_score: mental,
        sleep_hours: sleep,
        diet_type: "Balanced".to_string(),
        smoking_habit: "Non-Smoker".to_string(),
        alcohol_per_week: alcohol,
        menstrual_regularity: "Regular".to_string(),
        stress_level: stress.to_string(),
        tech_engagement: "Medium".to_string(),
    }
}

/// Four clearly separated habit groups, eight rows each
fn fixture_dataset() -> HealthDataset {
    let mut records = Vec::new();
    for i in 0..8 {
        let jitter = i as f64 * 0.05;
        records.push(record(21.0 + jitter, 8.0 - jitter, 9.0, 6.0, 0.5, "Low"));
        records.push(record(26.5 + jitter, 6.5 - jitter, 6.5, 3.5, 2.0, "Medium"));
        records.push(record(31.5 + jitter, 5.5 - jitter, 4.0, 1.5, 5.0, "Medium"));
        records.push(record(38.0 + jitter, 4.0 - jitter, 1.5, 0.5, 9.0, "High"));
    }
    HealthDataset::from_records(records)
}

fn healthy_profile() -> HealthProfile {
    HealthProfile {
        bmi: 22.0,
        sleep_hours: 7.0,
        mental_health_score: 9.0,
        physical_activity_hours: 6.0,
        alcohol_per_week: 0.5,
        stress_level: StressLevel::Low,
        ..HealthProfile::default()
    }
}

#[test]
fn example_scenario_healthy_profile_gets_level_zero_advice() {
    // BMI 22, 7 hours sleep, low stress -> level 0 with non-empty advice
    let model = WellnessModel::fit(&fixture_dataset()).unwrap();
    let level = model.classify(&healthy_profile()).unwrap();
    assert_eq!(level, WellnessLevel::Thriving);

    let rules = RuleBook::new();
    assert!(!rules.insight(level).is_empty());
    assert!(!rules.tips(level, &healthy_profile()).is_empty());
}

#[test]
fn classifier_is_deterministic_across_calls() {
    let model = WellnessModel::fit(&fixture_dataset()).unwrap();
    let profile = healthy_profile();
    let first = model.classify(&profile).unwrap();
    for _ in 0..3 {
        assert_eq!(model.classify(&profile).unwrap(), first);
    }
}

#[test]
fn classifier_stays_in_range_on_synthetic_data() {
    let records = synthetic::generate(60, synthetic::DEFAULT_SEED);
    let dataset = HealthDataset::from_records(records);
    let model = WellnessModel::fit(&dataset).unwrap();

    let profiles = [
        healthy_profile(),
        HealthProfile {
            bmi: 36.0,
            sleep_hours: 4.5,
            mental_health_score: 2.0,
            stress_level: StressLevel::High,
            ..HealthProfile::default()
        },
        HealthProfile::default(),
    ];
    for profile in profiles {
        let level = model.classify(&profile).unwrap();
        assert!(level.index() <= 3);
    }
}

#[tokio::test]
async fn advice_falls_back_to_rules_when_ollama_unreachable() {
    // Port 9 (discard) is essentially never listening locally
    let client = OllamaClient::with_config("http://127.0.0.1:9", "llama3.2:3b").unwrap();
    let adviser = FallbackAdviser::new(OllamaAdviser::new(client));

    let advice = adviser
        .advise(WellnessLevel::Strained, &healthy_profile())
        .await
        .unwrap();
    assert_eq!(advice.backend, AdviceBackend::Rules);
    assert!(!advice.to_text().is_empty());
}

#[test]
fn chat_answers_from_assessed_profile() {
    let model = WellnessModel::fit(&fixture_dataset()).unwrap();
    let profile = HealthProfile {
        name: Some("Avery".to_string()),
        ..healthy_profile()
    };
    let level = model.classify(&profile).unwrap();

    let mut session = ChatSession::new();
    session.set_assessment(profile, level);

    let reply = session.ask("how is my sleep?");
    assert!(reply.contains("Avery"));
    assert!(reply.contains("7.0"));

    let reply = session.ask("anything else?");
    assert!(reply.contains("Group 0"));
}

#[test]
fn generated_dataset_supports_full_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("health_data_synthetic.csv");
    synthetic::write_csv(&path, 48, 7).unwrap();

    let dataset = HealthDataset::load(&path).unwrap();
    let model = WellnessModel::fit(&dataset).unwrap();
    let level = model.classify(&HealthProfile::default()).unwrap();
    assert!(level.index() <= 3);
}
