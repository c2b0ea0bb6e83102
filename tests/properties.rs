//! Property-based tests for the classifier and rule book

use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use std::sync::OnceLock;

use healthpath::advice::RuleBook;
use healthpath::cluster::WellnessModel;
use healthpath::dataset::{synthetic, HealthDataset};
use healthpath::level::WellnessLevel;
use healthpath::profile::{
    ChronicCondition, DietType, HealthProfile, StressLevel,
};

fn model() -> &'static WellnessModel {
    static MODEL: OnceLock<WellnessModel> = OnceLock::new();
    MODEL.get_or_init(|| {
        let records = synthetic::generate(40, synthetic::DEFAULT_SEED);
        WellnessModel::fit(&HealthDataset::from_records(records)).unwrap()
    })
}

fn in_range(g: &mut Gen, lo: f64, hi: f64) -> f64 {
    let t = u32::arbitrary(g) as f64 / u32::MAX as f64;
    lo + t * (hi - lo)
}

#[derive(Debug, Clone)]
struct ValidProfile(HealthProfile);

impl Arbitrary for ValidProfile {
    fn arbitrary(g: &mut Gen) -> Self {
        let stress = match u8::arbitrary(g) % 3 {
            0 => StressLevel::Low,
            1 => StressLevel::Medium,
            _ => StressLevel::High,
        };
        let diet = match u8::arbitrary(g) % 5 {
            0 => DietType::Balanced,
            1 => DietType::Vegan,
            2 => DietType::Vegetarian,
            3 => DietType::HighProtein,
            _ => DietType::FastFood,
        };
        let condition = match u8::arbitrary(g) % 5 {
            0 => ChronicCondition::None,
            1 => ChronicCondition::Diabetes,
            2 => ChronicCondition::HeartDisease,
            3 => ChronicCondition::Hypertension,
            _ => ChronicCondition::Other,
        };

        ValidProfile(HealthProfile {
            name: None,
            age: in_range(g, 18.0, 90.0),
            bmi: in_range(g, 15.0, 55.0),
            physical_activity_hours: in_range(g, 0.0, 20.0),
            mental_health_score: in_range(g, 1.0, 10.0),
            sleep_hours: in_range(g, 0.0, 14.0),
            alcohol_per_week: in_range(g, 0.0, 20.0),
            chronic_condition: condition,
            diet_type: diet,
            stress_level: stress,
            ..HealthProfile::default()
        })
    }
}

#[quickcheck]
fn every_valid_profile_classifies_into_a_tier(profile: ValidProfile) -> bool {
    let level = model().classify(&profile.0).unwrap();
    level.index() <= 3
}

#[quickcheck]
fn classification_is_stable_for_identical_input(profile: ValidProfile) -> bool {
    let first = model().classify(&profile.0).unwrap();
    let second = model().classify(&profile.0).unwrap();
    first == second
}

#[quickcheck]
fn rule_book_is_total_and_non_empty(profile: ValidProfile) -> bool {
    let rules = RuleBook::new();
    WellnessLevel::ALL.iter().all(|&level| {
        !rules.insight(level).is_empty()
            && rules
                .tips(level, &profile.0)
                .iter()
                .all(|tip| !tip.is_empty())
            && !rules.tips(level, &profile.0).is_empty()
    })
}
