use std::collections::BTreeMap;

use proptest::prelude::*;
use recall_evaluation::{compare_variants, EffectivenessAggregator, RecommendationKind, VariantScores};

proptest! {
    #[test]
    fn suggestion_mean_matches_kind(scores in proptest::collection::vec(0.0f64..=1.0, 1..20)) {
        let mut samples = BTreeMap::new();
        samples.insert("memory_search_x".to_string(), scores.clone());
        let mean = scores.iter().sum::<f64>() / scores.len() as f64;
        let out = EffectivenessAggregator::new().aggregate(&samples);
        match out.first() {
            Some(s) if s.kind == RecommendationKind::Revise => prop_assert!(mean < 0.6),
            Some(_) => prop_assert!(mean > 0.8),
            None => prop_assert!((0.6..=0.8).contains(&mean)),
        }
    }

    #[test]
    fn winner_has_maximal_mean(
        variants in proptest::collection::vec(proptest::collection::vec(0.0f64..=1.0, 0..8), 2..6)
    ) {
        let input: Vec<VariantScores> = variants
            .into_iter()
            .enumerate()
            .map(|(i, scores)| VariantScores::new(format!("v{i}"), scores))
            .collect();
        let report = compare_variants(&input);
        let winner = report.winner.clone().unwrap();
        let best = report.variants.iter().find(|v| v.variant == winner).unwrap();
        for v in &report.variants {
            prop_assert!(best.avg_score >= v.avg_score);
            prop_assert!(v.min_score <= v.max_score);
        }
    }
}
