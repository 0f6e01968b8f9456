use proptest::prelude::*;
use recall_core::memory::Confidence;
use recall_core::models::{Indicator, IndicatorSet};
use recall_signals::{delta, weighted};

fn indicator_set() -> impl Strategy<Value = IndicatorSet> {
    proptest::collection::vec(proptest::option::of(any::<bool>()), 5).prop_map(|values| {
        let mut set = IndicatorSet::new();
        for (indicator, value) in Indicator::ALL.into_iter().zip(values) {
            set.set(indicator, value);
        }
        set
    })
}

proptest! {
    #[test]
    fn score_is_unit_bounded(set in indicator_set()) {
        let s = weighted::score(&set);
        prop_assert!((0.0..=1.0).contains(&s));
    }

    #[test]
    fn updated_confidence_is_unit_bounded(start in 0.0f64..=1.0, set in indicator_set()) {
        let c = delta::apply(Confidence::new(start), &set).value();
        prop_assert!((0.0..=1.0).contains(&c));
    }

    #[test]
    fn all_success_scores_one(mask in proptest::collection::vec(any::<bool>(), 5)) {
        let mut set = IndicatorSet::new();
        for (indicator, present) in Indicator::ALL.into_iter().zip(mask) {
            if present {
                set.set(indicator, Some(true));
            }
        }
        let expected = if set.is_empty() { 0.5 } else { 1.0 };
        prop_assert_eq!(weighted::score(&set), expected);
    }
}
