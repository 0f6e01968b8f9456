use proptest::prelude::*;
use recall_core::memory::{Confidence, MemoryType};
use recall_core::models::truthy;

proptest! {
    #[test]
    fn confidence_always_in_unit_interval(raw in proptest::num::f64::ANY) {
        let c = Confidence::new(raw).value();
        prop_assert!((0.0..=1.0).contains(&c));
    }

    #[test]
    fn adjust_clamps(start in 0.0f64..=1.0, delta in -5.0f64..5.0) {
        let c = Confidence::new(start).adjust(delta).value();
        prop_assert!((0.0..=1.0).contains(&c));
        prop_assert!((c - (start + delta).clamp(0.0, 1.0)).abs() < 1e-12);
    }

    #[test]
    fn memory_type_name_round_trips(name in "[a-z_]{1,16}") {
        let parsed = MemoryType::parse(&name);
        prop_assert_eq!(parsed.name(), name.as_str());
    }

    #[test]
    fn nonempty_strings_are_truthy(s in ".{1,32}") {
        prop_assert!(truthy(&serde_json::Value::String(s)));
    }
}
