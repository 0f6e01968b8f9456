use proptest::prelude::*;
use recall_core::memory::MemoryType;
use recall_decay::{formula, supersession, TemporalDecayModel};

fn arb_type() -> impl Strategy<Value = MemoryType> {
    prop_oneof![
        Just(MemoryType::Solution),
        Just(MemoryType::Pattern),
        Just(MemoryType::Principle),
        Just(MemoryType::Debug),
        "[a-z_]{3,12}".prop_map(|name| MemoryType::parse(&name)),
    ]
}

proptest! {
    #[test]
    fn weight_is_non_increasing_in_age(memory_type in arb_type(), age in 0i64..2000) {
        let model = TemporalDecayModel::new();
        let today = model.weight_for(&memory_type, age);
        let tomorrow = model.weight_for(&memory_type, age + 1);
        prop_assert!(tomorrow <= today, "{} > {} at age {}", tomorrow, today, age);
    }

    #[test]
    fn weight_stays_within_floor_and_one(memory_type in arb_type(), age in -100i64..100_000) {
        let model = TemporalDecayModel::new();
        let w = model.weight_for(&memory_type, age);
        prop_assert!(w >= formula::FLOOR);
        prop_assert!(w <= 1.0);
    }

    #[test]
    fn fresh_memory_has_full_weight(memory_type in arb_type()) {
        let model = TemporalDecayModel::new();
        prop_assert_eq!(model.weight_for(&memory_type, 0), 1.0);
    }

    #[test]
    fn decay_speed_ordering_holds_at_every_age(age in 0i64..1000) {
        let model = TemporalDecayModel::new();
        let debug = model.weight_for(&MemoryType::Debug, age);
        let solution = model.weight_for(&MemoryType::Solution, age);
        let pattern = model.weight_for(&MemoryType::Pattern, age);
        let principle = model.weight_for(&MemoryType::Principle, age);
        prop_assert!(debug <= solution);
        prop_assert!(solution <= pattern);
        prop_assert!(pattern <= principle);
    }

    #[test]
    fn supersession_never_raises_weight(age in 0i64..500, rate in 0.0f64..0.5) {
        let base = formula::weight(age, rate);
        let scaled = supersession::apply(base, true, supersession::DEFAULT_MULTIPLIER);
        prop_assert!(scaled <= base);
        prop_assert!(scaled >= formula::FLOOR * supersession::DEFAULT_MULTIPLIER);
    }
}
