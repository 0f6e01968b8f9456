//! Supersession scaling, kept apart from the base curve so the curve stays
//! inspectable. Composition is fixed: floor clamp first, multiplier second,
//! so a superseded memory can fall below the floor (0.1 × 0.5 = 0.05).

/// Default multiplier for superseded memories.
pub use recall_core::config::defaults::DEFAULT_SUPERSESSION_MULTIPLIER as DEFAULT_MULTIPLIER;

/// Scale an already-floored weight if the memory was superseded.
pub fn apply(base_weight: f64, superseded: bool, multiplier: f64) -> f64 {
    if superseded {
        base_weight * multiplier
    } else {
        base_weight
    }
}
