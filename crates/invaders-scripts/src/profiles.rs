//! Per-kind patrol parameters.
//!
//! Consolidates the constants that distinguish the rank-and-file enemy
//! from the top ship so both run the same patrol state machine.

use invaders_core::enums::{LossPolicy, PatrolKind};

/// Patrol profile for an enemy kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatrolProfile {
    /// Seconds between direction flips.
    pub period_secs: f32,
    /// Horizontal speed (units/s).
    pub sweep_speed: f32,
    /// Downward speed (units/s), applied in both directions.
    pub descent_speed: f32,
    /// Reaction to crossing the loss line.
    pub loss_policy: LossPolicy,
}

/// Get the patrol profile for a given kind.
pub fn get_profile(kind: PatrolKind) -> PatrolProfile {
    use invaders_core::constants::*;

    match kind {
        PatrolKind::Standard => PatrolProfile {
            period_secs: ENEMY_PATROL_PERIOD_SECS,
            sweep_speed: ENEMY_SWEEP_SPEED,
            descent_speed: ENEMY_DESCENT_SPEED,
            loss_policy: LossPolicy::SignalGameOver,
        },
        // The top ship never reports game over; it only logs.
        PatrolKind::Top => PatrolProfile {
            period_secs: TOP_ENEMY_PATROL_PERIOD_SECS,
            sweep_speed: TOP_ENEMY_SWEEP_SPEED,
            descent_speed: 0.0,
            loss_policy: LossPolicy::LogOnly,
        },
    }
}
