//! Patrolling enemy: sweep, reverse on a timer, die to the bolt.
//!
//! Shared by the rank-and-file enemies and the top ship; the differences
//! live in [`crate::profiles`].

use glam::Vec3;
use log::{info, warn};

use invaders_core::behaviour::PatrolEnemy;
use invaders_core::constants::{HIT_RADIUS, HIT_Z_WEIGHT, LOSS_LINE_Y};
use invaders_core::enums::{GamePhase, LossPolicy};
use invaders_core::events::GameEvent;

use crate::profiles::get_profile;
use crate::{ScriptContext, ScriptOutcome};

/// Hit metric between an enemy and the bolt.
///
/// Not a Euclidean norm: the squared z-difference is weighted by
/// [`HIT_Z_WEIGHT`], stretching the hit volume into a squashed ellipsoid.
pub fn hit_metric(enemy: Vec3, bolt: Vec3) -> f32 {
    let d = enemy - bolt;
    (d.x * d.x + d.y * d.y + HIT_Z_WEIGHT * d.z * d.z).sqrt()
}

/// Run one frame of patrol logic.
pub fn update(
    enemy: &mut PatrolEnemy,
    delta_time: f32,
    ctx: &mut ScriptContext<'_>,
) -> ScriptOutcome {
    let profile = get_profile(enemy.kind);
    let mut outcome = ScriptOutcome::Keep;

    // The bolt position is tested whether or not it is in flight.
    if hit_metric(ctx.transform.position, ctx.sim.projectile_position) <= HIT_RADIUS {
        ctx.sim.score += 1;
        ctx.sim.projectile_active = false;
        info!(
            "{:?} enemy destroyed at {:?}, score {}",
            enemy.kind, ctx.transform.position, ctx.sim.score
        );
        ctx.events.push(GameEvent::EnemyDestroyed {
            kind: enemy.kind,
            position: ctx.transform.position,
            score: ctx.sim.score,
        });
        outcome = ScriptOutcome::Remove;
    }

    enemy.timer += delta_time;
    if enemy.timer >= profile.period_secs {
        enemy.moving_left = !enemy.moving_left;
        enemy.timer = 0.0;
    }

    let sweep = if enemy.moving_left {
        -profile.sweep_speed
    } else {
        profile.sweep_speed
    };
    ctx.transform
        .translate(Vec3::new(sweep, -profile.descent_speed, 0.0) * delta_time);

    if ctx.transform.position.y <= LOSS_LINE_Y && !enemy.loss_reported {
        enemy.loss_reported = true;
        ctx.events.push(GameEvent::LossLineCrossed {
            kind: enemy.kind,
            position: ctx.transform.position,
        });
        match profile.loss_policy {
            LossPolicy::SignalGameOver => {
                if ctx.sim.phase != GamePhase::GameOver {
                    ctx.sim.phase = GamePhase::GameOver;
                    info!("game over, final score {}", ctx.sim.score);
                    ctx.events.push(GameEvent::GameOver {
                        score: ctx.sim.score,
                    });
                }
            }
            LossPolicy::LogOnly => {
                warn!("{:?} enemy crossed the loss line: GAME OVER", enemy.kind);
            }
        }
    }

    outcome
}
