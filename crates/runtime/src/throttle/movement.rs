use std::time::Duration;

use bot_api::{BotFramework, GoalNear, Vec3};
use tracing::{debug, info};

use crate::error::Result;

/// How a movement command is issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoveMode {
    /// Set the pathfinding goal and return immediately. The next goal
    /// interrupts this one.
    #[default]
    Background,
    /// Wait for the approach to finish (or time out).
    Await,
}

/// Remembers the last pathfinding target so the loop does not re-plan the
/// same path every iteration.
///
/// Retargeting every pass makes the bot stutter and wastes planner time, so a
/// new command is only issued when there is no remembered target, the bot has
/// stopped moving, or the target moved by more than `reach`.
#[derive(Debug, Clone, Copy)]
pub struct MovementThrottle {
    last_target: Option<Vec3>,
    mode: MoveMode,
    approach_timeout: Duration,
}

impl MovementThrottle {
    pub fn new(mode: MoveMode, approach_timeout: Duration) -> Self {
        Self {
            last_target: None,
            mode,
            approach_timeout,
        }
    }

    pub fn mode(&self) -> MoveMode {
        self.mode
    }

    pub fn last_target(&self) -> Option<Vec3> {
        self.last_target
    }

    /// Forgets the remembered target.
    pub fn reset(&mut self) {
        self.last_target = None;
    }

    /// Whether a command toward `target` should be issued.
    pub fn needs_retarget(&self, target: Vec3, reach: f64, is_moving: bool) -> bool {
        match self.last_target {
            None => true,
            Some(_) if !is_moving => true,
            Some(last) => target.distance_squared(last) > reach * reach,
        }
    }

    /// Moves toward `target`, returning whether a new command was issued.
    pub async fn move_toward(
        &mut self,
        bot: &dyn BotFramework,
        target: Vec3,
        reach: f64,
    ) -> Result<bool> {
        let is_moving = bot.is_moving();
        if !self.needs_retarget(target, reach, is_moving) {
            debug!("[Movement] Not changing movement target because previous ~= new");
            return Ok(false);
        }

        info!(
            "[Movement] Moving toward position: {}, isMoving: {}",
            target, is_moving
        );
        self.last_target = Some(target);
        match self.mode {
            MoveMode::Await => {
                bot.approach(target, reach, self.approach_timeout).await?;
                info!("[Movement] Reached target position: {}", target);
            }
            MoveMode::Background => {
                bot.set_goal(GoalNear {
                    target,
                    range: reach,
                })
                .await?;
                // Completion is never observed in this mode.
                self.last_target = None;
            }
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn throttle_with_target(target: Vec3) -> MovementThrottle {
        let mut throttle = MovementThrottle::new(MoveMode::Await, Duration::from_secs(1));
        throttle.last_target = Some(target);
        throttle
    }

    #[test]
    fn retargets_without_a_remembered_target() {
        let throttle = MovementThrottle::new(MoveMode::Await, Duration::from_secs(1));
        assert!(throttle.needs_retarget(Vec3::ZERO, 1.0, true));
    }

    #[test]
    fn small_perturbation_while_moving_is_ignored() {
        let throttle = throttle_with_target(Vec3::new(10.0, 64.0, 10.0));
        assert!(!throttle.needs_retarget(Vec3::new(10.5, 64.0, 10.5), 1.0, true));
        // exactly on the boundary is still "the same" target
        assert!(!throttle.needs_retarget(Vec3::new(13.0, 64.0, 10.0), 3.0, true));
    }

    #[test]
    fn large_displacement_or_idle_bot_retargets() {
        let throttle = throttle_with_target(Vec3::new(10.0, 64.0, 10.0));
        assert!(throttle.needs_retarget(Vec3::new(12.0, 64.0, 10.0), 1.0, true));
        assert!(throttle.needs_retarget(Vec3::new(10.0, 64.0, 10.0), 1.0, false));
    }

    #[test]
    fn reset_forgets_target() {
        let mut throttle = throttle_with_target(Vec3::ZERO);
        throttle.reset();
        assert_eq!(throttle.last_target(), None);
    }
}
