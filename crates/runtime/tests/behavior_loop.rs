mod common;

use std::sync::Arc;
use std::time::Duration;

use bot_api::{BotFramework, FrameworkError, PathInterruption, SimCommand, SimulatedBot};
use common::*;
use ctf_runtime::{BehaviorLoop, BotConfig, ExitReason, LoopGeneration, MatchState, MoveMode};
use tokio::time::Instant;

fn behavior_loop(bot: &Arc<SimulatedBot>, match_state: &MatchState) -> BehaviorLoop {
    let framework: Arc<dyn BotFramework> = bot.clone();
    BehaviorLoop::new(framework, Arc::new(BotConfig::default()), match_state.clone())
}

fn count(bot: &SimulatedBot, pred: impl Fn(&SimCommand) -> bool) -> usize {
    bot.commands().iter().filter(|c| pred(c)).count()
}

#[tokio::test(start_paused = true)]
async fn stale_token_exits_before_first_iteration() {
    let bot = sim(arena_world());
    let match_state = MatchState::new();
    let generation = LoopGeneration::new();
    let token = generation.token();
    generation.advance();

    let exit = behavior_loop(&bot, &match_state).run(token).await;
    assert_eq!(exit.reason, ExitReason::Cancelled);
    assert_eq!(exit.iterations, 0);
    assert_eq!(exit.generation, 0);
    assert!(bot.commands().is_empty());
}

#[tokio::test(start_paused = true)]
async fn ended_match_stops_the_loop() {
    let bot = sim(arena_world());
    let match_state = MatchState::new();
    match_state.set_in_progress(false);
    let generation = LoopGeneration::new();

    let exit = behavior_loop(&bot, &match_state)
        .run(generation.token())
        .await;
    assert_eq!(exit.reason, ExitReason::MatchEnded);
    assert_eq!(exit.iterations, 0);
}

#[tokio::test(start_paused = true)]
async fn iterations_are_spaced_one_tick_apart() {
    let bot = sim(arena_world());
    let match_state = MatchState::new();
    let generation = LoopGeneration::new();
    let handle = tokio::spawn(behavior_loop(&bot, &match_state).run(generation.token()));

    tokio::time::sleep(Duration::from_millis(500)).await;
    match_state.set_in_progress(false);
    let exit = handle.await.unwrap();

    assert_eq!(exit.reason, ExitReason::MatchEnded);
    assert!(
        (10..=11).contains(&exit.iterations),
        "ran {} iterations",
        exit.iterations
    );
    // armor every pass, and exactly one action from the chain per pass
    let iterations = exit.iterations as usize;
    assert_eq!(count(&bot, |c| *c == SimCommand::EquipArmor), iterations);
    assert_eq!(count(&bot, SimCommand::is_world_action), iterations);
}

#[tokio::test(start_paused = true)]
async fn unexpected_error_backs_off_but_cancels_promptly() {
    let bot = sim(arena_world());
    bot.fail_next(FrameworkError::action("equip armor", "inventory desynced"));
    let match_state = MatchState::new();
    let generation = LoopGeneration::new();
    let handle = tokio::spawn(behavior_loop(&bot, &match_state).run(generation.token()));

    tokio::time::sleep(Duration::from_millis(200)).await;
    let cancelled_at = Instant::now();
    generation.advance();
    let exit = handle.await.unwrap();

    assert_eq!(exit.reason, ExitReason::Cancelled);
    assert_eq!(exit.iterations, 1);
    assert!(Instant::now() - cancelled_at < Duration::from_millis(50));
    assert_eq!(bot.commands(), vec![SimCommand::EquipArmor]);
}

#[tokio::test(start_paused = true)]
async fn backoff_delays_the_next_iteration() {
    let bot = sim(arena_world());
    bot.fail_next(FrameworkError::NotConnected);
    let match_state = MatchState::new();
    let generation = LoopGeneration::new();
    let handle = tokio::spawn(behavior_loop(&bot, &match_state).run(generation.token()));

    tokio::time::sleep(Duration::from_millis(1_120)).await;
    match_state.set_in_progress(false);
    let exit = handle.await.unwrap();

    // the failed pass at 0ms, then passes resume after the one second pause
    assert!(
        (2..=4).contains(&exit.iterations),
        "ran {} iterations",
        exit.iterations
    );
}

#[tokio::test(start_paused = true)]
async fn path_interruptions_do_not_back_off() {
    let bot = sim(arena_world());
    bot.fail_next(FrameworkError::PathInterrupted(PathInterruption::GoalChanged));
    let match_state = MatchState::new();
    let generation = LoopGeneration::new();
    let handle = tokio::spawn(behavior_loop(&bot, &match_state).run(generation.token()));

    tokio::time::sleep(Duration::from_millis(300)).await;
    match_state.set_in_progress(false);
    let exit = handle.await.unwrap();

    assert!(exit.iterations >= 6, "ran {} iterations", exit.iterations);
}

#[tokio::test(start_paused = true)]
async fn waits_quietly_for_match_info() {
    let mut world = arena_world();
    world.match_info = None;
    let bot = sim(world);
    let match_state = MatchState::new();
    let generation = LoopGeneration::new();
    let handle = tokio::spawn(behavior_loop(&bot, &match_state).run(generation.token()));

    tokio::time::sleep(Duration::from_millis(300)).await;
    generation.advance();
    let exit = handle.await.unwrap();

    assert_eq!(exit.reason, ExitReason::Cancelled);
    assert!(exit.iterations >= 6, "ran {} iterations", exit.iterations);
    assert!(bot.commands().is_empty());
}

#[tokio::test(start_paused = true)]
async fn movement_target_survives_between_passes() {
    let bot = sim(arena_world());
    let match_state = MatchState::new();
    let mut config = BotConfig::default();
    config.movement = MoveMode::Await;
    let framework: Arc<dyn BotFramework> = bot.clone();
    let mut behavior = BehaviorLoop::new(framework, Arc::new(config), match_state.clone());

    let generation = LoopGeneration::new();
    assert_eq!(
        behavior.step(&generation.token()).await.unwrap(),
        Some("idle_position")
    );
    let center = bot.world().arena.flag_spawn;
    assert_eq!(behavior.movement().last_target(), Some(center));
}

#[tokio::test(start_paused = true)]
async fn stale_step_skips_the_strategies() {
    let bot = sim(arena_world());
    let match_state = MatchState::new();
    let generation = LoopGeneration::new();
    let token = generation.token();
    generation.advance();

    let mut behavior = behavior_loop(&bot, &match_state);
    assert_eq!(behavior.step(&token).await.unwrap(), None);
    assert_eq!(bot.commands(), vec![SimCommand::EquipArmor]);
}
