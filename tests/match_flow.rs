use dohyo::MatchSettings;
use dohyo::consts::{DOHYO_RADIUS, SIM_DT, WRESTLER_RADIUS};
use dohyo::sim::{
    BotStrategy, ControllerState, ControllerVariant, MatchPhase, MatchState, Side, TickInput,
    run_match, tick,
};
use glam::Vec2;

fn settings(strategy: BotStrategy) -> MatchSettings {
    MatchSettings {
        strategy,
        ..Default::default()
    }
}

#[test]
fn test_chaser_beats_motionless_opponent() {
    let summary = run_match(&settings(BotStrategy::Chaser), 42, |_| Vec2::ZERO);
    assert_eq!(
        summary.winner,
        Some(Side::West),
        "Chaser should push a motionless opponent out. Got {:?} after {} ticks, east at {:?}",
        summary.winner,
        summary.ticks,
        summary.east_position,
    );
    // East never moved on its own, so it was pushed all the way out
    assert!(summary.east_position.length() > DOHYO_RADIUS + WRESTLER_RADIUS);
    assert!(summary.west_position.length() < DOHYO_RADIUS);
}

#[test]
fn test_controller_beats_motionless_opponent() {
    let mut state =
        MatchState::new(42).with_strategy(BotStrategy::Controller, ControllerVariant::ThreeState);
    let idle = TickInput::default();

    let mut states = vec![state.bot.state().controller.state];
    while !state.is_over() && state.time_ticks < 3600 {
        tick(&mut state, &idle, SIM_DT);
        let current = state.bot.state().controller.state;
        if states.last() != Some(&current) {
            states.push(current);
        }
    }

    assert_eq!(
        state.winner,
        Some(Side::West),
        "Controller should push a motionless opponent out. Got {:?} after {} ticks, states {:?}",
        state.winner,
        state.time_ticks,
        states,
    );
    assert_eq!(
        &states[..3],
        &[
            ControllerState::CenterSeeking,
            ControllerState::Attacking,
            ControllerState::Returning,
        ]
    );
}

#[test]
fn test_same_seed_same_bout() {
    let settings = settings(BotStrategy::Circler);
    // East wanders in a slow square so the bout is not trivial
    let script = |state: &MatchState| match (state.time_ticks / 90) % 4 {
        0 => Vec2::new(0.0, -1.0),
        1 => Vec2::new(-1.0, 0.0),
        2 => Vec2::new(0.0, 1.0),
        _ => Vec2::new(1.0, 0.0),
    };

    let a = run_match(&settings, 2024, script);
    let b = run_match(&settings, 2024, script);
    assert_eq!(a, b);
}

#[test]
fn test_walking_out_loses() {
    // East walks straight off the dohyo with the bot idle
    let settings = MatchSettings {
        bot_controls_west: false,
        ..Default::default()
    };
    let summary = run_match(&settings, 1, |_| Vec2::new(1.0, 0.0));
    assert_eq!(summary.winner, Some(Side::West));
    assert!(summary.east_position.x > DOHYO_RADIUS + WRESTLER_RADIUS);
}

#[test]
fn test_bout_reset_cycle() {
    let mut state =
        MatchState::new(77).with_strategy(BotStrategy::Chaser, ControllerVariant::ThreeState);
    let idle = TickInput::default();

    let mut ticks = 0;
    while !state.is_over() && ticks < 3600 {
        tick(&mut state, &idle, SIM_DT);
        ticks += 1;
    }
    assert_eq!(state.phase, MatchPhase::GameOver);
    assert_eq!(state.winner, Some(Side::West));

    let restart = TickInput {
        restart: true,
        ..Default::default()
    };
    tick(&mut state, &restart, SIM_DT);
    assert_eq!(state.phase, MatchPhase::Playing);
    assert_eq!(state.winner, None);
    assert_eq!(state.time_ticks, 1);
    assert_eq!(state.bot.strategy(), BotStrategy::Chaser);
}
