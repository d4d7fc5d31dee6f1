//! End-to-end tests for the session state machine.
//!
//! These tests drive a `SessionController` through complete user workflows
//! on a paused tokio clock:
//! - A full cycle of focus rounds ending in a long break
//! - Manual overrides in the middle of a cycle
//! - Settings changes while the countdown runs
//! - Invariants that hold after any sequence of intents

use std::sync::Arc;

use tokio::time::{advance, Duration};

use focusflow::session::{ClockEvent, CompletionEffects, RecordingRenderer, SessionController};
use focusflow::sound::{MockSoundPlayer, SoundSource};
use focusflow::{MockNotifier, Mode, SettingKey, Settings};

// ============================================================================
// Test Helpers
// ============================================================================

struct Session {
    controller: SessionController,
    renderer: RecordingRenderer,
    player: Arc<MockSoundPlayer>,
    notifier: Arc<MockNotifier>,
}

/// Creates a controller wired to mocks.
fn session(settings: Settings) -> Session {
    let renderer = RecordingRenderer::new();
    let player = Arc::new(MockSoundPlayer::new());
    let notifier = Arc::new(MockNotifier::new());
    let effects = CompletionEffects::none()
        .with_sound(Arc::clone(&player), SoundSource::Chime)
        .with_notifier(Arc::clone(&notifier));
    Session {
        controller: SessionController::new(settings, effects, renderer.clone()),
        renderer,
        player,
        notifier,
    }
}

/// Starts the countdown and lets the active interval run out.
async fn run_out(controller: &mut SessionController) {
    controller.start();
    let remaining = controller.state().remaining_seconds;
    advance(Duration::from_secs_f64(remaining)).await;
    assert_eq!(controller.tick(), ClockEvent::Expired);
}

// ============================================================================
// Cycle Tests
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_full_cycle_with_default_rounds() {
    let mut s = session(Settings::default());
    let mut seen = Vec::new();

    for _ in 0..8 {
        let state = s.controller.state();
        seen.push((state.mode, state.current_round));
        run_out(&mut s.controller).await;
    }

    assert_eq!(
        seen,
        vec![
            (Mode::Focus, 1),
            (Mode::ShortBreak, 2),
            (Mode::Focus, 2),
            (Mode::ShortBreak, 3),
            (Mode::Focus, 3),
            (Mode::ShortBreak, 4),
            (Mode::Focus, 4),
            (Mode::LongBreak, 1),
        ]
    );

    let state = s.controller.state();
    assert_eq!(state.mode, Mode::Focus);
    assert_eq!(state.current_round, 1);
    assert_eq!(s.player.play_count(), 8);
    assert_eq!(s.notifier.sent_count(), 8);
}

#[tokio::test(start_paused = true)]
async fn test_single_round_cycle_always_takes_long_break() {
    let mut s = session(Settings::default().with_rounds(1));

    run_out(&mut s.controller).await;
    assert_eq!(s.controller.mode(), Mode::LongBreak);
    run_out(&mut s.controller).await;
    assert_eq!(s.controller.mode(), Mode::Focus);
    run_out(&mut s.controller).await;
    assert_eq!(s.controller.mode(), Mode::LongBreak);
}

#[tokio::test(start_paused = true)]
async fn test_long_break_duration_is_loaded() {
    let mut s = session(Settings::default().with_rounds(1).with_long_break_minutes(20));
    run_out(&mut s.controller).await;
    assert_eq!(s.controller.state().remaining_seconds, 1200.0);
}

#[tokio::test(start_paused = true)]
async fn test_completion_messages_follow_the_cycle() {
    let mut s = session(Settings::default().with_rounds(1));
    run_out(&mut s.controller).await;
    run_out(&mut s.controller).await;

    let sent = s.notifier.get_sent();
    assert_eq!(sent[0].title, "Focus session complete");
    assert!(sent[0].body.contains("Restore"));
    assert_eq!(sent[1].title, "Long break complete");
}

// ============================================================================
// Timing Tests
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_late_ticks_do_not_drift() {
    let mut s = session(Settings::default());
    s.controller.start();

    // One tick after a long stall
    advance(Duration::from_secs(600)).await;
    s.controller.tick();
    assert_eq!(s.controller.state().remaining_seconds, 900.0);

    advance(Duration::from_millis(250)).await;
    s.controller.tick();
    assert_eq!(s.controller.state().remaining_seconds, 899.75);
}

#[tokio::test(start_paused = true)]
async fn test_display_never_increases_while_running() {
    let mut s = session(Settings::default().with_focus_minutes(1));
    s.controller.start();
    for _ in 0..300 {
        advance(Duration::from_millis(250)).await;
        s.controller.tick();
    }

    let shown: Vec<(Mode, u32)> = s
        .renderer
        .frames()
        .iter()
        .map(|f| (f.mode, f.display_seconds()))
        .collect();
    for pair in shown.windows(2) {
        if pair[0].0 == pair[1].0 {
            assert!(pair[1].1 <= pair[0].1);
        }
    }
    assert_eq!(s.player.play_count(), 1);
}

// ============================================================================
// Override Tests
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_manual_long_break_restarts_rounds() {
    let mut s = session(Settings::default());
    run_out(&mut s.controller).await;
    run_out(&mut s.controller).await;
    assert_eq!(s.controller.state().current_round, 2);

    s.controller.select_mode(Mode::LongBreak);
    run_out(&mut s.controller).await;

    let state = s.controller.state();
    assert_eq!(state.mode, Mode::Focus);
    assert_eq!(state.current_round, 1);
}

#[tokio::test(start_paused = true)]
async fn test_lowering_rounds_mid_cycle() {
    let mut s = session(Settings::default());
    for _ in 0..6 {
        run_out(&mut s.controller).await;
    }
    assert_eq!(s.controller.state().current_round, 4);

    s.controller.update_setting(SettingKey::RoundsPerLongBreak, 2);
    assert_eq!(s.controller.state().current_round, 2);
    assert_eq!(s.controller.next_mode(), Mode::LongBreak);
}

#[tokio::test(start_paused = true)]
async fn test_pause_resume_across_expiry_boundary() {
    let mut s = session(Settings::default().with_focus_minutes(1));
    s.controller.start();
    advance(Duration::from_secs(59)).await;
    s.controller.pause();

    advance(Duration::from_secs(3600)).await;
    assert_eq!(s.controller.tick(), ClockEvent::Idle);
    assert_eq!(s.controller.state().remaining_seconds, 1.0);

    s.controller.start();
    advance(Duration::from_secs(1)).await;
    assert_eq!(s.controller.tick(), ClockEvent::Expired);
    assert_eq!(s.controller.mode(), Mode::ShortBreak);
}

// ============================================================================
// Invariant Tests
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_invariants_hold_after_mixed_intents() {
    let mut s = session(Settings::default().with_rounds(3).with_focus_minutes(1));

    for step in 0u64..400 {
        match step % 11 {
            0 | 5 => {
                s.controller.start();
            }
            3 => {
                s.controller.pause();
            }
            7 if step % 3 == 0 => {
                s.controller.reset();
            }
            8 if step % 5 == 0 => {
                s.controller.select_mode(Mode::ALL[(step % 3) as usize]);
            }
            9 if step % 7 == 0 => {
                s.controller
                    .update_setting(SettingKey::RoundsPerLongBreak, (step % 6) as i64 - 1);
            }
            _ => {}
        }
        advance(Duration::from_millis(700 + (step % 13) * 100)).await;
        s.controller.tick();

        let state = s.controller.state();
        let settings = s.controller.settings();
        assert!(state.current_round >= 1);
        assert!(state.current_round <= settings.rounds_per_long_break());
        assert!(state.remaining_seconds >= 0.0);
        assert!(state.remaining_seconds <= f64::from(settings.duration_of(state.mode)));
    }
}
