//! Tests for the game session controller and its collaborators.

use tictactoe_engine::{
    AudioUnavailable, Controller, Cue, CueSink, GameStatus, IllegalMove, NotificationIntent,
    NotificationKind, Outcome, Player, Score, Session,
};
use tokio::sync::mpsc;

/// Records every cue it is asked to play.
#[derive(Debug, Default)]
struct RecordingCues {
    played: Vec<Cue>,
}

impl CueSink for RecordingCues {
    fn play(&mut self, cue: Cue) -> Result<(), AudioUnavailable> {
        self.played.push(cue);
        Ok(())
    }
}

/// Fails like a platform without audio output.
#[derive(Debug, Default)]
struct BrokenCues {
    attempts: usize,
}

impl CueSink for BrokenCues {
    fn play(&mut self, _cue: Cue) -> Result<(), AudioUnavailable> {
        self.attempts += 1;
        Err(AudioUnavailable::new("no output device"))
    }
}

fn controller() -> (
    Controller<RecordingCues>,
    mpsc::UnboundedReceiver<NotificationIntent>,
) {
    let (tx, rx) = mpsc::unbounded_channel();
    (Controller::new(RecordingCues::default(), tx), rx)
}

fn drain(rx: &mut mpsc::UnboundedReceiver<NotificationIntent>) -> Vec<NotificationIntent> {
    std::iter::from_fn(|| rx.try_recv().ok()).collect()
}

fn play_x_top_row<C: CueSink>(controller: &mut Controller<C>) {
    for index in [0, 3, 1, 4, 2] {
        controller.select_cell(index).unwrap();
    }
}

fn play_o_middle_row<C: CueSink>(controller: &mut Controller<C>) {
    for index in [0, 3, 1, 4, 8, 5] {
        controller.select_cell(index).unwrap();
    }
}

fn play_draw<C: CueSink>(controller: &mut Controller<C>) {
    for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
        controller.select_cell(index).unwrap();
    }
}

#[test]
fn test_win_scenario_counts_and_announces() {
    let (mut controller, mut rx) = controller();

    for index in [0, 3, 1, 4] {
        assert_eq!(controller.select_cell(index), Ok(None));
    }
    assert_eq!(controller.score().x(), 0);

    assert_eq!(
        controller.select_cell(2),
        Ok(Some(Outcome::Winner(Player::X)))
    );
    assert_eq!(controller.score(), Score::new(1, 0, 0));
    assert!(matches!(
        controller.session().status(),
        GameStatus::Won { winner: Player::X, .. }
    ));

    let intents = drain(&mut rx);
    assert_eq!(intents.len(), 1);
    match &intents[0] {
        NotificationIntent::Show(note) => {
            assert_eq!(note.text(), "Player X wins!");
            assert_eq!(note.kind(), NotificationKind::Success);
        }
        other => panic!("expected a notification, got {other:?}"),
    }

    let mut expected = vec![Cue::Move; 5];
    expected.push(Cue::Win);
    assert_eq!(controller.cue_sink().played, expected);
}

#[test]
fn test_draw_counts_and_warns() {
    let (mut controller, mut rx) = controller();
    play_draw(&mut controller);

    assert_eq!(controller.session().status(), &GameStatus::Drawn);
    assert_eq!(controller.score(), Score::new(0, 0, 1));

    let intents = drain(&mut rx);
    assert!(matches!(
        intents.as_slice(),
        [NotificationIntent::Show(note)]
            if note.text() == "It's a draw!" && note.kind() == NotificationKind::Warning
    ));
    assert_eq!(controller.cue_sink().played.last(), Some(&Cue::Draw));
    assert_eq!(controller.cue_sink().played.len(), 10);
}

#[test]
fn test_outcome_reported_by_the_final_move_of_each_game() {
    let (mut controller, _rx) = controller();
    let draw = [0, 1, 2, 4, 3, 5, 7, 6, 8];

    for _ in 0..2 {
        let reported: Vec<_> = draw
            .iter()
            .map(|&index| controller.select_cell(index).unwrap())
            .collect();
        assert!(reported[..8].iter().all(Option::is_none));
        assert_eq!(reported[8], Some(Outcome::Draw));
        controller.request_new_game();
    }

    assert_eq!(controller.score(), Score::new(0, 0, 2));
}

#[test]
fn test_moves_after_game_over_change_nothing() {
    let (mut controller, mut rx) = controller();
    play_x_top_row(&mut controller);
    drain(&mut rx);

    let session = controller.session().clone();
    let cues = controller.cue_sink().played.len();

    for index in [5, 2, 99] {
        assert_eq!(controller.select_cell(index), Err(IllegalMove::GameOver));
    }

    assert_eq!(controller.session(), &session);
    assert_eq!(controller.score(), Score::new(1, 0, 0));
    assert_eq!(controller.cue_sink().played.len(), cues);
    assert!(drain(&mut rx).is_empty());
}

#[test]
fn test_illegal_moves_are_silent() {
    let (mut controller, mut rx) = controller();
    controller.select_cell(4).unwrap();

    assert_eq!(
        controller.select_cell(4),
        Err(IllegalMove::Occupied(tictactoe_engine::Position::Center))
    );
    assert_eq!(controller.select_cell(9), Err(IllegalMove::OutOfBounds(9)));
    assert_eq!(controller.session().active_player(), Player::O);
    assert_eq!(controller.cue_sink().played, vec![Cue::Move]);
    assert!(drain(&mut rx).is_empty());
}

#[test]
fn test_score_accumulates_over_games() {
    let (mut controller, _rx) = controller();

    play_x_top_row(&mut controller);
    controller.request_new_game();
    play_o_middle_row(&mut controller);
    controller.request_new_game();
    play_draw(&mut controller);
    controller.request_new_game();
    play_x_top_row(&mut controller);

    assert_eq!(controller.score(), Score::new(2, 1, 1));
}

#[test]
fn test_new_game_keeps_score_and_clears_notification() {
    let (mut controller, mut rx) = controller();
    play_x_top_row(&mut controller);
    drain(&mut rx);

    controller.request_new_game();

    assert_eq!(controller.session(), &Session::new());
    assert_eq!(controller.score(), Score::new(1, 0, 0));
    assert_eq!(drain(&mut rx), vec![NotificationIntent::Clear]);
}

#[test]
fn test_new_game_mid_game_does_not_count() {
    let (mut controller, _rx) = controller();
    controller.select_cell(0).unwrap();
    controller.select_cell(4).unwrap();

    controller.request_new_game();

    assert_eq!(controller.score(), Score::default());
    assert_eq!(controller.session().active_player(), Player::X);
}

#[test]
fn test_score_reset_emits_one_warning() {
    let (mut controller, mut rx) = controller();
    play_x_top_row(&mut controller);
    controller.request_new_game();
    play_draw(&mut controller);
    drain(&mut rx);

    controller.request_score_reset();

    assert_eq!(controller.score(), Score::new(0, 0, 0));
    let intents = drain(&mut rx);
    assert!(matches!(
        intents.as_slice(),
        [NotificationIntent::Show(note)]
            if note.text() == "Score reset!" && note.kind() == NotificationKind::Warning
    ));
}

#[test]
fn test_score_reset_on_zero_score_still_warns() {
    let (mut controller, mut rx) = controller();

    controller.request_score_reset();

    assert_eq!(controller.score(), Score::default());
    assert_eq!(drain(&mut rx).len(), 1);
}

#[test]
fn test_score_reset_leaves_finished_game_uncounted_again() {
    let (mut controller, _rx) = controller();
    play_x_top_row(&mut controller);

    controller.request_score_reset();
    assert_eq!(controller.select_cell(5), Err(IllegalMove::GameOver));

    assert_eq!(controller.score(), Score::default());
}

#[test]
fn test_mute_suppresses_cues_only() {
    let (mut controller, mut rx) = controller();

    assert!(controller.toggle_mute());
    play_x_top_row(&mut controller);

    assert!(controller.cue_sink().played.is_empty());
    assert_eq!(controller.score(), Score::new(1, 0, 0));
    assert_eq!(drain(&mut rx).len(), 1);

    assert!(!controller.toggle_mute());
    controller.request_new_game();
    controller.select_cell(0).unwrap();
    assert_eq!(controller.cue_sink().played, vec![Cue::Move]);
}

#[test]
fn test_audio_failure_never_affects_play() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut controller = Controller::new(BrokenCues::default(), tx);

    play_x_top_row(&mut controller);

    assert_eq!(controller.score(), Score::new(1, 0, 0));
    assert_eq!(controller.cue_sink().attempts, 6);
    assert_eq!(drain(&mut rx).len(), 1);
}

#[test]
fn test_dismiss_sends_clear() {
    let (mut controller, mut rx) = controller();
    controller.dismiss_notification();
    assert_eq!(drain(&mut rx), vec![NotificationIntent::Clear]);
}

#[test]
fn test_dropped_notifier_does_not_break_play() {
    let (mut controller, rx) = controller();
    drop(rx);

    play_x_top_row(&mut controller);
    controller.request_score_reset();

    assert_eq!(controller.score(), Score::default());
}
