mod common;

use common::{ms, sequencer};
use omnitrix::ui::mvi::Reducer;
use omnitrix::ui::sequencer::{
    Screen, SequencerError, SequencerIntent, SequencerReducer, SequencerState,
};

#[test]
fn select_item_reaches_detail_only_after_transform_delay() {
    let (mut seq, clock) = sequencer(5);
    assert_eq!(seq.select_item(3), Ok(true));

    assert_eq!(seq.screen(), Screen::Selection);
    assert!(seq.overlays().transforming);

    clock.advance(ms(400));
    seq.poll();
    assert_eq!(seq.screen(), Screen::Selection);

    clock.advance(ms(400));
    seq.poll();
    assert_eq!(seq.screen(), Screen::Detail);
    assert_eq!(seq.selection(), Some(3));
    assert!(!seq.overlays().transforming);
}

#[test]
fn back_from_detail_is_synchronous_without_overlay() {
    let (mut seq, clock) = sequencer(5);
    seq.select_item(1).unwrap();
    clock.advance(ms(800));
    seq.poll();

    assert!(seq.back());
    assert_eq!(seq.screen(), Screen::Selection);
    assert!(!seq.overlays().transform_back);
    assert!(!seq.overlays().any_active());
    assert!(!seq.is_busy());
}

#[test]
fn transform_back_holds_overlay_for_its_duration() {
    let (mut seq, clock) = sequencer(5);
    seq.select_item(2).unwrap();
    clock.advance(ms(800));
    seq.poll();

    assert!(seq.transform_back());
    assert!(seq.overlays().transform_back);
    assert_eq!(seq.screen(), Screen::Detail);

    clock.advance(ms(1499));
    seq.poll();
    assert_eq!(seq.screen(), Screen::Detail);

    clock.advance(ms(1));
    seq.poll();
    assert_eq!(seq.screen(), Screen::Selection);
    assert!(!seq.overlays().any_active());
    // Selection persists for the gallery checkmark.
    assert_eq!(seq.selection(), Some(2));
}

#[test]
fn request_special_is_single_flight() {
    let (mut seq, clock) = sequencer(5);
    assert!(seq.request_special());
    assert!(seq.overlays().flash);

    clock.advance(ms(100));
    assert!(!seq.request_special());
    assert_eq!(seq.select_item(0), Ok(false));

    clock.advance(ms(500));
    seq.poll();
    assert_eq!(seq.screen(), Screen::Special);
    assert!(!seq.overlays().flash);
    assert_eq!(seq.pending_timers(), 0);

    assert!(seq.back());
    assert_eq!(seq.screen(), Screen::Selection);
}

#[test]
fn special_is_unreachable_from_detail() {
    let (mut seq, clock) = sequencer(5);
    seq.select_item(0).unwrap();
    clock.advance(ms(800));
    seq.poll();
    assert!(!seq.request_special());
    assert_eq!(seq.screen(), Screen::Detail);
}

#[test]
fn out_of_bounds_index_is_rejected() {
    let (mut seq, _clock) = sequencer(3);
    assert_eq!(
        seq.select_item(3),
        Err(SequencerError::IndexOutOfBounds { index: 3, len: 3 })
    );
    assert_eq!(seq.screen(), Screen::Selection);
    assert!(!seq.overlays().any_active());
}

#[test]
fn teardown_mid_transition_freezes_state() {
    let (mut seq, clock) = sequencer(5);
    seq.request_special();
    let snapshot = seq.state().clone();

    seq.teardown();
    for _ in 0..5 {
        clock.advance(ms(1000));
        assert!(!seq.poll());
    }
    assert_eq!(seq.state(), &snapshot);
    assert_eq!(seq.pending_timers(), 0);
}

#[test]
fn exactly_one_screen_through_a_full_tour() {
    let (mut seq, clock) = sequencer(5);
    let mut screens = vec![seq.screen()];

    seq.select_item(4).unwrap();
    clock.advance(ms(800));
    seq.poll();
    screens.push(seq.screen());
    seq.transform_back();
    clock.advance(ms(1500));
    seq.poll();
    screens.push(seq.screen());
    seq.request_special();
    clock.advance(ms(600));
    seq.poll();
    screens.push(seq.screen());
    seq.back();
    screens.push(seq.screen());

    assert_eq!(
        screens,
        vec![
            Screen::Selection,
            Screen::Detail,
            Screen::Selection,
            Screen::Special,
            Screen::Selection,
        ]
    );
}

#[test]
fn reducer_clamps_index_entering_detail() {
    let state = SequencerReducer::reduce(
        SequencerState::new(2),
        SequencerIntent::SelectItem { index: 7 },
    );
    let state = SequencerReducer::reduce(state, SequencerIntent::TransitionElapsed);
    assert_eq!(state.screen, Screen::Detail);
    assert_eq!(state.selection, Some(1));
}
