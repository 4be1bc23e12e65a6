mod common;

use common::{app, app_on, ms, tick};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use omnitrix::ui::briefing::BriefingState;
use omnitrix::ui::input::{handle_key, handle_mouse};
use omnitrix::ui::sequencer::{Screen, SequencerError};

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn wheel(kind: MouseEventKind) -> MouseEvent {
    MouseEvent {
        kind,
        column: 0,
        row: 0,
        modifiers: KeyModifiers::NONE,
    }
}

#[test]
fn scrolling_bumps_media_only_when_highlight_changes() {
    let (mut app, _clock) = app();
    assert_eq!(app.media_generation(), 0);

    // 0.05 per step: still inside the leading dead zone.
    handle_key(&mut app, press(KeyCode::Down));
    handle_key(&mut app, press(KeyCode::Down));
    assert_eq!(app.highlighted(), 0);
    assert_eq!(app.media_generation(), 0);

    handle_key(&mut app, press(KeyCode::End));
    assert_eq!(app.highlighted(), 4);
    assert_eq!(app.media_generation(), 1);

    handle_key(&mut app, press(KeyCode::End));
    assert_eq!(app.media_generation(), 1);

    handle_key(&mut app, press(KeyCode::Home));
    assert_eq!(app.highlighted(), 0);
    assert_eq!(app.media_generation(), 2);
}

#[test]
fn mouse_wheel_scrolls_gallery() {
    let (mut app, _clock) = app();
    for _ in 0..10 {
        handle_mouse(&mut app, wheel(MouseEventKind::ScrollDown));
    }
    assert!((app.scroll_progress() - 0.5).abs() < 1e-9);
    assert_eq!(app.highlighted(), 2);

    handle_mouse(&mut app, wheel(MouseEventKind::ScrollUp));
    assert!((app.scroll_progress() - 0.45).abs() < 1e-9);
}

#[test]
fn enter_transforms_into_highlighted_alien() {
    let (mut app, clock) = app();
    handle_key(&mut app, press(KeyCode::End));
    handle_key(&mut app, press(KeyCode::Enter));

    assert_eq!(app.screen(), Screen::Selection);
    assert!(app.overlays().transforming);

    tick(&mut app, &clock, ms(800));
    assert_eq!(app.screen(), Screen::Detail);
    assert_eq!(
        app.selected_alien().map(|alien| alien.id.as_str()),
        Some("humungousaur")
    );
    assert!(app.overlays().materializing);

    tick(&mut app, &clock, ms(1500));
    assert!(!app.overlays().materializing);
}

#[test]
fn digit_keys_pick_cards_directly() {
    let (mut app, clock) = app();
    handle_key(&mut app, press(KeyCode::Char('3')));
    tick(&mut app, &clock, ms(800));
    assert_eq!(app.selection(), Some(2));
    assert_eq!(app.screen(), Screen::Detail);
}

#[test]
fn out_of_range_card_is_rejected_with_notice() {
    let (mut app, _clock) = app();
    assert_eq!(
        app.select(9),
        Err(SequencerError::IndexOutOfBounds { index: 9, len: 5 })
    );
    handle_key(&mut app, press(KeyCode::Char('9')));
    assert!(app.notice().is_some());
    assert!(!app.is_transitioning());
}

#[test]
fn scrolling_is_ignored_off_the_gallery() {
    let (mut app, clock) = app();
    handle_key(&mut app, press(KeyCode::Enter));
    tick(&mut app, &clock, ms(800));
    assert_eq!(app.screen(), Screen::Detail);

    handle_key(&mut app, press(KeyCode::End));
    assert_eq!(app.scroll_progress(), 0.0);
}

#[test]
fn learn_more_shows_wiki_link() {
    let (mut app, clock) = app();
    handle_key(&mut app, press(KeyCode::Char('1')));
    tick(&mut app, &clock, ms(800));

    handle_key(&mut app, press(KeyCode::Char('l')));
    assert_eq!(
        app.notice(),
        Some("Learn more: https://ben10.fandom.com/wiki/Heatblast_(Classic)")
    );

    handle_key(&mut app, press(KeyCode::Char('b')));
    assert_eq!(app.screen(), Screen::Selection);
    assert_eq!(app.notice(), None);
}

#[test]
fn transform_back_returns_to_gallery() {
    let (mut app, clock) = app();
    handle_key(&mut app, press(KeyCode::Enter));
    tick(&mut app, &clock, ms(800));

    handle_key(&mut app, press(KeyCode::Char('t')));
    assert!(app.overlays().transform_back);
    tick(&mut app, &clock, ms(1500));
    assert_eq!(app.screen(), Screen::Selection);
    assert!(!app.overlays().any_active());
}

#[test]
fn alien_x_page_runs_briefing_and_stops_on_back() {
    let (mut app, clock) = app();
    handle_key(&mut app, press(KeyCode::Char('x')));
    assert!(app.overlays().flash);
    assert_eq!(app.briefing(), &BriefingState::Idle);

    tick(&mut app, &clock, ms(600));
    assert_eq!(app.screen(), Screen::Special);
    assert!(app.briefing().is_flashing());

    tick(&mut app, &clock, ms(300));
    tick(&mut app, &clock, ms(200));
    assert_eq!(app.briefing(), &BriefingState::Typing { ticks: 0 });

    handle_key(&mut app, press(KeyCode::Esc));
    assert_eq!(app.screen(), Screen::Selection);
    assert_eq!(app.briefing(), &BriefingState::Idle);

    tick(&mut app, &clock, ms(5000));
    assert_eq!(app.briefing(), &BriefingState::Idle);
}

#[test]
fn navigation_keys_ignored_while_transforming() {
    let (mut app, clock) = app();
    handle_key(&mut app, press(KeyCode::Char('x')));
    handle_key(&mut app, press(KeyCode::Enter));
    handle_key(&mut app, press(KeyCode::Char('2')));

    tick(&mut app, &clock, ms(600));
    assert_eq!(app.screen(), Screen::Special);
    assert_eq!(app.selection(), None);
}

#[test]
fn teardown_stops_every_timer() {
    let (mut app, clock) = app();
    handle_key(&mut app, press(KeyCode::Enter));
    app.teardown();
    assert!(app.is_torn_down());

    tick(&mut app, &clock, ms(10_000));
    assert_eq!(app.screen(), Screen::Selection);
    assert!(app.overlays().transforming);
    assert!(!app.request_special());
}

#[test]
fn dropping_mid_transition_leaves_shared_clock_usable() {
    let (mut app, clock) = app();
    handle_key(&mut app, press(KeyCode::Char('x')));
    tick(&mut app, &clock, ms(600));
    assert!(app.briefing().is_running());
    handle_key(&mut app, press(KeyCode::Esc));
    handle_key(&mut app, press(KeyCode::Enter));
    assert!(app.is_transitioning());
    drop(app);

    clock.advance(ms(10_000));

    // A fresh app on the same clock starts clean and runs its own timers.
    let mut next = app_on(&clock);
    next.on_tick();
    assert_eq!(next.screen(), Screen::Selection);
    assert!(!next.overlays().any_active());

    handle_key(&mut next, press(KeyCode::Enter));
    tick(&mut next, &clock, ms(799));
    assert_eq!(next.screen(), Screen::Selection);
    tick(&mut next, &clock, ms(1));
    assert_eq!(next.screen(), Screen::Detail);
}

#[test]
fn teardown_then_drop_is_harmless() {
    let (mut app, clock) = app();
    handle_key(&mut app, press(KeyCode::Enter));
    app.teardown();
    let frozen = app.overlays();
    tick(&mut app, &clock, ms(10_000));
    assert_eq!(app.overlays(), frozen);
    drop(app);
    clock.advance(ms(10_000));
}

#[test]
fn quit_keys() {
    let (mut app, _clock) = app();
    handle_key(&mut app, press(KeyCode::Char('q')));
    assert!(app.should_quit());

    let (mut app, _clock) = common::app();
    handle_key(
        &mut app,
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
    );
    assert!(app.should_quit());
}
