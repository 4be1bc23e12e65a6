use crate::ui::app::App;
use crate::ui::sequencer::Screen;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') || matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q')) {
        app.request_quit();
        return;
    }

    match app.screen() {
        Screen::Selection => handle_selection_key(app, key),
        Screen::Detail => match key.code {
            KeyCode::Char('b') | KeyCode::Backspace | KeyCode::Esc => {
                app.back();
            }
            KeyCode::Char('t') => {
                app.transform_back();
            }
            KeyCode::Char('l') => {
                app.learn_more();
            }
            _ => {}
        },
        Screen::Special => {
            if matches!(
                key.code,
                KeyCode::Char('b') | KeyCode::Backspace | KeyCode::Esc
            ) {
                app.back();
            }
        }
    }
}

fn handle_selection_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.scroll_step(-1),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_step(1),
        KeyCode::PageUp => app.scroll_page(-1),
        KeyCode::PageDown => app.scroll_page(1),
        KeyCode::Home => app.scroll_to(0.0),
        KeyCode::End => app.scroll_to(1.0),
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.select_highlighted();
        }
        KeyCode::Char('x') | KeyCode::Char('X') => {
            app.request_special();
        }
        KeyCode::Char(ch) => {
            // Digits act as card clicks; out-of-range slots surface a notice.
            if let Some(slot) = ch.to_digit(10).filter(|slot| *slot > 0) {
                let _ = app.select(slot as usize - 1);
            }
        }
        _ => {}
    }
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::ScrollDown => app.scroll_step(1),
        MouseEventKind::ScrollUp => app.scroll_step(-1),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
