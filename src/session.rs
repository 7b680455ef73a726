use crate::app::{App, Command, Screen};
use crate::models::Overlay;
use crate::ui::layout::{
    calculate_card_rows, calculate_quiz_chunks, contains, control_buttons, hint_done_button,
    overlay_area,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use std::time::Instant;

pub fn handle_quiz_input(app: &mut App, key: KeyEvent, now: Instant) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return None;
    }

    if app.overlay != Overlay::None {
        match key.code {
            KeyCode::Esc => app.close_overlay(),
            KeyCode::Enter | KeyCode::Char(' ') if app.overlay != Overlay::Lightbox => {
                app.close_overlay()
            }
            KeyCode::Char('q') => app.should_quit = true,
            _ => {}
        }
        return None;
    }

    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
            return None;
        }
        KeyCode::Char('a') => {
            app.open_about();
            return None;
        }
        _ => {}
    }

    if app.screen() != Screen::Quiz {
        return None;
    }

    match key.code {
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            app.select_answer(index, now);
            None
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.move_highlight(false);
            None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.move_highlight(true);
            None
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.select_highlighted(now);
            None
        }
        KeyCode::Left | KeyCode::Char('h') => {
            app.previous();
            None
        }
        KeyCode::Right | KeyCode::Char('l') => {
            app.next();
            None
        }
        KeyCode::Char('r') => {
            app.random();
            None
        }
        KeyCode::Char('e') => app.request_hint(),
        KeyCode::Char('i') => {
            app.open_lightbox();
            None
        }
        KeyCode::Char('s') => {
            app.reset_streak();
            None
        }
        _ => None,
    }
}

/// Left clicks. Outside an open popup closes it, as does "[ Done ]" in the hint popup.
/// On the quiz screen answers, controls, the image line and the hint line act like their keys.
pub fn handle_mouse(
    app: &mut App,
    mouse: MouseEvent,
    area: Rect,
    now: Instant,
) -> Option<Command> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }
    let (column, row) = (mouse.column, mouse.row);

    if let Some(popup) = overlay_area(app.overlay, area) {
        let on_done =
            app.overlay == Overlay::AiHint && contains(hint_done_button(popup), column, row);
        if on_done || !contains(popup, column, row) {
            app.close_overlay();
        }
        return None;
    }

    let layout = calculate_quiz_chunks(area);
    if contains(layout.header_area, column, row) {
        app.open_about();
        return None;
    }
    if app.screen() != Screen::Quiz {
        return None;
    }

    if contains(layout.streak_area, column, row) {
        app.reset_streak();
        return None;
    }

    if contains(layout.controls_area, column, row) {
        let [previous, random, next] = control_buttons(layout.controls_area);
        if contains(previous, column, row) {
            app.previous();
        } else if contains(random, column, row) {
            app.random();
        } else if contains(next, column, row) {
            app.next();
        }
        return None;
    }

    let card = calculate_card_rows(layout.card_area, app.current_question()?);
    let hit = |rect: Option<Rect>| rect.is_some_and(|rect| contains(rect, column, row));

    if let Some(index) = card
        .answer_rows
        .iter()
        .position(|answer| contains(*answer, column, row))
    {
        app.select_answer(index, now);
        None
    } else if hit(card.image_row) {
        app.open_lightbox();
        None
    } else if hit(card.hint_row) {
        app.request_hint()
    } else {
        None
    }
}
