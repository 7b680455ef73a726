use crate::models::{Overlay, Question};
use crate::utils::wrapped_line_count;
use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    widgets::{Block, Borders},
};

/// Width of the "[ Done ] Enter / Esc" label in the hint popup.
pub const DONE_BUTTON_WIDTH: u16 = 20;

pub struct QuizLayout {
    pub header_area: Rect,
    pub streak_area: Rect,
    pub card_area: Rect,
    pub controls_area: Rect,
    pub footer_area: Rect,
}

pub fn calculate_quiz_chunks(area: Rect) -> QuizLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(area);

    QuizLayout {
        header_area: chunks[0],
        streak_area: chunks[1],
        card_area: chunks[2],
        controls_area: chunks[3],
        footer_area: chunks[4],
    }
}

/// Rows of the question card; answers, the image line and the hint line take clicks.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CardLayout {
    pub question_area: Rect,
    pub image_row: Option<Rect>,
    pub answer_rows: Vec<Rect>,
    pub hint_row: Option<Rect>,
}

/// Lay out `question` inside the bordered card. Rows that do not fit are left out.
pub fn calculate_card_rows(card_area: Rect, question: &Question) -> CardLayout {
    let inner = Block::default().borders(Borders::ALL).inner(card_area);
    let bottom = inner.bottom();
    let mut y = inner.y;

    let mut take = |height: u16| -> Option<Rect> {
        if height == 0 || y >= bottom {
            return None;
        }
        let height = height.min(bottom - y);
        let row = Rect::new(inner.x, y, inner.width, height);
        y = y.saturating_add(height);
        Some(row)
    };

    let question_height = wrapped_line_count(&question.question, inner.width as usize) as u16;
    let question_area = take(question_height.max(1)).unwrap_or_default();
    take(1);

    let image_row = if question.image_id.is_some() {
        let row = take(1);
        take(1);
        row
    } else {
        None
    };

    let answer_rows = question
        .answers
        .iter()
        .map_while(|_| take(1))
        .collect();
    take(1);
    let hint_row = take(1);

    CardLayout {
        question_area,
        image_row,
        answer_rows,
        hint_row,
    }
}

/// Previous, random and next buttons, left to right.
pub fn control_buttons(controls_area: Rect) -> [Rect; 3] {
    let inner = Block::default().borders(Borders::ALL).inner(controls_area);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(inner);
    [chunks[0], chunks[1], chunks[2]]
}

/// The "[ Done ]" label on the bottom row of the hint popup.
pub fn hint_done_button(popup: Rect) -> Rect {
    let inner = Block::default().borders(Borders::ALL).inner(popup);
    let width = DONE_BUTTON_WIDTH.min(inner.width);
    Rect::new(
        inner.right() - width,
        inner.bottom().saturating_sub(1),
        width,
        inner.height.min(1),
    )
}

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Popup rectangle of `overlay`; clicks outside it dismiss the overlay.
pub fn overlay_area(overlay: Overlay, area: Rect) -> Option<Rect> {
    match overlay {
        Overlay::None => None,
        Overlay::Lightbox => Some(centered_rect(90, 90, area)),
        Overlay::AiHint => Some(centered_rect(70, 75, area)),
        Overlay::About => Some(centered_rect(60, 50, area)),
    }
}

pub fn contains(rect: Rect, column: u16, row: u16) -> bool {
    rect.contains(Position::new(column, row))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiz_layout() {
        let area = Rect::new(0, 0, 100, 40);
        let layout = calculate_quiz_chunks(area);

        assert_eq!(layout.header_area.height, 3);
        assert_eq!(layout.streak_area.height, 3);
        assert_eq!(layout.controls_area.height, 3);
        assert_eq!(layout.footer_area.height, 3);
        // 40 - 2 margin - 12 fixed
        assert_eq!(layout.card_area.height, 26);
    }

    #[test]
    fn test_overlay_area_is_inside_frame() {
        let area = Rect::new(0, 0, 100, 40);
        for overlay in [Overlay::Lightbox, Overlay::AiHint, Overlay::About] {
            let popup = overlay_area(overlay, area).unwrap();
            assert!(popup.width > 0 && popup.height > 0);
            assert!(popup.right() <= area.right());
            assert!(popup.bottom() <= area.bottom());
            assert!(!contains(popup, 0, 0));
            assert!(contains(popup, 50, 20));
        }
        assert!(overlay_area(Overlay::None, area).is_none());
    }

    fn question(text: &str, answers: usize, image_id: Option<u32>) -> Question {
        Question {
            id: 1,
            question: text.to_string(),
            answers: (0..answers).map(|i| format!("Answer {}", i)).collect(),
            correct: 0,
            image_id,
        }
    }

    #[test]
    fn test_card_rows_without_image() {
        let card = Rect::new(0, 0, 40, 12);
        let rows = calculate_card_rows(card, &question("Q1", 2, None));

        assert_eq!(rows.question_area, Rect::new(1, 1, 38, 1));
        assert_eq!(rows.image_row, None);
        assert_eq!(
            rows.answer_rows,
            vec![Rect::new(1, 3, 38, 1), Rect::new(1, 4, 38, 1)]
        );
        assert_eq!(rows.hint_row, Some(Rect::new(1, 6, 38, 1)));
    }

    #[test]
    fn test_card_rows_follow_wrapped_question_and_image() {
        let card = Rect::new(0, 0, 12, 14);
        // Inner width 10 wraps into two rows.
        let rows = calculate_card_rows(card, &question("aaaa bbbb cccc", 1, Some(7)));

        assert_eq!(rows.question_area.height, 2);
        assert_eq!(rows.image_row, Some(Rect::new(1, 4, 10, 1)));
        assert_eq!(rows.answer_rows, vec![Rect::new(1, 6, 10, 1)]);
        assert_eq!(rows.hint_row, Some(Rect::new(1, 8, 10, 1)));
    }

    #[test]
    fn test_card_rows_clip_to_card() {
        let card = Rect::new(0, 0, 40, 6);
        let rows = calculate_card_rows(card, &question("Q1", 5, None));

        // Inner rows 1..5: question, blank, two answers.
        assert_eq!(rows.answer_rows.len(), 2);
        assert_eq!(rows.hint_row, None);
    }

    #[test]
    fn test_control_buttons_split_row() {
        let controls = Rect::new(0, 30, 92, 3);
        let [previous, random, next] = control_buttons(controls);

        assert_eq!(previous.y, 31);
        assert_eq!(previous.height, 1);
        assert_eq!(previous.x, 1);
        assert_eq!(random.x, previous.right());
        assert_eq!(next.x, random.right());
        assert_eq!(next.right(), 91);
    }

    #[test]
    fn test_hint_done_button_sits_bottom_right() {
        let popup = Rect::new(10, 5, 60, 20);
        let done = hint_done_button(popup);

        assert_eq!(done, Rect::new(49, 23, DONE_BUTTON_WIDTH, 1));
        assert!(contains(popup, done.x, done.y));
    }
}
