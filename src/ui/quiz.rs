use crate::app::App;
use crate::models::{AnswerMark, answer_marks};
use crate::streak::STREAK_GOAL;
use crate::ui::layout::{QuizLayout, calculate_card_rows, calculate_quiz_chunks, control_buttons};
use crate::utils::truncate_string;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
};

fn key_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

pub fn draw_header(f: &mut Frame, area: Rect) {
    let title = Line::from(vec![
        Span::styled(
            "Fragen-Katalog",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "  Under Construction",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ),
        Span::from("    "),
        Span::styled("a", key_style()),
        Span::from(" About"),
    ]);

    let header = Paragraph::new(title)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);
}

/// Loading indicator or the "no questions" notice.
pub fn draw_status(f: &mut Frame, app: &App) {
    let layout = calculate_quiz_chunks(f.area());
    draw_header(f, layout.header_area);

    let body = Rect {
        y: layout.streak_area.y,
        height: layout.footer_area.bottom() - layout.streak_area.y,
        ..layout.streak_area
    };

    let text = if app.status.is_loading() {
        Text::from(Line::from("Loading questions..."))
    } else {
        let mut text = Text::from(Line::from(Span::styled(
            "❌ Keine Fragen verfügbar. Bitte die JSON-Datei prüfen.",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
        if let Some(error) = app.status.error() {
            text.push_line(Line::from(""));
            text.push_line(Line::from(Span::styled(
                error.to_string(),
                Style::default().fg(Color::DarkGray),
            )));
        }
        text
    };

    let status = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, body);
}

pub fn draw_quiz(f: &mut Frame, app: &App) {
    let layout = calculate_quiz_chunks(f.area());
    draw_header(f, layout.header_area);
    draw_streak_bar(f, app, layout.streak_area);
    draw_card(f, app, layout.card_area);
    draw_controls(f, &layout);
    draw_footer(f, app, layout.footer_area);
}

fn draw_streak_bar(f: &mut Frame, app: &App, area: Rect) {
    let tracker = app.nav.streak();
    let streak = tracker.streak();
    let ratio = (streak as f64 / STREAK_GOAL as f64).min(1.0);

    let (label, color) = if tracker.is_celebrating() {
        (
            format!("🎉 {} richtige Antworten in Folge! 🎉", STREAK_GOAL),
            Color::Yellow,
        )
    } else {
        (format!("Serie: {} / {}", streak, STREAK_GOAL), Color::Green)
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Richtig in Folge (s: zurücksetzen)"),
        )
        .gauge_style(Style::default().fg(color).bg(Color::Black))
        .ratio(ratio)
        .label(Span::styled(
            label,
            Style::default().add_modifier(Modifier::BOLD),
        ));
    f.render_widget(gauge, area);
}

fn draw_card(f: &mut Frame, app: &App, area: Rect) {
    let Some(question) = app.current_question() else {
        return;
    };
    let selected = app.nav.selected_answer();
    let locked = selected.is_some();
    let rows = calculate_card_rows(area, question);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Frage #{}", question.id));
    f.render_widget(block, area);

    let prompt = Paragraph::new(Span::styled(
        question.question.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    ))
    .wrap(Wrap { trim: false });
    f.render_widget(prompt, rows.question_area);

    if let Some(row) = rows.image_row {
        let line = Line::from(vec![
            Span::from("🖼  Bild zur Frage "),
            Span::from(question.id.to_string()),
            Span::from("  "),
            Span::styled("i", key_style()),
            Span::from(" vergrößern"),
        ]);
        f.render_widget(Paragraph::new(line), row);
    }

    let marks = answer_marks(question, selected);
    for (index, ((answer, mark), row)) in question
        .answers
        .iter()
        .zip(marks)
        .zip(rows.answer_rows.iter().copied())
        .enumerate()
    {
        let (prefix, style) = match mark {
            AnswerMark::Correct => (
                "✓",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            AnswerMark::Wrong => (
                "✗",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            AnswerMark::Unmarked if locked => (" ", Style::default().fg(Color::DarkGray)),
            AnswerMark::Unmarked if index == app.highlighted => (
                "›",
                Style::default().add_modifier(Modifier::REVERSED),
            ),
            AnswerMark::Unmarked => (" ", Style::default()),
        };

        let label = truncate_string(
            &format!("[{}] {}", index + 1, answer),
            row.width.saturating_sub(2) as usize,
        );
        let line = Line::from(vec![
            Span::from(format!("{} ", prefix)),
            Span::styled(label, style),
        ]);
        f.render_widget(Paragraph::new(line), row);
    }

    if let Some(row) = rows.hint_row {
        let line = Line::from(vec![
            Span::styled("e", key_style()),
            Span::from(" ✨ AI explains"),
        ]);
        f.render_widget(Paragraph::new(line), row);
    }
}

fn draw_controls(f: &mut Frame, layout: &QuizLayout) {
    f.render_widget(Block::default().borders(Borders::ALL), layout.controls_area);

    let [previous, random, next] = control_buttons(layout.controls_area);
    let buttons = [
        (previous, "←", " ◀︎ Zurück"),
        (random, "r", " Zufällig"),
        (next, "→", " Weiter ▶︎"),
    ];
    for (area, key, label) in buttons {
        let line = Line::from(vec![Span::styled(key, key_style()), Span::from(label)]);
        f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
    }
}

fn draw_footer(f: &mut Frame, app: &App, area: Rect) {
    let footer = Line::from(vec![
        Span::from(format!("Insgesamt: {} Fragen", app.nav.len())),
        Span::from("    "),
        Span::styled("1-9/↑↓ Enter", key_style()),
        Span::from(" Antworten    "),
        Span::styled("q", key_style()),
        Span::from(" Beenden"),
    ]);
    let footer = Paragraph::new(footer)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, area);
}
