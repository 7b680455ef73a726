use crate::ai::HintState;
use crate::app::App;
use crate::models::Overlay;
use crate::streak::STREAK_GOAL;
use crate::ui::layout::{hint_done_button, overlay_area};
use crate::ui::picture::{ImageCache, render_half_blocks};
use crate::utils::truncate_string;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];

pub fn draw_overlay(f: &mut Frame, app: &App, images: &mut ImageCache) {
    let Some(area) = overlay_area(app.overlay, f.area()) else {
        return;
    };
    f.render_widget(Clear, area);

    match app.overlay {
        Overlay::None => {}
        Overlay::Lightbox => draw_lightbox(f, app, images, area),
        Overlay::AiHint => draw_hint(f, app, area),
        Overlay::About => draw_about(f, area),
    }
}

fn draw_lightbox(f: &mut Frame, app: &App, images: &mut ImageCache, area: Rect) {
    let (Some(question), Some(path)) = (app.current_question(), app.image_path()) else {
        return;
    };

    let title = format!(
        " Frage {} groß: {} ",
        question.id,
        truncate_string(&question.question, area.width.saturating_sub(20) as usize)
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .title_bottom(Line::from(" Esc schließen ").alignment(Alignment::Right));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let text = match images.load(&path) {
        Ok(img) => Text::from(render_half_blocks(img, inner.width, inner.height)),
        Err(_) => Text::from(vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("Bild nicht gefunden: {}", path.display()),
                Style::default().fg(Color::DarkGray),
            )),
        ]),
    };

    f.render_widget(Paragraph::new(text).alignment(Alignment::Center), inner);
}

fn draw_hint(f: &mut Frame, app: &App, area: Rect) {
    let question_id = app
        .hint
        .question_id()
        .or_else(|| app.current_question().map(|q| q.id))
        .unwrap_or_default();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Explaining question #{} ", question_id))
        .border_style(Style::default().fg(Color::Magenta));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let body_area = Rect {
        height: inner.height.saturating_sub(1),
        ..inner
    };

    let body = match app.hint.state() {
        HintState::Idle => Text::default(),
        HintState::Pending => {
            let frame = SPINNER[(app.ticks % SPINNER.len() as u64) as usize];
            Text::from(Line::from(vec![
                Span::styled(frame, Style::default().fg(Color::Yellow)),
                Span::styled(
                    " Thinking …",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::ITALIC),
                ),
            ]))
        }
        HintState::Failure(message) => Text::from(Line::from(Span::styled(
            message.clone(),
            Style::default().fg(Color::Red),
        ))),
        HintState::Success(reply) => Text::from(reply.clone()),
    };

    f.render_widget(Paragraph::new(body).wrap(Wrap { trim: false }), body_area);

    let done = Line::from(vec![
        Span::styled(
            "[ Done ]",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Enter / Esc"),
    ]);
    f.render_widget(
        Paragraph::new(done).alignment(Alignment::Right),
        hint_done_button(area),
    );
}

fn draw_about(f: &mut Frame, area: Rect) {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let text = vec![
        Line::from(Span::styled("Fragen-Katalog", bold)),
        Line::from(""),
        Line::from("Übungsfragen für den Einbürgerungstest (Leben in Deutschland)."),
        Line::from("Wähle eine Antwort; die richtige wird grün, eine falsche rot markiert."),
        Line::from(format!(
            "Bei {} richtigen Antworten in Folge gibt es eine kleine Feier.",
            STREAK_GOAL
        )),
        Line::from("Mit \"AI explains\" erklärt eine KI die Frage, ohne die Lösung zu verraten."),
        Line::from(""),
        Line::from("Der Fortschritt wird nicht gespeichert."),
    ];

    let about = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" About ")
                .title_bottom(Line::from(" Esc schließen ").alignment(Alignment::Right)),
        );
    f.render_widget(about, area);
}
