use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Screen};
use crate::session::Status;

const HORIZONTAL_MARGIN: u16 = 5;

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.screen {
            Screen::Welcome => render_welcome(self, area, buf),
            Screen::Typing => render_typing(self, area, buf),
            Screen::Complete => render_final(area, buf, "Well done!", Color::Green),
            Screen::Aborted => render_final(area, buf, "Aborted.", Color::Yellow),
        }
    }
}

fn render_welcome(app: &App, area: Rect, buf: &mut Buffer) {
    let bold_style = Style::default().add_modifier(Modifier::BOLD);
    let italic_style = Style::default().add_modifier(Modifier::ITALIC);

    let mut lines = vec![
        Line::from(Span::styled("Welcome to the Terminal Typing Test", bold_style)),
        Line::default(),
    ];

    if !app.sample.title.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("Today's sample: {}", app.sample.title),
            Style::default().fg(Color::Cyan),
        )));
        lines.push(Line::default());
    }

    lines.push(Line::from(Span::styled(
        "press any key to start / (esc) to quit",
        italic_style.add_modifier(Modifier::DIM),
    )));

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    widget.render(centered_band(area, 5), buf);
}

fn render_typing(app: &App, area: Rect, buf: &mut Buffer) {
    let bold_style = Style::default().add_modifier(Modifier::BOLD);

    let green_bold_style = Style::default().patch(bold_style).fg(Color::Green);
    let red_bold_style = Style::default().patch(bold_style).fg(Color::Red);

    let dim_bold_style = Style::default()
        .patch(bold_style)
        .add_modifier(Modifier::DIM);

    let underlined_dim_bold_style = Style::default()
        .patch(dim_bold_style)
        .add_modifier(Modifier::UNDERLINED);

    let session = &app.session;
    let target = session.target();

    let max_chars_per_line = area.width.saturating_sub(HORIZONTAL_MARGIN * 2).max(1);
    let mut prompt_occupied_lines =
        ((target.width() as f64 / max_chars_per_line as f64).ceil() + 1.0) as u16;
    if target.width() <= max_chars_per_line as usize {
        prompt_occupied_lines = 1;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .constraints(
            [
                Constraint::Length(
                    (area.height.saturating_sub(prompt_occupied_lines + 4) / 2).max(1),
                ),
                Constraint::Length(2), // title
                Constraint::Length(prompt_occupied_lines),
                Constraint::Length(2), // status indicator
                Constraint::Min(0),
            ]
            .as_ref(),
        )
        .split(area);

    if !app.sample.title.is_empty() {
        let title = Paragraph::new(Span::styled(
            app.sample.title.clone(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        title.render(chunks[1], buf);
    }

    let mut spans = session
        .typed()
        .iter()
        .enumerate()
        .map(|(idx, &typed)| match session.expected_char(idx) {
            Some(expected) if expected == typed => {
                Span::styled(expected.to_string(), green_bold_style)
            }
            _ => Span::styled(
                match typed {
                    ' ' => "·".to_owned(),
                    c => c.to_string(),
                },
                red_bold_style,
            ),
        })
        .collect::<Vec<Span>>();

    if let Some(under_cursor) = session.expected_char(session.cursor_pos()) {
        spans.push(Span::styled(
            under_cursor.to_string(),
            underlined_dim_bold_style,
        ));
        let rest: String = target.chars().skip(session.cursor_pos() + 1).collect();
        spans.push(Span::styled(rest, dim_bold_style));
    }

    let widget = Paragraph::new(Line::from(spans))
        .alignment(if prompt_occupied_lines == 1 {
            // when the prompt is small enough to fit on one line
            // centering the text gives a nice zen feeling
            Alignment::Center
        } else {
            Alignment::Left
        })
        .wrap(Wrap { trim: true });

    widget.render(chunks[2], buf);

    let status = match session.status() {
        Status::Mismatched => Span::styled(
            "✗ off track, backspace to fix",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        _ => Span::styled(
            "(esc) to quit",
            Style::default()
                .add_modifier(Modifier::ITALIC)
                .add_modifier(Modifier::DIM),
        ),
    };

    Paragraph::new(status)
        .alignment(Alignment::Center)
        .render(chunks[3], buf);
}

fn render_final(area: Rect, buf: &mut Buffer, message: &str, color: Color) {
    let widget = Paragraph::new(Span::styled(
        message.to_string(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);

    widget.render(centered_band(area, 1), buf);
}

/// Horizontal band of `height` rows in the vertical middle of `area`.
fn centered_band(area: Rect, height: u16) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(area.height.saturating_sub(height) / 2),
                Constraint::Length(height),
                Constraint::Min(0),
            ]
            .as_ref(),
        )
        .split(area);
    chunks[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::Sample;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn create_test_app(body: &str) -> App {
        App::new(Sample {
            title: "Test Page".to_string(),
            body: body.to_string(),
        })
    }

    fn rendered(app: &App, width: u16, height: u16) -> String {
        let area = Rect::new(0, 0, width, height);
        let mut buffer = Buffer::empty(area);
        app.render(area, &mut buffer);
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    fn start_typing(app: &mut App) {
        app.on_key(KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE));
    }

    #[test]
    fn test_welcome_screen_shows_banner_and_title() {
        let app = create_test_app("hello world");
        let content = rendered(&app, 80, 24);

        assert!(content.contains("Welcome to the Terminal Typing Test"));
        assert!(content.contains("Test Page"));
        assert!(content.contains("press any key"));
    }

    #[test]
    fn test_welcome_screen_without_title() {
        let app = App::new(Sample::fallback());
        let content = rendered(&app, 80, 24);

        assert!(content.contains("Welcome to the Terminal Typing Test"));
        assert!(!content.contains("Today's sample"));
    }

    #[test]
    fn test_typing_screen_shows_target_and_title() {
        let mut app = create_test_app("hello world");
        start_typing(&mut app);
        let content = rendered(&app, 80, 24);

        assert!(content.contains("hello world"));
        assert!(content.contains("Test Page"));
        assert!(content.contains("(esc) to quit"));
    }

    #[test]
    fn test_mismatch_indicator_appears_and_clears() {
        let mut app = create_test_app("hello");
        start_typing(&mut app);
        app.on_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE));

        let content = rendered(&app, 80, 24);
        assert!(content.contains("off track"));

        app.on_key(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE));
        let content = rendered(&app, 80, 24);
        assert!(!content.contains("off track"));
    }

    #[test]
    fn test_incorrect_space_renders_as_dot() {
        let mut app = create_test_app("ab");
        start_typing(&mut app);
        app.on_key(KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE));

        let content = rendered(&app, 80, 24);
        assert!(content.contains('·'));
    }

    #[test]
    fn test_complete_screen() {
        let mut app = create_test_app("a");
        start_typing(&mut app);
        app.on_key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE));

        let content = rendered(&app, 80, 24);
        assert!(content.contains("Well done!"));
    }

    #[test]
    fn test_aborted_screen() {
        let mut app = create_test_app("a");
        app.on_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));

        let content = rendered(&app, 80, 24);
        assert!(content.contains("Aborted."));
    }

    #[test]
    fn test_render_survives_small_and_odd_areas() {
        let mut app = create_test_app("a longer prompt that needs wrapping to fit");
        start_typing(&mut app);

        for (w, h) in [(10u16, 3u16), (20, 5), (200, 2), (80, 24), (12, 50)] {
            let area = Rect::new(0, 0, w, h);
            let mut buffer = Buffer::empty(area);
            (&app).render(area, &mut buffer);
            assert_eq!(*buffer.area(), area);
        }
    }

    #[test]
    fn test_render_accented_target_after_folding() {
        let mut app = create_test_app("café naïve résumé");
        start_typing(&mut app);
        let content = rendered(&app, 80, 24);

        // The session folds the body, so the folded form is displayed.
        assert!(content.contains("cafe naive resume"));
    }

    #[test]
    fn test_typed_prefix_still_rendered() {
        let mut app = create_test_app("hello");
        start_typing(&mut app);
        for c in "hel".chars() {
            app.on_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }

        let content = rendered(&app, 80, 24);
        assert!(content.contains("hello"));
    }
}
