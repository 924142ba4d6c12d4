use super::top_right_rect;
use super::View;
use crate::app::App;
use crate::event::input::AppEvent;
use crate::presentation::resolve;
use crate::presentation::Rendered;
use crate::theme::Scheme;
use crossterm::event::KeyCode;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui::widgets::Clear;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Wrap;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

const WIDTH: u16 = 48;
const MAX_MESSAGE_LINES: u16 = 4;

pub struct AlertView {}

impl View for AlertView {
    fn handle(app: &mut App, event: AppEvent) -> Option<AppEvent> {
        let showing = app.store.alert().and_then(resolve).is_some();
        match event {
            AppEvent::Input(e) if showing => match e.code {
                KeyCode::Esc | KeyCode::Char('x') => Some(AppEvent::DismissAlert),
                _ => None,
            },
            _ => None,
        }
    }

    fn draw(app: &App, frame: &mut Frame, area: Rect) {
        let rendered = match app.store.alert().and_then(resolve) {
            Some(rendered) => rendered,
            None => return,
        };
        draw_alert(&app.theme(), &rendered, frame, area);
    }
}

pub fn draw_alert(theme: &Scheme, rendered: &Rendered, frame: &mut Frame, area: Rect) {
    let inner_width = WIDTH.min(area.width).saturating_sub(2).max(1);
    let message_lines = wrapped_lines(&rendered.message, inner_width as usize)
        .clamp(1, MAX_MESSAGE_LINES as usize) as u16;
    let rect = top_right_rect(WIDTH, message_lines + 2, area);

    let role = theme.alert(rendered.role);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(role)
        .title(Line::from(vec![
            Span::styled(format!(" {} ", rendered.icon), role),
            Span::styled(format!("{} ", rendered.title), role),
        ]))
        .title_bottom(Line::from(" [x] dismiss ").right_aligned())
        .style(theme.alert_body);

    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(rendered.message.clone())
            .wrap(Wrap { trim: true })
            .block(block),
        rect,
    );
}

/// Rows `text` takes when word wrapped to `width` columns. Words wider than a
/// row are split across rows.
fn wrapped_lines(text: &str, width: usize) -> usize {
    let width = width.max(1);
    let mut lines = 0;
    for paragraph in text.lines() {
        lines += 1;
        let mut used = 0;
        for word in paragraph.split_whitespace() {
            let word_width = word.width();
            if used > 0 && used + 1 + word_width <= width {
                used += 1 + word_width;
                continue;
            }
            if used > 0 {
                lines += 1;
            }
            let overflow = word_width.saturating_sub(1) / width;
            lines += overflow;
            used = word_width - overflow * width;
        }
    }
    lines
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::alert::Alert;
    use crate::alert::AlertColor;
    use crate::config::Config;
    use crate::presentation::Role;
    use crate::store::Action;
    use crate::store::Dispatch;
    use crate::theme::Theme;
    use anyhow::Result;
    use pretty_assertions::assert_eq;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use tokio::sync::mpsc;

    fn app() -> App {
        let (sender, receiver) = mpsc::channel(1);
        App::new(Config::default(), receiver, sender)
    }

    fn draw_app(app: &App) -> Result<Terminal<TestBackend>> {
        let mut terminal = Terminal::new(TestBackend::new(60, 8))?;
        terminal.draw(|frame| {
            let area = frame.area();
            AlertView::draw(app, frame, area);
        })?;
        Ok(terminal)
    }

    fn screen(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_draw_alert_shows_title_and_message() -> Result<()> {
        let mut terminal = Terminal::new(TestBackend::new(60, 8))?;
        let rendered = Rendered {
            icon: "✖",
            title: "Unauthorized".to_string(),
            message: "Wrong password".to_string(),
            role: Role::Danger,
        };
        terminal.draw(|frame| {
            let area = frame.area();
            draw_alert(&Theme::Dark.scheme(), &rendered, frame, area);
        })?;

        let screen = screen(&terminal);
        assert_eq!(true, screen.contains("✖ Unauthorized"));
        assert_eq!(true, screen.contains("Wrong password"));
        assert_eq!(true, screen.contains("[x] dismiss"));
        Ok(())
    }

    #[test]
    fn test_empty_channel_draws_nothing() -> Result<()> {
        let terminal = draw_app(&app())?;
        assert_eq!("", screen(&terminal).trim());
        Ok(())
    }

    #[test]
    fn test_untitled_alert_draws_nothing() -> Result<()> {
        let mut app = app();
        app.store.dispatch(Action::SetAlert(Alert {
            message: Some("body only".to_string()),
            ..Alert::default()
        }));
        let terminal = draw_app(&app)?;
        assert_eq!("", screen(&terminal).trim());
        Ok(())
    }

    #[test]
    fn test_custom_color_is_drawn_neutral() -> Result<()> {
        let mut app = app();
        app.store.dispatch(Action::SetAlert(Alert::new(
            "Rerouted",
            AlertColor::parse("plum"),
        )));
        let terminal = draw_app(&app)?;

        let screen = screen(&terminal);
        assert_eq!(true, screen.contains("ℹ Rerouted"));

        let buffer = terminal.backend().buffer();
        let icon_x = (0..buffer.area.width)
            .find(|x| buffer[(*x, 0)].symbol() == "ℹ")
            .expect("icon drawn on the top border");
        assert_eq!(
            Theme::Dark.scheme().alert_neutral.fg,
            Some(buffer[(icon_x, 0)].fg)
        );
        Ok(())
    }

    #[test]
    fn test_wrapped_lines() {
        assert_eq!(0, wrapped_lines("", 46));
        assert_eq!(1, wrapped_lines("Wrong password", 46));
        assert_eq!(2, wrapped_lines("aaaa bbbb", 6));
        assert_eq!(3, wrapped_lines(&"a".repeat(100), 46));
        assert_eq!(2, wrapped_lines("one\ntwo", 46));
        // double width
        assert_eq!(2, wrapped_lines(&"界".repeat(30), 46));
        assert_eq!(1522, wrapped_lines(&"x".repeat(70_000), 46));
    }

    #[test]
    fn test_box_grows_with_wide_message() -> Result<()> {
        let mut terminal = Terminal::new(TestBackend::new(60, 10))?;
        let rendered = Rendered {
            icon: "ℹ",
            title: "Address".to_string(),
            message: "界".repeat(30),
            role: Role::Neutral,
        };
        terminal.draw(|frame| {
            let area = frame.area();
            draw_alert(&Theme::Dark.scheme(), &rendered, frame, area);
        })?;

        let rows: Vec<String> = screen(&terminal).lines().map(|l| l.to_string()).collect();
        assert_eq!(true, rows[3].contains("[x] dismiss"));
        assert_eq!("", rows[4].trim());
        Ok(())
    }

    #[test]
    fn test_huge_message_is_capped() -> Result<()> {
        let mut terminal = Terminal::new(TestBackend::new(60, 10))?;
        let rendered = Rendered {
            icon: "ℹ",
            title: "Log".to_string(),
            message: "x".repeat(70_000),
            role: Role::Neutral,
        };
        terminal.draw(|frame| {
            let area = frame.area();
            draw_alert(&Theme::Dark.scheme(), &rendered, frame, area);
        })?;

        let rows: Vec<String> = screen(&terminal).lines().map(|l| l.to_string()).collect();
        assert_eq!(true, rows[5].contains("[x] dismiss"));
        Ok(())
    }
}
