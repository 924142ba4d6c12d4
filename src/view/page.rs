use super::View;
use crate::app::App;
use crate::event::input::AppEvent;
use crossterm::event::KeyCode;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Wrap;
use ratatui::Frame;

pub struct Route {
    pub key: char,
    pub path: &'static str,
    pub summary: &'static str,
}

pub static ROUTES: [Route; 7] = [
    Route {
        key: '0',
        path: "/",
        summary: "Overview of today's deliveries across all branches.",
    },
    Route {
        key: '1',
        path: "/branches",
        summary: "Depots and pickup points, their opening hours and capacity.",
    },
    Route {
        key: '2',
        path: "/customers",
        summary: "Registered senders and recipients with their contact details.",
    },
    Route {
        key: '3',
        path: "/dispatchers",
        summary: "Dispatch staff, assigned branches and current shifts.",
    },
    Route {
        key: '4',
        path: "/parcels",
        summary: "Parcel tracking: status, current location and delivery estimate.",
    },
    Route {
        key: '5',
        path: "/settings",
        summary: "Dashboard preferences.",
    },
    Route {
        key: '6',
        path: "/settings/profile",
        summary: "Your account details. Use :phone <number> to update your phone number.",
    },
];

pub fn route(path: &str) -> Option<&'static Route> {
    ROUTES.iter().find(|r| r.path == path)
}

pub struct PageView {}

impl View for PageView {
    fn handle(_app: &mut App, event: AppEvent) -> Option<AppEvent> {
        match event {
            AppEvent::Input(e) => match e.code {
                KeyCode::Char(c) => ROUTES
                    .iter()
                    .find(|r| r.key == c)
                    .map(|r| AppEvent::Navigate(r.path.to_string())),
                _ => None,
            },
            _ => None,
        }
    }

    fn draw(app: &App, frame: &mut Frame, area: Rect) {
        let theme = app.theme();
        let heading = app
            .labels
            .get(app.location())
            .cloned()
            .unwrap_or_else(|| "Dashboard".to_string());

        let mut lines = vec![
            Line::from(Span::styled(heading, theme.page_heading)),
            Line::from(""),
            Line::from(Span::styled(
                route(app.location()).map_or("Nothing here yet.", |r| r.summary),
                theme.page_text,
            )),
            Line::from(""),
        ];
        for r in ROUTES.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("[{}] ", r.key), theme.crumb_link),
                Span::raw(r.path),
            ]));
        }

        frame.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .block(Block::default().borders(Borders::TOP)),
            area,
        );
    }
}
