use super::alert::AlertView;
use super::help::HelpView;
use super::page::PageView;
use super::View;
use crate::app::App;
use crate::app::CurrentView;
use crate::app::InputMode;
use crate::breadcrumbs::breadcrumbs;
use crate::breadcrumbs::Crumb;
use crate::event::input::AppEvent;
use crate::theme::Scheme;
use ratatui::layout::Constraint;
use ratatui::layout::Layout;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

pub struct LayoutView {}

impl View for LayoutView {
    fn handle(_app: &mut App, _event: AppEvent) -> Option<AppEvent> {
        None
    }

    fn draw(app: &App, f: &mut Frame, area: Rect) {
        let constraints = vec![
            Constraint::Length(1),
            Constraint::Min(4),
            Constraint::Length(1),
        ];

        let rows = Layout::default()
            .margin(0)
            .constraints(constraints)
            .split(area);

        let theme = app.theme();
        f.render_widget(
            Paragraph::new(crumbs_line(&theme, &breadcrumbs(app.location(), &app.labels))),
            rows[0],
        );

        match app.view_current {
            CurrentView::Page => PageView::draw(app, f, rows[1]),
            CurrentView::Help => HelpView::draw(app, f, rows[1]),
        }

        f.render_widget(command_widget(app, &theme), rows[2]);

        AlertView::draw(app, f, rows[1]);
    }
}

fn crumbs_line<'a>(theme: &Scheme, crumbs: &[Crumb]) -> Line<'a> {
    let mut spans = vec![Span::raw(" ")];
    for (i, crumb) in crumbs.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" / ", theme.crumb_separator));
        }
        spans.push(Span::styled(
            crumb.label.clone(),
            match crumb.href {
                Some(_) => theme.crumb_link,
                None => theme.crumb_current,
            },
        ));
    }
    Line::from(spans)
}

fn command_widget<'a>(app: &'a App, theme: &Scheme) -> Paragraph<'a> {
    match app.input_mode {
        InputMode::Command => Paragraph::new(Line::from(vec![
            Span::styled(" : ", theme.widget_active),
            Span::raw(" "),
            Span::raw(app.command_input.value()),
        ])),
        InputMode::Normal => Paragraph::new(Line::from(vec![
            Span::styled(format!(" {} ", app.input_mode), theme.widget_inactive),
            Span::raw(" [?] help [:] command [q] quit"),
        ])),
    }
}
