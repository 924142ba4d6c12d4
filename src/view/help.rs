use super::View;
use crate::app::App;
use crate::event::input::AppEvent;
use ratatui::layout::Rect;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

pub struct HelpView {}

impl View for HelpView {
    fn handle(app: &mut App, event: AppEvent) -> Option<AppEvent> {
        match event {
            AppEvent::Input(_) => Some(AppEvent::Navigate(app.location().to_string())),
            _ => None,
        }
    }

    fn draw(_app: &App, frame: &mut Frame, area: Rect) {
        frame.render_widget(Paragraph::new(help()), area);
    }
}

fn help() -> String {
"
Help for you - press any key to return.

Key mappings:

[0-6]   go to page
[l]     log in
[s]     save parcel
[x]     dismiss alert (also [esc])
[t]     rotate the theme
[:]     enter a command
[q]     quit

Commands:

go <path>                           go to a page, e.g. go settings/profile
notify <color> <title> [| message]  raise an alert (success, warning, danger, neutral)
phone <number>                      update your phone number
clear                               clear the alert
q                                   quit
".to_string()
}
