pub mod alert;
pub mod help;
pub mod layout;
pub mod page;

use crate::app::App;
use crate::event::input::AppEvent;
use ratatui::layout::Rect;
use ratatui::Frame;

pub trait View {
    fn handle(app: &mut App, event: AppEvent) -> Option<AppEvent>;
    fn draw(app: &App, frame: &mut Frame, area: Rect);
}

/// Rectangle of at most `width` x `height` anchored to the top right of `area`.
pub fn top_right_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + area.width - width,
        y: area.y,
        width,
        height,
    }
}
