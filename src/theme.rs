use clap::ValueEnum;
use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;

use crate::presentation::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Theme {
    Dark,
    SolarizedDark,
}

impl Theme {
    pub fn next(&self) -> Theme {
        match self {
            Theme::Dark => Theme::SolarizedDark,
            Theme::SolarizedDark => Theme::Dark,
        }
    }

    pub fn scheme(&self) -> Scheme {
        match self {
            Theme::SolarizedDark => Scheme {
                alert_success: Style::default().fg(Solarized::Green.to_color()),
                alert_warning: Style::default().fg(Solarized::Yellow.to_color()),
                alert_danger: Style::default().fg(Solarized::Red.to_color()),
                alert_neutral: Style::default().fg(Solarized::Blue.to_color()),
                alert_body: Style::default()
                    .fg(Solarized::Base1.to_color())
                    .bg(Solarized::Base03.to_color()),

                crumb_link: Style::default().fg(Solarized::Cyan.to_color()),
                crumb_current: Style::default()
                    .fg(Solarized::Base1.to_color())
                    .add_modifier(Modifier::BOLD),
                crumb_separator: Style::default().fg(Solarized::Base01.to_color()),

                page_heading: Style::default().fg(Solarized::Orange.to_color()),
                page_text: Style::default().fg(Solarized::Base0.to_color()),

                widget_active: Style::default()
                    .fg(Solarized::Base02.to_color())
                    .bg(Solarized::Green.to_color()),
                widget_inactive: Style::default()
                    .fg(Solarized::Base1.to_color())
                    .bg(Solarized::Base03.to_color()),
            },
            Theme::Dark => Scheme {
                alert_success: Style::default().fg(Color::Green),
                alert_warning: Style::default().fg(Color::Yellow),
                alert_danger: Style::default().fg(Color::Red),
                alert_neutral: Style::default().fg(Color::LightBlue),
                alert_body: Style::default().fg(Color::White).bg(Color::Black),

                crumb_link: Style::default().fg(Color::LightBlue),
                crumb_current: Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                crumb_separator: Style::default().fg(Color::DarkGray),

                page_heading: Style::default().fg(Color::LightMagenta),
                page_text: Style::default(),

                widget_active: Style::default().fg(Color::Black).bg(Color::Green),
                widget_inactive: Style::default().fg(Color::Black).bg(Color::Yellow),
            },
        }
    }
}

pub struct Scheme {
    pub alert_success: Style,
    pub alert_warning: Style,
    pub alert_danger: Style,
    pub alert_neutral: Style,
    pub alert_body: Style,

    pub crumb_link: Style,
    pub crumb_current: Style,
    pub crumb_separator: Style,

    pub page_heading: Style,
    pub page_text: Style,

    pub widget_active: Style,
    pub widget_inactive: Style,
}

impl Scheme {
    pub fn alert(&self, role: Role) -> Style {
        match role {
            Role::Success => self.alert_success,
            Role::Warning => self.alert_warning,
            Role::Danger => self.alert_danger,
            Role::Neutral => self.alert_neutral,
        }
    }
}

pub enum Solarized {
    Base03,
    Base02,
    Base01,
    Base0,
    Base1,
    Yellow,
    Orange,
    Red,
    Blue,
    Cyan,
    Green,
}

impl Solarized {
    fn to_color(&self) -> Color {
        match self {
            Solarized::Base03 => Color::Rgb(0, 43, 54),
            Solarized::Base02 => Color::Rgb(7, 54, 66),
            Solarized::Base01 => Color::Rgb(88, 110, 117),
            Solarized::Base0 => Color::Rgb(131, 148, 150),
            Solarized::Base1 => Color::Rgb(147, 161, 161),
            Solarized::Yellow => Color::Rgb(181, 137, 0),
            Solarized::Orange => Color::Rgb(203, 75, 22),
            Solarized::Red => Color::Rgb(220, 50, 47),
            Solarized::Blue => Color::Rgb(38, 139, 210),
            Solarized::Cyan => Color::Rgb(42, 161, 152),
            Solarized::Green => Color::Rgb(133, 153, 0),
        }
    }
}
