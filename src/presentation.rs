use crate::alert::Alert;
use crate::alert::AlertColor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Success,
    Warning,
    Danger,
    Neutral,
}

/// Fixed visual treatment for one alert colour. The text always comes from
/// the alert itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presentation {
    pub icon: &'static str,
    pub role: Role,
}

const SUCCESS: Presentation = Presentation {
    icon: "✔",
    role: Role::Success,
};
const WARNING: Presentation = Presentation {
    icon: "⚠",
    role: Role::Warning,
};
const DANGER: Presentation = Presentation {
    icon: "✖",
    role: Role::Danger,
};
const NEUTRAL: Presentation = Presentation {
    icon: "ℹ",
    role: Role::Neutral,
};

pub fn presentation(color: &AlertColor) -> Presentation {
    match color {
        AlertColor::Success => SUCCESS,
        AlertColor::Warning => WARNING,
        AlertColor::Danger => DANGER,
        AlertColor::Neutral => NEUTRAL,
        AlertColor::Custom(_) => NEUTRAL,
    }
}

/// What the alert box actually shows: icon and role from the table, text from
/// the alert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub icon: &'static str,
    pub title: String,
    pub message: String,
    pub role: Role,
}

pub fn resolve(alert: &Alert) -> Option<Rendered> {
    if !alert.is_renderable() {
        return None;
    }
    let entry = presentation(&alert.color);
    Some(Rendered {
        icon: entry.icon,
        title: alert.title.clone().unwrap_or_default(),
        message: alert.message.clone().unwrap_or_default(),
        role: entry.role,
    })
}
