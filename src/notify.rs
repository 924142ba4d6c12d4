use std::time::Duration;

use crate::alert::Alert;
use crate::alert::AlertColor;
use crate::alert::DEFAULT_DURATION;
use crate::store::Action;
use crate::store::Dispatch;

/// Partial alert as handed over by a producer; missing fields are filled in
/// by the helper that receives it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlertOptions {
    pub title: Option<String>,
    pub message: Option<String>,
    pub color: Option<AlertColor>,
    pub duration: Option<Duration>,
}

impl AlertOptions {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn color(mut self, color: AlertColor) -> Self {
        self.color = Some(color);
        self
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    fn resolve(self, title: &str, color: AlertColor) -> Alert {
        Alert {
            title: Some(self.title.unwrap_or_else(|| title.to_string())),
            message: Some(self.message.unwrap_or_default()),
            color: self.color.unwrap_or(color),
            duration: self.duration.unwrap_or(DEFAULT_DURATION),
        }
    }
}

impl From<&str> for AlertOptions {
    fn from(title: &str) -> Self {
        AlertOptions::default().title(title)
    }
}

impl From<String> for AlertOptions {
    fn from(title: String) -> Self {
        AlertOptions::default().title(title)
    }
}

impl From<(&str, &str)> for AlertOptions {
    fn from((title, message): (&str, &str)) -> Self {
        AlertOptions::default().title(title).message(message)
    }
}

fn emit(dispatch: &mut impl Dispatch, options: impl Into<AlertOptions>, title: &str, color: AlertColor) {
    dispatch.dispatch(Action::SetAlert(options.into().resolve(title, color)));
}

pub fn notify(dispatch: &mut impl Dispatch, options: impl Into<AlertOptions>) {
    emit(dispatch, options, "Notice", AlertColor::Neutral)
}

pub fn notify_success(dispatch: &mut impl Dispatch, options: impl Into<AlertOptions>) {
    emit(dispatch, options, "Success", AlertColor::Success)
}

pub fn notify_error(dispatch: &mut impl Dispatch, options: impl Into<AlertOptions>) {
    emit(dispatch, options, "Error", AlertColor::Danger)
}

pub fn notify_info(dispatch: &mut impl Dispatch, options: impl Into<AlertOptions>) {
    emit(dispatch, options, "Info", AlertColor::Neutral)
}

pub fn notify_warning(dispatch: &mut impl Dispatch, options: impl Into<AlertOptions>) {
    emit(dispatch, options, "Warning", AlertColor::Warning)
}
