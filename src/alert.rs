use std::fmt::Display;
use std::time::Duration;

use serde::Deserialize;
use serde::Serialize;

/// Dismiss interval used when a producer does not ask for one.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(120_000);

/// Semantic category of an alert. Unknown names are kept in `Custom` so that
/// producers never fail on a colour the dashboard does not know yet.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AlertColor {
    Success,
    Warning,
    Danger,
    #[default]
    Neutral,
    Custom(String),
}

impl AlertColor {
    pub fn parse(name: &str) -> AlertColor {
        match name.trim().to_lowercase().as_str() {
            "success" => AlertColor::Success,
            "warning" => AlertColor::Warning,
            "danger" | "destructive" => AlertColor::Danger,
            "neutral" | "default" | "info" | "" => AlertColor::Neutral,
            _ => AlertColor::Custom(name.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            AlertColor::Success => "success",
            AlertColor::Warning => "warning",
            AlertColor::Danger => "danger",
            AlertColor::Neutral => "neutral",
            AlertColor::Custom(name) => name.as_str(),
        }
    }
}

impl Display for AlertColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl From<&str> for AlertColor {
    fn from(name: &str) -> Self {
        AlertColor::parse(name)
    }
}

impl From<String> for AlertColor {
    fn from(name: String) -> Self {
        AlertColor::parse(&name)
    }
}

impl From<AlertColor> for String {
    fn from(color: AlertColor) -> Self {
        color.name().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub title: Option<String>,
    pub message: Option<String>,
    #[serde(default)]
    pub color: AlertColor,
    #[serde(default = "default_duration")]
    pub duration: Duration,
}

fn default_duration() -> Duration {
    DEFAULT_DURATION
}

impl Default for Alert {
    fn default() -> Self {
        Alert {
            title: None,
            message: None,
            color: AlertColor::Neutral,
            duration: DEFAULT_DURATION,
        }
    }
}

impl Alert {
    pub fn new(title: impl Into<String>, color: AlertColor) -> Self {
        Alert {
            title: Some(title.into()),
            color,
            ..Alert::default()
        }
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// An alert without a headline is never drawn.
    pub fn is_renderable(&self) -> bool {
        self.title.as_deref().is_some_and(|t| !t.is_empty())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde::de::value::Error;
    use serde::de::value::StrDeserializer;
    use serde::de::IntoDeserializer;

    #[test]
    fn test_parse_known_colors() {
        assert_eq!(AlertColor::Success, AlertColor::parse("success"));
        assert_eq!(AlertColor::Warning, AlertColor::parse("Warning"));
        assert_eq!(AlertColor::Danger, AlertColor::parse("danger"));
        assert_eq!(AlertColor::Danger, AlertColor::parse("destructive"));
        assert_eq!(AlertColor::Neutral, AlertColor::parse("default"));
        assert_eq!(AlertColor::Neutral, AlertColor::parse(""));
    }

    #[test]
    fn test_parse_unknown_color_is_kept() {
        assert_eq!(
            AlertColor::Custom("fuchsia".to_string()),
            AlertColor::parse("fuchsia")
        );
        assert_eq!("fuchsia", AlertColor::parse("fuchsia").to_string());
    }

    #[test]
    fn test_deserialize_color_from_name() -> anyhow::Result<()> {
        let de: StrDeserializer<Error> = "destructive".into_deserializer();
        assert_eq!(AlertColor::Danger, AlertColor::deserialize(de)?);

        let de: StrDeserializer<Error> = "ochre".into_deserializer();
        assert_eq!(
            AlertColor::Custom("ochre".to_string()),
            AlertColor::deserialize(de)?
        );
        Ok(())
    }

    #[test]
    fn test_renderable_requires_title() {
        assert_eq!(false, Alert::default().is_renderable());
        assert_eq!(false, Alert::new("", AlertColor::Success).is_renderable());
        assert_eq!(true, Alert::new("Saved", AlertColor::Success).is_renderable());
    }

    #[test]
    fn test_default_duration() {
        assert_eq!(Duration::from_millis(120000), Alert::default().duration);
    }
}
