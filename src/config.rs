use std::time::Duration;

use clap::Parser;

use crate::alert::DEFAULT_DURATION;
use crate::theme::Theme;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long)]
    pub log_path: Option<String>,
    /// Milliseconds an alert stays up before it is cleared
    #[arg(long)]
    pub alert_duration: Option<u64>,
    /// Keep alerts until they are dismissed
    #[arg(long)]
    pub no_auto_dismiss: bool,
    #[arg(long, value_enum, default_value_t = Theme::Dark)]
    pub theme: Theme,
    #[arg(short, long)]
    pub path: Option<String>,
}

pub fn load_config() -> Config {
    Config::from_args(Args::parse())
}

#[derive(Clone, Debug)]
pub struct Config {
    pub log_path: Option<String>,
    pub alert_duration: Duration,
    pub auto_dismiss: bool,
    pub theme: Theme,
    pub start_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_path: None,
            alert_duration: DEFAULT_DURATION,
            auto_dismiss: true,
            theme: Theme::Dark,
            start_path: "/".to_string(),
        }
    }
}

impl Config {
    fn from_args(args: Args) -> Config {
        Config {
            log_path: args.log_path,
            alert_duration: args
                .alert_duration
                .map(Duration::from_millis)
                .unwrap_or(DEFAULT_DURATION),
            auto_dismiss: !args.no_auto_dismiss,
            theme: args.theme,
            start_path: args.path.unwrap_or("/".to_string()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() -> anyhow::Result<()> {
        let config = Config::from_args(Args::try_parse_from(["parcel-dash"])?);
        assert_eq!(None, config.log_path);
        assert_eq!(DEFAULT_DURATION, config.alert_duration);
        assert_eq!(true, config.auto_dismiss);
        assert_eq!(Theme::Dark, config.theme);
        assert_eq!("/", config.start_path);
        Ok(())
    }

    #[test]
    fn test_flags() -> anyhow::Result<()> {
        let config = Config::from_args(Args::try_parse_from([
            "parcel-dash",
            "--log-path",
            "dash.log",
            "--alert-duration",
            "5000",
            "--no-auto-dismiss",
            "--theme",
            "solarized-dark",
            "--path",
            "/parcels",
        ])?);
        assert_eq!(Some("dash.log".to_string()), config.log_path);
        assert_eq!(Duration::from_millis(5000), config.alert_duration);
        assert_eq!(false, config.auto_dismiss);
        assert_eq!(Theme::SolarizedDark, config.theme);
        assert_eq!("/parcels", config.start_path);
        Ok(())
    }
}
