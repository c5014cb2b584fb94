use chrono_tz::Tz;
use dayplan_domain::ViewMode;
use std::str::FromStr;
use tracing::{info, warn};

const DEFAULT_POLL_INTERVAL_MS: u64 = 1000;

#[derive(Debug, Clone)]
pub struct Config {
    /// Base address of the events api. Without it `Event`s are only kept
    /// in memory.
    pub api_url: Option<String>,
    /// How often, in millis, upcoming `Event`s are checked for notifications
    pub poll_interval_ms: u64,
    /// Timezone the wall clock is read in when comparing with `Event`s
    pub timezone: Tz,
    /// Initial calendar view
    pub view_mode: ViewMode,
}

fn parse_var<T: FromStr>(name: &str, default: T) -> T
where
    T: std::fmt::Debug,
{
    match std::env::var(name) {
        Ok(value) => match value.parse::<T>() {
            Ok(parsed) => parsed,
            Err(_) => {
                warn!(
                    "The given {}: {} is not valid, falling back to the default: {:?}.",
                    name, value, default
                );
                default
            }
        },
        Err(_) => default,
    }
}

impl Config {
    pub fn new() -> Self {
        let api_url = match std::env::var("DAYPLAN_API_URL") {
            Ok(url) if !url.trim().is_empty() => Some(url),
            _ => {
                info!("Did not find DAYPLAN_API_URL environment variable.");
                None
            }
        };
        let mut poll_interval_ms = parse_var("DAYPLAN_POLL_INTERVAL_MS", DEFAULT_POLL_INTERVAL_MS);
        if poll_interval_ms == 0 {
            warn!(
                "DAYPLAN_POLL_INTERVAL_MS can not be 0, falling back to the default: {}.",
                DEFAULT_POLL_INTERVAL_MS
            );
            poll_interval_ms = DEFAULT_POLL_INTERVAL_MS;
        }

        Self {
            api_url,
            poll_interval_ms,
            timezone: parse_var("DAYPLAN_TIMEZONE", chrono_tz::UTC),
            view_mode: parse_var("DAYPLAN_VIEW_MODE", ViewMode::Month),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: None,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            timezone: chrono_tz::UTC,
            view_mode: ViewMode::Month,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 4] = [
        "DAYPLAN_API_URL",
        "DAYPLAN_POLL_INTERVAL_MS",
        "DAYPLAN_TIMEZONE",
        "DAYPLAN_VIEW_MODE",
    ];

    fn clear_env() {
        for var in VARS.iter() {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn it_uses_defaults_without_env() {
        clear_env();
        let config = Config::new();
        assert_eq!(config.api_url, None);
        assert_eq!(config.poll_interval_ms, 1000);
        assert_eq!(config.timezone, chrono_tz::UTC);
        assert_eq!(config.view_mode, ViewMode::Month);
    }

    #[test]
    #[serial]
    fn it_reads_env() {
        clear_env();
        std::env::set_var("DAYPLAN_API_URL", "http://localhost:3000");
        std::env::set_var("DAYPLAN_POLL_INTERVAL_MS", "250");
        std::env::set_var("DAYPLAN_TIMEZONE", "Asia/Seoul");
        std::env::set_var("DAYPLAN_VIEW_MODE", "week");

        let config = Config::new();
        clear_env();

        assert_eq!(config.api_url.as_deref(), Some("http://localhost:3000"));
        assert_eq!(config.poll_interval_ms, 250);
        assert_eq!(config.timezone, chrono_tz::Asia::Seoul);
        assert_eq!(config.view_mode, ViewMode::Week);
    }

    #[test]
    #[serial]
    fn it_falls_back_on_invalid_values() {
        clear_env();
        std::env::set_var("DAYPLAN_POLL_INTERVAL_MS", "soon");
        std::env::set_var("DAYPLAN_TIMEZONE", "Mars/Olympus");
        std::env::set_var("DAYPLAN_VIEW_MODE", "year");

        let config = Config::new();
        clear_env();

        assert_eq!(config.poll_interval_ms, 1000);
        assert_eq!(config.timezone, chrono_tz::UTC);
        assert_eq!(config.view_mode, ViewMode::Month);
    }

    #[test]
    #[serial]
    fn it_rejects_zero_poll_interval() {
        clear_env();
        std::env::set_var("DAYPLAN_POLL_INTERVAL_MS", "0");
        let config = Config::new();
        clear_env();
        assert_eq!(config.poll_interval_ms, 1000);
    }
}
