use std::fs::File;
use std::io::BufReader;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::holiday::holidaysource::{CalendarHolidaySource, normalize_country_code};
use crate::manager::managererror::ManagerError;
use crate::manager::manager::{
    FrozenManager,
    IManager,
    ManagerBuilder
};
use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::calendar::holidaycalendarmanager::HolidayCalendarLoader;

/// Holiday calendars shipped with the crate (US, IN, GB, FR, DE, JP).
const BUILTIN_HOLIDAY_JSON: &str = include_str!("../json/holidays.json");

#[derive(Deserialize)]
struct ConfigurationJsonProp {
    holiday_calendar: Vec<serde_json::Value>
}

pub struct Configuration {
    holiday_calendar_manager: FrozenManager<dyn HolidayCalendar + Send + Sync>
}

impl Configuration {
    pub fn builtin() -> Result<Configuration, ManagerError> {
        Configuration::from_json_str(BUILTIN_HOLIDAY_JSON)
    }

    pub fn from_json_str(json: &str) -> Result<Configuration, ManagerError> {
        let json_prop: ConfigurationJsonProp = serde_json::from_str(json)?;
        Configuration::from_json_prop(json_prop)
    }

    pub fn from_reader(file_path: &Path) -> Result<Configuration, ManagerError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_prop: ConfigurationJsonProp = serde_json::from_reader(reader)?;
        Configuration::from_json_prop(json_prop)
    }

    /// Reads `file_path` when given, the built-in calendars otherwise.
    pub fn load(file_path: Option<&Path>) -> Result<Configuration, ManagerError> {
        match file_path {
            Some(path) => {
                info!(path = %path.display(), "loading holiday calendars from file");
                Configuration::from_reader(path)
            },
            None => {
                info!("loading built-in holiday calendars");
                Configuration::builtin()
            }
        }
    }

    fn from_json_prop(json_prop: ConfigurationJsonProp) -> Result<Configuration, ManagerError> {
        let mut builder = ManagerBuilder::new();
        HolidayCalendarLoader.insert_obj_from_json_vec(&mut builder, &json_prop.holiday_calendar, &())?;
        info!(calendars = builder.len(), "holiday calendars loaded");
        Ok(Configuration {
            holiday_calendar_manager: builder.freeze()
        })
    }

    pub fn holiday_calendar_manager(&self) -> &FrozenManager<dyn HolidayCalendar + Send + Sync> {
        &self.holiday_calendar_manager
    }

    pub fn into_holiday_source(self) -> CalendarHolidaySource {
        CalendarHolidaySource::new(self.holiday_calendar_manager)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Server settings
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("invalid value '{value}' for {key}")]
    InvalidValue {
        key: &'static str,
        value: String
    }
}

/// Settings read from the environment:
///
/// | variable          | default   |
/// |-------------------|-----------|
/// | `BIND_ADDR`       | `0.0.0.0` |
/// | `PORT`            | `3001`    |
/// | `DEFAULT_COUNTRY` | `US`      |
/// | `HOLIDAY_CONFIG`  | built-in  |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    pub bind_addr: IpAddr,
    pub port: u16,
    pub default_country: String,
    pub holiday_config: Option<PathBuf>
}

impl Default for ServerSettings {
    fn default() -> Self {
        ServerSettings {
            bind_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 3001,
            default_country: "US".to_owned(),
            holiday_config: None
        }
    }
}

impl ServerSettings {
    pub fn from_env() -> Result<ServerSettings, SettingsError> {
        ServerSettings::from_lookup(|key| std::env::var(key).ok())
    }

    /// Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<ServerSettings, SettingsError> {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut settings = ServerSettings::default();

        if let Some(value) = get("BIND_ADDR") {
            settings.bind_addr = value
                .trim()
                .parse()
                .map_err(|_| SettingsError::InvalidValue { key: "BIND_ADDR", value })?;
        }
        if let Some(value) = get("PORT") {
            settings.port = value
                .trim()
                .parse()
                .map_err(|_| SettingsError::InvalidValue { key: "PORT", value })?;
        }
        if let Some(value) = get("DEFAULT_COUNTRY") {
            settings.default_country = normalize_country_code(&value);
        }
        settings.holiday_config = get("HOLIDAY_CONFIG").map(PathBuf::from);

        Ok(settings)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let settings = ServerSettings::from_lookup(lookup(&[])).unwrap();
        assert_eq!(settings, ServerSettings::default());
        assert_eq!(settings.socket_addr().to_string(), "0.0.0.0:3001");
    }

    #[test]
    fn values_are_read_and_normalized() {
        let settings = ServerSettings::from_lookup(lookup(&[
            ("BIND_ADDR", "127.0.0.1"),
            ("PORT", "8080"),
            ("DEFAULT_COUNTRY", " gb "),
            ("HOLIDAY_CONFIG", "/etc/holidays.json"),
        ])).unwrap();
        assert_eq!(settings.socket_addr().to_string(), "127.0.0.1:8080");
        assert_eq!(settings.default_country, "GB");
        assert_eq!(settings.holiday_config, Some(PathBuf::from("/etc/holidays.json")));
    }

    #[test]
    fn bad_port_is_rejected() {
        let err = ServerSettings::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
        assert_eq!(err, SettingsError::InvalidValue { key: "PORT", value: "eighty".to_owned() });
    }

    #[test]
    fn blank_values_count_as_unset() {
        let settings = ServerSettings::from_lookup(lookup(&[("PORT", " "), ("HOLIDAY_CONFIG", "")])).unwrap();
        assert_eq!(settings.port, 3001);
        assert_eq!(settings.holiday_config, None);
    }

    #[test]
    fn builtin_calendars_load() {
        let configuration = Configuration::builtin().unwrap();
        assert_eq!(
            configuration.holiday_calendar_manager().names(),
            vec!["DE", "FR", "GB", "IN", "JP", "US"]
        );
    }

    #[test]
    fn missing_config_file_is_an_io_error() {
        let err = Configuration::from_reader(Path::new("/nonexistent/holidays.json")).err().unwrap();
        assert!(matches!(err, ManagerError::IOError(_)));
    }
}
