use std::{
    path::PathBuf,
    time::Duration,
};

use chrono_tz::Tz;
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    core::FormError,
    persistence::{
        data_file_exists,
        get_app_data_dir,
        load_json_or_default,
        save_json,
    },
};

pub const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormSettings {
    /// Spreadsheet-backed storage endpoint receiving the lead.
    pub endpoint: String,
    /// Local path or http(s) URL of the syllabus.
    pub asset: String,
    pub download_filename: String,
    pub download_dir: Option<PathBuf>,
    pub source: String,
    pub status: String,
    pub country_code: String,
    pub timezone: String,
    pub analytics_enabled: bool,
    pub download_delay_ms: u64,
    pub close_delay_ms: u64,
    pub notification_ttl_ms: u64,
    pub request_timeout_secs: Option<u64>,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            endpoint: "https://sheetdb.io/api/v1/ux76uiylu05e1".to_string(),
            asset: "DevOps_Guide_2025.pdf".to_string(),
            download_filename: "Velocity9_DevOps_Syllabus.pdf".to_string(),
            download_dir: None,
            source: "Website Form".to_string(),
            status: "Syllabus Download".to_string(),
            country_code: "+91".to_string(),
            timezone: "Asia/Kolkata".to_string(),
            analytics_enabled: true,
            download_delay_ms: 1000,
            close_delay_ms: 1000,
            notification_ttl_ms: 5000,
            request_timeout_secs: None,
        }
    }
}

impl FormSettings {
    /// Loads `settings.json`, writing the defaults out on first launch.
    pub fn load() -> Self {
        let first_launch = !data_file_exists(SETTINGS_FILE);
        let settings = load_json_or_default::<FormSettings>(SETTINGS_FILE);

        if first_launch {
            if let Err(e) = save_json(&settings, SETTINGS_FILE) {
                tracing::warn!("Could not write default settings: {}", e);
            }
        }

        settings
    }

    pub fn tz(&self) -> Result<Tz, FormError> {
        self.timezone.parse::<Tz>().map_err(|_| FormError::InvalidTimezone(self.timezone.clone()))
    }

    pub fn download_delay(&self) -> Duration {
        Duration::from_millis(self.download_delay_ms)
    }

    pub fn close_delay(&self) -> Duration {
        Duration::from_millis(self.close_delay_ms)
    }

    pub fn notification_ttl(&self) -> Duration {
        Duration::from_millis(self.notification_ttl_ms)
    }

    pub fn download_target(&self) -> PathBuf {
        let dir = self
            .download_dir
            .clone()
            .or_else(dirs::download_dir)
            .unwrap_or_else(get_app_data_dir);
        dir.join(&self.download_filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_fills_in_defaults() {
        let settings: FormSettings =
            serde_json::from_str(r#"{ "endpoint": "http://localhost:9000/leads" }"#).unwrap();
        assert_eq!(settings.endpoint, "http://localhost:9000/leads");
        assert_eq!(settings.download_filename, "Velocity9_DevOps_Syllabus.pdf");
        assert_eq!(settings.close_delay(), Duration::from_secs(1));
        assert_eq!(settings.notification_ttl(), Duration::from_secs(5));
    }

    #[test]
    fn timezone_must_be_known() {
        let mut settings = FormSettings::default();
        assert_eq!(settings.tz().unwrap(), chrono_tz::Asia::Kolkata);

        settings.timezone = "Mars/Olympus".to_string();
        assert!(matches!(settings.tz(), Err(FormError::InvalidTimezone(_))));
    }

    #[test]
    fn explicit_download_dir_wins() {
        let settings = FormSettings {
            download_dir: Some(PathBuf::from("/tmp/leads")),
            ..FormSettings::default()
        };
        assert_eq!(
            settings.download_target(),
            PathBuf::from("/tmp/leads/Velocity9_DevOps_Syllabus.pdf")
        );
    }
}
