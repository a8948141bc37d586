use chrono::{
    DateTime,
    Utc,
};
use serde::Serialize;

use super::fields::FormFields;
use crate::core::{
    settings::FormSettings,
    FormError,
};

const TIMESTAMP_FORMAT: &str = "%-d %b %Y, %-I:%M %P";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SubmissionPayload {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub date: String,
    pub source: String,
    pub status: String,
}

/// Body wrapper expected by the storage API: `{ "data": [row] }`.
#[derive(Debug, Serialize)]
pub struct SheetRequest<'a> {
    pub data: [&'a SubmissionPayload; 1],
}

impl SubmissionPayload {
    pub fn build(
        fields: &FormFields,
        settings: &FormSettings,
        at: DateTime<Utc>,
    ) -> Result<Self, FormError> {
        let tz = settings.tz()?;

        Ok(Self {
            name: fields.name.trim().to_string(),
            email: fields.email.trim().to_lowercase(),
            mobile: format!("{}{}", settings.country_code, fields.mobile.trim()),
            date: at.with_timezone(&tz).format(TIMESTAMP_FORMAT).to_string(),
            source: settings.source.clone(),
            status: settings.status.clone(),
        })
    }

    pub fn request(&self) -> SheetRequest<'_> {
        SheetRequest { data: [self] }
    }

    pub fn email_domain(&self) -> &str {
        self.email.rsplit_once('@').map(|(_, domain)| domain).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn sample_fields() -> FormFields {
        let mut fields = FormFields::default();
        fields.name = "  Asha Rao ".to_string();
        fields.email = " Asha.Rao@EXAMPLE.com".to_string();
        fields.mobile = "9876543210".to_string();
        fields.terms = true;
        fields
    }

    #[test]
    fn normalizes_contact_details() {
        let at = Utc.with_ymd_and_hms(2026, 10, 17, 10, 15, 0).unwrap();
        let payload =
            SubmissionPayload::build(&sample_fields(), &FormSettings::default(), at).unwrap();

        assert_eq!(payload.name, "Asha Rao");
        assert_eq!(payload.email, "asha.rao@example.com");
        assert_eq!(payload.mobile, "+919876543210");
        assert_eq!(payload.source, "Website Form");
        assert_eq!(payload.status, "Syllabus Download");
        assert_eq!(payload.email_domain(), "example.com");
    }

    #[test]
    fn date_is_rendered_in_india_time() {
        // 10:15 UTC is 15:45 IST
        let at = Utc.with_ymd_and_hms(2026, 10, 17, 10, 15, 0).unwrap();
        let payload =
            SubmissionPayload::build(&sample_fields(), &FormSettings::default(), at).unwrap();
        assert_eq!(payload.date, "17 Oct 2026, 3:45 pm");

        let late = Utc.with_ymd_and_hms(2026, 1, 4, 20, 0, 0).unwrap();
        let payload =
            SubmissionPayload::build(&sample_fields(), &FormSettings::default(), late).unwrap();
        assert_eq!(payload.date, "5 Jan 2026, 1:30 am");
    }

    #[test]
    fn request_body_shape() {
        let at = Utc.with_ymd_and_hms(2026, 10, 17, 10, 15, 0).unwrap();
        let payload =
            SubmissionPayload::build(&sample_fields(), &FormSettings::default(), at).unwrap();
        let body = serde_json::to_value(payload.request()).unwrap();

        assert_eq!(
            body,
            serde_json::json!({
                "data": [{
                    "Name": "Asha Rao",
                    "Email": "asha.rao@example.com",
                    "Mobile": "+919876543210",
                    "Date": "17 Oct 2026, 3:45 pm",
                    "Source": "Website Form",
                    "Status": "Syllabus Download"
                }]
            })
        );
    }

    #[test]
    fn unknown_timezone_is_rejected() {
        let settings =
            FormSettings { timezone: "Nowhere/Town".to_string(), ..FormSettings::default() };
        let result = SubmissionPayload::build(&sample_fields(), &settings, Utc::now());
        assert!(matches!(result, Err(FormError::InvalidTimezone(_))));
    }
}
