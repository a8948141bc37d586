use std::{
    fs::File,
    io::{
        BufWriter,
        Write,
    },
    path::Path,
    time::Duration,
};

use reqwest::{
    blocking,
    header::{
        CONTENT_TYPE,
        USER_AGENT,
    },
    Client,
};
use serde_json::Value;

use crate::{
    core::{
        errors::STORAGE_FALLBACK,
        FormError,
    },
    form::payload::SubmissionPayload,
};

const AGENT: &str = "syllabus-form/0.1 (+reqwest)";

/// Async client for the storage endpoint. No timeout unless configured.
pub fn storage_client(timeout: Option<Duration>) -> Result<Client, FormError> {
    let mut builder = Client::builder().user_agent(AGENT);
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder.build().map_err(|e| FormError::Custom(format!("HTTP client build failed: {e}")))
}

/// POSTs one lead row. The body must be JSON whatever the status; a non-OK
/// status or an `error` string in the body is a failure.
pub async fn submit_lead(
    client: &Client,
    endpoint: &str,
    payload: &SubmissionPayload,
) -> Result<Value, FormError> {
    let response = client
        .post(endpoint)
        .header(CONTENT_TYPE, "application/json")
        .json(&payload.request())
        .send()
        .await?;

    let status = response.status();
    let text = response.text().await?;
    tracing::info!("Storage responded with {}", status);

    let body: Value =
        serde_json::from_str(&text).map_err(|e| FormError::InvalidResponse(e.to_string()))?;

    let server_error = body
        .get("error")
        .and_then(Value::as_str)
        .filter(|message| !message.trim().is_empty())
        .map(str::to_string);

    if !status.is_success() {
        return Err(FormError::Storage(server_error.unwrap_or_else(|| STORAGE_FALLBACK.into())));
    }

    if let Some(message) = server_error {
        return Err(FormError::Storage(message));
    }

    Ok(body)
}

pub fn download_to_file(url: &str, path: &Path) -> Result<u64, FormError> {
    let client = blocking::Client::builder()
        .timeout(Duration::from_secs(120))
        .build()
        .map_err(|e| FormError::Custom(format!("HTTP client build failed: {e}")))?;

    let mut resp = client
        .get(url)
        .header(USER_AGENT, AGENT)
        .send()
        .map_err(|e| FormError::Download(format!("GET {}: {}", url, e)))?;

    if !resp.status().is_success() {
        return Err(FormError::Download(format!("HTTP error {} from {}", resp.status(), url)));
    }

    let mut writer = BufWriter::new(File::create(path)?);
    let written = resp.copy_to(&mut writer)?;
    writer.flush()?;

    if written == 0 {
        return Err(FormError::Download(format!("{} returned an empty body", url)));
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> SubmissionPayload {
        SubmissionPayload {
            name: "Asha Rao".to_string(),
            email: "asha.rao@example.com".to_string(),
            mobile: "+919876543210".to_string(),
            date: "17 Oct 2026, 3:45 pm".to_string(),
            source: "Website Form".to_string(),
            status: "Syllabus Download".to_string(),
        }
    }

    #[tokio::test]
    async fn posts_wrapped_row_as_json() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/v1/sheet")
            .match_header("content-type", "application/json")
            .match_body(mockito::Matcher::Json(serde_json::json!({
                "data": [{
                    "Name": "Asha Rao",
                    "Email": "asha.rao@example.com",
                    "Mobile": "+919876543210",
                    "Date": "17 Oct 2026, 3:45 pm",
                    "Source": "Website Form",
                    "Status": "Syllabus Download"
                }]
            })))
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(r#"{"created":1}"#)
            .create_async()
            .await;

        let client = storage_client(None).unwrap();
        let endpoint = format!("{}/api/v1/sheet", server.url());
        let body = submit_lead(&client, &endpoint, &payload()).await.unwrap();

        assert_eq!(body["created"], 1);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn non_ok_status_surfaces_server_message() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/")
            .with_status(429)
            .with_body(r#"{"error":"quota exceeded"}"#)
            .create_async()
            .await;

        let client = storage_client(None).unwrap();
        let err = submit_lead(&client, &server.url(), &payload()).await.unwrap_err();

        assert!(matches!(&err, FormError::Storage(message) if message == "quota exceeded"));
        assert_eq!(err.user_message(), "quota exceeded");
    }

    #[tokio::test]
    async fn non_ok_status_without_message_uses_fallback() {
        let mut server = mockito::Server::new_async().await;
        server.mock("POST", "/").with_status(500).with_body("{}").create_async().await;

        let client = storage_client(None).unwrap();
        let err = submit_lead(&client, &server.url(), &payload()).await.unwrap_err();
        assert_eq!(err.user_message(), "Failed to save data");
    }

    #[tokio::test]
    async fn ok_status_with_error_field_is_a_failure() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/")
            .with_status(200)
            .with_body(r#"{"error":"sheet not found"}"#)
            .create_async()
            .await;

        let client = storage_client(None).unwrap();
        let err = submit_lead(&client, &server.url(), &payload()).await.unwrap_err();
        assert!(matches!(err, FormError::Storage(message) if message == "sheet not found"));
    }

    #[tokio::test]
    async fn malformed_body_is_a_failure() {
        let mut server = mockito::Server::new_async().await;
        server.mock("POST", "/").with_status(200).with_body("<html>ok</html>").create_async().await;

        let client = storage_client(None).unwrap();
        let err = submit_lead(&client, &server.url(), &payload()).await.unwrap_err();
        assert!(matches!(err, FormError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_network_error() {
        let client = storage_client(Some(Duration::from_secs(2))).unwrap();
        let err = submit_lead(&client, "http://127.0.0.1:9/", &payload()).await.unwrap_err();
        assert!(matches!(err, FormError::Reqwest(_)));
    }
}
