//! HTTP source for Google Sheets CSV exports.

use std::time::Duration;

use reqwest::Url;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};

use highlights_model::SheetSpec;

use crate::error::{FetchError, LoadError, LoadResult, Result};
use crate::source::SheetSource;

/// Default Google Docs host.
pub const DEFAULT_BASE_URL: &str = "https://docs.google.com";

/// User agent string for export requests.
const USER_AGENT_VALUE: &str = concat!("book-highlights/", env!("CARGO_PKG_VERSION"));

/// Options for building a [`SheetsClient`].
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Scheme and host serving `/spreadsheets/d/<id>/export`.
    pub base_url: String,
    /// Whole-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

/// Fetches sheets of one publicly readable spreadsheet.
#[derive(Debug, Clone)]
pub struct SheetsClient {
    client: reqwest::Client,
    base_url: String,
    spreadsheet_id: String,
}

impl SheetsClient {
    /// Creates a client for the given spreadsheet.
    pub fn new(spreadsheet_id: impl Into<String>, options: ClientOptions) -> LoadResult<Self> {
        let spreadsheet_id = spreadsheet_id.into().trim().to_string();
        if spreadsheet_id.is_empty() {
            return Err(LoadError::MissingSpreadsheetId);
        }

        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| LoadError::Client(e.to_string()))?;

        Ok(Self {
            client,
            base_url: options.base_url.trim_end_matches('/').to_string(),
            spreadsheet_id,
        })
    }

    /// Returns the spreadsheet this client reads.
    pub fn spreadsheet_id(&self) -> &str {
        &self.spreadsheet_id
    }

    /// Builds the CSV export URL for one sheet.
    pub fn export_url(&self, sheet_id: &str) -> Result<Url> {
        let raw = format!(
            "{}/spreadsheets/d/{}/export",
            self.base_url, self.spreadsheet_id
        );
        let mut url = Url::parse(&raw).map_err(|e| FetchError::InvalidUrl(format!("{raw}: {e}")))?;
        url.query_pairs_mut()
            .append_pair("format", "csv")
            .append_pair("gid", sheet_id);
        Ok(url)
    }
}

impl SheetSource for SheetsClient {
    async fn fetch_csv(&self, sheet: &SheetSpec) -> Result<String> {
        let url = self.export_url(&sheet.id)?;

        tracing::debug!(sheet = %sheet.name, %url, "Fetching sheet export");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let text = response.text().await?;
        tracing::debug!(sheet = %sheet.name, bytes = text.len(), "Received sheet export");
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_url() {
        let client = SheetsClient::new("abc123", ClientOptions::default()).unwrap();
        assert_eq!(
            client.export_url("0").unwrap().as_str(),
            "https://docs.google.com/spreadsheets/d/abc123/export?format=csv&gid=0"
        );
    }

    #[test]
    fn test_export_url_custom_base_and_encoding() {
        let options = ClientOptions {
            base_url: "http://localhost:8080/".to_string(),
            timeout: Some(Duration::from_secs(5)),
        };
        let client = SheetsClient::new("id", options).unwrap();
        assert_eq!(
            client.export_url("a b&c").unwrap().as_str(),
            "http://localhost:8080/spreadsheets/d/id/export?format=csv&gid=a+b%26c"
        );
    }

    #[test]
    fn test_blank_spreadsheet_id_rejected() {
        let result = SheetsClient::new("  ", ClientOptions::default());
        assert!(matches!(result, Err(LoadError::MissingSpreadsheetId)));
    }

    #[test]
    fn test_invalid_base_url() {
        let options = ClientOptions {
            base_url: "not a url".to_string(),
            timeout: None,
        };
        let client = SheetsClient::new("id", options).unwrap();
        assert!(matches!(
            client.export_url("0"),
            Err(FetchError::InvalidUrl(_))
        ));
    }
}
