//! REST client for the remote `/accessories` resource
//!
//! One request/response round trip per operation: no retry, no caching, no
//! timeout override. Transport failures and non-2xx statuses are both plain
//! failures; callers do not distinguish causes, but full detail is logged
//! for diagnostics.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{CoreError, CoreResult};
use crate::types::{Accessory, AccessoryId, AccessoryPayload};

const RESOURCE_PATH: &str = "/accessories";

/// HTTP client bound to a fixed base URL.
pub struct AccessoryClient {
    client: reqwest::Client,
    base_url: String,
}

impl AccessoryClient {
    /// Create a client for `{base_url}/accessories`. A trailing slash on the
    /// base URL is tolerated.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Fetch the full list.
    ///
    /// A response body that is not a JSON array is treated as an empty list
    /// rather than an error.
    pub async fn list(&self) -> CoreResult<Vec<Accessory>> {
        let url = self.url(None);
        let (_, body) = execute(self.client.get(&url), "GET", &url).await?;

        let value: Value = parse_json(&body)?;
        match value {
            Value::Array(entries) => entries
                .into_iter()
                .map(|entry| {
                    serde_json::from_value(entry).map_err(|e| CoreError::Parse(e.to_string()))
                })
                .collect(),
            other => {
                log::warn!("GET {url} returned non-array payload ({other:?}), treating as empty");
                Ok(Vec::new())
            }
        }
    }

    /// Create a record; the server assigns the id and returns the stored
    /// record.
    pub async fn create(&self, payload: &AccessoryPayload) -> CoreResult<Accessory> {
        let url = self.url(None);
        let (_, body) = execute(self.client.post(&url).json(payload), "POST", &url).await?;
        parse_json(&body)
    }

    /// Update a record; the server returns the updated record.
    pub async fn update(
        &self,
        id: &AccessoryId,
        payload: &AccessoryPayload,
    ) -> CoreResult<Accessory> {
        let url = self.url(Some(id));
        let (_, body) = execute(self.client.put(&url).json(payload), "PUT", &url).await?;
        parse_json(&body)
    }

    /// Delete a record. No response body is required.
    pub async fn delete(&self, id: &AccessoryId) -> CoreResult<()> {
        let url = self.url(Some(id));
        execute(self.client.delete(&url), "DELETE", &url).await?;
        Ok(())
    }

    fn url(&self, id: Option<&AccessoryId>) -> String {
        match id {
            Some(id) => format!("{}{RESOURCE_PATH}/{id}", self.base_url),
            None => format!("{}{RESOURCE_PATH}", self.base_url),
        }
    }
}

/// Send a request and read the response body.
///
/// Unified handling: logging, network error mapping, status check. Any 2xx
/// status is success; everything else becomes `CoreError::Api`.
async fn execute(
    request_builder: RequestBuilder,
    method: &str,
    url: &str,
) -> CoreResult<(u16, String)> {
    log::debug!("{method} {url}");

    let response = request_builder
        .send()
        .await
        .map_err(|e| CoreError::Network(e.to_string()))?;

    let status = response.status();
    log::debug!("Response Status: {status}");

    let body = response
        .text()
        .await
        .map_err(|e| CoreError::Network(format!("failed to read response body: {e}")))?;

    if !status.is_success() {
        log::error!("{method} {url} failed: HTTP {status}: {body}");
        return Err(CoreError::Api {
            status: status.as_u16(),
            message: body,
        });
    }

    log::debug!("Response Body: {body}");
    Ok((status.as_u16(), body))
}

/// Parse a JSON response body.
fn parse_json<T: DeserializeOwned>(body: &str) -> CoreResult<T> {
    serde_json::from_str(body).map_err(|e| {
        log::error!("JSON parse failed: {e}");
        log::error!("Raw response: {body}");
        CoreError::Parse(e.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_base_and_resource() {
        let client = AccessoryClient::new("http://localhost:3000");
        assert_eq!(client.url(None), "http://localhost:3000/accessories");
    }

    #[test]
    fn url_tolerates_trailing_slash() {
        let client = AccessoryClient::new("http://localhost:3000/");
        assert_eq!(client.url(None), "http://localhost:3000/accessories");
    }

    #[test]
    fn item_urls_are_path_based_for_both_id_forms() {
        let client = AccessoryClient::new("http://localhost:3000");
        assert_eq!(
            client.url(Some(&AccessoryId::Number(7))),
            "http://localhost:3000/accessories/7"
        );
        assert_eq!(
            client.url(Some(&AccessoryId::Text("rec_7".into()))),
            "http://localhost:3000/accessories/rec_7"
        );
    }

    #[test]
    fn parse_json_reports_parse_errors() {
        let result: CoreResult<Accessory> = parse_json("not json");
        assert!(matches!(result, Err(CoreError::Parse(_))));
    }

    #[test]
    fn parse_json_decodes_a_record() {
        let record: Accessory =
            parse_json(r#"{"id":1,"name":"Helmet","price":1500,"link":""}"#).unwrap();
        assert_eq!(record.name, "Helmet");
        assert_eq!(record.id, AccessoryId::Number(1));
    }
}
