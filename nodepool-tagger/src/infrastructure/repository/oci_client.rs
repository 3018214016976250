use std::sync::Arc;

use reqwest::{header, RequestBuilder, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use typed_builder::TypedBuilder;
use url::Url;
use uuid::Uuid;

const OPC_REQUEST_ID: &str = "opc-request-id";

/// Error body returned by control plane APIs on non-2xx responses.
#[derive(Debug, thiserror::Error)]
#[error("{status} {code}: {message} (opc-request-id: {request_id})")]
pub struct OciServiceError {
    pub status: StatusCode,
    pub code: String,
    pub message: String,
    pub request_id: String,
}

#[derive(Deserialize, Default)]
struct ErrorBody {
    #[serde(default)]
    code: String,
    #[serde(default)]
    message: String,
}

/// Thin JSON client shared by the control plane repositories.
///
/// Request signing is not done here; an `authorization` value issued
/// elsewhere is attached verbatim when present.
#[derive(TypedBuilder)]
pub struct OciRestClient {
    http_client: Arc<reqwest::Client>,
    #[builder(default)]
    authorization: Option<String>,
}

impl OciRestClient {
    pub async fn get<T: DeserializeOwned>(&self, url: Url) -> anyhow::Result<T> {
        let response = self.send(self.http_client.get(url)).await?;
        Ok(response.json().await?)
    }

    pub async fn put<B: Serialize>(&self, url: Url, body: &B) -> anyhow::Result<()> {
        self.send(self.http_client.put(url).json(body)).await?;
        Ok(())
    }

    async fn send(&self, request: RequestBuilder) -> anyhow::Result<reqwest::Response> {
        let request_id = Uuid::new_v4().simple().to_string().to_uppercase();
        let mut request = request
            .header(header::ACCEPT, "application/json")
            .header(OPC_REQUEST_ID, &request_id);
        if let Some(authorization) = &self.authorization {
            request = request.header(header::AUTHORIZATION, authorization);
        }
        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("{} {} ({request_id})", status, response.url());
        if status.is_success() {
            return Ok(response);
        }

        let request_id = response
            .headers()
            .get(OPC_REQUEST_ID)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned)
            .unwrap_or(request_id);
        let ErrorBody { code, message } = response.json::<ErrorBody>().await.unwrap_or_default();
        Err(OciServiceError {
            status,
            code,
            message,
            request_id,
        }
        .into())
    }
}

/// Append path segments to an endpoint, escaping each one.
pub(super) fn endpoint_url<'a>(
    endpoint: &Url,
    segments: impl IntoIterator<Item = &'a str>,
) -> anyhow::Result<Url> {
    let mut url = endpoint.clone();
    url.path_segments_mut()
        .map_err(|_| anyhow::anyhow!("Endpoint {endpoint} cannot carry a path."))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_are_appended_to_endpoint_path() {
        let endpoint = Url::parse("https://iaas.us-ashburn-1.oraclecloud.com").unwrap();
        let url = endpoint_url(&endpoint, ["20160918", "instances", "ocid1.instance.oc1..a"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://iaas.us-ashburn-1.oraclecloud.com/20160918/instances/ocid1.instance.oc1..a"
        );
    }

    #[test]
    fn endpoint_prefix_path_is_kept() {
        let endpoint = Url::parse("http://localhost:9000/proxy/").unwrap();
        let url = endpoint_url(&endpoint, ["20180222", "nodePools", "a/b"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:9000/proxy/20180222/nodePools/a%2Fb");
    }

    #[test]
    fn service_error_message_carries_request_id() {
        let error = OciServiceError {
            status: StatusCode::NOT_FOUND,
            code: "NotAuthorizedOrNotFound".to_string(),
            message: "Authorization failed or requested resource not found.".to_string(),
            request_id: "ABC".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "404 Not Found NotAuthorizedOrNotFound: Authorization failed or requested resource not found. (opc-request-id: ABC)"
        );
    }
}
