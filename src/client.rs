use crate::api::dto::{CheckResponse, MessageResponse};
use crate::domain::{CheckRequest, Feedback, SubscriptionRequest, SubscriptionToken};
use crate::error::ApiError;
use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{info, instrument, warn};

/// HTTP client for the expiry-check service and the subscription API.
#[derive(Debug, Clone)]
pub struct SslNotifyClient {
    http_client: Client,
    check_base_url: Url,
    api_base_url: Url,
}

impl SslNotifyClient {
    /// `timeout` of `None` lets a request wait as long as the server does.
    pub fn new(
        check_base_url: &str,
        api_base_url: &str,
        timeout: Option<Duration>,
    ) -> Result<Self, ApiError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http_client: builder.build()?,
            check_base_url: parse_base_url(check_base_url)?,
            api_base_url: parse_base_url(api_base_url)?,
        })
    }

    /// `GET /{host}?days={n}` on the check service.
    ///
    /// Returns the report text when the certificate is fine, or
    /// [`ApiError::Rejected`] when the service reports an error or an alert.
    #[instrument(skip_all, fields(host = %request.host(), days = %request.days()))]
    pub async fn check_certificate(&self, request: &CheckRequest) -> Result<String, ApiError> {
        let mut url = self.check_base_url.clone();
        push_segments(&mut url, &[request.host().as_str()]);
        url.query_pairs_mut()
            .append_pair("days", &request.days().to_string());

        info!("Checking certificate at {}", url);
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .inspect_err(|e| warn!("Certificate check request failed: {}", e))?;
        let body: CheckResponse = decode(response).await?;
        interpret_check(body)
    }

    /// `PUT /user/{email}?domain={host}&days={n}`.
    #[instrument(skip_all, fields(host = %request.host(), days = %request.days()))]
    pub async fn create_subscription(
        &self,
        request: &SubscriptionRequest,
    ) -> Result<String, ApiError> {
        let mut url = self.api_base_url.clone();
        push_segments(&mut url, &["user", request.email().as_str()]);
        url.query_pairs_mut()
            .append_pair("domain", request.host().as_str())
            .append_pair("days", &request.days().to_string());

        self.call_user_api(self.http_client.put(url)).await
    }

    /// `PUT /user/{user}?uuid={uuid}`.
    #[instrument(skip_all, fields(user = %token.user()))]
    pub async fn confirm_subscription(&self, token: &SubscriptionToken) -> Result<String, ApiError> {
        let url = self.user_url(token);
        self.call_user_api(self.http_client.put(url)).await
    }

    /// `DELETE /user/{user}?uuid={uuid}`.
    #[instrument(skip_all, fields(user = %token.user()))]
    pub async fn cancel_subscription(&self, token: &SubscriptionToken) -> Result<String, ApiError> {
        let url = self.user_url(token);
        self.call_user_api(self.http_client.delete(url)).await
    }

    /// `POST /feedback/` with the feedback as a JSON body.
    #[instrument(skip_all)]
    pub async fn send_feedback(&self, feedback: &Feedback) -> Result<String, ApiError> {
        let mut url = self.api_base_url.clone();
        push_segments(&mut url, &["feedback", ""]);
        self.call_user_api(self.http_client.post(url).json(feedback))
            .await
    }

    fn user_url(&self, token: &SubscriptionToken) -> Url {
        let mut url = self.api_base_url.clone();
        push_segments(&mut url, &["user", token.user()]);
        url.query_pairs_mut().append_pair("uuid", token.uuid());
        url
    }

    async fn call_user_api(&self, request: RequestBuilder) -> Result<String, ApiError> {
        let response = request
            .send()
            .await
            .inspect_err(|e| warn!("Subscription API request failed: {}", e))?;
        let status = response.status();
        let body: MessageResponse = decode(response).await?;

        if status.is_success() {
            info!(%status, "Subscription API accepted the request");
            Ok(body.message)
        } else {
            info!(%status, message = %body.message, "Subscription API refused the request");
            Err(ApiError::Rejected(body.message))
        }
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ApiError> {
    let url = Url::parse(raw).map_err(|e| ApiError::Decode(format!("invalid base URL {raw}: {e}")))?;
    if url.cannot_be_a_base() {
        return Err(ApiError::Decode(format!("{raw} cannot be used as a base URL")));
    }
    Ok(url)
}

/// Appends percent-encoded path segments to `url`.
fn push_segments(url: &mut Url, segments: &[&str]) {
    // parse_base_url rejected URLs without a path, so this always succeeds.
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let text = response.text().await?;
    serde_json::from_str(&text).map_err(|e| {
        warn!(%status, "Could not decode response body: {}", e);
        ApiError::Decode(format!("status {status}: {e}"))
    })
}

fn interpret_check(body: CheckResponse) -> Result<String, ApiError> {
    if let Some(err) = body.err {
        return Err(ApiError::Rejected(err));
    }
    let response = body
        .response
        .ok_or_else(|| ApiError::Decode("response field is missing".to_string()))?;
    if body.alert.is_some() {
        // Alerts carry their explanation in `response`, same as a healthy report.
        return Err(ApiError::Rejected(response));
    }
    Ok(response)
}
