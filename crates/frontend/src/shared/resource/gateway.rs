//! Remote resource gateway: one call per verb against a collection endpoint.

use super::config::{ApiConfig, ConfigError, ResourcePaths};
use super::error::GatewayError;
use super::payload::{FieldBag, PayloadEncoding};
use super::traits::Resource;
use async_trait::async_trait;
use contracts::shared::api_response::ApiResponse;
use gloo_net::http::{Request, RequestBuilder};
use gloo_timers::callback::Timeout;
use serde_json::Value;
use std::marker::PhantomData;
use std::rc::Rc;
use web_sys::AbortController;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    List,
    Create,
    Update,
    Delete,
}

impl Verb {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

/// Remote CRUD calls for one resource collection.
///
/// Calls are never retried. Dropping the returned future abandons the result;
/// the server is not told.
#[async_trait(?Send)]
pub trait ResourceGateway<R: Resource> {
    /// Whether the collection has an endpoint for `verb`
    fn supports(&self, _verb: Verb) -> bool {
        true
    }

    async fn list(&self) -> Result<Vec<R>, GatewayError>;

    /// `Some` when the server returned the created record
    async fn create(&self, payload: FieldBag) -> Result<Option<R>, GatewayError>;

    async fn update(&self, id: &str, payload: FieldBag) -> Result<Option<R>, GatewayError>;

    async fn delete(&self, id: &str) -> Result<(), GatewayError>;
}

/// Turn an HTTP status and body into the envelope's `data` or a classified error.
pub fn interpret_response(status: u16, body: &str) -> Result<Option<Value>, GatewayError> {
    let ok_status = (200..300).contains(&status);
    match serde_json::from_str::<ApiResponse<Value>>(body) {
        Ok(envelope) if ok_status && envelope.success => Ok(envelope.data),
        Ok(envelope) => Err(classify(status, envelope.message_or_fallback())),
        Err(e) if ok_status => Err(GatewayError::Server(format!(
            "Unexpected response from server: {}",
            e
        ))),
        Err(_) => Err(classify(status, format!("HTTP {}", status))),
    }
}

fn classify(status: u16, message: String) -> GatewayError {
    match status {
        404 => GatewayError::NotFound(message),
        400 | 422 => GatewayError::Validation(message),
        _ => GatewayError::Server(message),
    }
}

/// Gateway over the storefront HTTP API (gloo-net / browser fetch)
pub struct HttpGateway<R> {
    config: Rc<ApiConfig>,
    paths: ResourcePaths,
    _marker: PhantomData<fn() -> R>,
}

impl<R: Resource> HttpGateway<R> {
    pub fn new(config: Rc<ApiConfig>) -> Result<Self, ConfigError> {
        let paths = config.paths(R::KIND)?.clone();
        Ok(Self {
            config,
            paths,
            _marker: PhantomData,
        })
    }

    fn unsupported(verb: Verb) -> GatewayError {
        GatewayError::Unsupported {
            resource: R::KIND.as_str(),
            verb: verb.as_str(),
        }
    }

    fn template(&self, verb: Verb) -> Option<&str> {
        match verb {
            Verb::List => Some(&self.paths.list),
            Verb::Create => Some(&self.paths.create),
            Verb::Update => self.paths.update.as_deref(),
            Verb::Delete => self.paths.delete.as_deref(),
        }
    }

    fn url(&self, verb: Verb, id: Option<&str>) -> Result<String, GatewayError> {
        let template = self.template(verb).ok_or_else(|| Self::unsupported(verb))?;
        Ok(match id {
            Some(id) => self.config.url_for_id(template, id),
            None => self.config.url(template),
        })
    }

    async fn send(
        &self,
        verb: Verb,
        url: String,
        payload: Option<&FieldBag>,
    ) -> Result<Option<Value>, GatewayError> {
        log::debug!("{} {}: {}", R::KIND.as_str(), verb.as_str(), url);

        let abort = AbortController::new()
            .map_err(|e| GatewayError::Transport(format!("{e:?}")))?;
        let signal = abort.signal();
        let timeout_ms = self.config.timeout_ms;
        // Dropping the guard at the end of the call cancels the timer.
        let _timeout = Timeout::new(timeout_ms, move || abort.abort());

        let builder: RequestBuilder = match verb {
            Verb::List => Request::get(&url),
            Verb::Create => Request::post(&url),
            Verb::Update => Request::put(&url),
            Verb::Delete => Request::delete(&url),
        }
        .header("Accept", "application/json")
        .abort_signal(Some(&signal));

        let request = match payload {
            None => builder.build(),
            Some(bag) => match bag.encoding() {
                PayloadEncoding::Json => builder.json(&bag.to_json()),
                PayloadEncoding::Multipart => {
                    // The browser sets the multipart boundary header itself.
                    let form = bag
                        .to_form_data()
                        .map_err(|e| GatewayError::Transport(format!("{e:?}")))?;
                    builder.body(form)
                }
            },
        }
        .map_err(|e| GatewayError::Transport(format!("Failed to build request: {}", e)))?;

        let response = request.send().await.map_err(|e| {
            if signal.aborted() {
                GatewayError::Transport(format!("request timed out after {} ms", timeout_ms))
            } else {
                GatewayError::Transport(format!("Failed to send request: {}", e))
            }
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::Transport(format!("Failed to read response: {}", e)))?;

        let result = interpret_response(status, &body);
        if let Err(e) = &result {
            log::warn!(
                "{} {} failed ({}): {}",
                R::KIND.as_str(),
                verb.as_str(),
                e.kind(),
                e
            );
        }
        result
    }

    fn saved_record(data: Option<Value>) -> Option<R> {
        let data = data?;
        match serde_json::from_value::<R>(data) {
            Ok(record) => Some(record),
            Err(e) => {
                log::debug!("{} response data is not a record: {}", R::KIND.as_str(), e);
                None
            }
        }
    }
}

#[async_trait(?Send)]
impl<R: Resource> ResourceGateway<R> for HttpGateway<R> {
    fn supports(&self, verb: Verb) -> bool {
        self.template(verb).is_some()
    }

    async fn list(&self) -> Result<Vec<R>, GatewayError> {
        let url = self.url(Verb::List, None)?;
        match self.send(Verb::List, url, None).await? {
            Some(data) => serde_json::from_value(data).map_err(|e| {
                GatewayError::Server(format!("Failed to parse {}: {}", R::COLLECTION_LABEL, e))
            }),
            None => Ok(Vec::new()),
        }
    }

    async fn create(&self, payload: FieldBag) -> Result<Option<R>, GatewayError> {
        let url = self.url(Verb::Create, None)?;
        let data = self.send(Verb::Create, url, Some(&payload)).await?;
        Ok(Self::saved_record(data))
    }

    async fn update(&self, id: &str, payload: FieldBag) -> Result<Option<R>, GatewayError> {
        let url = self.url(Verb::Update, Some(id))?;
        let data = self.send(Verb::Update, url, Some(&payload)).await?;
        Ok(Self::saved_record(data))
    }

    async fn delete(&self, id: &str) -> Result<(), GatewayError> {
        let url = self.url(Verb::Delete, Some(id))?;
        self.send(Verb::Delete, url, None).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_yields_data() {
        let data = interpret_response(200, r#"{"success":true,"data":[{"categoryName":"Shoes"}]}"#)
            .unwrap();
        assert_eq!(data, Some(serde_json::json!([{ "categoryName": "Shoes" }])));
    }

    #[test]
    fn test_success_false_is_server_error() {
        assert_eq!(
            interpret_response(200, r#"{"success":false,"message":"Hero limit reached"}"#),
            Err(GatewayError::Server("Hero limit reached".into()))
        );
        assert_eq!(
            interpret_response(200, r#"{"success":false}"#),
            Err(GatewayError::Server("Something went wrong".into()))
        );
    }

    #[test]
    fn test_status_classification() {
        assert_eq!(
            interpret_response(404, r#"{"success":false,"message":"Product not found"}"#),
            Err(GatewayError::NotFound("Product not found".into()))
        );
        assert_eq!(
            interpret_response(400, r#"{"success":false,"message":"Category already exists"}"#),
            Err(GatewayError::Validation("Category already exists".into()))
        );
        assert_eq!(
            interpret_response(502, "<html>Bad gateway</html>"),
            Err(GatewayError::Server("HTTP 502".into()))
        );
    }

    #[test]
    fn test_garbage_on_success_status() {
        assert!(matches!(
            interpret_response(200, "not json"),
            Err(GatewayError::Server(_))
        ));
    }
}
