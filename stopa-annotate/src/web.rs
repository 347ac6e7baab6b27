//! Stress annotation through a web page
//!
//! The text is submitted as a form to a stress-marking page and the result
//! is scraped from the element with a known id. Requests that fail, pages
//! without the element and pages with an empty element all count as failed
//! attempts; after the last attempt the annotator reports absence.

use crate::config::WebConfig;
use crate::error::{AnnotateError, Result};
use crate::html::element_text_by_id;
use crate::retry::RetryPolicy;
use std::time::Duration;
use stopa_core::StressAnnotator;

/// Fetches the result page for a text
pub trait Transport {
    /// Submit `text` and return the response body
    fn submit(&self, text: &str) -> Result<String>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn submit(&self, text: &str) -> Result<String> {
        (**self).submit(text)
    }
}

/// Blocking HTTP form submission
pub struct HttpTransport {
    client: reqwest::blocking::Client,
    endpoint: String,
    form_field: String,
}

impl HttpTransport {
    /// Build a client for the configured endpoint
    pub fn new(config: &WebConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            form_field: config.form_field.clone(),
        })
    }
}

impl Transport for HttpTransport {
    fn submit(&self, text: &str) -> Result<String> {
        log::debug!("submitting {} bytes to {}", text.len(), self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .form(&[(self.form_field.as_str(), text)])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(AnnotateError::HttpStatus {
                status: status.as_u16(),
            });
        }

        Ok(response.text()?)
    }
}

/// Annotator backed by a stress-marking web page
pub struct WebAnnotator<T = HttpTransport> {
    transport: T,
    result_id: String,
    retry: RetryPolicy,
}

impl WebAnnotator<HttpTransport> {
    /// HTTP annotator from configuration
    pub fn from_config(config: &WebConfig) -> Result<Self> {
        let transport = HttpTransport::new(config)?;
        Ok(Self::with_transport(transport, config))
    }
}

impl<T: Transport> WebAnnotator<T> {
    /// Annotator over any transport
    pub fn with_transport(transport: T, config: &WebConfig) -> Self {
        Self {
            transport,
            result_id: config.result_id.clone(),
            retry: config.retry,
        }
    }

    /// One submission: fetch the page and pull the result out of it
    fn attempt(&self, text: &str) -> Result<String> {
        let page = self.transport.submit(text)?;
        let result = element_text_by_id(&page, &self.result_id).ok_or_else(|| {
            AnnotateError::MissingResult {
                id: self.result_id.clone(),
            }
        })?;

        let result = result.trim();
        if result.is_empty() {
            return Err(AnnotateError::EmptyResult {
                id: self.result_id.clone(),
            });
        }
        Ok(result.to_string())
    }
}

impl<T: Transport> StressAnnotator for WebAnnotator<T> {
    fn annotate(&self, text: &str) -> Option<String> {
        self.retry.run("web annotation", |_| self.attempt(text))
    }

    fn name(&self) -> &str {
        "web"
    }
}
