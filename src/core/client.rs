//! Blocking HTTP wrapper shared by all engines.
//!
//! One `HttpClient` belongs to exactly one engine instance. The inner
//! reqwest client is created lazily on first use; proxy and timeout
//! settings are validated up front so misconfiguration surfaces before
//! any network activity. No retries, no caching.

use std::sync::OnceLock;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::Proxy;
use tracing::debug;

use crate::core::config::EngineSettings;
use crate::core::errors::{Result, TranslationError};

/// Request timeout applied when the configuration does not set one
pub const DEFAULT_TIMEOUT_SECS: f64 = 7.0;

/// Per-engine blocking HTTP client with timeout, proxy and User-Agent
#[derive(Debug)]
pub struct HttpClient {
    timeout: Duration,
    proxy: Option<Proxy>,
    user_agent: Option<String>,
    handle: OnceLock<Client>,
}

impl HttpClient {
    /// Build a client from engine settings.
    ///
    /// `default_agent` is the User-Agent an engine wants when the
    /// configuration has no `agent` key; `None` leaves reqwest's own.
    pub fn from_settings(settings: &EngineSettings, default_agent: Option<&str>) -> Result<Self> {
        // Duration::from_secs_f64 panics on negative or non-finite input
        let timeout = match settings.get("timeout") {
            Some(raw) => raw
                .parse::<f64>()
                .ok()
                .filter(|secs| secs.is_finite() && *secs >= 0.0)
                .ok_or_else(|| {
                    TranslationError::config(
                        settings.engine(),
                        format!("invalid timeout value `{raw}`"),
                    )
                })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        // The proxy applies to http and https targets alike.
        let proxy = match settings.get("proxy") {
            Some(url) => Some(Proxy::all(url).map_err(|e| {
                TranslationError::config(settings.engine(), format!("invalid proxy `{url}`: {e}"))
            })?),
            None => None,
        };

        let user_agent = settings
            .get("agent")
            .map(str::to_string)
            .or_else(|| default_agent.map(str::to_string));

        Ok(Self {
            timeout: Duration::from_secs_f64(timeout),
            proxy,
            user_agent,
            handle: OnceLock::new(),
        })
    }

    /// Lazily create the underlying reqwest client
    fn handle(&self) -> Result<&Client> {
        if let Some(client) = self.handle.get() {
            return Ok(client);
        }
        let mut builder = Client::builder().timeout(self.timeout);
        if let Some(proxy) = &self.proxy {
            builder = builder.proxy(proxy.clone());
        }
        if let Some(agent) = &self.user_agent {
            builder = builder.user_agent(agent.clone());
        }
        let client = builder.build()?;
        Ok(self.handle.get_or_init(|| client))
    }

    /// Perform a GET request, returning the raw response body
    pub fn get(&self, url: &str, query: &[(&str, &str)], headers: &[(&str, &str)]) -> Result<String> {
        let mut request = self.handle()?.get(url).query(query);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }
        let response = request.send()?;
        debug!(status = %response.status(), url, "GET");
        Ok(response.text()?)
    }

    /// Perform a form-encoded POST request, returning the raw body
    pub fn post_form(
        &self,
        url: &str,
        form: &[(&str, &str)],
        headers: &[(&str, &str)],
    ) -> Result<String> {
        let mut request = self.handle()?.post(url).form(form);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }
        let response = request.send()?;
        debug!(status = %response.status(), url, "POST form");
        Ok(response.text()?)
    }

    /// Perform a JSON POST request, returning the raw body.
    ///
    /// The serialized body already carries `application/json` as the
    /// content type; callers must not add their own.
    pub fn post_json(
        &self,
        url: &str,
        query: &[(&str, &str)],
        body: &serde_json::Value,
        headers: &[(&str, &str)],
    ) -> Result<String> {
        let mut request = self.handle()?.post(url).query(query).json(body);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }
        let response = request.send()?;
        debug!(status = %response.status(), url, "POST json");
        Ok(response.text()?)
    }
}
