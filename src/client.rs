use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

use crate::chat::{ChatApiResponse, ChatRequest};
use crate::config::Config;
use crate::constants::{CHAT_COMPLETIONS_PATH, REQUEST_TIMEOUT_SECS};
use crate::error::{Error, Result};

#[async_trait]
pub trait ChatCompletion {
    async fn complete(&self, request: &ChatRequest) -> Result<String>;
}

pub struct ChatClient {
    http: reqwest::Client,
    url: String,
}

impl ChatClient {
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .default_headers(build_headers(config.api_key.as_deref())?)
            .build()
            .map_err(|err| Error::Config(format!("could not build HTTP client: {}", err)))?;

        Ok(ChatClient {
            http,
            url: format!("{}{}", config.endpoint, CHAT_COMPLETIONS_PATH),
        })
    }
}

fn build_headers(api_key: Option<&str>) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    if let Some(key) = api_key {
        let value = HeaderValue::from_str(&format!("Bearer {}", key))
            .map_err(|_| Error::Config("API key is not a valid header value".to_string()))?;
        headers.insert(AUTHORIZATION, value);
    }
    Ok(headers)
}

#[async_trait]
impl ChatCompletion for ChatClient {
    async fn complete(&self, request: &ChatRequest) -> Result<String> {
        debug!("POST {}", self.url);
        let response = self.http.post(&self.url).json(request).send().await?;

        let status = response.status();
        debug!("response status: {}", status);
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::RemoteCall(format!("{}: {}", status, body)));
        }

        let api_response = response.json::<ChatApiResponse>().await?;
        match api_response.choices.into_iter().next() {
            Some(choice) => Ok(choice.message.content),
            None => Err(Error::RemoteCall(
                "response contained no choices".to_string(),
            )),
        }
    }
}
