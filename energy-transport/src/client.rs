use std::{collections::HashMap, str::FromStr, time::Duration};

use crate::{errors::TransportError, request_builder::ReqBuilder};
use reqwest::header::{self, HeaderMap, HeaderName, HeaderValue};

#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new(
        base_url: &str,
        headers_opt: Option<HashMap<String, String>>,
    ) -> Result<Self, TransportError> {
        let mut headers = HeaderMap::new();

        headers.append(header::ACCEPT, "application/json".parse().unwrap());
        headers.append(header::CONTENT_TYPE, "application/json".parse().unwrap());

        if let Some(opt) = headers_opt {
            for (key, value) in opt {
                let name = HeaderName::from_str(&key)
                    .map_err(|_| energy_utils::HttpError::InvalidHeader)
                    .map_err(energy_utils::Error::from)?;
                let value = HeaderValue::from_str(&value)
                    .map_err(|_| energy_utils::HttpError::InvalidHeader)
                    .map_err(energy_utils::Error::from)?;
                headers.append(name, value);
            }
        };

        let client = reqwest::ClientBuilder::new()
            .default_headers(headers)
            .timeout(Duration::from_secs(15))
            .build()
            .map_err(|e| TransportError::Utils(energy_utils::Error::Http(e.into())))?;

        Ok(Self {
            base_url: base_url.to_owned(),
            client,
        })
    }

    pub fn post(&self, endpoint: &str) -> ReqBuilder {
        let url = format!("{}/{}", self.base_url, endpoint);
        tracing::debug!("request url = {}", url);
        ReqBuilder(self.client.post(url))
    }

    pub fn get(&self, endpoint: &str) -> ReqBuilder {
        let url = format!("{}/{}", self.base_url, endpoint);
        tracing::debug!("request url = {}", url);
        ReqBuilder(self.client.get(url))
    }

    pub async fn post_request<T, U>(&self, endpoint: &str, payload: T) -> Result<U, TransportError>
    where
        T: serde::Serialize + std::fmt::Debug,
        U: serde::de::DeserializeOwned,
    {
        self.post(endpoint).json(payload).send::<U>().await
    }
}
