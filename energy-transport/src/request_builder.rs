use crate::TransportError;
use reqwest::RequestBuilder;
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;

pub struct ReqBuilder(pub RequestBuilder);

impl ReqBuilder {
    pub fn json(mut self, v: impl Serialize + Debug) -> Self {
        tracing::debug!("request params: {:?}", v);
        self.0 = self.0.json(&v);
        self
    }

    pub fn query(mut self, v: impl Serialize + Debug) -> Self {
        tracing::debug!("request params: {:?}", v);
        self.0 = self.0.query(&v);
        self
    }

    pub async fn send<T: DeserializeOwned>(self) -> Result<T, TransportError> {
        let res = self
            .0
            .send()
            .await
            .map_err(|e| TransportError::Utils(energy_utils::Error::Http(e.into())))?;

        if !res.status().is_success() {
            let text = res
                .text()
                .await
                .map_err(|e| TransportError::Utils(energy_utils::Error::Http(e.into())))?;
            return Err(TransportError::NodeResponseError(text));
        }

        let response = res
            .text()
            .await
            .map_err(|e| TransportError::Utils(energy_utils::Error::Http(e.into())))?;
        tracing::debug!("response = {}", response);

        Ok(energy_utils::serde_func::serde_from_str(&response)?)
    }
}
