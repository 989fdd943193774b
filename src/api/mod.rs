// This file is part of the terraform-provider-nios project
//
// Copyright (C) ANEO, 2026-2026. All rights reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License")
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Minimal client for the Infoblox WAPI (NIOS REST API).
//!
//! Objects live under `/wapi/v<version>/<object-type>` and are addressed by
//! the opaque `_ref` the server assigns to them. Reads return only the basic
//! fields unless more are requested with `_return_fields+`, and write
//! responses are a bare ref string unless `_return_as_object=1` asks for the
//! full object wrapped in a `{"result": ...}` envelope.

use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::debug;
use url::Url;

use tf_provider::{AttributePath, Diagnostics};

pub mod dto;
pub mod error;

pub use error::WapiError;

/// Default WAPI version spoken when the provider configuration does not pin
/// one.
pub const DEFAULT_WAPI_VERSION: &str = "2.13.1";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// A serializable type that maps to a WAPI object type.
pub trait WapiObject: Serialize + DeserializeOwned + Send + Sync {
    /// WAPI object type, e.g. `"gmcgroup"` or `"grid:servicerestart:group:order"`.
    const OBJECT_TYPE: &'static str;
}

/// Connection settings for [`WapiClient::new`].
#[derive(Debug, Clone)]
pub struct WapiConfig {
    pub server_url: String,
    pub username: String,
    pub password: String,
    pub wapi_version: String,
    pub ssl_verify: bool,
    pub timeout: Duration,
}

impl Default for WapiConfig {
    fn default() -> Self {
        Self {
            server_url: String::new(),
            username: String::new(),
            password: String::new(),
            wapi_version: DEFAULT_WAPI_VERSION.to_owned(),
            ssl_verify: true,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// HTTP client bound to one Grid Master.
///
/// Cloning is cheap and clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct WapiClient {
    http: reqwest::Client,
    base_url: Url,
    username: String,
    password: String,
}

impl WapiClient {
    pub fn new(config: &WapiConfig) -> Result<Self, WapiError> {
        let mut builder = reqwest::Client::builder().timeout(config.timeout);
        if !config.ssl_verify {
            builder = builder.danger_accept_invalid_certs(true);
        }
        let http = builder.build()?;

        let mut base = config.server_url.trim_end_matches('/').to_owned();
        base.push_str("/wapi/v");
        base.push_str(&config.wapi_version);
        base.push('/');
        let base_url = Url::parse(&base)?;

        Ok(Self {
            http,
            base_url,
            username: config.username.clone(),
            password: config.password.clone(),
        })
    }

    /// POST a new object.
    pub fn create<'a, T: WapiObject>(&'a self, body: &'a T) -> CreateRequest<'a, T> {
        CreateRequest {
            client: self,
            body,
            projection: Projection::default(),
        }
    }

    /// GET an object by ref.
    pub fn read<'a, T: WapiObject>(&'a self, object_ref: &'a str) -> ReadRequest<'a, T> {
        ReadRequest {
            client: self,
            object_ref,
            projection: Projection::default(),
            _object: PhantomData,
        }
    }

    /// PUT changed fields onto an existing object.
    pub fn update<'a, T: WapiObject>(
        &'a self,
        object_ref: &'a str,
        body: &'a T,
    ) -> UpdateRequest<'a, T> {
        UpdateRequest {
            client: self,
            object_ref,
            body,
            projection: Projection::default(),
        }
    }

    /// DELETE an object by ref.
    pub fn delete<'a>(&'a self, object_ref: &'a str) -> DeleteRequest<'a> {
        DeleteRequest {
            client: self,
            object_ref,
        }
    }

    /// GET objects of a type, optionally narrowed by search filters.
    pub fn search<T: WapiObject>(&self) -> SearchRequest<'_, T> {
        SearchRequest {
            client: self,
            filters: Vec::new(),
            max_results: None,
            projection: Projection::default(),
            _object: PhantomData,
        }
    }

    // `Url::join` would take the colons of a path like
    // "grid:servicerestart:group:order" for a scheme separator, so the
    // absolute URL is assembled by hand.
    fn object_url(&self, path: &str) -> Result<Url, WapiError> {
        Ok(Url::parse(&format!("{}{path}", self.base_url))?)
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<String, WapiError> {
        let response = request
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(WapiError::api(status.as_u16(), &body));
        }
        Ok(body)
    }
}

/// Response shaping shared by all object requests.
#[derive(Debug, Default, Clone)]
struct Projection<'a> {
    return_fields_plus: Option<&'a str>,
    return_as_object: bool,
}

impl Projection<'_> {
    fn apply(&self, url: &mut Url) {
        let mut pairs = url.query_pairs_mut();
        if let Some(fields) = self.return_fields_plus {
            pairs.append_pair("_return_fields+", fields);
        }
        if self.return_as_object {
            pairs.append_pair("_return_as_object", "1");
        }
    }
}

#[derive(Deserialize)]
struct ResultEnvelope<T> {
    result: T,
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, WapiError> {
    serde_json::from_str(body).map_err(|err| WapiError::Decode {
        message: err.to_string(),
        body: body.to_owned(),
    })
}

fn decode_object<T: DeserializeOwned>(body: &str, enveloped: bool) -> Result<T, WapiError> {
    if enveloped {
        Ok(decode::<ResultEnvelope<T>>(body)?.result)
    } else {
        decode(body)
    }
}

pub struct CreateRequest<'a, T: WapiObject> {
    client: &'a WapiClient,
    body: &'a T,
    projection: Projection<'a>,
}

impl<'a, T: WapiObject> CreateRequest<'a, T> {
    /// Request these comma-separated fields on top of the basic ones.
    pub fn return_fields_plus(mut self, fields: &'a str) -> Self {
        self.projection.return_fields_plus = Some(fields);
        self
    }

    /// Wrap the response in a `{"result": ...}` envelope holding the full
    /// object instead of the bare ref string.
    pub fn return_as_object(mut self) -> Self {
        self.projection.return_as_object = true;
        self
    }

    pub async fn execute(self) -> Result<T, WapiError> {
        let mut url = self.client.object_url(T::OBJECT_TYPE)?;
        self.projection.apply(&mut url);
        debug!("POST {url}");
        let body = self
            .client
            .send(self.client.http.post(url).json(self.body))
            .await?;
        decode_object(&body, self.projection.return_as_object)
    }
}

pub struct ReadRequest<'a, T: WapiObject> {
    client: &'a WapiClient,
    object_ref: &'a str,
    projection: Projection<'a>,
    _object: PhantomData<T>,
}

impl<'a, T: WapiObject> ReadRequest<'a, T> {
    pub fn return_fields_plus(mut self, fields: &'a str) -> Self {
        self.projection.return_fields_plus = Some(fields);
        self
    }

    pub fn return_as_object(mut self) -> Self {
        self.projection.return_as_object = true;
        self
    }

    pub async fn execute(self) -> Result<T, WapiError> {
        let mut url = self.client.object_url(self.object_ref)?;
        self.projection.apply(&mut url);
        debug!("GET {url}");
        let body = self.client.send(self.client.http.get(url)).await?;
        decode_object(&body, self.projection.return_as_object)
    }
}

pub struct UpdateRequest<'a, T: WapiObject> {
    client: &'a WapiClient,
    object_ref: &'a str,
    body: &'a T,
    projection: Projection<'a>,
}

impl<'a, T: WapiObject> UpdateRequest<'a, T> {
    pub fn return_fields_plus(mut self, fields: &'a str) -> Self {
        self.projection.return_fields_plus = Some(fields);
        self
    }

    pub fn return_as_object(mut self) -> Self {
        self.projection.return_as_object = true;
        self
    }

    pub async fn execute(self) -> Result<T, WapiError> {
        let mut url = self.client.object_url(self.object_ref)?;
        self.projection.apply(&mut url);
        debug!("PUT {url}");
        let body = self
            .client
            .send(self.client.http.put(url).json(self.body))
            .await?;
        decode_object(&body, self.projection.return_as_object)
    }
}

pub struct DeleteRequest<'a> {
    client: &'a WapiClient,
    object_ref: &'a str,
}

impl DeleteRequest<'_> {
    /// Returns the ref of the deleted object.
    pub async fn execute(self) -> Result<String, WapiError> {
        let url = self.client.object_url(self.object_ref)?;
        debug!("DELETE {url}");
        let body = self.client.send(self.client.http.delete(url)).await?;
        decode(&body)
    }
}

pub struct SearchRequest<'a, T: WapiObject> {
    client: &'a WapiClient,
    filters: Vec<(&'a str, String)>,
    max_results: Option<u32>,
    projection: Projection<'a>,
    _object: PhantomData<T>,
}

impl<'a, T: WapiObject> SearchRequest<'a, T> {
    pub fn filter(mut self, field: &'a str, value: impl Into<String>) -> Self {
        self.filters.push((field, value.into()));
        self
    }

    pub fn max_results(mut self, max_results: u32) -> Self {
        self.max_results = Some(max_results);
        self
    }

    pub fn return_fields_plus(mut self, fields: &'a str) -> Self {
        self.projection.return_fields_plus = Some(fields);
        self
    }

    pub fn return_as_object(mut self) -> Self {
        self.projection.return_as_object = true;
        self
    }

    pub async fn execute(self) -> Result<Vec<T>, WapiError> {
        let mut url = self.client.object_url(T::OBJECT_TYPE)?;
        {
            let mut pairs = url.query_pairs_mut();
            for (field, value) in &self.filters {
                pairs.append_pair(field, value);
            }
            if let Some(max_results) = self.max_results {
                pairs.append_pair("_max_results", &max_results.to_string());
            }
        }
        self.projection.apply(&mut url);
        debug!("GET {url}");
        let body = self.client.send(self.client.http.get(url)).await?;
        decode_object(&body, self.projection.return_as_object)
    }
}

/// Slot for the client shared between the provider and its resources.
///
/// The provider fills it during configure; resources take a clone per
/// operation.
#[derive(Debug, Default, Clone)]
pub struct ClientHandle {
    client: Arc<RwLock<Option<WapiClient>>>,
}

impl ClientHandle {
    pub async fn replace(&self, client: WapiClient) {
        *self.client.write().await = Some(client);
    }

    /// The configured client, or `None` with a diagnostic when the provider
    /// block was never configured.
    pub async fn get(&self, diags: &mut Diagnostics) -> Option<WapiClient> {
        let client = self.client.read().await.clone();
        if client.is_none() {
            diags.error(
                "Provider is not configured",
                "The NIOS WAPI connection settings have not been configured",
                AttributePath::default(),
            );
        }
        client
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn test_client(server_url: &str) -> WapiClient {
        WapiClient::new(&WapiConfig {
            server_url: server_url.to_owned(),
            username: "admin".to_owned(),
            password: "infoblox".to_owned(),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn base_url_is_normalized() {
        let client = test_client("https://gm.example.com/");
        assert_eq!(
            client.base_url.as_str(),
            "https://gm.example.com/wapi/v2.13.1/",
        );
    }

    #[test]
    fn object_url_keeps_colons_in_path() {
        let client = test_client("https://gm.example.com");
        let url = client.object_url("grid:servicerestart:group:order").unwrap();
        assert_eq!(
            url.as_str(),
            "https://gm.example.com/wapi/v2.13.1/grid:servicerestart:group:order",
        );
    }

    #[test]
    fn object_url_accepts_refs_with_slashes() {
        let client = test_client("https://gm.example.com");
        let url = client
            .object_url("gmcgroup/b25lLmNsdXN0ZXIkMA:gmc1")
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://gm.example.com/wapi/v2.13.1/gmcgroup/b25lLmNsdXN0ZXIkMA:gmc1",
        );
    }

    #[test]
    fn projection_encodes_query_parameters() {
        let client = test_client("https://gm.example.com");
        let mut url = client.object_url("gmcgroup").unwrap();
        Projection {
            return_fields_plus: Some("comment,members,name"),
            return_as_object: true,
        }
        .apply(&mut url);
        assert_eq!(
            url.query(),
            Some("_return_fields%2B=comment%2Cmembers%2Cname&_return_as_object=1"),
        );
    }
}
