pub mod apis;
pub mod error;
pub mod fetcher;

#[cfg(test)]
pub(crate) mod mock;

use crate::error::FbauthError;
use hmac::{Hmac, Mac};
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use sha2::Sha256;
use std::time::Duration;
use url::Url;

pub use crate::apis::authenticate::authenticate;
pub use crate::apis::get_photo::{get_photo, Photo};
pub use crate::fetcher::Fetcher;
pub use reqwest;

const GRAPH_PREFIX: &'static str = "https://graph.facebook.com/";
const DEFAULT_VERSION: &'static str = "v2.7";
const FIELD_SEPARATOR: &'static str = "&";

pub struct Fbauth<F> {
    fetcher: F,
    version: String,
    app_secret: Option<String>,
}

/// Decoded graph api payload together with the headers it arrived with.
#[derive(Debug)]
pub struct Fetched<T> {
    pub value: T,
    pub headers: HeaderMap,
}

impl<F: Fetcher> Fbauth<F> {
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            version: DEFAULT_VERSION.to_owned(),
            app_secret: None,
        }
    }

    pub fn with_version(mut self, version: &str) -> Self {
        self.version = version.to_owned();
        self
    }

    pub fn with_app_secret(mut self, app_secret: &str) -> Self {
        self.app_secret = Some(app_secret.to_owned());
        self
    }

    fn make_path(&self, postfix: &str) -> String {
        format!("{}{}/{}", GRAPH_PREFIX, self.version, postfix)
    }

    pub fn make_url(&self, access_token: &str, fields: &[&str]) -> Result<Url, FbauthError> {
        let mut url = Url::parse(&self.make_path("me"))?;
        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("access_token", access_token)
                .append_pair("fields", &fields.join(FIELD_SEPARATOR));
            if let Some(secret) = &self.app_secret {
                query.append_pair("appsecret_proof", &sign(access_token, secret)?);
            }
        }
        Ok(url)
    }

    /// A graph api error envelope (`{"error": {...}}`) is returned as
    /// [`FbauthError::Facebook`] before `T` is decoded.
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        access_token: &str,
        fields: &[&str],
        log: &impl Fn(LogParams),
    ) -> Result<Fetched<T>, FbauthError> {
        if access_token.is_empty() {
            return Err(FbauthError::MissingToken);
        }
        if fields.is_empty() {
            return Err(FbauthError::MissingFields);
        }

        let url = self.make_url(access_token, fields)?;
        let joined = fields.join(FIELD_SEPARATOR);
        let log_params = LogParams::new(&self.make_path("me"), &[("fields", joined.as_str())]);
        log(log_params.clone());

        let response = Fetcher::get(&self.fetcher, url.as_str())
            .await
            .map_err(|e| FbauthError::Network(Box::new(e)))?;
        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(|e| FbauthError::Network(Box::new(e)))?;

        let object: serde_json::Map<String, serde_json::Value> = serde_json::from_slice(&body)?;
        let json = serde_json::Value::Object(object);
        let mut log_params = log_params;
        log_params.result = Some(json.clone());
        log(log_params);
        if json["error"].is_object() {
            return Err(FbauthError::Facebook(json));
        }

        Ok(Fetched {
            value: serde_json::from_value(json)?,
            headers,
        })
    }
}

impl Fbauth<reqwest::Client> {
    pub fn with_timeout(timeout_seconds: u64) -> Result<Self, FbauthError> {
        Ok(Self::new(Self::make_client(timeout_seconds)?))
    }

    pub fn make_client(timeout_seconds: u64) -> Result<reqwest::Client, FbauthError> {
        reqwest::ClientBuilder::new()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .map_err(|e| FbauthError::Network(Box::new(e)))
    }
}

fn sign(base: &str, key: &str) -> Result<String, FbauthError> {
    let mut hmac =
        Hmac::<Sha256>::new_from_slice(key.as_bytes()).map_err(|_| FbauthError::InvalidSecret)?;
    hmac.update(base.as_bytes());
    Ok(hmac
        .finalize()
        .into_bytes()
        .iter()
        .map(|&x| format!("{:02x}", x))
        .collect())
}

/// What is about to be requested, and afterwards what came back.
/// The access token and app secret are never part of it.
#[derive(Clone, Debug)]
pub struct LogParams {
    pub path: String,
    pub params: Vec<(String, String)>,
    pub result: Option<serde_json::Value>,
}

impl LogParams {
    fn new(path: &str, params: &[(&str, &str)]) -> Self {
        let mut dst = vec![];
        for param in params {
            dst.push((param.0.to_owned(), param.1.to_owned()));
        }
        Self {
            path: path.to_owned(),
            params: dst,
            result: None,
        }
    }
}
