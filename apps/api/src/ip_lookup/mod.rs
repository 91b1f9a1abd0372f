//! IP geolocation lookup.
//!
//! The handler talks to the `IpLookup` trait so tests can swap in a fixed
//! backend; production uses `HttpIpLookup` against an ipapi.co-compatible API.

pub mod handlers;

use std::net::IpAddr;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum IpLookupError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("lookup rejected: {0}")]
    Rejected(String),
}

/// Geolocation facts about one address. Fields the provider omits stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IpInfo {
    pub ip: String,
    pub city: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
    pub timezone: Option<String>,
    pub org: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[async_trait]
pub trait IpLookup: Send + Sync {
    /// Looks up `ip`, or the caller's own public address when `None`.
    async fn lookup(&self, ip: Option<IpAddr>) -> Result<IpInfo, IpLookupError>;
}

/// Wire shape of the ipapi.co JSON response.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct IpApiResponse {
    ip: Option<String>,
    city: Option<String>,
    region: Option<String>,
    country_name: Option<String>,
    timezone: Option<String>,
    org: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    error: bool,
    reason: Option<String>,
}

impl IpApiResponse {
    fn into_info(self, requested: Option<IpAddr>) -> Result<IpInfo, IpLookupError> {
        if self.error {
            return Err(IpLookupError::Rejected(
                self.reason.unwrap_or_else(|| "unknown reason".to_string()),
            ));
        }

        let ip = self
            .ip
            .or_else(|| requested.map(|addr| addr.to_string()))
            .unwrap_or_default();

        Ok(IpInfo {
            ip,
            city: self.city,
            region: self.region,
            country: self.country_name,
            timezone: self.timezone,
            org: self.org,
            latitude: self.latitude,
            longitude: self.longitude,
        })
    }
}

/// Lookup backed by a single HTTP GET; no retries.
#[derive(Clone)]
pub struct HttpIpLookup {
    client: Client,
    base_url: String,
}

impl HttpIpLookup {
    pub fn new(base_url: impl Into<String>) -> Result<Self, IpLookupError> {
        Ok(Self {
            client: Client::builder().timeout(REQUEST_TIMEOUT).build()?,
            base_url: base_url.into(),
        })
    }

    fn url_for(&self, ip: Option<IpAddr>) -> String {
        match ip {
            Some(addr) => format!("{}/{addr}/json/", self.base_url),
            None => format!("{}/json/", self.base_url),
        }
    }
}

#[async_trait]
impl IpLookup for HttpIpLookup {
    async fn lookup(&self, ip: Option<IpAddr>) -> Result<IpInfo, IpLookupError> {
        let url = self.url_for(ip);
        info!("Looking up IP geolocation via {url}");

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(IpLookupError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body: IpApiResponse = response.json().await?;
        debug!("IP lookup succeeded for {:?}", body.ip);
        body.into_info(ip)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_for_specific_and_own_address() {
        let lookup = HttpIpLookup::new("https://ipapi.co").unwrap();
        let addr: IpAddr = "8.8.8.8".parse().unwrap();
        assert_eq!(lookup.url_for(Some(addr)), "https://ipapi.co/8.8.8.8/json/");
        assert_eq!(lookup.url_for(None), "https://ipapi.co/json/");

        let v6: IpAddr = "2001:4860:4860::8888".parse().unwrap();
        assert_eq!(
            lookup.url_for(Some(v6)),
            "https://ipapi.co/2001:4860:4860::8888/json/"
        );
    }

    #[test]
    fn test_response_maps_country_name() {
        let body: IpApiResponse = serde_json::from_str(
            r#"{"ip":"8.8.8.8","city":"Mountain View","region":"California",
                "country":"US","country_name":"United States",
                "timezone":"America/Los_Angeles","org":"GOOGLE",
                "latitude":37.4,"longitude":-122.1}"#,
        )
        .unwrap();
        let info = body.into_info(None).unwrap();
        assert_eq!(info.ip, "8.8.8.8");
        assert_eq!(info.country.as_deref(), Some("United States"));
        assert_eq!(info.latitude, Some(37.4));
    }

    #[test]
    fn test_error_body_is_rejected() {
        let body: IpApiResponse =
            serde_json::from_str(r#"{"ip":"10.0.0.1","error":true,"reason":"Reserved IP Address"}"#)
                .unwrap();
        match body.into_info(None) {
            Err(IpLookupError::Rejected(reason)) => assert_eq!(reason, "Reserved IP Address"),
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_ip_falls_back_to_requested() {
        let requested: IpAddr = "1.1.1.1".parse().unwrap();
        let info = IpApiResponse::default().into_info(Some(requested)).unwrap();
        assert_eq!(info.ip, "1.1.1.1");
        assert!(info.city.is_none());
    }
}
