use std::sync::Arc;

use crate::config::Config;
use crate::ip_lookup::IpLookup;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    pub config: Config,
    /// Pluggable geolocation backend. Default: HttpIpLookup against IP_LOOKUP_URL.
    pub ip_lookup: Arc<dyn IpLookup>,
}
