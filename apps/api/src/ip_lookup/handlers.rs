use std::net::{IpAddr, SocketAddr};

use axum::{
    extract::{ConnectInfo, State},
    http::HeaderMap,
    Json,
};
use serde::Deserialize;
use tracing::debug;

use crate::errors::AppError;
use crate::extract::ApiQuery;
use crate::ip_lookup::IpInfo;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct IpQuery {
    pub ip: Option<String>,
}

/// GET /api/v1/tools/ip-lookup?ip=...
///
/// Without `ip`, reports on the caller: the first `X-Forwarded-For` entry when
/// a proxy set one, otherwise the peer address of the connection. A caller on
/// a loopback or private network is looked up by the provider's view of the
/// request, which is the public address that network shares.
pub async fn handle_ip_lookup(
    State(state): State<AppState>,
    headers: HeaderMap,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    ApiQuery(params): ApiQuery<IpQuery>,
) -> Result<Json<IpInfo>, AppError> {
    let ip = match params.ip.as_deref().map(str::trim) {
        None | Some("") => {
            let peer = connect_info.map(|ConnectInfo(addr)| addr.ip());
            let caller = forwarded_for(&headers).or(peer);
            debug!("IP lookup for caller {caller:?}");
            caller.filter(|addr| is_publicly_routable(*addr))
        }
        Some(raw) => Some(
            raw.parse::<IpAddr>()
                .map_err(|_| AppError::Validation(format!("'{raw}' is not an IP address")))?,
        ),
    };

    let info = state
        .ip_lookup
        .lookup(ip)
        .await
        .map_err(|e| AppError::Upstream(e.to_string()))?;

    Ok(Json(info))
}

/// First address of `X-Forwarded-For`, if it parses.
fn forwarded_for(headers: &HeaderMap) -> Option<IpAddr> {
    let raw = headers.get("x-forwarded-for")?.to_str().ok()?;
    raw.split(',').next()?.trim().parse().ok()
}

fn is_publicly_routable(ip: IpAddr) -> bool {
    match ip {
        IpAddr::V4(v4) => {
            !(v4.is_private()
                || v4.is_loopback()
                || v4.is_link_local()
                || v4.is_unspecified()
                || v4.is_broadcast())
        }
        IpAddr::V6(v6) => {
            let first = v6.segments()[0];
            // fc00::/7 unique local, fe80::/10 link local
            !(v6.is_loopback()
                || v6.is_unspecified()
                || first & 0xfe00 == 0xfc00
                || first & 0xffc0 == 0xfe80)
        }
    }
}
