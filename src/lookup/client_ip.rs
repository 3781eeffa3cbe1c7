//! Caller address resolution from proxy headers.

use std::net::{IpAddr, SocketAddr};

use log::debug;

/// Resolves the address to look up for a caller.
///
/// Precedence:
/// 1. first entry of `X-Forwarded-For`
/// 2. `X-Real-IP`
/// 3. host part of the peer address
///
/// A header value that is not an IP address literal is skipped and the next
/// source is consulted. Returns `None` for a loopback or unparseable peer, in
/// which case the upstream service is asked to geolocate the request's own
/// origin instead.
pub fn client_ip(
    forwarded_for: Option<&str>,
    real_ip: Option<&str>,
    remote_addr: &str,
) -> Option<String> {
    let first_hop = forwarded_for.and_then(|value| value.split(',').next());
    for (header, value) in [("X-Forwarded-For", first_hop), ("X-Real-IP", real_ip)] {
        let Some(value) = value.filter(|v| !v.trim().is_empty()) else {
            continue;
        };
        match parse_ip(value) {
            Some(ip) => return Some(ip.to_string()),
            None => debug!("Ignoring {header} value {value:?}: not an IP address"),
        }
    }

    let ip = match remote_addr.parse::<SocketAddr>() {
        Ok(addr) => addr.ip(),
        Err(_) if remote_addr.trim() == "localhost" => return None,
        Err(_) => parse_ip(remote_addr)?,
    };
    if ip.is_loopback() {
        debug!("Peer address {ip} is local, deferring to upstream self-lookup");
        return None;
    }
    Some(ip.to_string())
}

fn parse_ip(value: &str) -> Option<IpAddr> {
    value
        .trim()
        .trim_matches(|c| c == '[' || c == ']')
        .parse::<IpAddr>()
        .ok()
}
