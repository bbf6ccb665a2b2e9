use crate::AppState;
use actix_governor::{KeyExtractor, SimpleKeyExtractionError};
use actix_web::dev::ServiceRequest;
use actix_web::web;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

/// Rate-limit key: the peer address, or the forwarded client address when
/// the peer is the trusted reverse proxy.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct RealIpKeyExtractor;

/// Accepts both `ip:port` and bare `ip` forms.
pub fn parse_ip(value: &str) -> Option<IpAddr> {
    SocketAddr::from_str(value)
        .map(|socket| socket.ip())
        .or_else(|_| IpAddr::from_str(value))
        .ok()
}

impl KeyExtractor for RealIpKeyExtractor {
    type Key = IpAddr;
    type KeyExtractionError = SimpleKeyExtractionError<&'static str>;

    fn extract(&self, req: &ServiceRequest) -> Result<Self::Key, Self::KeyExtractionError> {
        let reverse_proxy_ip = req
            .app_data::<web::Data<AppState>>()
            .map(|data| data.trusted_reverse_proxy_ip)
            .unwrap_or_else(|| IpAddr::from([0, 0, 0, 0]));

        let peer_ip = req.peer_addr().map(|socket| socket.ip());
        let connection_info = req.connection_info();

        match peer_ip {
            // Forwarded headers are only trusted from the reverse proxy
            Some(peer) if peer == reverse_proxy_ip => connection_info
                .realip_remote_addr()
                .and_then(parse_ip)
                .ok_or_else(|| {
                    SimpleKeyExtractionError::new("Could not extract real IP address from request")
                }),
            _ => connection_info
                .peer_addr()
                .and_then(parse_ip)
                .ok_or_else(|| {
                    SimpleKeyExtractionError::new("Could not extract peer IP address from request")
                }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_socket_and_bare_addresses() {
        assert_eq!(parse_ip("10.0.0.7:5123"), Some(IpAddr::from([10, 0, 0, 7])));
        assert_eq!(parse_ip("10.0.0.7"), Some(IpAddr::from([10, 0, 0, 7])));
        assert_eq!(parse_ip("[::1]:80"), Some("::1".parse().unwrap()));
        assert_eq!(parse_ip("proxy.local"), None);
    }
}
