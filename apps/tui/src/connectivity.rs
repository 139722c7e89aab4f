use async_trait::async_trait;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tokio::net::TcpStream;
use tracing::debug;
use url::{Host, Url};

/// Answers "is the network usable right now?" before a load starts
#[async_trait]
pub trait Connectivity: Send + Sync {
    async fn is_connected(&self) -> bool;
}

/// Always reports the same answer; backs `--offline`
#[derive(Debug, Clone, Copy)]
pub struct FixedConnectivity(pub bool);

#[async_trait]
impl Connectivity for FixedConnectivity {
    async fn is_connected(&self) -> bool {
        self.0
    }
}

/// Where the probe connects: IP literals directly, names through the resolver
#[derive(Debug, Clone, PartialEq, Eq)]
enum ProbeTarget {
    Addr(SocketAddr),
    Domain(String, u16),
}

impl ProbeTarget {
    fn from_url(url: &Url) -> Option<Self> {
        let port = url.port_or_known_default()?;
        let target = match url.host()? {
            Host::Ipv4(ip) => Self::Addr(SocketAddr::new(IpAddr::V4(ip), port)),
            Host::Ipv6(ip) => Self::Addr(SocketAddr::new(IpAddr::V6(ip), port)),
            Host::Domain(name) => Self::Domain(name.to_string(), port),
        };
        Some(target)
    }

    async fn connect(&self) -> std::io::Result<TcpStream> {
        match self {
            Self::Addr(addr) => TcpStream::connect(*addr).await,
            Self::Domain(name, port) => TcpStream::connect((name.as_str(), *port)).await,
        }
    }
}

impl fmt::Display for ProbeTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Addr(addr) => write!(f, "{addr}"),
            Self::Domain(name, port) => write!(f, "{name}:{port}"),
        }
    }
}

/// Checks reachability by opening a TCP connection to the feed host
#[derive(Debug, Clone)]
pub struct TcpProbe {
    target: Option<ProbeTarget>,
    timeout: Duration,
}

impl TcpProbe {
    pub fn for_url(feed_url: &str, timeout: Duration) -> Self {
        let target = Url::parse(feed_url.trim())
            .ok()
            .and_then(|url| ProbeTarget::from_url(&url));

        Self { target, timeout }
    }
}

#[async_trait]
impl Connectivity for TcpProbe {
    async fn is_connected(&self) -> bool {
        // Nothing to probe; the fetcher reports the bad URL itself.
        let Some(target) = &self.target else {
            return true;
        };

        match tokio::time::timeout(self.timeout, target.connect()).await {
            Ok(Ok(_)) => true,
            Ok(Err(e)) => {
                debug!(%target, error = %e, "connectivity probe failed");
                false
            }
            Err(_) => {
                debug!(%target, "connectivity probe timed out");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::net::TcpListener;

    const PROBE_TIMEOUT: Duration = Duration::from_secs(2);

    #[tokio::test]
    async fn test_fixed_connectivity_reports_its_value() {
        assert!(FixedConnectivity(true).is_connected().await);
        assert!(!FixedConnectivity(false).is_connected().await);
    }

    #[tokio::test]
    async fn test_probe_succeeds_against_listening_port() -> std::io::Result<()> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let probe = TcpProbe::for_url(&format!("http://{addr}/query"), PROBE_TIMEOUT);

        assert!(probe.is_connected().await);
        Ok(())
    }

    #[tokio::test]
    async fn test_probe_fails_against_closed_port() -> std::io::Result<()> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        drop(listener);

        let probe = TcpProbe::for_url(&format!("http://{addr}/query"), PROBE_TIMEOUT);

        assert!(!probe.is_connected().await);
        Ok(())
    }

    #[test]
    fn test_probe_target_uses_scheme_default_port() {
        let probe = TcpProbe::for_url(crate::config::DEFAULT_FEED_URL, PROBE_TIMEOUT);
        assert_eq!(
            probe.target,
            Some(ProbeTarget::Domain("earthquake.usgs.gov".to_string(), 443))
        );
    }

    #[tokio::test]
    async fn test_probe_connects_to_ipv6_literal() -> std::io::Result<()> {
        // Hosts without an IPv6 loopback have nothing to test here.
        let Ok(listener) = TcpListener::bind("[::1]:0").await else {
            return Ok(());
        };
        let addr = listener.local_addr()?;

        let url = format!("http://[::1]:{}/query", addr.port());
        let probe = TcpProbe::for_url(&url, PROBE_TIMEOUT);

        assert_eq!(probe.target, Some(ProbeTarget::Addr(addr)));
        assert!(probe.is_connected().await);
        Ok(())
    }

    #[test]
    fn test_ipv4_literal_is_used_as_an_address() {
        let probe = TcpProbe::for_url("http://127.0.0.1/query", PROBE_TIMEOUT);
        assert_eq!(
            probe.target,
            Some(ProbeTarget::Addr(SocketAddr::from(([127, 0, 0, 1], 80))))
        );
    }

    #[tokio::test]
    async fn test_unparsable_url_is_left_to_the_fetcher() {
        let probe = TcpProbe::for_url("::not a url::", PROBE_TIMEOUT);
        assert!(probe.target.is_none());
        assert!(probe.is_connected().await);
    }
}
