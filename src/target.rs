use crate::error::ResolutionError;
use crate::types::ResolvedAddress;
use tokio::net::lookup_host;
use url::{Host, Url};

const URL_SCHEMES: [&str; 2] = ["http://", "https://"];

#[derive(Debug, Clone)]
pub struct Target {
    pub original: String,
    pub target_type: TargetType,
    host: String, // Name or literal handed to the lookup
}

#[derive(Debug, Clone)]
pub enum TargetType {
    Url(Url),
    Host,
}

impl Target {
    /// Normalize a raw target. Only `http://` and `https://` inputs are
    /// treated as URLs, everything else is looked up as given.
    pub fn parse(input: &str) -> Result<Self, ResolutionError> {
        if !URL_SCHEMES.iter().any(|scheme| input.starts_with(scheme)) {
            return Ok(Self {
                original: input.to_string(),
                target_type: TargetType::Host,
                host: input.to_string(),
            });
        }

        let url = Url::parse(input).map_err(|e| ResolutionError::InvalidUrl {
            target: input.to_string(),
            reason: e.to_string(),
        })?;

        let host = match url.host() {
            Some(Host::Domain(domain)) => domain.to_string(),
            Some(Host::Ipv4(ip)) => ip.to_string(),
            Some(Host::Ipv6(ip)) => ip.to_string(),
            None => {
                return Err(ResolutionError::InvalidUrl {
                    target: input.to_string(),
                    reason: "missing host".to_string(),
                });
            }
        };

        Ok(Self {
            original: input.to_string(),
            target_type: TargetType::Url(url),
            host,
        })
    }

    /// Hostname or IP literal the lookup runs against
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Forward lookup of the host, first address wins. Every call performs
    /// a fresh lookup.
    pub async fn resolve(&self) -> Result<ResolvedAddress, ResolutionError> {
        log::debug!("[target] resolve: original={} host={}", self.original, self.host);

        let mut addresses = lookup_host((self.host.as_str(), 0)).await.map_err(|e| {
            log::debug!("[target] lookup_failed: host={} error={}", self.host, e);
            ResolutionError::LookupFailed {
                host: self.host.clone(),
                reason: e.to_string(),
            }
        })?;

        let address = addresses
            .next()
            .map(|addr| ResolvedAddress::new(addr.ip()))
            .ok_or_else(|| ResolutionError::NoAddresses { host: self.host.clone() })?;

        log::debug!("[target] resolved: host={} ip={}", self.host, address);
        Ok(address)
    }
}

/// Parse and resolve a raw target string in one step
pub async fn resolve(target: &str) -> Result<ResolvedAddress, ResolutionError> {
    Target::parse(target)?.resolve().await
}
