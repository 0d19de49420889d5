//! Server configuration from environment variables.

use std::net::SocketAddr;
use std::str::FromStr;

use vsm_tree::TreeConfig;

use crate::error::{Error, Result};

/// Default listen port.
pub const DEFAULT_API_PORT: u16 = 5000;

/// Configuration for a VSM server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP API listen address
    pub api_addr: SocketAddr,

    /// Node tree settings
    pub tree: TreeConfig,
}

impl ServerConfig {
    /// Read `VSM_API_ADDR`, `VSM_DEFAULT_POLY_ORDER` and `VSM_MAX_POLY_ORDER`,
    /// falling back to defaults for unset variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut tree = TreeConfig::default();

        let api_addr = parse_var(&lookup, "VSM_API_ADDR")?
            .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], DEFAULT_API_PORT)));

        if let Some(order) = parse_var(&lookup, "VSM_DEFAULT_POLY_ORDER")? {
            tree.default_poly_order = order;
        }
        if let Some(max) = parse_var(&lookup, "VSM_MAX_POLY_ORDER")? {
            tree.max_poly_order = max;
        }
        tree.validate()?;

        Ok(Self { api_addr, tree })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            api_addr: SocketAddr::from(([127, 0, 0, 1], DEFAULT_API_PORT)),
            tree: TreeConfig::default(),
        }
    }
}

fn parse_var<F, T>(lookup: &F, var: &'static str) -> Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(var) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| Error::Config { var, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.api_addr, ServerConfig::default().api_addr);
        assert_eq!(config.tree, TreeConfig::default());
    }

    #[test]
    fn reads_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("VSM_API_ADDR", "0.0.0.0:8080"),
            ("VSM_DEFAULT_POLY_ORDER", "4"),
            ("VSM_MAX_POLY_ORDER", " 12 "),
        ]))
        .unwrap();
        assert_eq!(config.api_addr.port(), 8080);
        assert_eq!(config.tree.default_poly_order, 4);
        assert_eq!(config.tree.max_poly_order, 12);
    }

    #[test]
    fn malformed_values_are_errors() {
        let err = ServerConfig::from_lookup(lookup(&[("VSM_API_ADDR", "nowhere")])).unwrap_err();
        assert!(matches!(err, Error::Config { var: "VSM_API_ADDR", .. }));

        let err = ServerConfig::from_lookup(lookup(&[("VSM_MAX_POLY_ORDER", "-1")])).unwrap_err();
        assert!(matches!(err, Error::Config { var: "VSM_MAX_POLY_ORDER", .. }));
    }

    #[test]
    fn out_of_range_default_order() {
        let err = ServerConfig::from_lookup(lookup(&[("VSM_DEFAULT_POLY_ORDER", "2")])).unwrap_err();
        assert!(matches!(err, Error::Tree(vsm_tree::Error::InvalidOrder { .. })));
    }
}
