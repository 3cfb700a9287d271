//! Effective tenant resolution for inbound requests.
//!
//! The resolver reconciles the tenant implied by the request host with the
//! explicit `site` query parameter and tells the edge layer whether the
//! request must be rewritten or redirected. It performs no I/O.
//!
//! # Decision Table
//!
//! | `site` param      | Host tenant   | Effective tenant | Action     |
//! |-------------------|---------------|------------------|------------|
//! | known site id     | any           | param tenant     | `None`     |
//! | unknown/selector  | any           | host tenant      | `Redirect` |
//! | absent            | named tenant  | host tenant      | `Rewrite`  |
//! | absent            | selector      | selector         | `None`     |

use crate::domain::entities::TenantConfig;
use crate::domain::registry::TenantLookup;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

/// Query parameter carrying the explicit tenant override.
pub const SITE_PARAM: &str = "site";

/// What the edge layer must do with the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum EdgeAction {
    /// The request is already canonical.
    None,
    /// Re-issue the request internally with `site=<site_id>` added.
    Rewrite {
        #[serde(rename = "siteId")]
        site_id: String,
    },
    /// Strip the unrecognized `site` parameter and reload.
    Redirect,
}

impl EdgeAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Rewrite { .. } => "rewrite",
            Self::Redirect => "redirect",
        }
    }
}

/// Effective tenant plus the edge action for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub tenant: TenantConfig,
    pub action: EdgeAction,
}

/// Resolves requests against a tenant lookup.
pub struct RequestResolver<L: TenantLookup> {
    lookup: Arc<L>,
}

impl<L: TenantLookup> Clone for RequestResolver<L> {
    fn clone(&self) -> Self {
        Self {
            lookup: self.lookup.clone(),
        }
    }
}

impl<L: TenantLookup> RequestResolver<L> {
    pub fn new(lookup: Arc<L>) -> Self {
        Self { lookup }
    }

    /// Resolves the effective tenant for `host` and an optional `site` value.
    ///
    /// An empty `site` value is treated as absent.
    pub fn resolve(&self, host: &str, site_param: Option<&str>) -> Resolution {
        let host_tenant = self.lookup.resolve_by_host(host);
        let site_param = site_param.filter(|p| !p.is_empty());

        let resolution = match site_param {
            Some(param) => {
                let param_tenant = self.lookup.resolve_by_site_id(param);
                if param_tenant.is_selector() {
                    info!(host, site = param, "Unknown site parameter, redirecting to selector");
                    Resolution {
                        tenant: host_tenant,
                        action: EdgeAction::Redirect,
                    }
                } else {
                    Resolution {
                        tenant: param_tenant,
                        action: EdgeAction::None,
                    }
                }
            }
            None if !host_tenant.is_selector() => Resolution {
                action: EdgeAction::Rewrite {
                    site_id: host_tenant.site_id.clone(),
                },
                tenant: host_tenant,
            },
            None => Resolution {
                tenant: host_tenant,
                action: EdgeAction::None,
            },
        };

        debug!(
            host,
            site = site_param.unwrap_or("-"),
            tenant = %resolution.tenant.site_id,
            action = resolution.action.as_str(),
            "Resolved request tenant"
        );

        resolution
    }

    /// Decides the edge action from a host and a raw query string.
    ///
    /// The first `site` pair of the query wins; the query may be given with
    /// or without its leading `?`.
    pub fn decide(&self, host: &str, query: Option<&str>) -> Resolution {
        let site = query.and_then(site_param_from_query);
        self.resolve(host, site.as_deref())
    }
}

/// Extracts the first `site` value from a query string.
pub fn site_param_from_query(query: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == SITE_PARAM)
        .map(|(_, value)| value.into_owned())
}

/// Removes every `site` pair from a query string.
///
/// Other pairs are kept verbatim, in order and with their original
/// encoding. Returns `None` when nothing else remains.
pub fn strip_site_param(query: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    let kept: Vec<&str> = query
        .split('&')
        .filter(|pair| !pair.is_empty() && !is_site_pair(pair))
        .collect();

    (!kept.is_empty()).then(|| kept.join("&"))
}

/// Sets `site` to `site_id` in a query string.
///
/// Existing `site` pairs are dropped; the others are kept verbatim and the
/// new pair is appended last.
pub fn with_site_param(query: Option<&str>, site_id: &str) -> String {
    let site = url::form_urlencoded::Serializer::new(String::new())
        .append_pair(SITE_PARAM, site_id)
        .finish();

    match query.and_then(strip_site_param) {
        Some(rest) => format!("{rest}&{site}"),
        None => site,
    }
}

fn is_site_pair(pair: &str) -> bool {
    let key = pair.split_once('=').map_or(pair, |(key, _)| key);
    url::form_urlencoded::parse(key.as_bytes())
        .next()
        .is_some_and(|(key, _)| key == SITE_PARAM)
}
