//! Subdomain resolution: classifying an inbound host name as "root site"
//! or "tenant subdomain", and the routing decision built on top of it.
//!
//! The same [`extract_subdomain`] function backs both the request-tagging
//! middleware and the navigation guard, so the two call sites can never
//! disagree about what the host means.

/// Path serving a tenant's flashpage.
pub const TENANT_PATH: &str = "/subdomain";

/// Path serving the main site.
pub const ROOT_PATH: &str = "/";

/// Extracts the candidate subdomain label from a host string.
///
/// Rules, in order:
///
/// 1. A trailing `:port` is stripped first.
/// 2. Hosts ending in `.localhost` with exactly two labels use the first
///    label (local development convention, e.g. `acme.localhost`).
/// 3. Hosts with three or more labels whose first label is not `www` use
///    the first label (production convention, e.g. `acme.example.com`).
/// 4. Anything else has no subdomain: `localhost`, `example.com`,
///    `www.example.com`, the empty string.
///
/// Resolution never fails; malformed input simply yields `None`.
pub fn extract_subdomain(host: &str) -> Option<String> {
    let host = host.split(':').next().unwrap_or(host);

    if host.is_empty() || host == "localhost" {
        return None;
    }

    let labels: Vec<&str> = host.split('.').collect();

    if host.ends_with(".localhost") && labels.len() == 2 {
        let label = labels[0];
        if !label.is_empty() && label != "localhost" {
            return Some(label.to_string());
        }
        return None;
    }

    if labels.len() >= 3 {
        let label = labels[0];
        if !label.is_empty() && label != "www" {
            return Some(label.to_string());
        }
    }

    None
}

/// What the navigation guard should do with a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAction {
    /// The target path is already correct for this host.
    Allow,
    /// A tenant host is asking for a non-tenant path; send it to [`TENANT_PATH`].
    RedirectToTenant,
    /// A root-site host is asking for the tenant path; send it to [`ROOT_PATH`].
    RedirectToRoot,
}

impl RouteAction {
    /// The redirect target, if this action is a redirect.
    pub fn target(&self) -> Option<&'static str> {
        match self {
            RouteAction::Allow => None,
            RouteAction::RedirectToTenant => Some(TENANT_PATH),
            RouteAction::RedirectToRoot => Some(ROOT_PATH),
        }
    }
}

/// Decides whether a navigation to `path` is allowed for the given
/// resolved subdomain.
///
/// Total over all inputs, and idempotent: applying the decision to its own
/// redirect target always yields [`RouteAction::Allow`].
pub fn resolve_route(subdomain: Option<&str>, path: &str) -> RouteAction {
    match subdomain {
        Some(_) if path != TENANT_PATH => RouteAction::RedirectToTenant,
        None if path == TENANT_PATH => RouteAction::RedirectToRoot,
        _ => RouteAction::Allow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_localhost_subdomain() {
        assert_eq!(extract_subdomain("acme.localhost"), Some("acme".to_string()));
    }

    #[test]
    fn test_localhost_subdomain_with_port() {
        assert_eq!(
            extract_subdomain("acme.localhost:3000"),
            Some("acme".to_string())
        );
    }

    #[test]
    fn test_bare_localhost() {
        assert_eq!(extract_subdomain("localhost"), None);
        assert_eq!(extract_subdomain("localhost:3000"), None);
    }

    #[test]
    fn test_production_subdomain() {
        assert_eq!(
            extract_subdomain("acme.example.com"),
            Some("acme".to_string())
        );
        assert_eq!(
            extract_subdomain("acme.example.com:443"),
            Some("acme".to_string())
        );
    }

    #[test]
    fn test_www_is_not_a_subdomain() {
        assert_eq!(extract_subdomain("www.example.com"), None);
    }

    #[test]
    fn test_apex_domain() {
        assert_eq!(extract_subdomain("example.com"), None);
    }

    #[test]
    fn test_empty_and_degenerate_hosts() {
        assert_eq!(extract_subdomain(""), None);
        assert_eq!(extract_subdomain(":3000"), None);
        assert_eq!(extract_subdomain(".localhost"), None);
        assert_eq!(extract_subdomain("..example.com"), None);
    }

    #[test]
    fn test_deep_subdomain_uses_first_label() {
        assert_eq!(
            extract_subdomain("a.b.example.com"),
            Some("a".to_string())
        );
    }

    #[test]
    fn test_resolve_route_tenant_host() {
        assert_eq!(
            resolve_route(Some("acme"), "/"),
            RouteAction::RedirectToTenant
        );
        assert_eq!(resolve_route(Some("acme"), TENANT_PATH), RouteAction::Allow);
    }

    #[test]
    fn test_resolve_route_root_host() {
        assert_eq!(resolve_route(None, "/"), RouteAction::Allow);
        assert_eq!(
            resolve_route(None, TENANT_PATH),
            RouteAction::RedirectToRoot
        );
    }

    #[test]
    fn test_resolve_route_is_idempotent() {
        for subdomain in [None, Some("acme")] {
            for path in ["/", TENANT_PATH, "/about"] {
                let action = resolve_route(subdomain, path);
                if let Some(target) = action.target() {
                    assert_eq!(
                        resolve_route(subdomain, target),
                        RouteAction::Allow,
                        "second application must not redirect again ({subdomain:?}, {path})"
                    );
                }
            }
        }
    }

    #[test]
    fn test_middleware_and_routing_agree() {
        // Both call sites share extract_subdomain; spot-check the pairing.
        let host = "acme.localhost:3000";
        let tag = extract_subdomain(host);
        assert_eq!(
            resolve_route(tag.as_deref(), "/"),
            RouteAction::RedirectToTenant
        );
    }
}
