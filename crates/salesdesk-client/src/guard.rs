//! Client-side route guard, evaluated before a page renders or fetches.

use tracing::debug;

use salesdesk_core::config::ApiConfig;
use salesdesk_core::Role;

use crate::session::Session;

/// Minimum privilege a route needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    Public,
    Authenticated,
    Manager,
    Superadmin,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    Render,
    Redirect(String),
}

pub fn guard_route(session: &Session, access: RouteAccess, config: &ApiConfig) -> RouteDecision {
    if access == RouteAccess::Public {
        return RouteDecision::Render;
    }
    if !session.is_authenticated() {
        return RouteDecision::Redirect(config.effective_login_path().to_string());
    }

    let role = session.role();
    let allowed = match access {
        RouteAccess::Public | RouteAccess::Authenticated => true,
        RouteAccess::Manager => matches!(role, Role::Manager | Role::Superadmin),
        RouteAccess::Superadmin => role.is_superadmin(),
    };
    if allowed {
        RouteDecision::Render
    } else {
        debug!(role = %role, required = ?access, "route refused");
        RouteDecision::Redirect(config.effective_home_path().to_string())
    }
}
