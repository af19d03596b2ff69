//! Route authorization.
//!
//! [`authorize`] is the single decision function behind every protected page.
//! It is pure so the whole access matrix can be tested without a browser.

use tm_types::auth::{Identity, Role};

use crate::Routes;

/// Where a signed-in user without the right role is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeniedRedirect {
    Home,
    AccessDenied,
}

/// Roles allowed on a page plus the fallback for everyone else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessPolicy {
    pub allowed: &'static [Role],
    pub denied: DeniedRedirect,
}

impl AccessPolicy {
    /// Destination, hotel, restaurant and complaint administration.
    pub const ADMIN_ONLY: AccessPolicy = AccessPolicy {
        allowed: &[Role::Admin],
        denied: DeniedRedirect::Home,
    };

    /// Package management for travel agencies.
    pub const AGENCY_ONLY: AccessPolicy = AccessPolicy {
        allowed: &[Role::TravelAgency],
        denied: DeniedRedirect::Home,
    };

    /// Details, booking and complaint pages for travellers.
    pub const TRAVELLER_ONLY: AccessPolicy = AccessPolicy {
        allowed: &[Role::Traveller],
        denied: DeniedRedirect::AccessDenied,
    };

    pub fn allows(&self, role: Role) -> bool {
        self.allowed.contains(&role)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectTarget {
    /// Sign in first, then come back to `return_to`.
    Login { return_to: String },
    Home,
    AccessDenied,
}

impl RedirectTarget {
    pub fn route(&self) -> Routes {
        match self {
            RedirectTarget::Login { return_to } => Routes::login_then(return_to.clone()),
            RedirectTarget::Home => Routes::HomePage {},
            RedirectTarget::AccessDenied => Routes::AccessDeniedPage {},
        }
    }

    /// The URL the router navigates to.
    pub fn path(&self) -> String {
        self.route().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(RedirectTarget),
}

/// Per-page guard lifecycle. Content renders only in `Allowed`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GuardState {
    #[default]
    Checking,
    Allowed,
    Redirecting(RedirectTarget),
}

impl From<GuardDecision> for GuardState {
    fn from(decision: GuardDecision) -> Self {
        match decision {
            GuardDecision::Allow => GuardState::Allowed,
            GuardDecision::Redirect(target) => GuardState::Redirecting(target),
        }
    }
}

/// Decide whether `identity` may see the page at `requested_path`.
pub fn authorize(identity: Option<&Identity>, policy: &AccessPolicy, requested_path: &str) -> GuardDecision {
    let Some(identity) = identity else {
        return GuardDecision::Redirect(RedirectTarget::Login {
            return_to: sanitize_return_path(Some(requested_path)),
        });
    };

    if policy.allows(identity.role) {
        return GuardDecision::Allow;
    }

    GuardDecision::Redirect(match policy.denied {
        DeniedRedirect::Home => RedirectTarget::Home,
        DeniedRedirect::AccessDenied => RedirectTarget::AccessDenied,
    })
}

/// Reduce a caller-supplied return path to a safe same-origin path.
///
/// Only absolute paths starting with a single `/` are honored, and never the
/// login page itself. Everything else becomes `/`.
pub fn sanitize_return_path(raw: Option<&str>) -> String {
    let Some(path) = raw.map(str::trim).filter(|p| !p.is_empty()) else {
        return "/".to_string();
    };

    let same_origin = path.starts_with('/') && !path.starts_with("//") && !path.contains('\\') && !path.contains("://");
    if !same_origin || is_login_path(path) {
        return "/".to_string();
    }

    path.to_string()
}

fn is_login_path(path: &str) -> bool {
    let route = path.split(['?', '#']).next().unwrap_or(path).trim_end_matches('/');
    route.eq_ignore_ascii_case("/login")
}

#[cfg(test)]
#[path = "guard_tests.rs"]
mod tests;
