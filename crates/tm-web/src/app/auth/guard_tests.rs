//! Unit tests for route authorization.

use std::{rc::Rc, str::FromStr};

use super::*;
use crate::app::auth::{session::SessionService, store::MemorySessionStore};

fn user(role: &str) -> Identity {
    Identity::new("someone", Role::from_str(role).unwrap())
}

#[test]
fn test_allowed_iff_role_in_policy() {
    let policies = [AccessPolicy::ADMIN_ONLY, AccessPolicy::AGENCY_ONLY, AccessPolicy::TRAVELLER_ONLY];
    let roles = ["ADMIN", "ROLE_ADMIN", "TRAVEL_AGENCY", "role_travel_agency", "TRAVELLER", "ROLE_TRAVELLER"];

    for policy in &policies {
        for raw in roles {
            let identity = user(raw);
            let decision = authorize(Some(&identity), policy, "/somewhere");
            assert_eq!(
                decision == GuardDecision::Allow,
                policy.allows(identity.role),
                "policy {:?} role {}",
                policy,
                raw
            );
        }
    }
}

#[test]
fn test_denied_fallbacks() {
    let traveller = user("TRAVELLER");
    assert_eq!(
        authorize(Some(&traveller), &AccessPolicy::ADMIN_ONLY, "/view-hotels"),
        GuardDecision::Redirect(RedirectTarget::Home)
    );
    assert_eq!(
        authorize(Some(&traveller), &AccessPolicy::AGENCY_ONLY, "/create-package"),
        GuardDecision::Redirect(RedirectTarget::Home)
    );

    let agency = user("ROLE_TRAVEL_AGENCY");
    assert_eq!(
        authorize(Some(&agency), &AccessPolicy::TRAVELLER_ONLY, "/my-bookings"),
        GuardDecision::Redirect(RedirectTarget::AccessDenied)
    );
}

#[test]
fn test_book_package_scenarios() {
    let traveller = user("TRAVELLER");
    assert_eq!(
        authorize(Some(&traveller), &AccessPolicy::TRAVELLER_ONLY, "/book-package/42"),
        GuardDecision::Allow
    );

    let admin = user("ADMIN");
    let decision = authorize(Some(&admin), &AccessPolicy::TRAVELLER_ONLY, "/book-package/42");
    assert_eq!(decision, GuardDecision::Redirect(RedirectTarget::AccessDenied));
    if let GuardDecision::Redirect(target) = decision {
        assert_eq!(target.path(), "/access-denied");
    }
}

#[test]
fn test_anonymous_goes_to_login_and_back() {
    let decision = authorize(None, &AccessPolicy::TRAVELLER_ONLY, "/my-bookings");
    let GuardDecision::Redirect(target) = decision else {
        panic!("anonymous user must be redirected");
    };
    assert_eq!(target.path(), "/login?redirect=/my-bookings");

    // After signing in, the login page sends the user to the sanitized return path
    let RedirectTarget::Login { return_to } = target else {
        panic!("expected a login redirect");
    };
    assert_eq!(sanitize_return_path(Some(&return_to)), "/my-bookings");

    let traveller = user("TRAVELLER");
    assert_eq!(
        authorize(Some(&traveller), &AccessPolicy::TRAVELLER_ONLY, &return_to),
        GuardDecision::Allow
    );
}

#[test]
fn test_every_policy_redirects_anonymous() {
    for policy in [AccessPolicy::ADMIN_ONLY, AccessPolicy::AGENCY_ONLY, AccessPolicy::TRAVELLER_ONLY] {
        assert!(matches!(
            authorize(None, &policy, "/edit-package/3"),
            GuardDecision::Redirect(RedirectTarget::Login { .. })
        ));
    }
}

#[test]
fn test_sanitize_return_path() {
    assert_eq!(sanitize_return_path(Some("/my-bookings")), "/my-bookings");
    assert_eq!(sanitize_return_path(Some("/search-results?query=lisbon")), "/search-results?query=lisbon");
    assert_eq!(sanitize_return_path(None), "/");
    assert_eq!(sanitize_return_path(Some("")), "/");
    assert_eq!(sanitize_return_path(Some("https://evil.example")), "/");
    assert_eq!(sanitize_return_path(Some("//evil.example/path")), "/");
    assert_eq!(sanitize_return_path(Some("/\\evil.example")), "/");
    assert_eq!(sanitize_return_path(Some("my-bookings")), "/");
    assert_eq!(sanitize_return_path(Some("/login")), "/");
    assert_eq!(sanitize_return_path(Some("/login?redirect=/my-bookings")), "/");
    assert_eq!(sanitize_return_path(Some("/LOGIN/")), "/");
    assert_eq!(sanitize_return_path(Some("/login-help")), "/login-help");
}

#[test]
fn test_redirect_path_is_the_router_url() {
    let target = RedirectTarget::Login {
        return_to: "/search-results?query=lisbon".to_string(),
    };
    assert_eq!(target.route(), Routes::login_then("/search-results?query=lisbon"));
    assert_eq!(target.path(), target.route().to_string());
    assert_eq!(RedirectTarget::Home.path(), "/");

    let login = RedirectTarget::Login {
        return_to: "/my-bookings".to_string(),
    };
    assert_eq!(Routes::from_str(&login.path()).ok(), Some(login.route()));
}

#[test]
fn test_logout_then_guard_redirects() {
    let session = SessionService::new(Rc::new(MemorySessionStore::new()));
    session.login(Identity::new("ana", Role::Traveller));
    assert_eq!(
        authorize(session.current_user().as_ref(), &AccessPolicy::TRAVELLER_ONLY, "/my-bookings"),
        GuardDecision::Allow
    );

    session.logout();
    assert_eq!(
        authorize(session.current_user().as_ref(), &AccessPolicy::TRAVELLER_ONLY, "/my-bookings"),
        GuardDecision::Redirect(RedirectTarget::Login {
            return_to: "/my-bookings".to_string()
        })
    );
}

#[test]
fn test_guard_state_from_decision() {
    assert_eq!(GuardState::default(), GuardState::Checking);
    assert_eq!(GuardState::from(GuardDecision::Allow), GuardState::Allowed);
    assert_eq!(
        GuardState::from(GuardDecision::Redirect(RedirectTarget::Home)),
        GuardState::Redirecting(RedirectTarget::Home)
    );
}
