//! Unit tests for role normalization and identity derivation.

use super::*;

#[test]
fn test_role_parsing_accepts_bare_and_legacy_forms() {
    assert_eq!(Role::from_str("ADMIN").unwrap(), Role::Admin);
    assert_eq!(Role::from_str("ROLE_ADMIN").unwrap(), Role::Admin);
    assert_eq!(Role::from_str("TRAVEL_AGENCY").unwrap(), Role::TravelAgency);
    assert_eq!(Role::from_str("ROLE_TRAVEL_AGENCY").unwrap(), Role::TravelAgency);
    assert_eq!(Role::from_str("TRAVELLER").unwrap(), Role::Traveller);
    assert_eq!(Role::from_str("ROLE_TRAVELLER").unwrap(), Role::Traveller);

    // Case and surrounding whitespace are not significant
    assert_eq!(Role::from_str(" traveller ").unwrap(), Role::Traveller);
    assert_eq!(Role::from_str("role_admin").unwrap(), Role::Admin);
}

#[test]
fn test_role_parsing_rejects_unknown() {
    assert!(Role::from_str("").is_err());
    assert!(Role::from_str("ROLE_").is_err());
    assert!(Role::from_str("SUPERUSER").is_err());
    assert!(Role::from_str("ROLE_ROLE_ADMIN").is_err());
}

#[test]
fn test_role_serializes_to_bare_name() {
    assert_eq!(serde_json::to_string(&Role::TravelAgency).unwrap(), "\"TRAVEL_AGENCY\"");

    let legacy: Role = serde_json::from_str("\"ROLE_TRAVELLER\"").unwrap();
    assert_eq!(legacy, Role::Traveller);
    assert_eq!(serde_json::to_string(&legacy).unwrap(), "\"TRAVELLER\"");
}

#[test]
fn test_identity_accepts_alternate_id_fields() {
    let from_user_id: Identity = serde_json::from_str(r#"{"username":"ana","role":"TRAVELLER","userId":7}"#).unwrap();
    assert_eq!(from_user_id.id, Some(7));

    let from_upper: Identity = serde_json::from_str(r#"{"username":"ana","role":"TRAVELLER","ID":8}"#).unwrap();
    assert_eq!(from_upper.id, Some(8));

    let without_id: Identity = serde_json::from_str(r#"{"username":"ana","role":"TRAVELLER"}"#).unwrap();
    assert_eq!(without_id.id, None);
}

#[test]
fn test_identity_ignores_legacy_logged_in_flag() {
    let identity: Identity =
        serde_json::from_str(r#"{"username":"root","role":"ROLE_ADMIN","isLoggedIn":true}"#).unwrap();
    assert_eq!(identity, Identity::new("root", Role::Admin));
}

#[test]
fn test_identity_role_helpers() {
    let agency = Identity::new("globetrotters", Role::TravelAgency);
    assert!(agency.has_role(Role::TravelAgency));
    assert!(!agency.has_role(Role::Admin));
    assert!(agency.has_any_role(&[Role::Admin, Role::TravelAgency]));
    assert!(!agency.has_any_role(&[Role::Traveller]));
    assert!(!agency.has_any_role(&[]));
}

#[test]
fn test_display_name_prefers_non_blank_name() {
    let mut identity = Identity::new("ana", Role::Traveller);
    assert_eq!(identity.display_name(), "ana");

    identity.name = Some("   ".to_string());
    assert_eq!(identity.display_name(), "ana");

    identity.name = Some("Ana Lopez".to_string());
    assert_eq!(identity.display_name(), "Ana Lopez");
}

#[test]
fn test_login_response_into_identity() {
    let response: LoginResponse =
        serde_json::from_str(r#"{"username":"ana","role":"ROLE_TRAVELLER","isLoggedIn":true,"id":3}"#).unwrap();
    let identity = response.into_identity().unwrap();
    assert_eq!(identity.username, "ana");
    assert_eq!(identity.role, Role::Traveller);
    assert_eq!(identity.id, Some(3));
}

#[test]
fn test_login_response_never_guesses_missing_fields() {
    let no_role = LoginResponse {
        username: Some("ana".to_string()),
        ..Default::default()
    };
    assert_eq!(no_role.into_identity(), Err(IdentityError::MissingRole));

    let no_username = LoginResponse {
        role: Some("ADMIN".to_string()),
        ..Default::default()
    };
    assert_eq!(no_username.into_identity(), Err(IdentityError::MissingUsername));

    let unknown_role = LoginResponse {
        username: Some("ana".to_string()),
        role: Some("PILOT".to_string()),
        ..Default::default()
    };
    assert_eq!(unknown_role.into_identity(), Err(IdentityError::UnknownRole("PILOT".to_string())));

    let logged_out = LoginResponse {
        username: Some("ana".to_string()),
        role: Some("ADMIN".to_string()),
        is_logged_in: Some(false),
        ..Default::default()
    };
    assert_eq!(logged_out.into_identity(), Err(IdentityError::NotLoggedIn));
}

#[test]
fn test_register_request_omits_missing_agency_name() {
    let request = RegisterRequest {
        username: "ana".to_string(),
        email: "ana@example.com".to_string(),
        password: "secret".to_string(),
        role: Role::Traveller,
        travel_agency_name: None,
    };
    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(json["role"], "TRAVELLER");
    assert!(json.get("travelAgencyName").is_none());

    let login = request.login_request();
    assert_eq!(login.username, "ana");
    assert_eq!(login.password, "secret");
}
