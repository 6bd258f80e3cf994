use chrono::{Duration, TimeZone, Utc};

use super::sample_account;
use crate::domain::entities::account::ResolvedAccount;
use crate::domain::entities::session::{Session, SESSION_TTL_HOURS};

fn resolved() -> ResolvedAccount {
    ResolvedAccount {
        account: sample_account(),
        roles: vec!["admin".to_string()],
        display_name: "Jane Doe".to_string(),
    }
}

#[test]
fn test_session_expiry_is_issue_time_plus_ttl() {
    let issued_at = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
    let ttl = Duration::hours(SESSION_TTL_HOURS);
    let session = Session::new("abc".to_string(), &resolved(), issued_at, ttl);

    assert_eq!(session.expires_at, issued_at + ttl);
    assert_eq!(session.user.user_id, 42);
    assert_eq!(session.user.company_id, 7);
    assert_eq!(session.user.staff_id, Some(1001));
    assert_eq!(session.user.display_name, "Jane Doe");
    assert_eq!(session.roles, vec!["admin".to_string()]);
}

#[test]
fn test_session_is_expired_at_boundary() {
    let issued_at = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
    let session = Session::new("abc".to_string(), &resolved(), issued_at, Duration::hours(12));

    assert!(!session.is_expired(session.expires_at - Duration::seconds(1)));
    assert!(session.is_expired(session.expires_at));
    assert_eq!(session.remaining_seconds(issued_at), 12 * 3600);
    assert_eq!(session.remaining_seconds(session.expires_at + Duration::hours(1)), 0);
}

#[test]
fn test_session_user_serializes_camel_case() {
    let issued_at = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
    let session = Session::new("abc".to_string(), &resolved(), issued_at, Duration::hours(12));
    let json = serde_json::to_value(&session.user).unwrap();

    assert_eq!(json["userId"], 42);
    assert_eq!(json["companyName"], "Contoso Care");
    assert_eq!(json["staffEmail"], "jane.doe@contoso.com");
}
