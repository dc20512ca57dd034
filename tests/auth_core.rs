//! Pure-logic QA for the authentication core: password policy, token
//! lifecycle, and status parsing. No database required.

use chrono::Utc;
use smart_feedback::auth::password::{check_strength, hash_password, verify_password};
use smart_feedback::auth::{TokenIssuer, Identity};
use smart_feedback::errors::ApiError;
use smart_feedback::feedback::FeedbackStatus;
use smart_feedback::users::User;

fn user(id: i64, is_admin: bool) -> User {
    User {
        id,
        full_name: "QA User".to_string(),
        email: "qa@example.com".to_string(),
        password_hash: String::new(),
        gender: String::new(),
        is_admin,
        created_at: Utc::now(),
    }
}

#[test]
fn qa_weak_passwords_never_reach_the_hasher() {
    // Each of these violates exactly one policy rule.
    let weak = [
        "abc12345",  // no uppercase, no symbol
        "ABC12345!", // no lowercase
        "Abcdefg!",  // no digit
        "Abcdef12",  // no symbol
        "Ab1!",      // too short
    ];
    for pw in weak {
        let err = check_strength(pw).unwrap_err();
        assert!(
            matches!(err, ApiError::WeakCredential(_)),
            "{:?} should be rejected as weak",
            pw
        );
    }
}

#[test]
fn qa_strong_password_roundtrip() {
    check_strength("Abcdef1!").unwrap();
    let hash = hash_password("Abcdef1!").unwrap();
    assert!(verify_password("Abcdef1!", &hash));

    // Any altered password fails
    assert!(!verify_password("Abcdef1!x", &hash));
    assert!(!verify_password("abcdef1!", &hash));
    assert!(!verify_password("", &hash));
}

#[test]
fn qa_token_carries_identity_and_role() {
    let issuer = TokenIssuer::new("qa-secret", 24);

    let ordinary = issuer.issue(&user(10, false)).unwrap();
    let admin = issuer.issue(&user(11, true)).unwrap();

    assert_eq!(
        issuer.verify(&ordinary).unwrap(),
        Identity {
            user_id: 10,
            is_admin: false
        }
    );
    assert_eq!(
        issuer.verify(&admin).unwrap(),
        Identity {
            user_id: 11,
            is_admin: true
        }
    );
}

#[test]
fn qa_authorize_twice_yields_same_identity() {
    let issuer = TokenIssuer::new("qa-secret", 24);
    let token = issuer.issue(&user(12, false)).unwrap();
    assert_eq!(issuer.verify(&token).unwrap(), issuer.verify(&token).unwrap());
}

#[test]
fn qa_foreign_signature_rejected() {
    let issuer = TokenIssuer::new("qa-secret", 24);
    let foreign = TokenIssuer::new("other-secret", 24)
        .issue(&user(13, true))
        .unwrap();
    let err = issuer.verify(&foreign).unwrap_err();
    assert!(matches!(err, ApiError::Unauthenticated(_)));
}

#[test]
fn qa_status_set_is_closed() {
    assert_eq!("new".parse::<FeedbackStatus>().unwrap(), FeedbackStatus::New);
    assert_eq!(
        "In Progress".parse::<FeedbackStatus>().unwrap(),
        FeedbackStatus::InProgress
    );
    assert_eq!(
        "resolved".parse::<FeedbackStatus>().unwrap(),
        FeedbackStatus::Resolved
    );
    assert!("Done".parse::<FeedbackStatus>().is_err());
    assert!("".parse::<FeedbackStatus>().is_err());
}
