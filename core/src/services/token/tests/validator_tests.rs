//! Unit tests for the validation pipeline

use crate::domain::entities::token::{Header, Payload};
use crate::errors::TokenError;
use crate::repositories::{MockRevocationRepository, RevocationRepository};
use crate::services::token::{encode_segment, issue, sign, split_segments, TokenValidator};

const NOW: i64 = 1_700_000_000;
const SECRET: &[u8] = b"S";

fn token_expiring_at(exp: i64) -> String {
    let payload = Payload {
        sub: "u1".to_string(),
        name: "Jane".to_string(),
        iat: NOW - 60,
        exp,
    };
    issue(&Header::hs256(), &payload, SECRET).unwrap()
}

#[test]
fn test_valid_token_returns_payload() {
    let revocations = MockRevocationRepository::new();
    let token = token_expiring_at(NOW + 3600);

    let payload = TokenValidator::new(&revocations)
        .validate_at(&token, SECRET, NOW)
        .unwrap();
    assert_eq!(payload.sub, "u1");
    assert_eq!(payload.name, "Jane");
    assert_eq!(payload.exp, NOW + 3600);
}

#[test]
fn test_expiry_boundary() {
    let revocations = MockRevocationRepository::new();
    let validator = TokenValidator::new(&revocations);

    let expired = validator.validate_at(&token_expiring_at(NOW - 1), SECRET, NOW);
    assert!(matches!(expired, Err(TokenError::TokenExpired)));

    assert!(validator.validate_at(&token_expiring_at(NOW), SECRET, NOW).is_ok());
    assert!(validator.validate_at(&token_expiring_at(NOW + 1), SECRET, NOW).is_ok());
}

#[test]
fn test_missing_exp_is_expired() {
    let revocations = MockRevocationRepository::new();
    let token = issue(&Header::hs256(), &Payload { sub: "u1".into(), ..Default::default() }, SECRET).unwrap();

    let result = TokenValidator::new(&revocations).validate_at(&token, SECRET, NOW);
    assert!(matches!(result, Err(TokenError::TokenExpired)));
}

#[test]
fn test_wrong_secret_is_signature_mismatch() {
    let revocations = MockRevocationRepository::new();
    let token = token_expiring_at(NOW + 3600);

    let result = TokenValidator::new(&revocations).validate_at(&token, b"WRONG", NOW);
    assert!(matches!(result, Err(TokenError::SignatureMismatch)));
}

#[test]
fn test_signature_checked_before_expiry() {
    let revocations = MockRevocationRepository::new();
    let token = token_expiring_at(NOW - 100);

    let result = TokenValidator::new(&revocations).validate_at(&token, b"WRONG", NOW);
    assert!(matches!(result, Err(TokenError::SignatureMismatch)));
}

#[test]
fn test_substituted_payload_is_signature_mismatch() {
    let revocations = MockRevocationRepository::new();
    let token = token_expiring_at(NOW + 3600);
    let (header, _, signature) = split_segments(&token).unwrap();

    let forged = Payload::new("admin", "Jane", 3600, NOW);
    let forged = format!("{header}.{}.{signature}", encode_segment(&forged).unwrap());

    let result = TokenValidator::new(&revocations).validate_at(&forged, SECRET, NOW);
    assert!(matches!(result, Err(TokenError::SignatureMismatch)));
}

#[test]
fn test_substituted_header_is_signature_mismatch() {
    let revocations = MockRevocationRepository::new();
    let token = token_expiring_at(NOW + 3600);
    let (_, payload, signature) = split_segments(&token).unwrap();

    let none = Header {
        alg: "none".to_string(),
        typ: "JWT".to_string(),
    };
    let forged = format!("{}.{payload}.{signature}", encode_segment(&none).unwrap());

    let result = TokenValidator::new(&revocations).validate_at(&forged, SECRET, NOW);
    assert!(matches!(result, Err(TokenError::SignatureMismatch)));
}

#[test]
fn test_any_flipped_character_is_rejected() {
    let revocations = MockRevocationRepository::new();
    let validator = TokenValidator::new(&revocations);
    let token = token_expiring_at(NOW + 3600);
    let signed_len = token.rfind('.').unwrap();

    for (index, original) in token[..signed_len].char_indices() {
        if original == '.' {
            continue;
        }
        let replacement = if original == 'A' { 'B' } else { 'A' };
        let mut tampered = token.clone();
        tampered.replace_range(index..index + 1, &replacement.to_string());

        match validator.validate_at(&tampered, SECRET, NOW) {
            Err(TokenError::SignatureMismatch) | Err(TokenError::Decode { .. }) => {}
            other => panic!("tampered token at {index} gave {other:?}"),
        }
    }
}

#[test]
fn test_revoked_token_rejected_even_when_valid() {
    let revocations = MockRevocationRepository::new();
    let token = token_expiring_at(NOW + 3600);
    revocations.revoke(&token).unwrap();
    revocations.revoke(&token).unwrap();
    assert_eq!(revocations.revoked_count(), 1);

    let result = TokenValidator::new(&revocations).validate_at(&token, SECRET, NOW);
    assert!(matches!(result, Err(TokenError::TokenRevoked)));
}

#[test]
fn test_revocation_checked_before_format() {
    let revocations = MockRevocationRepository::new();
    revocations.revoke("garbage").unwrap();

    let result = TokenValidator::new(&revocations).validate_at("garbage", SECRET, NOW);
    assert!(matches!(result, Err(TokenError::TokenRevoked)));
}

#[test]
fn test_malformed_tokens() {
    let revocations = MockRevocationRepository::new();
    let validator = TokenValidator::new(&revocations);
    let token = token_expiring_at(NOW + 3600);
    let (header, payload, signature) = split_segments(&token).unwrap();

    let cases = [
        String::new(),
        "no-dots-at-all".to_string(),
        format!("{header}.{payload}"),
        format!("{header}.{payload}.{signature}.extra"),
        format!("{header}..{signature}"),
        format!(".{payload}.{signature}"),
        format!("{header}.{payload}."),
    ];
    for case in cases {
        let result = validator.validate_at(&case, SECRET, NOW);
        assert!(
            matches!(result, Err(TokenError::MalformedToken)),
            "expected MalformedToken for {case:?}, got {result:?}"
        );
    }
}

#[test]
fn test_undecodable_segments() {
    let revocations = MockRevocationRepository::new();
    let validator = TokenValidator::new(&revocations);

    // Header is "{}" with padding, which the unpadded alphabet refuses
    let padded = "e30=.e30.c2ln";
    assert!(matches!(
        validator.validate_at(padded, SECRET, NOW),
        Err(TokenError::Decode { .. })
    ));

    let bad_alphabet = "e30.e3+9.c2ln";
    assert!(matches!(
        validator.validate_at(bad_alphabet, SECRET, NOW),
        Err(TokenError::Decode { .. })
    ));

    // A JSON string where an object belongs
    let not_object = "e30.ImFiYyI.c2ln";
    assert!(matches!(
        validator.validate_at(not_object, SECRET, NOW),
        Err(TokenError::Decode { .. })
    ));
}

#[test]
fn test_signature_over_literal_segments() {
    let revocations = MockRevocationRepository::new();
    let header = encode_segment(&Header::hs256()).unwrap();
    let payload = encode_segment(&Payload::new("u1", "", 60, NOW)).unwrap();
    let signature = sign(&format!("{header}.{payload}"), SECRET).unwrap();

    let token = format!("{header}.{payload}.{signature}");
    assert!(TokenValidator::new(&revocations).validate_at(&token, SECRET, NOW).is_ok());
}

#[test]
fn test_revocation_store_failure_propagates() {
    let revocations = MockRevocationRepository::corrupt();
    let token = token_expiring_at(NOW + 3600);

    let err = TokenValidator::new(&revocations)
        .validate_at(&token, SECRET, NOW)
        .unwrap_err();
    assert!(err.is_corrupt_store());
}
