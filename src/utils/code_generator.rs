//! Short code generation and validation utilities.
//!
//! Provides cryptographically secure random code generation and validation
//! for custom user-provided codes.

use crate::error::AppError;
use base64::Engine as _;

/// Reserved codes that cannot be used as short links.
///
/// These collide with service endpoints and would shadow them in routing.
const RESERVED_CODES: &[&str] = &["api", "health"];

/// Maximum accepted length for a custom code.
const MAX_CUSTOM_CODE_LENGTH: usize = 64;

/// Generates a random short code of exactly `length` characters.
///
/// Draws `length` bytes from the operating system CSPRNG (predictable codes
/// would let an attacker guess or deliberately collide short links), encodes
/// them as URL-safe base64 without padding, and truncates to `length`.
/// The resulting alphabet is `A-Z a-z 0-9 - _`.
///
/// No uniqueness is guaranteed here; the caller enforces uniqueness through
/// the store's atomic insert.
///
/// # Errors
///
/// Returns [`AppError::Entropy`] when the random source is unavailable.
/// This is surfaced to the caller rather than retried: a failing CSPRNG is
/// systemic trouble, not a transient request problem.
pub fn generate_code(length: usize) -> Result<String, AppError> {
    let mut buffer = vec![0u8; length];

    getrandom::fill(&mut buffer).map_err(|e| AppError::Entropy {
        message: e.to_string(),
    })?;

    let mut code = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(&buffer);
    code.truncate(length);
    Ok(code)
}

/// Validates a user-provided custom short code.
///
/// # Rules
///
/// - Non-empty, at most 64 characters
/// - Allowed characters: ASCII letters, digits, hyphens, underscores
///   (the same alphabet generated codes use — both share one namespace)
/// - Cannot be a reserved service endpoint name
///
/// # Errors
///
/// Returns [`AppError::InvalidCode`] if any rule is violated.
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    if code.is_empty() {
        return Err(AppError::InvalidCode {
            reason: "custom code must not be empty".to_string(),
        });
    }

    if code.len() > MAX_CUSTOM_CODE_LENGTH {
        return Err(AppError::InvalidCode {
            reason: format!(
                "custom code must be at most {} characters",
                MAX_CUSTOM_CODE_LENGTH
            ),
        });
    }

    if !code
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(AppError::InvalidCode {
            reason: "custom code may only contain letters, digits, hyphens, and underscores"
                .to_string(),
        });
    }

    if RESERVED_CODES.contains(&code) {
        return Err(AppError::InvalidCode {
            reason: format!("{:?} is reserved", code),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_code_has_requested_length() {
        for length in [4, 6, 8, 12, 32] {
            let code = generate_code(length).unwrap();
            assert_eq!(code.len(), length);
        }
    }

    #[test]
    fn test_generate_code_url_safe_characters() {
        let code = generate_code(64).unwrap();
        assert!(
            code.chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        );
    }

    #[test]
    fn test_generate_code_no_padding() {
        let code = generate_code(6).unwrap();
        assert!(!code.contains('='));
    }

    #[test]
    fn test_generate_code_produces_unique_codes() {
        let mut codes = HashSet::new();

        for _ in 0..1000 {
            codes.insert(generate_code(6).unwrap());
        }

        // 62^6+ code space; 1000 draws colliding would mean a broken RNG.
        assert_eq!(codes.len(), 1000);
    }

    #[test]
    fn test_validate_accepts_generated_alphabet() {
        assert!(validate_custom_code("promo").is_ok());
        assert!(validate_custom_code("abc123").is_ok());
        assert!(validate_custom_code("My_Launch-2026").is_ok());
    }

    #[test]
    fn test_validate_rejects_empty() {
        assert!(validate_custom_code("").is_err());
    }

    #[test]
    fn test_validate_rejects_too_long() {
        let code = "a".repeat(MAX_CUSTOM_CODE_LENGTH + 1);
        assert!(validate_custom_code(&code).is_err());
    }

    #[test]
    fn test_validate_rejects_invalid_characters() {
        assert!(validate_custom_code("my code").is_err());
        assert!(validate_custom_code("caf\u{e9}").is_err());
        assert!(validate_custom_code("a/b").is_err());
    }

    #[test]
    fn test_validate_rejects_reserved_codes() {
        for &reserved in RESERVED_CODES {
            assert!(
                validate_custom_code(reserved).is_err(),
                "reserved code {:?} should be invalid",
                reserved
            );
        }
    }
}
