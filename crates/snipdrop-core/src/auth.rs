//! Custom claim validation hook.
//!
//! Signature, issuer, audience, and lifetime checks are fixed; anything
//! beyond that (scopes, roles, tenant checks) plugs in through this trait.

use snipdrop_types::auth::Claims;
use snipdrop_types::error::AuthError;

/// Validation applied to claims after the standard checks pass.
pub trait ClaimCheck: Send + Sync {
    fn check(&self, claims: &Claims) -> Result<(), AuthError>;
}

/// Default claim check accepting every token that passed the standard checks.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoClaimCheck;

impl ClaimCheck for NoClaimCheck {
    fn check(&self, _claims: &Claims) -> Result<(), AuthError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snipdrop_types::auth::Audience;

    fn claims() -> Claims {
        Claims {
            iss: "https://issuer.example.com/".to_string(),
            sub: Some("user-1".to_string()),
            aud: Audience::Single("api".to_string()),
            exp: 2_000_000_000,
            nbf: None,
            iat: None,
            scope: None,
        }
    }

    #[test]
    fn test_no_claim_check_accepts_everything() {
        assert!(NoClaimCheck.check(&claims()).is_ok());
    }

    #[test]
    fn test_custom_check_can_reject() {
        /// Requires a scope to be present among the granted scopes.
        struct RequireScope(&'static str);

        impl ClaimCheck for RequireScope {
            fn check(&self, claims: &Claims) -> Result<(), AuthError> {
                let granted = claims.scope.as_deref().unwrap_or("");
                if granted.split_whitespace().any(|s| s == self.0) {
                    Ok(())
                } else {
                    Err(AuthError::InvalidToken)
                }
            }
        }

        let check = RequireScope("snippets:write");
        assert_eq!(check.check(&claims()), Err(AuthError::InvalidToken));

        let mut with_scope = claims();
        with_scope.scope = Some("snippets:read snippets:write".to_string());
        assert!(check.check(&with_scope).is_ok());
    }
}
