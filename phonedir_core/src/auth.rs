//! Credential checks guarding the mutating operations.
//!
//! [`Directory`](crate::Directory) never prompts anybody itself. Callers hand
//! it an [`Authorizer`]; the usual one is a [`PasswordChallenge`] that asks
//! for a secret and checks it with a [`CredentialVerifier`].

use sha2::{Digest, Sha256};

/// The mutation an authorization is requested for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthAction {
    Add,
    Update,
}

impl AuthAction {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Update => "update",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AuthRequest<'a> {
    pub action: AuthAction,
    /// Name of the contact being added, or the selected contact on update.
    pub contact_name: &'a str,
}

pub trait Authorizer {
    fn authorize(&self, request: &AuthRequest<'_>) -> bool;
}

impl<F> Authorizer for F
where
    F: Fn(&AuthRequest<'_>) -> bool,
{
    fn authorize(&self, request: &AuthRequest<'_>) -> bool {
        self(request)
    }
}

pub trait CredentialVerifier {
    fn verify(&self, candidate: &str) -> bool;
}

/// Compares against a secret kept in clear text.
#[derive(Debug, Clone)]
pub struct PlaintextSecret(String);

impl PlaintextSecret {
    #[must_use]
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }
}

impl CredentialVerifier for PlaintextSecret {
    fn verify(&self, candidate: &str) -> bool {
        self.0 == candidate
    }
}

/// Compares the SHA-256 digest of the candidate with a stored hex digest.
#[derive(Debug, Clone)]
pub struct Sha256Secret {
    digest_hex: String,
}

impl Sha256Secret {
    /// Wrap a hex-encoded digest, as found in the config file.
    #[must_use]
    pub fn from_hex(digest_hex: &str) -> Self {
        Self {
            digest_hex: digest_hex.trim().to_ascii_lowercase(),
        }
    }

    /// Hash `secret` and keep only the digest.
    #[must_use]
    pub fn from_secret(secret: &str) -> Self {
        Self {
            digest_hex: hex_digest(secret),
        }
    }

    #[must_use]
    pub fn digest_hex(&self) -> &str {
        &self.digest_hex
    }
}

impl CredentialVerifier for Sha256Secret {
    fn verify(&self, candidate: &str) -> bool {
        hex_digest(candidate) == self.digest_hex
    }
}

/// Lowercase hex SHA-256 of `secret`.
#[must_use]
pub fn hex_digest(secret: &str) -> String {
    format!("{:x}", Sha256::digest(secret.as_bytes()))
}

/// Asks for a secret through `prompt` and verifies it.
///
/// A prompt returning `None` means the user cancelled, which denies the
/// request.
pub struct PasswordChallenge<V, P> {
    verifier: V,
    prompt: P,
}

impl<V, P> PasswordChallenge<V, P>
where
    V: CredentialVerifier,
    P: Fn(&AuthRequest<'_>) -> Option<String>,
{
    pub const fn new(verifier: V, prompt: P) -> Self {
        Self { verifier, prompt }
    }
}

impl<V, P> Authorizer for PasswordChallenge<V, P>
where
    V: CredentialVerifier,
    P: Fn(&AuthRequest<'_>) -> Option<String>,
{
    fn authorize(&self, request: &AuthRequest<'_>) -> bool {
        (self.prompt)(request).is_some_and(|secret| self.verifier.verify(&secret))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEGACY_DIGEST: &str = "03ac674216f3e15c761ee1a5e255f067953623c8b388b4459e13f978d7c846f4";

    fn request() -> AuthRequest<'static> {
        AuthRequest {
            action: AuthAction::Add,
            contact_name: "Alice",
        }
    }

    #[test]
    fn sha256_digest_matches_known_value() {
        assert_eq!(hex_digest("1234"), LEGACY_DIGEST);
    }

    #[test]
    fn sha256_secret_verifies() {
        let secret = Sha256Secret::from_hex(&LEGACY_DIGEST.to_uppercase());
        assert!(secret.verify("1234"));
        assert!(!secret.verify("12345"));
        assert!(!secret.verify(""));
    }

    #[test]
    fn from_secret_round_trips() {
        let secret = Sha256Secret::from_secret("hunter2");
        assert!(secret.verify("hunter2"));
        assert_eq!(secret.digest_hex().len(), 64);
    }

    #[test]
    fn plaintext_secret_is_exact() {
        let secret = PlaintextSecret::new("1234");
        assert!(secret.verify("1234"));
        assert!(!secret.verify(" 1234"));
    }

    #[test]
    fn challenge_denies_on_cancel() {
        let challenge = PasswordChallenge::new(PlaintextSecret::new("1234"), |_: &AuthRequest<'_>| None);
        assert!(!challenge.authorize(&request()));
    }

    #[test]
    fn challenge_checks_prompted_secret() {
        let ok = PasswordChallenge::new(PlaintextSecret::new("1234"), |_: &AuthRequest<'_>| {
            Some("1234".to_string())
        });
        let bad = PasswordChallenge::new(PlaintextSecret::new("1234"), |_: &AuthRequest<'_>| {
            Some("0000".to_string())
        });
        assert!(ok.authorize(&request()));
        assert!(!bad.authorize(&request()));
    }

    #[test]
    fn closures_are_authorizers() {
        let only_add = |req: &AuthRequest<'_>| req.action == AuthAction::Add;
        assert!(only_add.authorize(&request()));
        assert!(!only_add.authorize(&AuthRequest {
            action: AuthAction::Update,
            contact_name: "Alice",
        }));
    }
}
