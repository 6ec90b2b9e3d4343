use anyhow::{Context, Result};
use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

/// Claims carried by an issued token: the username plus its validity window.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: usize,
    pub exp: usize,
}

/// Verifies bearer tokens against the shared signing secret.
pub struct TokenValidator {
    key: DecodingKey,
}

impl TokenValidator {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            key: DecodingKey::from_secret(secret),
        }
    }

    pub fn validate(&self, token: &str) -> Result<Claims> {
        if token.split('.').count() != 3 {
            anyhow::bail!("Invalid JWT format");
        }

        let header = decode_header(token).context("Failed to decode JWT header")?;

        // Tokens are signed with a shared secret; anything outside the HMAC
        // family in the header is an algorithm-confusion attempt.
        match header.alg {
            Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512 => {}
            other => anyhow::bail!("Algorithm {:?} not allowed (HMAC only)", other),
        }

        let validation = Validation::new(header.alg);
        let data = decode::<Claims>(token, &self.key, &validation)
            .map_err(|e| anyhow::anyhow!("JWT validation failed: {}", e))?;

        if data.claims.sub.is_empty() {
            anyhow::bail!("Invalid username claim");
        }

        Ok(data.claims)
    }
}
