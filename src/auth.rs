use actix_web::HttpRequest;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use log::{debug, error, info, warn};

use crate::config::AppConfig;
use crate::error::AuthError;
use crate::models::{AuthResponse, Claims, LoginRequest, UserProfile};

const ADMIN_DISPLAY_NAME: &str = "Admin User";
const ADMIN_ROLE: &str = "admin";

/// Verifies the administrator credential and issues/validates bearer tokens.
pub struct Authenticator {
    username: String,
    password_hash: String,
    secret: String,
    ttl: chrono::Duration,
}

impl Authenticator {
    /// Hashes the configured admin password once so that login only ever
    /// compares against the bcrypt digest. The token lifetime must be positive.
    pub fn from_config(config: &AppConfig) -> Result<Self, AuthError> {
        let ttl = chrono::Duration::try_minutes(config.token_ttl_minutes)
            .filter(|ttl| *ttl > chrono::Duration::zero())
            .ok_or_else(|| {
                error!("Invalid token lifetime: {} minutes", config.token_ttl_minutes);
                AuthError::TokenLifetime
            })?;
        let password_hash = bcrypt::hash(&config.admin_password, config.bcrypt_cost)?;
        Ok(Authenticator {
            username: config.admin_username.clone(),
            password_hash,
            secret: config.jwt_secret.clone(),
            ttl,
        })
    }

    pub fn login(&self, credentials: &LoginRequest) -> Result<AuthResponse, AuthError> {
        let password_ok = bcrypt::verify(&credentials.password, &self.password_hash).map_err(|e| {
            error!("Bcrypt verification error: {}", e);
            e
        })?;
        if credentials.username != self.username || !password_ok {
            warn!("Invalid login attempt for username: {}", credentials.username);
            return Err(AuthError::InvalidCredentials);
        }

        let now = chrono::Utc::now();
        let expires = now.checked_add_signed(self.ttl).ok_or_else(|| {
            error!("Token expiry overflows the calendar");
            AuthError::TokenLifetime
        })?;
        let claims = Claims {
            sub: self.username.clone(),
            name: ADMIN_DISPLAY_NAME.to_string(),
            role: ADMIN_ROLE.to_string(),
            iat: timestamp(now)?,
            exp: timestamp(expires)?,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_ref()),
        )
        .map_err(|e| {
            error!("JWT encoding error: {}", e);
            AuthError::Encode(e)
        })?;

        info!("User {} authenticated successfully", self.username);
        Ok(AuthResponse {
            token,
            user: UserProfile::from(&claims),
        })
    }

    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_ref()),
            &Validation::new(Algorithm::HS256),
        )
        .map(|data| data.claims)
        .map_err(|e| {
            error!("Token decoding failed: {:?}", e);
            AuthError::InvalidToken(e)
        })
    }

    /// Extracts and validates the `Authorization: Bearer` token of `req`.
    pub fn authorize(&self, req: &HttpRequest) -> Result<Claims, AuthError> {
        let header = req
            .headers()
            .get("Authorization")
            .and_then(|value| value.to_str().ok());
        let token = match header.and_then(|h| h.strip_prefix("Bearer ")) {
            Some(token) => token.trim(),
            None => {
                debug!("Missing or malformed Authorization header");
                return Err(AuthError::MissingToken);
            }
        };
        let claims = self.verify(token)?;
        debug!("Token decoded successfully for user: {}", claims.sub);
        Ok(claims)
    }
}

fn timestamp(at: chrono::DateTime<chrono::Utc>) -> Result<usize, AuthError> {
    usize::try_from(at.timestamp()).map_err(|_| AuthError::TokenLifetime)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    fn authenticator() -> Authenticator {
        let config = AppConfig {
            bcrypt_cost: 4,
            ..AppConfig::default()
        };
        Authenticator::from_config(&config).unwrap()
    }

    fn credentials(username: &str, password: &str) -> LoginRequest {
        LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn login_issues_verifiable_token() {
        let auth = authenticator();
        let response = auth.login(&credentials("admin", "password")).unwrap();
        assert_eq!(response.user.role, "admin");
        assert_eq!(response.user.name, "Admin User");

        let claims = auth.verify(&response.token).unwrap();
        assert_eq!(claims.sub, "admin");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn wrong_credentials_are_rejected() {
        let auth = authenticator();
        assert!(matches!(
            auth.login(&credentials("admin", "hunter2")),
            Err(AuthError::InvalidCredentials)
        ));
        assert!(matches!(
            auth.login(&credentials("root", "password")),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn authorize_reads_bearer_header() {
        let auth = authenticator();
        let token = auth.login(&credentials("admin", "password")).unwrap().token;

        let req = TestRequest::default()
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_http_request();
        assert_eq!(auth.authorize(&req).unwrap().sub, "admin");

        let req = TestRequest::default().to_http_request();
        assert!(matches!(auth.authorize(&req), Err(AuthError::MissingToken)));

        let req = TestRequest::default()
            .insert_header(("Authorization", "Bearer not.a.token"))
            .to_http_request();
        assert!(matches!(auth.authorize(&req), Err(AuthError::InvalidToken(_))));
    }

    #[test]
    fn tokens_signed_with_another_secret_are_rejected() {
        let auth = authenticator();
        let other = Authenticator::from_config(&AppConfig {
            bcrypt_cost: 4,
            jwt_secret: "another-secret".to_string(),
            ..AppConfig::default()
        })
        .unwrap();
        let token = other.login(&credentials("admin", "password")).unwrap().token;
        assert!(auth.verify(&token).is_err());
    }

    #[test]
    fn non_positive_token_lifetime_is_rejected() {
        for minutes in [0, -60_000_000] {
            let config = AppConfig {
                bcrypt_cost: 4,
                token_ttl_minutes: minutes,
                ..AppConfig::default()
            };
            assert!(matches!(
                Authenticator::from_config(&config),
                Err(AuthError::TokenLifetime)
            ));
        }
    }

    #[test]
    fn overflowing_token_lifetime_fails_login_without_panicking() {
        let auth = Authenticator::from_config(&AppConfig {
            bcrypt_cost: 4,
            token_ttl_minutes: 1_000_000_000_000,
            ..AppConfig::default()
        })
        .unwrap();
        assert!(matches!(
            auth.login(&credentials("admin", "password")),
            Err(AuthError::TokenLifetime)
        ));
    }

    #[test]
    fn expiry_is_the_configured_lifetime_after_issue() {
        let auth = authenticator();
        let token = auth.login(&credentials("admin", "password")).unwrap().token;
        let claims = auth.verify(&token).unwrap();
        assert_eq!(claims.exp - claims.iat, 60 * 60);
    }
}
