use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,
    pub name: String,
    pub role: String,
    pub iat: usize,
    pub exp: usize,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct UserProfile {
    pub username: String,
    pub name: String,
    pub role: String,
}

impl From<&Claims> for UserProfile {
    fn from(claims: &Claims) -> Self {
        Self {
            username: claims.sub.clone(),
            name: claims.name.clone(),
            role: claims.role.clone(),
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserProfile,
}
