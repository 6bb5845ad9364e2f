use actix_web::{web, Error, HttpRequest, HttpResponse};
use log::info;
use serde_json::json;

use crate::auth::Authenticator;
use crate::models::{LoginRequest, UserProfile};

pub async fn login(
    auth: web::Data<Authenticator>,
    credentials: web::Json<LoginRequest>,
) -> Result<HttpResponse, Error> {
    let response = auth.login(&credentials)?;
    Ok(HttpResponse::Ok().json(response))
}

// Tokens are stateless; the dashboard drops its stored token and profile.
pub async fn logout(
    req: HttpRequest,
    auth: web::Data<Authenticator>,
) -> Result<HttpResponse, Error> {
    let claims = auth.authorize(&req)?;
    info!("User {} logged out", claims.sub);
    Ok(HttpResponse::Ok().json(json!({ "success": true, "message": "Logged out" })))
}

pub async fn me(req: HttpRequest, auth: web::Data<Authenticator>) -> Result<HttpResponse, Error> {
    let claims = auth.authorize(&req)?;
    Ok(HttpResponse::Ok().json(UserProfile::from(&claims)))
}
