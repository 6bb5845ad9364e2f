#![allow(dead_code)]

use std::time::Duration;

use actix_web::web;
use campus_transit::auth::Authenticator;
use campus_transit::config::AppConfig;
use campus_transit::db::Store;
use campus_transit::models::LoginRequest;

pub const FEE: f64 = 10_000.0;

/// Shared state for one test: a freshly seeded store, an authenticator with
/// a cheap bcrypt cost, and a valid admin token.
pub struct Context {
    pub auth: web::Data<Authenticator>,
    pub store: web::Data<Store>,
    token: String,
}

impl Context {
    pub fn new() -> Self {
        let config = AppConfig {
            bcrypt_cost: 4,
            semester_fee: FEE,
            ..AppConfig::default()
        };
        let auth = Authenticator::from_config(&config).expect("authenticator");
        let token = auth
            .login(&LoginRequest {
                username: config.admin_username.clone(),
                password: config.admin_password.clone(),
            })
            .expect("admin login")
            .token;
        Context {
            auth: web::Data::new(auth),
            store: web::Data::new(Store::seeded(FEE, Duration::ZERO)),
            token,
        }
    }

    pub fn bearer(&self) -> (&'static str, String) {
        ("Authorization", format!("Bearer {}", self.token))
    }
}

pub fn ids(value: &serde_json::Value) -> Vec<u64> {
    value
        .as_array()
        .map(|items| items.iter().filter_map(|v| v["id"].as_u64()).collect())
        .unwrap_or_default()
}
