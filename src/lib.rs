//! Backend for the college bus-transport and fee-management dashboard.
//!
//! The [`db::Store`] owns bus routes, the student roster and the payment
//! ledger in memory; [`handlers`] expose it as a JSON API guarded by the
//! admin bearer token issued through [`auth::Authenticator`].

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
