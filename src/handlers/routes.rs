use actix_web::{web, Error, HttpRequest, HttpResponse};
use serde_json::json;

use crate::auth::Authenticator;
use crate::db::{Store, Upserted};
use crate::error::StoreError;
use crate::models::RouteInput;

pub async fn list_routes(
    req: HttpRequest,
    auth: web::Data<Authenticator>,
    db: web::Data<Store>,
) -> Result<HttpResponse, Error> {
    auth.authorize(&req)?;
    Ok(HttpResponse::Ok().json(db.list_routes().await))
}

pub async fn get_route(
    req: HttpRequest,
    auth: web::Data<Authenticator>,
    db: web::Data<Store>,
    path: web::Path<String>,
) -> Result<HttpResponse, Error> {
    auth.authorize(&req)?;
    let key = path.into_inner();
    let route = db
        .find_route(&key)
        .await
        .ok_or_else(|| StoreError::RouteNotFound(key.trim().to_string()))?;
    Ok(HttpResponse::Ok().json(route))
}

pub async fn upsert_route(
    req: HttpRequest,
    auth: web::Data<Authenticator>,
    db: web::Data<Store>,
    route: web::Json<RouteInput>,
) -> Result<HttpResponse, Error> {
    auth.authorize(&req)?;
    match db.upsert_route(route.into_inner()).await? {
        Upserted::Created(route) => Ok(HttpResponse::Created().json(route)),
        Upserted::Updated(route) => Ok(HttpResponse::Ok().json(route)),
    }
}

pub async fn delete_route(
    req: HttpRequest,
    auth: web::Data<Authenticator>,
    db: web::Data<Store>,
    path: web::Path<String>,
) -> Result<HttpResponse, Error> {
    auth.authorize(&req)?;
    let removed = db.remove_route(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": format!("Route {} deleted successfully", removed.bus_number),
        "route": removed,
    })))
}

pub async fn route_students(
    req: HttpRequest,
    auth: web::Data<Authenticator>,
    db: web::Data<Store>,
    path: web::Path<String>,
) -> Result<HttpResponse, Error> {
    auth.authorize(&req)?;
    Ok(HttpResponse::Ok().json(db.students_by_bus(&path.into_inner()).await))
}
