use actix_web::{web, Error, HttpRequest, HttpResponse};

use crate::auth::Authenticator;
use crate::db::Store;

pub async fn dashboard(
    req: HttpRequest,
    auth: web::Data<Authenticator>,
    db: web::Data<Store>,
) -> Result<HttpResponse, Error> {
    auth.authorize(&req)?;
    Ok(HttpResponse::Ok().json(db.dashboard().await))
}
