use actix_web::{web, Error, HttpRequest, HttpResponse};

use crate::auth::Authenticator;
use crate::db::Store;
use crate::models::{FeeQuery, NewPayment, PaymentQuery};

pub async fn list_payments(
    req: HttpRequest,
    auth: web::Data<Authenticator>,
    db: web::Data<Store>,
    query: web::Query<PaymentQuery>,
) -> Result<HttpResponse, Error> {
    auth.authorize(&req)?;
    Ok(HttpResponse::Ok().json(db.list_payments(query.status).await))
}

pub async fn add_payment(
    req: HttpRequest,
    auth: web::Data<Authenticator>,
    db: web::Data<Store>,
    payment: web::Json<NewPayment>,
) -> Result<HttpResponse, Error> {
    auth.authorize(&req)?;
    let payment = db.add_payment(payment.into_inner()).await?;
    Ok(HttpResponse::Created().json(payment))
}

pub async fn fee_overview(
    req: HttpRequest,
    auth: web::Data<Authenticator>,
    db: web::Data<Store>,
    query: web::Query<FeeQuery>,
) -> Result<HttpResponse, Error> {
    auth.authorize(&req)?;
    Ok(HttpResponse::Ok().json(db.fee_overview(query.search.as_deref()).await))
}
