use actix_web::{web, Error, HttpRequest, HttpResponse};

use crate::auth::Authenticator;
use crate::db::Store;
use crate::error::StoreError;
use crate::models::{NewStudent, StudentFilter};

pub async fn list_students(
    req: HttpRequest,
    auth: web::Data<Authenticator>,
    db: web::Data<Store>,
    filter: web::Query<StudentFilter>,
) -> Result<HttpResponse, Error> {
    auth.authorize(&req)?;
    Ok(HttpResponse::Ok().json(db.list_students(&filter).await))
}

pub async fn get_student(
    req: HttpRequest,
    auth: web::Data<Authenticator>,
    db: web::Data<Store>,
    path: web::Path<u32>,
) -> Result<HttpResponse, Error> {
    auth.authorize(&req)?;
    let id = path.into_inner();
    let details = db
        .student_details(id)
        .await
        .ok_or(StoreError::StudentNotFound(id))?;
    Ok(HttpResponse::Ok().json(details))
}

pub async fn add_student(
    req: HttpRequest,
    auth: web::Data<Authenticator>,
    db: web::Data<Store>,
    student: web::Json<NewStudent>,
) -> Result<HttpResponse, Error> {
    auth.authorize(&req)?;
    let student = db.add_student(student.into_inner()).await?;
    Ok(HttpResponse::Created().json(student))
}

pub async fn student_payments(
    req: HttpRequest,
    auth: web::Data<Authenticator>,
    db: web::Data<Store>,
    path: web::Path<u32>,
) -> Result<HttpResponse, Error> {
    auth.authorize(&req)?;
    Ok(HttpResponse::Ok().json(db.student_payments(path.into_inner()).await))
}
