pub mod auth;
pub mod dashboard;
pub mod payments;
pub mod routes;
pub mod students;

use actix_web::web;

/// Mounts the whole API under `/api`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(
                web::scope("/auth")
                    .route("/login", web::post().to(auth::login))
                    .route("/logout", web::post().to(auth::logout))
                    .route("/me", web::get().to(auth::me)),
            )
            .service(
                web::scope("/routes")
                    .route("", web::get().to(routes::list_routes))
                    .route("", web::post().to(routes::upsert_route))
                    .route("/{key}", web::get().to(routes::get_route))
                    .route("/{key}", web::delete().to(routes::delete_route))
                    .route("/{bus_number}/students", web::get().to(routes::route_students)),
            )
            .service(
                web::scope("/students")
                    .route("", web::get().to(students::list_students))
                    .route("", web::post().to(students::add_student))
                    .route("/{id}", web::get().to(students::get_student))
                    .route("/{id}/payments", web::get().to(students::student_payments)),
            )
            .service(
                web::scope("/payments")
                    .route("", web::get().to(payments::list_payments))
                    .route("", web::post().to(payments::add_payment)),
            )
            .route("/fees", web::get().to(payments::fee_overview))
            .route("/dashboard", web::get().to(dashboard::dashboard)),
    );
}
