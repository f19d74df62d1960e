//! Unauthenticated dumps of every table, kept for debugging.

mod views;

use crate::{
    database,
    error::ServiceError,
    models::{
        appointments::Appointment, doctor_ratings::DoctorRating, doctors::DoctorData,
        users::UserData,
    },
    protocol::Reply,
    DbPool,
};
use actix_web::web;
use diesel::prelude::*;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(list_data).service(list_users);
}

crate::route_funcs! {
    (list_data, get, "/list_data"),
    (list_users, get, "/list_users"),
}

async fn list_data_impl(pool: web::Data<DbPool>) -> Result<Reply, ServiceError> {
    use crate::schema::{appointments, doctor_ratings, doctors, users};

    let html = database::run(&pool, |conn| {
        let users = users::table
            .order(users::id.asc())
            .load::<UserData>(conn)?;
        let appointments = appointments::table
            .order(appointments::id.asc())
            .load::<Appointment>(conn)?;
        let doctors = doctors::table
            .order(doctors::id.asc())
            .load::<DoctorData>(conn)?;
        let ratings = doctor_ratings::table
            .order(doctor_ratings::id.asc())
            .load::<DoctorRating>(conn)?;
        Ok(views::list_data(&users, &appointments, &doctors, &ratings))
    })
    .await?;

    Ok(Reply::Page(html))
}

/// Shows the stored password column, which holds argon2 hashes.
async fn list_users_impl(pool: web::Data<DbPool>) -> Result<Reply, ServiceError> {
    use crate::schema::users;

    let users = database::run(&pool, |conn| {
        Ok(users::table
            .order(users::id.asc())
            .load::<UserData>(conn)?)
    })
    .await?;

    Ok(Reply::Page(views::list_users(&users)))
}

#[cfg(test)]
mod tests {
    use crate::test_utils::{body_text, doctor_id, seeded_pool, test_app};
    use actix_web::test;

    #[actix_web::test]
    async fn list_data_dumps_every_table() {
        let pool = seeded_pool();
        let id = doctor_id(&pool, "Pediatra");
        let app = test_app!(pool);

        let requests = vec![
            test::TestRequest::post()
                .uri("/register")
                .set_form([("username", "alice"), ("password", "pw-1")])
                .to_request(),
            test::TestRequest::post()
                .uri("/schedule")
                .set_form([("appointment_date", "2025-06-01")])
                .to_request(),
            test::TestRequest::post()
                .uri(&format!("/rate-doctor/{}", id))
                .set_form([("rating", "4"), ("review", "Bom")])
                .to_request(),
        ];
        for req in requests {
            test::call_service(&app, req).await;
        }

        let req = test::TestRequest::get().uri("/list_data").to_request();
        let body = body_text(test::call_service(&app, req).await).await;
        assert!(body.contains("Usuário: alice<br>"));
        assert!(body.contains("Data: 2025-06-01<br>"));
        assert!(body.contains("Nome: Dr. Renato Oliveira, Especialidade: Clínico Geral<br>"));
        assert!(body.contains(&format!("Médico: {}, Paciente: 1, Nota: 4, Comentário: Bom<br>", id)));
        assert!(!body.contains("pw-1"));
    }

    #[actix_web::test]
    async fn list_users_shows_hashes_not_passwords() {
        let pool = seeded_pool();
        let app = test_app!(pool);

        let req = test::TestRequest::post()
            .uri("/register")
            .set_form([("username", "alice"), ("password", "pw-1")])
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::get().uri("/list_users").to_request();
        let body = body_text(test::call_service(&app, req).await).await;
        assert!(body.starts_with("ID: 1, Usuário: alice, Senha: $argon2"));
        assert!(!body.contains("pw-1"));
    }
}
