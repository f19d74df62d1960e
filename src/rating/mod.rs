mod requests;
mod views;

use crate::{
    config::Config,
    database::{self, lookup},
    error::ServiceError,
    models::doctor_ratings::{DoctorRating, NewDoctorRating, MAX_REVIEW_LEN},
    protocol::{Notice, NoticeQuery, Reply},
    DbPool,
};
use actix_web::web;
use diesel::prelude::*;

use self::requests::*;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(rate_doctor_form).service(rate_doctor);
}

crate::route_funcs! {
    (rate_doctor_form, get, "/rate-doctor/{doctor_id}", doctor_id: web::Path<i32>, query: web::Query<NoticeQuery>),
    (rate_doctor, post, "/rate-doctor/{doctor_id}", doctor_id: web::Path<i32>, config: web::Data<Config>, info: web::Form<RateDoctorRequest>),
}

async fn rate_doctor_form_impl(
    pool: web::Data<DbPool>,
    doctor_id: web::Path<i32>,
    query: web::Query<NoticeQuery>,
) -> Result<Reply, ServiceError> {
    use crate::schema::doctor_ratings;

    let doctor_id = doctor_id.into_inner();
    let notice = query.into_inner().into_notice();
    let (doctor, ratings) = database::run(&pool, move |conn| {
        let doctor = lookup::find_doctor(conn, doctor_id)?;
        let ratings = doctor_ratings::table
            .filter(doctor_ratings::doctor_id.eq(doctor_id))
            .order(doctor_ratings::id.desc())
            .load::<DoctorRating>(conn)?;
        Ok((doctor, ratings))
    })
    .await?;

    Ok(Reply::Page(views::rate_doctor(
        notice.as_ref(),
        &doctor,
        &ratings,
    )))
}

/// Range and repeat ratings are not checked; any integer is stored.
async fn rate_doctor_impl(
    pool: web::Data<DbPool>,
    doctor_id: web::Path<i32>,
    config: web::Data<Config>,
    info: web::Form<RateDoctorRequest>,
) -> Result<Reply, ServiceError> {
    use crate::schema::doctor_ratings;

    let doctor_id = doctor_id.into_inner();
    let info = info.into_inner();
    let user_id = config.guest_user_id;
    let rating = database::run(&pool, move |conn| {
        conn.transaction::<_, ServiceError, _>(|conn| {
            lookup::assert_doctor(conn, doctor_id)?;

            let rating = parse_rating(&info.rating)?;
            let review = info.review.filter(|review| !review.trim().is_empty());
            if let Some(review) = &review {
                crate::utils::check_text_len("Comentário", review, MAX_REVIEW_LEN)?;
            }

            let data = NewDoctorRating {
                doctor_id,
                user_id,
                rating,
                review,
            };
            diesel::insert_into(doctor_ratings::table)
                .values(data)
                .execute(conn)?;
            Ok(rating)
        })
    })
    .await?;

    log::info!("doctor {} rated {}", doctor_id, rating);
    Ok(Reply::redirect_with(
        format!("/rate-doctor/{}", doctor_id),
        Notice::success("Avaliação enviada com sucesso!"),
    ))
}

fn parse_rating(s: &str) -> Result<i32, ServiceError> {
    s.trim()
        .parse::<i32>()
        .map_err(|_| ServiceError::InvalidInput(format!("Nota inválida: {}", s)))
}
