mod requests;
mod views;

use crate::{
    config::Config,
    database::{self, lookup},
    error::ServiceError,
    models::appointments::NewAppointment,
    protocol::{Notice, NoticeQuery, Reply},
    DbPool,
};
use actix_web::web;
use diesel::prelude::*;

use self::requests::*;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(schedule_form)
        .service(schedule)
        .service(select_doctor_form)
        .service(select_doctor)
        .service(schedule_appointment);
}

crate::route_funcs! {
    (schedule_form, get, "/schedule", query: web::Query<NoticeQuery>),
    (schedule, post, "/schedule", config: web::Data<Config>, info: web::Form<ScheduleRequest>),
    (select_doctor_form, get, "/select-doctor", query: web::Query<NoticeQuery>),
    (select_doctor, post, "/select-doctor", info: web::Form<SelectDoctorRequest>),
    (schedule_appointment, get, "/schedule_appointment/{doctor_id}", doctor_id: web::Path<i32>),
}

async fn schedule_form_impl(
    _pool: web::Data<DbPool>,
    query: web::Query<NoticeQuery>,
) -> Result<Reply, ServiceError> {
    let notice = query.into_inner().into_notice();
    Ok(Reply::Page(views::schedule(notice.as_ref())))
}

async fn schedule_impl(
    pool: web::Data<DbPool>,
    config: web::Data<Config>,
    info: web::Form<ScheduleRequest>,
) -> Result<Reply, ServiceError> {
    use crate::schema::appointments;

    let appointment_date = crate::utils::parse_date_str(&info.appointment_date)?;
    let data = NewAppointment {
        user_id: config.guest_user_id,
        doctor_id: None,
        appointment_date,
    };

    // the unique index on the date is the only guard
    let res = database::run(&pool, move |conn| {
        diesel::insert_into(appointments::table)
            .values(data)
            .execute(conn)
            .map_err(|err| {
                ServiceError::on_unique_violation(err, ServiceError::DuplicateDate(appointment_date))
            })
    })
    .await;

    match res {
        Ok(_) => {
            log::info!("appointment booked for {}", appointment_date);
            Ok(Reply::redirect_with(
                "/schedule",
                Notice::success("Consulta agendada com sucesso!"),
            ))
        }
        Err(ServiceError::DuplicateDate(date)) => {
            log::info!("date {} already taken", date);
            Ok(Reply::redirect_with(
                "/schedule",
                Notice::error(ServiceError::DuplicateDate(date)),
            ))
        }
        Err(err) => Err(err),
    }
}

async fn select_doctor_form_impl(
    pool: web::Data<DbPool>,
    query: web::Query<NoticeQuery>,
) -> Result<Reply, ServiceError> {
    let notice = query.into_inner().into_notice();
    let specialties = database::run(&pool, lookup::specialties).await?;
    Ok(Reply::Page(views::select_doctor(
        notice.as_ref(),
        &specialties,
        None,
    )))
}

async fn select_doctor_impl(
    pool: web::Data<DbPool>,
    info: web::Form<SelectDoctorRequest>,
) -> Result<Reply, ServiceError> {
    let specialty = info.into_inner().specialty;
    let (specialties, doctor) = database::run(&pool, move |conn| {
        let doctor = lookup::first_doctor_by_specialty(conn, &specialty)?;
        Ok((lookup::specialties(conn)?, doctor))
    })
    .await?;

    let notice = match doctor {
        Some(_) => None,
        None => Some(Notice::error(
            "Nenhum médico disponível para esta especialidade.",
        )),
    };
    Ok(Reply::Page(views::select_doctor(
        notice.as_ref(),
        &specialties,
        doctor.as_ref(),
    )))
}

/// Confirms the pick only; no appointment row is tied to the doctor.
async fn schedule_appointment_impl(
    pool: web::Data<DbPool>,
    doctor_id: web::Path<i32>,
) -> Result<Reply, ServiceError> {
    let doctor_id = doctor_id.into_inner();
    let doctor = database::run(&pool, move |conn| lookup::find_doctor(conn, doctor_id)).await?;

    Ok(Reply::redirect_with(
        "/select-doctor",
        Notice::success(format!("Você agendou uma consulta com {}.", doctor.name)),
    ))
}
