mod requests;
mod utils;
mod views;

use crate::{
    database,
    error::ServiceError,
    models::users::{NewUser, UserData, MAX_USERNAME_LEN},
    protocol::{Notice, NoticeQuery, Reply},
    DbPool,
};
use actix_web::web;
use diesel::prelude::*;

use self::requests::*;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(login_form)
        .service(login)
        .service(register_form)
        .service(register)
        .service(logout);
}

crate::route_funcs! {
    (login_form, get, "/login", query: web::Query<NoticeQuery>),
    (login, post, "/login", info: web::Form<LoginRequest>),
    (register_form, get, "/register", query: web::Query<NoticeQuery>),
    (register, post, "/register", info: web::Form<RegisterRequest>),
    (logout, get, "/logout"),
}

async fn login_form_impl(
    _pool: web::Data<DbPool>,
    query: web::Query<NoticeQuery>,
) -> Result<Reply, ServiceError> {
    let notice = query.into_inner().into_notice();
    Ok(Reply::Page(views::login(notice.as_ref())))
}

async fn login_impl(
    pool: web::Data<DbPool>,
    info: web::Form<LoginRequest>,
) -> Result<Reply, ServiceError> {
    use crate::schema::users;

    let mut info = info.into_inner();
    info.username = info.username.trim().to_string();
    let username = info.username.clone();
    let verified = database::run(&pool, move |conn| {
        let user = users::table
            .filter(users::username.eq(&info.username))
            .first::<UserData>(conn)
            .optional()?;
        Ok(user.map_or(false, |user| {
            utils::verify_password(&info.password, &user.password)
        }))
    })
    .await?;

    if !verified {
        return Err(ServiceError::InvalidCredentials);
    }

    log::info!("user {} logged in", username);
    Ok(Reply::redirect("/menu"))
}

async fn register_form_impl(
    _pool: web::Data<DbPool>,
    query: web::Query<NoticeQuery>,
) -> Result<Reply, ServiceError> {
    let notice = query.into_inner().into_notice();
    Ok(Reply::Page(views::register(notice.as_ref())))
}

async fn register_impl(
    pool: web::Data<DbPool>,
    info: web::Form<RegisterRequest>,
) -> Result<Reply, ServiceError> {
    use crate::schema::users;

    let mut info = info.into_inner();
    info.username = info.username.trim().to_string();
    crate::utils::check_text_field("Usuário", &info.username, MAX_USERNAME_LEN)?;
    crate::utils::check_text_field("Senha", &info.password, usize::MAX)?;

    let username = info.username.clone();
    database::run(&pool, move |conn| {
        conn.transaction::<_, ServiceError, _>(|conn| {
            let res = users::table
                .filter(users::username.eq(&info.username))
                .count()
                .get_result::<i64>(conn)?;
            if res > 0 {
                return Err(ServiceError::DuplicateUsername);
            }

            let data = NewUser {
                username: info.username,
                password: utils::hash_password(&info.password)?,
            };
            diesel::insert_into(users::table)
                .values(data)
                .execute(conn)
                .map_err(|err| {
                    ServiceError::on_unique_violation(err, ServiceError::DuplicateUsername)
                })?;

            Ok(())
        })
    })
    .await?;

    log::info!("registered user {}", username);
    Ok(Reply::redirect("/login"))
}

async fn logout_impl(_pool: web::Data<DbPool>) -> Result<Reply, ServiceError> {
    Ok(Reply::redirect_with(
        "/login",
        Notice::success("Você saiu da conta com sucesso."),
    ))
}
