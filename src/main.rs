#[macro_use]
extern crate diesel;

mod admin;
mod config;
mod database;
mod error;
mod models;
mod pages;
mod protocol;
mod rating;
mod schedule;
mod schema;
mod site;
mod user;
mod utils;

#[cfg(test)]
mod test_utils;

use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use diesel::{r2d2::ConnectionManager, SqliteConnection};

use crate::config::Config;

type DbPool = r2d2::Pool<ConnectionManager<SqliteConnection>>;

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(site::config)
        .configure(user::config)
        .configure(schedule::config)
        .configure(rating::config)
        .configure(admin::config);
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env()?;
    let pool = database::build_pool(&config)?;
    {
        let mut conn = database::get_db_conn(&pool)?;
        database::run_migrations(&mut conn)?;
        let seeded = database::seed::seed_doctors(&mut conn)?;
        log::info!("seeded {} doctors", seeded);
    }

    let bind = config.bind_address.clone();
    log::info!("listening on {} with database {}", bind, config.database_url);

    let pool = web::Data::new(pool);
    let config = web::Data::new(config);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(pool.clone())
            .app_data(config.clone())
            .configure(routes)
    })
    .bind(&bind)
    .with_context(|| format!("Failed to bind {}", bind))?
    .run()
    .await
    .context("Server error")
}
