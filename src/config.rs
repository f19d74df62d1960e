use anyhow::{bail, Context};
use std::str::FromStr;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    pub pool_size: u32,
    /// Owner stamped on appointments and ratings. There is no login
    /// session, so every booking is made on behalf of this user.
    pub guest_user_id: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "database.db".to_string(),
            bind_address: "127.0.0.1:8080".to_string(),
            pool_size: 4,
            guest_user_id: 1,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> anyhow::Result<Self> {
        let default = Self::default();
        let pool_size = parse_var(&lookup, "DB_POOL_SIZE")?.unwrap_or(default.pool_size);
        if pool_size == 0 {
            bail!("DB_POOL_SIZE must be positive");
        }
        Ok(Self {
            database_url: lookup("DATABASE_URL").unwrap_or(default.database_url),
            bind_address: lookup("BIND_ADDRESS").unwrap_or(default.bind_address),
            pool_size,
            guest_user_id: parse_var(&lookup, "GUEST_USER_ID")?.unwrap_or(default.guest_user_id),
        })
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> anyhow::Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|value| value.parse::<T>())
        .transpose()
        .with_context(|| format!("{} has an invalid value", key))
}
