/// Declares actix handlers that forward to `<name>_impl` and log failures.
///
/// Every generated handler takes the pool plus the listed extractors and
/// returns `Result<Reply, ServiceError>`.
#[macro_export]
macro_rules! route_funcs {
    ( $( ( $func_name:ident, $method:ident, $url:literal $(, $arg:ident : $arg_ty:ty )* ) ),+ $(,)? ) => {
        $(
            paste::paste! {
                #[actix_web::$method($url)]
                async fn $func_name(
                    pool: web::Data<DbPool>,
                    $( $arg: $arg_ty ),*
                ) -> Result<$crate::protocol::Reply, $crate::error::ServiceError> {
                    [<$func_name _impl>](pool, $( $arg ),*).await.map_err(|err| {
                        log::warn!("{} failed: {}", stringify!($func_name), err);
                        err
                    })
                }
            }
        )+
    };
}

use crate::{error::ServiceError, models::appointments::DATE_FMT};
use chrono::NaiveDate;

pub fn parse_date_str<S: AsRef<str>>(s: S) -> Result<NaiveDate, ServiceError> {
    let s = s.as_ref().trim();
    NaiveDate::parse_from_str(s, DATE_FMT).map_err(|_| ServiceError::InvalidDate(s.to_string()))
}

/// Checks a required text field: non-blank and at most `max_len` chars.
pub fn check_text_field(name: &str, value: &str, max_len: usize) -> Result<(), ServiceError> {
    if value.trim().is_empty() {
        return Err(ServiceError::InvalidInput(format!("{} é obrigatório", name)));
    }
    check_text_len(name, value, max_len)
}

pub fn check_text_len(name: &str, value: &str, max_len: usize) -> Result<(), ServiceError> {
    if value.chars().count() > max_len {
        return Err(ServiceError::InvalidInput(format!(
            "{} deve ter no máximo {} caracteres",
            name, max_len
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_dates() {
        assert_eq!(
            parse_date_str("2025-06-01").unwrap(),
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
        );
        assert_eq!(
            parse_date_str(" 2024-02-29 ").unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
    }

    #[test]
    fn rejects_bad_dates() {
        for s in ["", "01/06/2025", "2025-13-01", "2023-02-29", "amanhã"] {
            assert!(
                matches!(parse_date_str(s), Err(ServiceError::InvalidDate(_))),
                "{:?} should not parse",
                s
            );
        }
    }

    #[test]
    fn text_field_limits() {
        assert!(check_text_field("Usuário", "alice", 20).is_ok());
        assert!(check_text_field("Usuário", "   ", 20).is_err());
        assert!(check_text_field("Usuário", &"a".repeat(21), 20).is_err());
        // counts chars, not bytes
        assert!(check_text_len("Comentário", &"é".repeat(500), 500).is_ok());
    }
}
