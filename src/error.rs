use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use chrono::NaiveDate;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Usuário já existe. Faça login.")]
    DuplicateUsername,
    #[error("Credenciais inválidas. Tente novamente.")]
    InvalidCredentials,
    #[error("Data inválida: {0}")]
    InvalidDate(String),
    #[error("Essa data já foi agendada, por favor selecione outra data.")]
    DuplicateDate(NaiveDate),
    #[error("Médico {0} não encontrado")]
    DoctorNotFound(i32),
    #[error("{0}")]
    InvalidInput(String),
    #[error("Erro de banco de dados")]
    Database(#[from] DieselError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ServiceError {
    /// Maps a unique-constraint violation to `on_duplicate`, keeping any
    /// other database error as is.
    pub fn on_unique_violation(err: DieselError, on_duplicate: ServiceError) -> ServiceError {
        match err {
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => on_duplicate,
            err => ServiceError::Database(err),
        }
    }
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::DuplicateUsername | ServiceError::DuplicateDate(_) => {
                StatusCode::CONFLICT
            }
            ServiceError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ServiceError::InvalidDate(_) | ServiceError::InvalidInput(_) => {
                StatusCode::BAD_REQUEST
            }
            ServiceError::DoctorNotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Database(_) | ServiceError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let body = if status.is_server_error() {
            log::error!("request failed: {:?}", self);
            "Erro interno. Tente novamente mais tarde.".to_string()
        } else {
            self.to_string()
        };
        HttpResponse::build(status)
            .content_type("text/plain; charset=utf-8")
            .body(body)
    }
}
