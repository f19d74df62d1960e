use actix_web::{body::BoxBody, http::header, HttpRequest, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Error,
}

/// One-time message shown on the page a redirect lands on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success<S: ToString>(message: S) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.to_string(),
        }
    }

    pub fn error<S: ToString>(message: S) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.to_string(),
        }
    }
}

/// Query string a redirect target receives, `?level=..&message=..`.
/// An unknown level drops the notice instead of failing the page.
#[derive(Default, Deserialize)]
pub struct NoticeQuery {
    pub level: Option<String>,
    pub message: Option<String>,
}

impl NoticeQuery {
    pub fn into_notice(self) -> Option<Notice> {
        let level = match self.level.as_deref() {
            Some("success") => NoticeLevel::Success,
            Some("error") => NoticeLevel::Error,
            _ => return None,
        };
        self.message.map(|message| Notice { level, message })
    }
}

#[derive(Debug)]
pub enum Reply {
    Page(String),
    Redirect { to: String, notice: Option<Notice> },
}

impl Reply {
    pub fn redirect<S: ToString>(to: S) -> Self {
        Reply::Redirect {
            to: to.to_string(),
            notice: None,
        }
    }

    pub fn redirect_with<S: ToString>(to: S, notice: Notice) -> Self {
        Reply::Redirect {
            to: to.to_string(),
            notice: Some(notice),
        }
    }

    fn location(to: &str, notice: Option<&Notice>) -> String {
        match notice.and_then(|notice| serde_urlencoded::to_string(notice).ok()) {
            Some(query) => format!("{}?{}", to, query),
            None => to.to_string(),
        }
    }
}

impl Responder for Reply {
    type Body = BoxBody;

    fn respond_to(self, _req: &HttpRequest) -> HttpResponse<Self::Body> {
        match self {
            Reply::Page(html) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(html),
            Reply::Redirect { to, notice } => HttpResponse::SeeOther()
                .insert_header((header::LOCATION, Reply::location(&to, notice.as_ref())))
                .finish(),
        }
    }
}
