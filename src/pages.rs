use crate::protocol::{Notice, NoticeLevel};

pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

fn notice_html(notice: Option<&Notice>) -> String {
    match notice {
        Some(notice) => {
            let class = match notice.level {
                NoticeLevel::Success => "success",
                NoticeLevel::Error => "error",
            };
            format!(
                "<p class=\"notice {}\">{}</p>\n",
                class,
                escape(&notice.message)
            )
        }
        None => String::new(),
    }
}

/// Wraps `body` in the shared page shell. `body` must already be escaped.
pub fn layout(title: &str, notice: Option<&Notice>, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"pt-BR\">\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n</head>\n<body>\n<h1>{title}</h1>\n{notice}{body}\n</body>\n</html>\n",
        title = escape(title),
        notice = notice_html(notice),
        body = body,
    )
}

pub fn home() -> String {
    layout(
        "Clínica",
        None,
        "<p><a href=\"/login\">Entrar</a> | <a href=\"/register\">Cadastrar</a></p>",
    )
}

pub fn menu() -> String {
    layout(
        "Menu",
        None,
        concat!(
            "<ul>\n",
            "<li><a href=\"/schedule\">Agendar consulta</a></li>\n",
            "<li><a href=\"/select-doctor\">Escolher médico</a></li>\n",
            "<li><a href=\"/logout\">Sair</a></li>\n",
            "</ul>"
        ),
    )
}
