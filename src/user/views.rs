use crate::{pages::layout, protocol::Notice};

fn credentials_form(action: &str, submit: &str) -> String {
    format!(
        concat!(
            "<form method=\"post\" action=\"{action}\">\n",
            "<label>Usuário <input name=\"username\" maxlength=\"20\" required></label>\n",
            "<label>Senha <input name=\"password\" type=\"password\" required></label>\n",
            "<button type=\"submit\">{submit}</button>\n",
            "</form>"
        ),
        action = action,
        submit = submit,
    )
}

pub fn login(notice: Option<&Notice>) -> String {
    let body = format!(
        "{}\n<p><a href=\"/register\">Criar conta</a></p>",
        credentials_form("/login", "Entrar")
    );
    layout("Entrar", notice, &body)
}

pub fn register(notice: Option<&Notice>) -> String {
    let body = format!(
        "{}\n<p><a href=\"/login\">Já tenho conta</a></p>",
        credentials_form("/register", "Cadastrar")
    );
    layout("Cadastro", notice, &body)
}
