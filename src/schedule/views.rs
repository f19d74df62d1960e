use crate::{
    models::doctors::DoctorData,
    pages::{escape, layout},
    protocol::Notice,
};

pub fn schedule(notice: Option<&Notice>) -> String {
    layout(
        "Agendar consulta",
        notice,
        concat!(
            "<form method=\"post\" action=\"/schedule\">\n",
            "<label>Data <input name=\"appointment_date\" type=\"date\" required></label>\n",
            "<button type=\"submit\">Agendar</button>\n",
            "</form>\n",
            "<p><a href=\"/menu\">Voltar ao menu</a></p>"
        ),
    )
}

fn doctor_card(doctor: &DoctorData) -> String {
    format!(
        concat!(
            "<div class=\"doctor\">\n",
            "<img src=\"{photo}\" alt=\"{name}\" width=\"160\">\n",
            "<h2>{name}</h2>\n",
            "<p>{specialty}</p>\n",
            "<p><a href=\"/schedule_appointment/{id}\">Agendar com este médico</a> | ",
            "<a href=\"/rate-doctor/{id}\">Avaliar</a></p>\n",
            "</div>"
        ),
        photo = escape(&doctor.photo),
        name = escape(&doctor.name),
        specialty = escape(&doctor.specialty),
        id = doctor.id,
    )
}

pub fn select_doctor(
    notice: Option<&Notice>,
    specialties: &[String],
    selected: Option<&DoctorData>,
) -> String {
    let options: String = specialties
        .iter()
        .map(|s| {
            let is_selected = selected.map_or(false, |doctor| &doctor.specialty == s);
            format!(
                "<option value=\"{0}\"{1}>{0}</option>\n",
                escape(s),
                if is_selected { " selected" } else { "" }
            )
        })
        .collect();
    let mut body = format!(
        concat!(
            "<form method=\"post\" action=\"/select-doctor\">\n",
            "<label>Especialidade <select name=\"specialty\">\n{}</select></label>\n",
            "<button type=\"submit\">Buscar</button>\n",
            "</form>\n"
        ),
        options
    );
    if let Some(doctor) = selected {
        body.push_str(&doctor_card(doctor));
        body.push('\n');
    }
    body.push_str("<p><a href=\"/menu\">Voltar ao menu</a></p>");
    layout("Escolher médico", notice, &body)
}
