use crate::{
    models::{doctor_ratings::DoctorRating, doctors::DoctorData},
    pages::{escape, layout},
    protocol::Notice,
};

pub fn rate_doctor(notice: Option<&Notice>, doctor: &DoctorData, ratings: &[DoctorRating]) -> String {
    let summary = if ratings.is_empty() {
        "<p>Nenhuma avaliação ainda.</p>".to_string()
    } else {
        let total: i64 = ratings.iter().map(|r| i64::from(r.rating)).sum();
        format!(
            "<p>{} avaliações, média {:.1}</p>",
            ratings.len(),
            total as f64 / ratings.len() as f64
        )
    };
    let reviews: String = ratings
        .iter()
        .filter_map(|r| r.review.as_deref().map(|review| (r.rating, review)))
        .map(|(rating, review)| format!("<li>{}: {}</li>\n", rating, escape(review)))
        .collect();

    let body = format!(
        concat!(
            "<img src=\"{photo}\" alt=\"{name}\" width=\"160\">\n",
            "<h2>{name}</h2>\n",
            "<p>{specialty}</p>\n",
            "{summary}\n",
            "<ul>\n{reviews}</ul>\n",
            "<form method=\"post\" action=\"/rate-doctor/{id}\">\n",
            "<label>Nota <input name=\"rating\" type=\"number\" required></label>\n",
            "<label>Comentário <textarea name=\"review\" maxlength=\"500\"></textarea></label>\n",
            "<button type=\"submit\">Enviar</button>\n",
            "</form>\n",
            "<p><a href=\"/select-doctor\">Voltar</a></p>"
        ),
        photo = escape(&doctor.photo),
        name = escape(&doctor.name),
        specialty = escape(&doctor.specialty),
        summary = summary,
        reviews = reviews,
        id = doctor.id,
    );
    layout("Avaliar médico", notice, &body)
}
