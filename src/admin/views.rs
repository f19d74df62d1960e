use crate::{
    models::{
        appointments::Appointment, doctor_ratings::DoctorRating, doctors::DoctorData,
        users::UserData,
    },
    pages::escape,
};
use std::fmt::Write;

fn or_blank<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

pub fn list_data(
    users: &[UserData],
    appointments: &[Appointment],
    doctors: &[DoctorData],
    ratings: &[DoctorRating],
) -> String {
    let mut out = String::from("<h1>Lista de Dados</h1>");

    out.push_str("<h2>Usuários</h2>");
    for user in users {
        let _ = write!(out, "ID: {}, Usuário: {}<br>", user.id, escape(&user.username));
    }

    out.push_str("<h2>Consultas Agendadas</h2>");
    for appointment in appointments {
        let _ = write!(
            out,
            "ID: {}, Paciente: {}, Médico: {}, Data: {}<br>",
            appointment.id,
            appointment.user_id,
            or_blank(appointment.doctor_id),
            appointment.appointment_date
        );
    }

    out.push_str("<h2>Médicos</h2>");
    for doctor in doctors {
        let _ = write!(
            out,
            "ID: {}, Nome: {}, Especialidade: {}<br>",
            doctor.id,
            escape(&doctor.name),
            escape(&doctor.specialty)
        );
    }

    out.push_str("<h2>Avaliações de Médicos</h2>");
    for rating in ratings {
        let _ = write!(
            out,
            "ID: {}, Médico: {}, Paciente: {}, Nota: {}, Comentário: {}<br>",
            rating.id,
            rating.doctor_id,
            rating.user_id,
            rating.rating,
            escape(&or_blank(rating.review.as_deref()))
        );
    }
    out
}

pub fn list_users(users: &[UserData]) -> String {
    users
        .iter()
        .map(|user| {
            format!(
                "ID: {}, Usuário: {}, Senha: {}<br>",
                user.id,
                escape(&user.username),
                escape(&user.password)
            )
        })
        .collect()
}
