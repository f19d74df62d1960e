use crate::schema::appointments;
use chrono::NaiveDate;

#[derive(Queryable, Debug)]
pub struct Appointment {
    pub id: i32,
    pub user_id: i32,
    pub doctor_id: Option<i32>,
    pub appointment_date: NaiveDate,
}

/// The date-only booking form does not know which doctor was picked, so
/// `doctor_id` stays empty for rows it creates.
#[derive(Insertable)]
#[diesel(table_name = appointments)]
pub struct NewAppointment {
    pub user_id: i32,
    pub doctor_id: Option<i32>,
    pub appointment_date: NaiveDate,
}

pub const DATE_FMT: &str = "%Y-%m-%d";
