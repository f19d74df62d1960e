use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
pub struct ScheduleRequest {
    pub appointment_date: String,
}

#[derive(Deserialize, Serialize)]
pub struct SelectDoctorRequest {
    pub specialty: String,
}
