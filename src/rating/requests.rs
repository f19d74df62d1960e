use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
pub struct RateDoctorRequest {
    pub rating: String,
    #[serde(default)]
    pub review: Option<String>,
}
