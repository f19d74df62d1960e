pub mod appointments;
pub mod doctor_ratings;
pub mod doctors;
pub mod users;
