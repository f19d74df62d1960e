use crate::schema::doctor_ratings;

#[derive(Queryable, Debug)]
pub struct DoctorRating {
    pub id: i32,
    pub doctor_id: i32,
    pub user_id: i32,
    pub rating: i32,
    pub review: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = doctor_ratings)]
pub struct NewDoctorRating {
    pub doctor_id: i32,
    pub user_id: i32,
    pub rating: i32,
    pub review: Option<String>,
}

pub const MAX_REVIEW_LEN: usize = 500;
