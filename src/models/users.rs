use crate::schema::users;

#[derive(Queryable, Debug)]
pub struct UserData {
    pub id: i32,
    pub username: String,
    pub password: String,
}

#[derive(Insertable)]
#[diesel(table_name = users)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}

pub const MAX_USERNAME_LEN: usize = 20;
