use crate::schema::doctors;

#[derive(Queryable, Debug, Clone)]
pub struct DoctorData {
    pub id: i32,
    pub name: String,
    pub specialty: String,
    pub photo: String,
}

#[derive(Insertable)]
#[diesel(table_name = doctors)]
pub struct NewDoctor<'a> {
    pub name: &'a str,
    pub specialty: &'a str,
    pub photo: &'a str,
}
