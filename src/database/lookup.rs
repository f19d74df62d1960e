use crate::{error::ServiceError, models::doctors::DoctorData};
use diesel::prelude::*;

pub fn find_doctor(conn: &mut SqliteConnection, doctor_id: i32) -> Result<DoctorData, ServiceError> {
    use crate::schema::doctors;

    doctors::table
        .find(doctor_id)
        .get_result::<DoctorData>(conn)
        .optional()?
        .ok_or(ServiceError::DoctorNotFound(doctor_id))
}

pub fn assert_doctor(conn: &mut SqliteConnection, doctor_id: i32) -> Result<(), ServiceError> {
    use crate::schema::doctors;

    let res = doctors::table
        .filter(doctors::id.eq(doctor_id))
        .count()
        .get_result::<i64>(conn)?;
    if res == 0 {
        return Err(ServiceError::DoctorNotFound(doctor_id));
    }
    Ok(())
}

pub fn first_doctor_by_specialty(
    conn: &mut SqliteConnection,
    specialty: &str,
) -> Result<Option<DoctorData>, ServiceError> {
    use crate::schema::doctors;

    Ok(doctors::table
        .filter(doctors::specialty.eq(specialty))
        .order(doctors::id.asc())
        .first::<DoctorData>(conn)
        .optional()?)
}

pub fn specialties(conn: &mut SqliteConnection) -> Result<Vec<String>, ServiceError> {
    use crate::schema::doctors;

    Ok(doctors::table
        .select(doctors::specialty)
        .distinct()
        .order(doctors::specialty.asc())
        .load::<String>(conn)?)
}
