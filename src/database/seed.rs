use crate::models::doctors::NewDoctor;
use anyhow::Context;
use diesel::prelude::*;

const SEED_DOCTORS: [NewDoctor<'static>; 3] = [
    NewDoctor {
        name: "Dr. Carlos Silva",
        specialty: "Cardiologista",
        photo: "https://static.vecteezy.com/system/resources/previews/036/094/750/non_2x/ai-generated-senior-doctor-black-man-arms-crossed-with-smile-pride-on-transparent-background-free-png.png",
    },
    NewDoctor {
        name: "Dr. Pedro Almeida",
        specialty: "Pediatra",
        photo: "https://snapheadshots.com/_ipx/f_webp/images/headshot-types/doctor/feat_1.png",
    },
    NewDoctor {
        name: "Dr. Renato Oliveira",
        specialty: "Clínico Geral",
        photo: "https://static.vecteezy.com/system/resources/previews/036/094/521/non_2x/ai-generated-senior-doctor-asia-man-arms-crossed-with-smile-pride-on-transparent-background-free-png.png",
    },
];

/// Inserts the seed doctors that are not on file yet, matched by name and
/// specialty. Returns how many rows were added.
pub fn seed_doctors(conn: &mut SqliteConnection) -> anyhow::Result<usize> {
    use crate::schema::doctors;

    conn.transaction(|conn| {
        let mut inserted = 0;
        for doctor in SEED_DOCTORS.iter() {
            let res = doctors::table
                .filter(doctors::name.eq(doctor.name))
                .filter(doctors::specialty.eq(doctor.specialty))
                .count()
                .get_result::<i64>(conn)?;
            if res > 0 {
                continue;
            }
            inserted += diesel::insert_into(doctors::table)
                .values(doctor)
                .execute(conn)?;
        }
        Ok::<_, diesel::result::Error>(inserted)
    })
    .context("Failed to seed doctors")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{models::doctors::DoctorData, test_utils::test_pool};

    fn doctor_count(conn: &mut SqliteConnection) -> i64 {
        crate::schema::doctors::table
            .count()
            .get_result(conn)
            .unwrap()
    }

    #[test]
    fn seeds_three_doctors() {
        let pool = test_pool();
        let mut conn = pool.get().unwrap();
        assert_eq!(seed_doctors(&mut conn).unwrap(), 3);

        let doctors = crate::schema::doctors::table
            .order(crate::schema::doctors::id.asc())
            .load::<DoctorData>(&mut conn)
            .unwrap();
        let names: Vec<_> = doctors.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Dr. Carlos Silva", "Dr. Pedro Almeida", "Dr. Renato Oliveira"]
        );
        assert!(doctors.iter().all(|d| d.photo.starts_with("https://")));
    }

    #[test]
    fn reseeding_adds_nothing() {
        let pool = test_pool();
        let mut conn = pool.get().unwrap();
        for _ in 0..3 {
            seed_doctors(&mut conn).unwrap();
        }
        assert_eq!(doctor_count(&mut conn), 3);
        assert_eq!(seed_doctors(&mut conn).unwrap(), 0);
    }

    #[test]
    fn fills_in_missing_seed_rows() {
        use crate::schema::doctors;

        let pool = test_pool();
        let mut conn = pool.get().unwrap();
        seed_doctors(&mut conn).unwrap();
        diesel::delete(doctors::table.filter(doctors::specialty.eq("Pediatra")))
            .execute(&mut conn)
            .unwrap();

        assert_eq!(seed_doctors(&mut conn).unwrap(), 1);
        assert_eq!(doctor_count(&mut conn), 3);
    }
}
