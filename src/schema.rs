diesel::table! {
    appointments (id) {
        id -> Integer,
        user_id -> Integer,
        doctor_id -> Nullable<Integer>,
        appointment_date -> Date,
    }
}

diesel::table! {
    doctor_ratings (id) {
        id -> Integer,
        doctor_id -> Integer,
        user_id -> Integer,
        rating -> Integer,
        review -> Nullable<Text>,
    }
}

diesel::table! {
    doctors (id) {
        id -> Integer,
        name -> Text,
        specialty -> Text,
        photo -> Text,
    }
}

diesel::table! {
    users (id) {
        id -> Integer,
        username -> Text,
        password -> Text,
    }
}

diesel::joinable!(appointments -> doctors (doctor_id));
diesel::joinable!(appointments -> users (user_id));
diesel::joinable!(doctor_ratings -> doctors (doctor_id));
diesel::joinable!(doctor_ratings -> users (user_id));

diesel::allow_tables_to_appear_in_same_query!(appointments, doctor_ratings, doctors, users,);
