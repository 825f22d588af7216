use diesel::prelude::*;

/// Admin model for reading from database
/// `password` always holds an Argon2id PHC string, never plaintext
#[derive(Debug, Queryable, Selectable, Clone, PartialEq, Eq)]
#[diesel(table_name = crate::schema::admins)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Admin {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub password: String,
}

/// NewAdmin model for inserting new records
/// Built by `AdminService` after the password has been hashed
#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::admins)]
pub struct NewAdmin {
    pub username: String,
    pub email: String,
    pub password: String,
}
