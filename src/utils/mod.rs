pub mod jwt;
pub mod password;
pub mod validate;

pub use password::PasswordHasher;
pub use validate::ValidatedJson;
