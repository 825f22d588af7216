mod admin;
mod emprego;

pub use admin::{Admin, NewAdmin};
pub use emprego::{Emprego, EmpregoChanges, EmpregoWithRelations, Ramo, Regiao};
