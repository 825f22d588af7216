use diesel::prelude::*;

/// Job listing row.
#[derive(Debug, Queryable, Selectable, Identifiable, Clone, PartialEq, Eq)]
#[diesel(table_name = crate::schema::empregos)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Emprego {
    pub id: i32,
    pub titulo: String,
    pub tipo_vaga: String,
    pub experiencia: String,
    pub localizacao: String,
    pub imagem: String,
    pub ramo_id: i32,
    pub regiao_id: i32,
}

/// Industry branch a listing belongs to.
#[derive(Debug, Queryable, Selectable, Identifiable, Clone, PartialEq, Eq)]
#[diesel(table_name = crate::schema::ramos)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Ramo {
    pub id: i32,
    pub nome: String,
}

#[derive(Debug, Queryable, Selectable, Identifiable, Clone, PartialEq, Eq)]
#[diesel(table_name = crate::schema::regioes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Regiao {
    pub id: i32,
    pub nome: String,
}

/// Every writable column of a listing.
///
/// Used both for INSERT and for UPDATE; since no field is optional the
/// changeset always replaces the whole row.
#[derive(Debug, Insertable, AsChangeset, Clone, PartialEq, Eq)]
#[diesel(table_name = crate::schema::empregos)]
pub struct EmpregoChanges {
    pub titulo: String,
    pub tipo_vaga: String,
    pub experiencia: String,
    pub localizacao: String,
    pub imagem: String,
    pub ramo_id: i32,
    pub regiao_id: i32,
}

/// A listing joined with its branch and region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmpregoWithRelations {
    pub emprego: Emprego,
    pub ramo: Ramo,
    pub regiao: Regiao,
}

impl From<(Emprego, Ramo, Regiao)> for EmpregoWithRelations {
    fn from((emprego, ramo, regiao): (Emprego, Ramo, Regiao)) -> Self {
        Self { emprego, ramo, regiao }
    }
}
