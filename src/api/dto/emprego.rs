//! Job listing Data Transfer Objects

use serde::{Deserialize, Deserializer, Serialize, de::Error as _};
use utoipa::ToSchema;
use validator::Validate;

use super::limits::{max_100, max_255};
use crate::models::{Emprego, EmpregoChanges, EmpregoWithRelations, Ramo, Regiao};

/// Create/replace payload for a listing.
///
/// Every field is required. Text fields must be non-empty; the foreign keys
/// accept a JSON number or a numeric string, and `0` is a valid id.
#[derive(Debug, Default, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EmpregoRequest {
    #[validate(
        required(message = "Todos os campos são obrigatórios."),
        length(min = 1, message = "Todos os campos são obrigatórios."),
        custom(function = max_255)
    )]
    #[schema(example = "Desenvolvedor Rust", value_type = String)]
    pub titulo: Option<String>,

    #[validate(
        required(message = "Todos os campos são obrigatórios."),
        length(min = 1, message = "Todos os campos são obrigatórios."),
        custom(function = max_100)
    )]
    #[schema(example = "CLT", value_type = String)]
    pub tipo_vaga: Option<String>,

    #[validate(
        required(message = "Todos os campos são obrigatórios."),
        length(min = 1, message = "Todos os campos são obrigatórios."),
        custom(function = max_100)
    )]
    #[schema(example = "Pleno", value_type = String)]
    pub experiencia: Option<String>,

    #[validate(
        required(message = "Todos os campos são obrigatórios."),
        length(min = 1, message = "Todos os campos são obrigatórios."),
        custom(function = max_255)
    )]
    #[schema(example = "Recife - PE", value_type = String)]
    pub localizacao: Option<String>,

    #[validate(
        required(message = "Todos os campos são obrigatórios."),
        length(min = 1, message = "Todos os campos são obrigatórios.")
    )]
    #[schema(example = "https://example.com/vaga.png", value_type = String)]
    pub imagem: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_id")]
    #[validate(required(message = "Todos os campos são obrigatórios."))]
    #[schema(example = 1, value_type = i32)]
    pub ramo_id: Option<i32>,

    #[serde(default, deserialize_with = "deserialize_optional_id")]
    #[validate(required(message = "Todos os campos são obrigatórios."))]
    #[schema(example = 1, value_type = i32)]
    pub regiao_id: Option<i32>,
}

impl EmpregoRequest {
    /// Only called after validation, so every field is present.
    pub fn into_changes(self) -> EmpregoChanges {
        EmpregoChanges {
            titulo: self.titulo.unwrap_or_default(),
            tipo_vaga: self.tipo_vaga.unwrap_or_default(),
            experiencia: self.experiencia.unwrap_or_default(),
            localizacao: self.localizacao.unwrap_or_default(),
            imagem: self.imagem.unwrap_or_default(),
            ramo_id: self.ramo_id.unwrap_or_default(),
            regiao_id: self.regiao_id.unwrap_or_default(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(i64),
    Text(String),
}

/// `null`, absent and `""` are all "missing"; anything else must be an i32.
fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawId>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawId::Number(n)) => i32::try_from(n)
            .map(Some)
            .map_err(|_| D::Error::custom(format!("id fora do intervalo: {}", n))),
        Some(RawId::Text(text)) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .parse::<i32>()
                .map(Some)
                .map_err(|_| D::Error::custom(format!("id não numérico: '{}'", text)))
        }
    }
}

/// Listing row as stored
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmpregoResponse {
    pub id: i32,
    pub titulo: String,
    pub tipo_vaga: String,
    pub experiencia: String,
    pub localizacao: String,
    pub imagem: String,
    pub ramo_id: i32,
    pub regiao_id: i32,
}

impl From<Emprego> for EmpregoResponse {
    fn from(emprego: Emprego) -> Self {
        Self {
            id: emprego.id,
            titulo: emprego.titulo,
            tipo_vaga: emprego.tipo_vaga,
            experiencia: emprego.experiencia,
            localizacao: emprego.localizacao,
            imagem: emprego.imagem,
            ramo_id: emprego.ramo_id,
            regiao_id: emprego.regiao_id,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RamoResponse {
    pub id: i32,
    #[schema(example = "Tecnologia")]
    pub nome: String,
}

impl From<Ramo> for RamoResponse {
    fn from(ramo: Ramo) -> Self {
        Self {
            id: ramo.id,
            nome: ramo.nome,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RegiaoResponse {
    pub id: i32,
    #[schema(example = "Nordeste")]
    pub nome: String,
}

impl From<Regiao> for RegiaoResponse {
    fn from(regiao: Regiao) -> Self {
        Self {
            id: regiao.id,
            nome: regiao.nome,
        }
    }
}

/// Listing with its branch and region embedded
#[derive(Debug, Serialize, ToSchema)]
pub struct EmpregoDetailResponse {
    #[serde(flatten)]
    pub emprego: EmpregoResponse,
    pub ramo: RamoResponse,
    pub regiao: RegiaoResponse,
}

impl From<EmpregoWithRelations> for EmpregoDetailResponse {
    fn from(row: EmpregoWithRelations) -> Self {
        Self {
            emprego: row.emprego.into(),
            ramo: row.ramo.into(),
            regiao: row.regiao.into(),
        }
    }
}
