//! In-memory stores for handler and service tests.
//!
//! Each store counts every call so tests can assert that rejected requests
//! never reached persistence.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::error::{AppError, AppResult};
use crate::models::{
    Admin, Emprego, EmpregoChanges, EmpregoWithRelations, NewAdmin, Ramo, Regiao,
};
use crate::repositories::{AdminStore, EmpregoStore};

#[derive(Default)]
pub struct InMemoryAdminStore {
    admins: Mutex<Vec<Admin>>,
    calls: AtomicUsize,
    fail: bool,
}

impl InMemoryAdminStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every call fails like a lost database connection.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn with_admins(admins: Vec<Admin>) -> Self {
        Self {
            admins: Mutex::new(admins),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn admins(&self) -> Vec<Admin> {
        self.admins.lock().unwrap().clone()
    }

    fn record(&self, operation: &str) -> AppResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(AppError::Database {
                operation: operation.to_string(),
                source: anyhow::anyhow!("connection refused"),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl AdminStore for InMemoryAdminStore {
    async fn list_all(&self) -> AppResult<Vec<Admin>> {
        self.record("listar admins")?;
        Ok(self.admins())
    }

    async fn create(&self, new_admin: NewAdmin) -> AppResult<Admin> {
        self.record("criar admin")?;
        let mut admins = self.admins.lock().unwrap();

        if let Some(existing) = admins
            .iter()
            .find(|a| a.email == new_admin.email || a.username == new_admin.username)
        {
            let (field, value) = if existing.email == new_admin.email {
                ("email", new_admin.email)
            } else {
                ("username", new_admin.username)
            };
            return Err(AppError::Duplicate {
                entity: "admins".to_string(),
                field: field.to_string(),
                value,
            });
        }

        let admin = Admin {
            id: admins.iter().map(|a| a.id).max().unwrap_or(0) + 1,
            username: new_admin.username,
            email: new_admin.email,
            password: new_admin.password,
        };
        admins.push(admin.clone());
        Ok(admin)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Admin>> {
        self.record("buscar admin")?;
        Ok(self.admins().into_iter().find(|a| a.email == email))
    }
}

pub struct InMemoryEmpregoStore {
    empregos: Mutex<Vec<Emprego>>,
    ramos: Vec<Ramo>,
    regioes: Vec<Regiao>,
    calls: AtomicUsize,
    fail: bool,
}

impl Default for InMemoryEmpregoStore {
    fn default() -> Self {
        Self {
            empregos: Mutex::new(Vec::new()),
            ramos: vec![
                Ramo { id: 0, nome: "Geral".to_string() },
                Ramo { id: 1, nome: "Tecnologia".to_string() },
                Ramo { id: 2, nome: "Saúde".to_string() },
            ],
            regioes: vec![
                Regiao { id: 0, nome: "Nacional".to_string() },
                Regiao { id: 1, nome: "Sudeste".to_string() },
                Regiao { id: 2, nome: "Nordeste".to_string() },
            ],
            calls: AtomicUsize::new(0),
            fail: false,
        }
    }
}

impl InMemoryEmpregoStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn with_empregos(empregos: Vec<Emprego>) -> Self {
        Self {
            empregos: Mutex::new(empregos),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn empregos(&self) -> Vec<Emprego> {
        self.empregos.lock().unwrap().clone()
    }

    fn record(&self, operation: &str) -> AppResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(AppError::Database {
                operation: operation.to_string(),
                source: anyhow::anyhow!("connection refused"),
            });
        }
        Ok(())
    }

    fn relations(&self, emprego: Emprego) -> Option<EmpregoWithRelations> {
        let ramo = self.ramos.iter().find(|r| r.id == emprego.ramo_id)?.clone();
        let regiao = self.regioes.iter().find(|r| r.id == emprego.regiao_id)?.clone();
        Some(EmpregoWithRelations { emprego, ramo, regiao })
    }

    fn check_references(&self, changes: &EmpregoChanges) -> AppResult<()> {
        if !self.ramos.iter().any(|r| r.id == changes.ramo_id) {
            return Err(AppError::Validation {
                field: "ramoId".to_string(),
                reason: format!("Referência inexistente: '{}'.", changes.ramo_id),
            });
        }
        if !self.regioes.iter().any(|r| r.id == changes.regiao_id) {
            return Err(AppError::Validation {
                field: "regiaoId".to_string(),
                reason: format!("Referência inexistente: '{}'.", changes.regiao_id),
            });
        }
        Ok(())
    }
}

fn apply(id: i32, changes: EmpregoChanges) -> Emprego {
    Emprego {
        id,
        titulo: changes.titulo,
        tipo_vaga: changes.tipo_vaga,
        experiencia: changes.experiencia,
        localizacao: changes.localizacao,
        imagem: changes.imagem,
        ramo_id: changes.ramo_id,
        regiao_id: changes.regiao_id,
    }
}

#[async_trait]
impl EmpregoStore for InMemoryEmpregoStore {
    async fn list_with_relations(&self) -> AppResult<Vec<EmpregoWithRelations>> {
        self.record("listar empregos")?;
        let mut rows = self.empregos();
        rows.sort_by_key(|e| e.id);
        Ok(rows.into_iter().filter_map(|e| self.relations(e)).collect())
    }

    async fn find_with_relations(&self, id: i32) -> AppResult<Option<EmpregoWithRelations>> {
        self.record("buscar emprego")?;
        Ok(self
            .empregos()
            .into_iter()
            .find(|e| e.id == id)
            .and_then(|e| self.relations(e)))
    }

    async fn create(&self, changes: EmpregoChanges) -> AppResult<Emprego> {
        self.record("criar emprego")?;
        self.check_references(&changes)?;
        let mut empregos = self.empregos.lock().unwrap();
        let emprego = apply(empregos.iter().map(|e| e.id).max().unwrap_or(0) + 1, changes);
        empregos.push(emprego.clone());
        Ok(emprego)
    }

    async fn update(&self, id: i32, changes: EmpregoChanges) -> AppResult<Option<Emprego>> {
        self.record("atualizar emprego")?;
        let mut empregos = self.empregos.lock().unwrap();
        let Some(slot) = empregos.iter_mut().find(|e| e.id == id) else {
            return Ok(None);
        };
        self.check_references(&changes)?;
        *slot = apply(id, changes);
        Ok(Some(slot.clone()))
    }

    async fn delete(&self, id: i32) -> AppResult<usize> {
        self.record("deletar emprego")?;
        let mut empregos = self.empregos.lock().unwrap();
        let before = empregos.len();
        empregos.retain(|e| e.id != id);
        Ok(before - empregos.len())
    }
}

pub fn sample_emprego(id: i32) -> Emprego {
    Emprego {
        id,
        titulo: format!("Vaga {}", id),
        tipo_vaga: "CLT".to_string(),
        experiencia: "Júnior".to_string(),
        localizacao: "São Paulo".to_string(),
        imagem: "https://example.com/vaga.png".to_string(),
        ramo_id: 1,
        regiao_id: 1,
    }
}

pub fn sample_changes() -> EmpregoChanges {
    EmpregoChanges {
        titulo: "Desenvolvedor Rust".to_string(),
        tipo_vaga: "PJ".to_string(),
        experiencia: "Sênior".to_string(),
        localizacao: "Recife".to_string(),
        imagem: "https://example.com/rust.png".to_string(),
        ramo_id: 2,
        regiao_id: 2,
    }
}
