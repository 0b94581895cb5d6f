//! Local JSON persistence for lotes, gastos, and proyecciones.

pub mod json_backend;

pub use json_backend::JsonStorage;

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::{Gasto, Lote, Proyeccion};
use crate::errors::AgroError;

pub type Result<T> = std::result::Result<T, AgroError>;

/// A persistable record type with a stable identity and an update timestamp
/// stamped on every write.
pub trait Registro: Serialize + DeserializeOwned + Clone {
    /// File name of the collection this record type lives in.
    const ARCHIVO: &'static str;

    fn id(&self) -> Uuid;
    fn marcar_actualizado(&mut self);
}

/// A record owned by a lote through a foreign-key reference.
pub trait RegistroDeLote: Registro {
    fn lote_id(&self) -> Uuid;
}

impl Registro for Lote {
    const ARCHIVO: &'static str = "lotes.json";

    fn id(&self) -> Uuid {
        self.id
    }

    fn marcar_actualizado(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Registro for Gasto {
    const ARCHIVO: &'static str = "gastos.json";

    fn id(&self) -> Uuid {
        self.id
    }

    fn marcar_actualizado(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl RegistroDeLote for Gasto {
    fn lote_id(&self) -> Uuid {
        self.lote_id
    }
}

impl Registro for Proyeccion {
    const ARCHIVO: &'static str = "proyecciones.json";

    fn id(&self) -> Uuid {
        self.id
    }

    fn marcar_actualizado(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl RegistroDeLote for Proyeccion {
    fn lote_id(&self) -> Uuid {
        self.lote_id
    }
}
