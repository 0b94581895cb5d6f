pub mod gasto_service;
pub mod lote_service;
pub mod proyeccion_service;
pub mod resumen_service;

pub use gasto_service::GastoService;
pub use lote_service::LoteService;
pub use proyeccion_service::ProyeccionService;
pub use resumen_service::ResumenService;

use crate::errors::AgroError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Storage(#[from] AgroError),
    #[error("No encontrado: {0}")]
    NoEncontrado(String),
    #[error("Validación: {0}")]
    Validacion(String),
}
