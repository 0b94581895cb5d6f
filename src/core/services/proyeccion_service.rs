//! Builds and persists projection snapshots via the pure engine.

use uuid::Uuid;

use crate::core::proyecciones::generar_proyeccion;
use crate::core::services::{GastoService, LoteService, ServiceError, ServiceResult};
use crate::domain::{Escenario, Proyeccion};
use crate::storage::JsonStorage;

pub struct ProyeccionService;

impl ProyeccionService {
    /// Builds a projection for the lote from its current expenses and the
    /// supplied base estimates, then persists it. Fails with a not-found
    /// error when the lote does not exist.
    pub fn crear(
        storage: &JsonStorage,
        lote_id: Uuid,
        rendimiento_base: f64,
        precio_base: f64,
        escenario: Escenario,
        notas: Option<String>,
    ) -> ServiceResult<Proyeccion> {
        let lote = LoteService::obtener(storage, lote_id)?;
        let gastos = GastoService::listar_por_lote(storage, lote_id)?;
        let borrador =
            generar_proyeccion(&lote, &gastos, rendimiento_base, precio_base, escenario);
        let guardada = storage.guardar(borrador.persistible(notas))?;
        tracing::info!(
            proyeccion = %guardada.id,
            lote = %lote_id,
            escenario = ?escenario,
            "proyección creada"
        );
        Ok(guardada)
    }

    pub fn listar_por_lote(
        storage: &JsonStorage,
        lote_id: Uuid,
    ) -> ServiceResult<Vec<Proyeccion>> {
        Ok(storage.por_lote(lote_id)?)
    }

    /// The lote's current projection: the one with the most recent
    /// `fecha_proyeccion` among its saved projections.
    pub fn ultima_por_lote(
        storage: &JsonStorage,
        lote_id: Uuid,
    ) -> ServiceResult<Option<Proyeccion>> {
        let proyecciones = Self::listar_por_lote(storage, lote_id)?;
        Ok(proyecciones
            .into_iter()
            .max_by_key(|p| p.fecha_proyeccion))
    }

    /// Removes a projection; true iff it existed.
    pub fn eliminar(storage: &JsonStorage, id: Uuid) -> ServiceResult<bool> {
        Ok(storage.eliminar::<Proyeccion>(id)?)
    }

    pub fn obtener(storage: &JsonStorage, id: Uuid) -> ServiceResult<Proyeccion> {
        storage
            .buscar(id)?
            .ok_or_else(|| ServiceError::NoEncontrado(format!("proyección {id}")))
    }
}
