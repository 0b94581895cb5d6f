//! Validated CRUD helpers for gastos.

use uuid::Uuid;

use crate::core::services::{LoteService, ServiceError, ServiceResult};
use crate::domain::Gasto;
use crate::storage::JsonStorage;

pub struct GastoService;

impl GastoService {
    /// Persists a new gasto against an existing lote.
    pub fn crear(storage: &JsonStorage, gasto: Gasto) -> ServiceResult<Gasto> {
        LoteService::obtener(storage, gasto.lote_id)?;
        Self::validar(&gasto)?;
        let guardado = storage.guardar(gasto)?;
        tracing::info!(
            gasto = %guardado.id,
            lote = %guardado.lote_id,
            monto = guardado.monto,
            "gasto registrado"
        );
        Ok(guardado)
    }

    /// Applies `mutator` to the stored gasto and persists. The derived unit
    /// price is recomputed afterwards so it always matches the written
    /// monto/cantidad pair.
    pub fn actualizar<F>(storage: &JsonStorage, id: Uuid, mutator: F) -> ServiceResult<Gasto>
    where
        F: FnOnce(&mut Gasto),
    {
        let mut gasto = Self::obtener(storage, id)?;
        mutator(&mut gasto);
        gasto.set_cantidad(gasto.cantidad);
        Self::validar(&gasto)?;
        Ok(storage.guardar(gasto)?)
    }

    /// Removes a gasto; true iff it existed.
    pub fn eliminar(storage: &JsonStorage, id: Uuid) -> ServiceResult<bool> {
        Ok(storage.eliminar::<Gasto>(id)?)
    }

    pub fn listar_por_lote(storage: &JsonStorage, lote_id: Uuid) -> ServiceResult<Vec<Gasto>> {
        Ok(storage.por_lote(lote_id)?)
    }

    pub fn obtener(storage: &JsonStorage, id: Uuid) -> ServiceResult<Gasto> {
        storage
            .buscar(id)?
            .ok_or_else(|| ServiceError::NoEncontrado(format!("gasto {id}")))
    }

    fn validar(gasto: &Gasto) -> ServiceResult<()> {
        if gasto.descripcion.trim().is_empty() {
            return Err(ServiceError::Validacion(
                "la descripción no puede estar vacía".into(),
            ));
        }
        if !(gasto.monto > 0.0) {
            return Err(ServiceError::Validacion(
                "el monto debe ser un número positivo".into(),
            ));
        }
        Ok(())
    }
}
