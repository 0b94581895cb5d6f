//! Validated CRUD helpers for lotes, including the cascade that removes a
//! lote's gastos and proyecciones alongside it.

use uuid::Uuid;

use crate::core::services::{ServiceError, ServiceResult};
use crate::domain::{EstadoLote, Gasto, Lote, Proyeccion};
use crate::storage::JsonStorage;

pub struct LoteService;

impl LoteService {
    /// Persists a new lote after validating its invariants.
    pub fn crear(storage: &JsonStorage, lote: Lote) -> ServiceResult<Lote> {
        Self::validar(&lote)?;
        let guardado = storage.guardar(lote)?;
        tracing::info!(lote = %guardado.id, nombre = %guardado.nombre, "lote creado");
        Ok(guardado)
    }

    /// Applies `mutator` to the stored lote, re-validates, bumps the update
    /// timestamp, and persists.
    pub fn actualizar<F>(storage: &JsonStorage, id: Uuid, mutator: F) -> ServiceResult<Lote>
    where
        F: FnOnce(&mut Lote),
    {
        let mut lote = Self::obtener(storage, id)?;
        mutator(&mut lote);
        Self::validar(&lote)?;
        Ok(storage.guardar(lote)?)
    }

    /// Sets the lifecycle state. Any state is settable at any time; there is
    /// no internal state machine enforcing an ordering.
    pub fn cambiar_estado(
        storage: &JsonStorage,
        id: Uuid,
        estado: EstadoLote,
    ) -> ServiceResult<Lote> {
        Self::actualizar(storage, id, |lote| lote.estado = estado)
    }

    /// Removes the lote and cascades to every gasto and proyeccion that
    /// references it. Returns true iff the lote existed.
    pub fn eliminar(storage: &JsonStorage, id: Uuid) -> ServiceResult<bool> {
        if !storage.eliminar::<Lote>(id)? {
            return Ok(false);
        }
        storage.eliminar_por_lote::<Gasto>(id)?;
        storage.eliminar_por_lote::<Proyeccion>(id)?;
        tracing::info!(lote = %id, "lote eliminado con sus gastos y proyecciones");
        Ok(true)
    }

    pub fn listar(storage: &JsonStorage) -> ServiceResult<Vec<Lote>> {
        Ok(storage.todos()?)
    }

    pub fn obtener(storage: &JsonStorage, id: Uuid) -> ServiceResult<Lote> {
        storage
            .buscar(id)?
            .ok_or_else(|| ServiceError::NoEncontrado(format!("lote {id}")))
    }

    fn validar(lote: &Lote) -> ServiceResult<()> {
        if lote.nombre.trim().is_empty() {
            return Err(ServiceError::Validacion("el nombre no puede estar vacío".into()));
        }
        if !(lote.hectareas > 0.0) {
            return Err(ServiceError::Validacion(
                "las hectáreas deben ser un número positivo".into(),
            ));
        }
        if lote.fecha_cosecha_estimada <= lote.fecha_siembra {
            return Err(ServiceError::Validacion(
                "la fecha de cosecha debe ser posterior a la de siembra".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn storage() -> (JsonStorage, TempDir) {
        let temp = TempDir::new().expect("create temp dir");
        let storage =
            JsonStorage::new(Some(temp.path().to_path_buf())).expect("create storage");
        (storage, temp)
    }

    fn lote_valido() -> Lote {
        Lote::new(
            "Norte",
            2.0,
            "Maíz",
            NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 11, 1).unwrap(),
        )
    }

    #[test]
    fn crear_rejects_cosecha_before_siembra() {
        let (storage, _guard) = storage();
        let mut lote = lote_valido();
        lote.fecha_cosecha_estimada = lote.fecha_siembra;
        let err = LoteService::crear(&storage, lote).expect_err("must reject");
        assert!(matches!(err, ServiceError::Validacion(_)));
    }

    #[test]
    fn crear_rejects_non_positive_hectareas() {
        let (storage, _guard) = storage();
        let mut lote = lote_valido();
        lote.hectareas = 0.0;
        let err = LoteService::crear(&storage, lote).expect_err("must reject");
        assert!(matches!(err, ServiceError::Validacion(_)));
    }

    #[test]
    fn actualizar_revalidates_and_persists() {
        let (storage, _guard) = storage();
        let lote = LoteService::crear(&storage, lote_valido()).unwrap();

        let editado = LoteService::actualizar(&storage, lote.id, |l| {
            l.cultivo = "Frijol".into();
        })
        .unwrap();
        assert_eq!(editado.cultivo, "Frijol");

        let err = LoteService::actualizar(&storage, lote.id, |l| l.nombre = "  ".into())
            .expect_err("blank name must be rejected");
        assert!(matches!(err, ServiceError::Validacion(_)));
    }

    #[test]
    fn cambiar_estado_allows_any_transition() {
        let (storage, _guard) = storage();
        let lote = LoteService::crear(&storage, lote_valido()).unwrap();
        let lote =
            LoteService::cambiar_estado(&storage, lote.id, EstadoLote::Cosechado).unwrap();
        assert_eq!(lote.estado, EstadoLote::Cosechado);
        let lote =
            LoteService::cambiar_estado(&storage, lote.id, EstadoLote::Planificado).unwrap();
        assert_eq!(lote.estado, EstadoLote::Planificado);
    }

    #[test]
    fn obtener_reports_missing_lote() {
        let (storage, _guard) = storage();
        let err = LoteService::obtener(&storage, Uuid::new_v4()).expect_err("missing");
        assert!(matches!(err, ServiceError::NoEncontrado(_)));
    }
}
