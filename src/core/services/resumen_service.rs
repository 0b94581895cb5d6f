//! Composes storage reads with the pure summary builders.

use uuid::Uuid;

use crate::core::resumen::{estadisticas_lote, generar_resumen_financiero};
use crate::core::services::{GastoService, LoteService, ProyeccionService, ServiceResult};
use crate::domain::{EstadisticasLote, ResumenFinanciero};
use crate::storage::JsonStorage;

pub struct ResumenService;

impl ResumenService {
    /// Financial summary for a lote from its current gastos and its latest
    /// saved projection, if any.
    pub fn resumen_financiero(
        storage: &JsonStorage,
        lote_id: Uuid,
    ) -> ServiceResult<ResumenFinanciero> {
        LoteService::obtener(storage, lote_id)?;
        let gastos = GastoService::listar_por_lote(storage, lote_id)?;
        let ultima = ProyeccionService::ultima_por_lote(storage, lote_id)?;
        Ok(generar_resumen_financiero(&gastos, ultima.as_ref()))
    }

    /// Operational statistics for a lote's detail view.
    pub fn estadisticas(
        storage: &JsonStorage,
        lote_id: Uuid,
    ) -> ServiceResult<EstadisticasLote> {
        let lote = LoteService::obtener(storage, lote_id)?;
        let gastos = GastoService::listar_por_lote(storage, lote_id)?;
        let ultima = ProyeccionService::ultima_por_lote(storage, lote_id)?;
        Ok(estadisticas_lote(&lote, &gastos, ultima.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CategoriaGasto, Escenario, Gasto, Lote};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn entorno() -> (JsonStorage, Lote, TempDir) {
        let temp = TempDir::new().expect("create temp dir");
        let storage =
            JsonStorage::new(Some(temp.path().to_path_buf())).expect("create storage");
        let lote = LoteService::crear(
            &storage,
            Lote::new(
                "Norte",
                2.0,
                "Maíz",
                NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
                NaiveDate::from_ymd_opt(2025, 11, 1).unwrap(),
            ),
        )
        .unwrap();
        (storage, lote, temp)
    }

    #[test]
    fn resumen_without_projection_reports_zeros() {
        let (storage, lote, _guard) = entorno();
        GastoService::crear(
            &storage,
            Gasto::new(
                lote.id,
                CategoriaGasto::Semillas,
                "Semilla",
                1000.0,
                NaiveDate::from_ymd_opt(2025, 5, 2).unwrap(),
            ),
        )
        .unwrap();

        let resumen = ResumenService::resumen_financiero(&storage, lote.id).unwrap();
        assert!((resumen.total_gastos - 1000.0).abs() < 1e-9);
        assert_eq!(resumen.proyeccion_ingreso, 0.0);
        assert_eq!(resumen.punto_equilibrio, 0.0);
    }

    #[test]
    fn resumen_uses_latest_projection() {
        let (storage, lote, _guard) = entorno();
        GastoService::crear(
            &storage,
            Gasto::new(
                lote.id,
                CategoriaGasto::Semillas,
                "Semilla",
                1000.0,
                NaiveDate::from_ymd_opt(2025, 5, 2).unwrap(),
            ),
        )
        .unwrap();
        ProyeccionService::crear(&storage, lote.id, 3000.0, 2.0, Escenario::Realista, None)
            .unwrap();

        let resumen = ResumenService::resumen_financiero(&storage, lote.id).unwrap();
        assert!((resumen.proyeccion_ingreso - 12_000.0).abs() < 1e-9);
        assert!((resumen.utilidad_estimada - 11_000.0).abs() < 1e-9);
        assert!((resumen.punto_equilibrio - 500.0).abs() < 1e-9);
    }
}
