use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::gasto::CategoriaGasto;

/// Consolidated financial report for a lote, combining current expenses with
/// the latest saved projection (when one exists).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResumenFinanciero {
    pub total_gastos: f64,
    /// Zero-filled: every category is present even when its sum is zero.
    pub gastos_por_categoria: BTreeMap<CategoriaGasto, f64>,
    pub proyeccion_ingreso: f64,
    pub utilidad_estimada: f64,
    /// Percentage.
    pub margen_utilidad: f64,
    /// Percentage.
    pub retorno_inversion: f64,
    /// kg required to fully offset total costs at the projected price.
    pub punto_equilibrio: f64,
}

/// Per-lote operational statistics for detail views.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EstadisticasLote {
    pub gasto_total: f64,
    pub gasto_promedio_por_hectarea: f64,
    pub proyeccion_utilidad: f64,
    pub dias_hasta_cosecha: i64,
    /// Whole percentage in 0..=100.
    pub progreso_crecimiento: u8,
}
