//! Aggregation helpers over expense collections and lote dates.
//!
//! Every function here is a pure computation over in-memory values. Division
//! by zero never escapes as NaN or infinity: each such path returns 0 by
//! contract.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::{CategoriaGasto, Gasto};

const SEGUNDOS_POR_DIA: i64 = 86_400;

/// Sum of `monto` over the collection; empty collection yields 0.
pub fn total_gastos(gastos: &[Gasto]) -> f64 {
    gastos.iter().map(|g| g.monto).sum()
}

/// Per-category expense sums, zero-filled so every category is present.
pub fn gastos_por_categoria(gastos: &[Gasto]) -> BTreeMap<CategoriaGasto, f64> {
    let mut categorias: BTreeMap<CategoriaGasto, f64> =
        CategoriaGasto::ALL.iter().map(|c| (*c, 0.0)).collect();
    for gasto in gastos {
        *categorias.entry(gasto.categoria).or_insert(0.0) += gasto.monto;
    }
    categorias
}

/// Average expense per hectare; 0 when `hectareas` is 0.
pub fn gasto_por_hectarea(gastos: &[Gasto], hectareas: f64) -> f64 {
    if hectareas == 0.0 {
        return 0.0;
    }
    total_gastos(gastos) / hectareas
}

/// Whole days until the estimated harvest date, ceiling semantics, clamped
/// to a minimum of 0. Recomputed against the wall clock on every call.
pub fn dias_hasta_cosecha(fecha_cosecha_estimada: NaiveDate) -> i64 {
    dias_hasta_cosecha_desde(fecha_cosecha_estimada, Utc::now())
}

/// Same as [`dias_hasta_cosecha`] with an explicit reference instant.
pub fn dias_hasta_cosecha_desde(
    fecha_cosecha_estimada: NaiveDate,
    ahora: DateTime<Utc>,
) -> i64 {
    let cosecha = fecha_cosecha_estimada
        .and_hms_opt(0, 0, 0)
        .expect("midnight is always valid")
        .and_utc();
    let segundos = (cosecha - ahora).num_seconds();
    let dias = segundos.div_euclid(SEGUNDOS_POR_DIA)
        + if segundos.rem_euclid(SEGUNDOS_POR_DIA) > 0 { 1 } else { 0 };
    dias.max(0)
}

/// Fraction of elapsed time between planting and harvest as a whole
/// percentage, clamped to `0..=100`. A degenerate span (harvest not after
/// planting) yields 0; the service layer rejects such lotes at creation.
pub fn progreso_crecimiento(
    fecha_siembra: NaiveDate,
    fecha_cosecha_estimada: NaiveDate,
) -> u8 {
    progreso_crecimiento_desde(fecha_siembra, fecha_cosecha_estimada, Utc::now())
}

/// Same as [`progreso_crecimiento`] with an explicit reference instant.
pub fn progreso_crecimiento_desde(
    fecha_siembra: NaiveDate,
    fecha_cosecha_estimada: NaiveDate,
    ahora: DateTime<Utc>,
) -> u8 {
    let siembra = fecha_siembra
        .and_hms_opt(0, 0, 0)
        .expect("midnight is always valid")
        .and_utc();
    let cosecha = fecha_cosecha_estimada
        .and_hms_opt(0, 0, 0)
        .expect("midnight is always valid")
        .and_utc();
    let total = (cosecha - siembra).num_seconds();
    let transcurrido = (ahora - siembra).num_seconds();

    if total <= 0 || transcurrido <= 0 {
        return 0;
    }
    if transcurrido >= total {
        return 100;
    }
    ((transcurrido as f64 / total as f64) * 100.0).round() as u8
}
