//! Scenario-adjusted profit projection engine.
//!
//! Everything here is side-effect free; persisting the returned draft is the
//! caller's responsibility.

use chrono::Utc;

use crate::core::calculos::total_gastos;
use crate::domain::{Escenario, Gasto, Lote, ProyeccionBorrador};

/// Estimated gross income for a lote: yield × price × hectares.
pub fn proyeccion_ingreso(rendimiento_kg_ha: f64, precio_kg: f64, hectareas: f64) -> f64 {
    rendimiento_kg_ha * precio_kg * hectareas
}

/// Estimated profit; may be negative.
pub fn utilidad_estimada(ingreso: f64, costos_totales: f64) -> f64 {
    ingreso - costos_totales
}

/// Profit as a percentage of income; 0 when income is 0.
pub fn margen_utilidad(utilidad: f64, ingreso: f64) -> f64 {
    if ingreso == 0.0 {
        return 0.0;
    }
    utilidad / ingreso * 100.0
}

/// Profit as a percentage of costs; 0 when costs are 0.
pub fn retorno_inversion(utilidad: f64, costos_totales: f64) -> f64 {
    if costos_totales == 0.0 {
        return 0.0;
    }
    utilidad / costos_totales * 100.0
}

/// Quantity (kg) whose sale fully offsets total costs at the given price;
/// 0 when the price is 0. This is a break-even quantity, not a per-hectare
/// yield figure.
pub fn punto_equilibrio(costos_totales: f64, precio_kg: f64) -> f64 {
    if precio_kg == 0.0 {
        return 0.0;
    }
    costos_totales / precio_kg
}

/// Builds a full projection draft for a lote from its current expenses and
/// base yield/price estimates, applying the scenario's fixed multipliers.
///
/// Total costs are a fresh snapshot of the supplied expenses; income,
/// utility, and margin are derived together so the draft is internally
/// consistent. The projection date is stamped with the current instant.
pub fn generar_proyeccion(
    lote: &Lote,
    gastos: &[Gasto],
    rendimiento_base: f64,
    precio_base: f64,
    escenario: Escenario,
) -> ProyeccionBorrador {
    let rendimiento = rendimiento_base * escenario.factor_rendimiento();
    let precio = precio_base * escenario.factor_precio();

    let costos_totales = total_gastos(gastos);
    let ingreso = proyeccion_ingreso(rendimiento, precio, lote.hectareas);
    let utilidad = utilidad_estimada(ingreso, costos_totales);
    let margen = margen_utilidad(utilidad, ingreso);

    ProyeccionBorrador {
        lote_id: lote.id,
        rendimiento_estimado: rendimiento,
        precio_venta_estimado: precio,
        costos_totales,
        ingreso_estimado: ingreso,
        utilidad_estimada: utilidad,
        margen_utilidad: margen,
        fecha_proyeccion: Utc::now(),
        escenario,
    }
}
