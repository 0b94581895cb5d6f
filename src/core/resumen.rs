//! Composes aggregation output and the latest projection into reporting
//! structures for display.

use chrono::{DateTime, Utc};

use crate::core::calculos::{
    dias_hasta_cosecha_desde, gasto_por_hectarea, gastos_por_categoria,
    progreso_crecimiento_desde, total_gastos,
};
use crate::core::proyecciones::{
    margen_utilidad, punto_equilibrio, retorno_inversion, utilidad_estimada,
};
use crate::domain::{EstadisticasLote, Gasto, Lote, Proyeccion, ResumenFinanciero};

/// Builds the consolidated financial summary for a lote.
///
/// Without a projection, the forward-looking figures are all 0 — a defined
/// "no projection yet" state, not an error. With a projection, utility,
/// margin, and ROI are recomputed against the CURRENT expense total combined
/// with the projection's stored income, and the break-even quantity uses the
/// stored price; this surfaces drift between the last modeled income and
/// spend recorded since.
pub fn generar_resumen_financiero(
    gastos: &[Gasto],
    proyeccion: Option<&Proyeccion>,
) -> ResumenFinanciero {
    let total = total_gastos(gastos);
    let por_categoria = gastos_por_categoria(gastos);

    let Some(proyeccion) = proyeccion else {
        return ResumenFinanciero {
            total_gastos: total,
            gastos_por_categoria: por_categoria,
            proyeccion_ingreso: 0.0,
            utilidad_estimada: 0.0,
            margen_utilidad: 0.0,
            retorno_inversion: 0.0,
            punto_equilibrio: 0.0,
        };
    };

    let utilidad = utilidad_estimada(proyeccion.ingreso_estimado, total);
    ResumenFinanciero {
        total_gastos: total,
        gastos_por_categoria: por_categoria,
        proyeccion_ingreso: proyeccion.ingreso_estimado,
        utilidad_estimada: utilidad,
        margen_utilidad: margen_utilidad(utilidad, proyeccion.ingreso_estimado),
        retorno_inversion: retorno_inversion(utilidad, total),
        punto_equilibrio: punto_equilibrio(total, proyeccion.precio_venta_estimado),
    }
}

/// Operational statistics for a lote's detail view.
pub fn estadisticas_lote(
    lote: &Lote,
    gastos: &[Gasto],
    proyeccion: Option<&Proyeccion>,
) -> EstadisticasLote {
    estadisticas_lote_desde(lote, gastos, proyeccion, Utc::now())
}

/// Same as [`estadisticas_lote`] with an explicit reference instant.
pub fn estadisticas_lote_desde(
    lote: &Lote,
    gastos: &[Gasto],
    proyeccion: Option<&Proyeccion>,
    ahora: DateTime<Utc>,
) -> EstadisticasLote {
    EstadisticasLote {
        gasto_total: total_gastos(gastos),
        gasto_promedio_por_hectarea: gasto_por_hectarea(gastos, lote.hectareas),
        proyeccion_utilidad: proyeccion.map_or(0.0, |p| p.utilidad_estimada),
        dias_hasta_cosecha: dias_hasta_cosecha_desde(lote.fecha_cosecha_estimada, ahora),
        progreso_crecimiento: progreso_crecimiento_desde(
            lote.fecha_siembra,
            lote.fecha_cosecha_estimada,
            ahora,
        ),
    }
}
