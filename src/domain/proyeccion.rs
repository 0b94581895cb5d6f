use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A scenario-based financial forecast snapshot for a lote.
///
/// The derived fields (`ingreso_estimado`, `utilidad_estimada`,
/// `margen_utilidad`) are always internally consistent with the stored
/// yield/price/costs at the moment of creation. Editing the lote's expenses
/// afterwards does not retroactively update a saved projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Proyeccion {
    pub id: Uuid,
    pub lote_id: Uuid,
    /// kg per hectare, scenario-adjusted.
    pub rendimiento_estimado: f64,
    /// Price per kg, scenario-adjusted.
    pub precio_venta_estimado: f64,
    /// Snapshot of the expense sum at projection time.
    pub costos_totales: f64,
    pub ingreso_estimado: f64,
    pub utilidad_estimada: f64,
    /// Percentage.
    pub margen_utilidad: f64,
    pub fecha_proyeccion: DateTime<Utc>,
    pub escenario: Escenario,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notas: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Engine output before identity and persistence timestamps are assigned.
///
/// [`crate::core::proyecciones::generar_proyeccion`] produces this; the
/// persistence path turns it into a [`Proyeccion`].
#[derive(Debug, Clone, PartialEq)]
pub struct ProyeccionBorrador {
    pub lote_id: Uuid,
    pub rendimiento_estimado: f64,
    pub precio_venta_estimado: f64,
    pub costos_totales: f64,
    pub ingreso_estimado: f64,
    pub utilidad_estimada: f64,
    pub margen_utilidad: f64,
    pub fecha_proyeccion: DateTime<Utc>,
    pub escenario: Escenario,
}

impl ProyeccionBorrador {
    /// Assigns identity and timestamps, yielding a persistable record.
    pub fn persistible(self, notas: Option<String>) -> Proyeccion {
        let now = Utc::now();
        Proyeccion {
            id: Uuid::new_v4(),
            lote_id: self.lote_id,
            rendimiento_estimado: self.rendimiento_estimado,
            precio_venta_estimado: self.precio_venta_estimado,
            costos_totales: self.costos_totales,
            ingreso_estimado: self.ingreso_estimado,
            utilidad_estimada: self.utilidad_estimada,
            margen_utilidad: self.margen_utilidad,
            fecha_proyeccion: self.fecha_proyeccion,
            escenario: self.escenario,
            notas,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Forecast scenario with its fixed yield and price adjustments.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Escenario {
    Optimista,
    Realista,
    Pesimista,
}

impl Escenario {
    pub const ALL: [Escenario; 3] = [
        Escenario::Optimista,
        Escenario::Realista,
        Escenario::Pesimista,
    ];

    /// Multiplier applied to the base yield estimate.
    pub fn factor_rendimiento(&self) -> f64 {
        match self {
            Escenario::Optimista => 1.20,
            Escenario::Realista => 1.0,
            Escenario::Pesimista => 0.80,
        }
    }

    /// Multiplier applied to the base sale price.
    pub fn factor_precio(&self) -> f64 {
        match self {
            Escenario::Optimista => 1.10,
            Escenario::Realista => 1.0,
            Escenario::Pesimista => 0.90,
        }
    }

    pub fn etiqueta(&self) -> &'static str {
        match self {
            Escenario::Optimista => "Optimista",
            Escenario::Realista => "Realista",
            Escenario::Pesimista => "Pesimista",
        }
    }
}
