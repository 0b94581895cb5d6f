use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single categorized cost entry against a lote.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gasto {
    pub id: Uuid,
    pub lote_id: Uuid,
    pub categoria: CategoriaGasto,
    pub descripcion: String,
    pub monto: f64,
    pub fecha: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proveedor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unidad: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cantidad: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precio_unitario: Option<f64>,
    #[serde(default)]
    pub es_recurrente: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frecuencia_recurrencia: Option<FrecuenciaRecurrencia>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Gasto {
    pub fn new(
        lote_id: Uuid,
        categoria: CategoriaGasto,
        descripcion: impl Into<String>,
        monto: f64,
        fecha: NaiveDate,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            lote_id,
            categoria,
            descripcion: descripcion.into(),
            monto,
            fecha,
            proveedor: None,
            unidad: None,
            cantidad: None,
            precio_unitario: None,
            es_recurrente: false,
            frecuencia_recurrencia: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_proveedor(mut self, proveedor: impl Into<String>) -> Self {
        self.proveedor = Some(proveedor.into());
        self
    }

    /// Records the purchased quantity and its unit, deriving the unit price.
    pub fn with_cantidad(mut self, unidad: impl Into<String>, cantidad: f64) -> Self {
        self.unidad = Some(unidad.into());
        self.set_cantidad(Some(cantidad));
        self
    }

    pub fn with_recurrencia(mut self, frecuencia: FrecuenciaRecurrencia) -> Self {
        self.es_recurrente = true;
        self.frecuencia_recurrencia = Some(frecuencia);
        self
    }

    /// Sets the quantity and re-derives `precio_unitario` from the current
    /// `monto`. The unit price is only ever written together with the amount
    /// and quantity it was derived from; a zero or absent quantity clears it.
    pub fn set_cantidad(&mut self, cantidad: Option<f64>) {
        self.cantidad = cantidad;
        self.precio_unitario = match cantidad {
            Some(c) if c != 0.0 => Some(self.monto / c),
            _ => None,
        };
    }

    /// Rewrites the amount, keeping the derived unit price consistent.
    pub fn set_monto(&mut self, monto: f64) {
        self.monto = monto;
        self.set_cantidad(self.cantidad);
    }
}

/// Closed set of expense categories.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "snake_case")]
pub enum CategoriaGasto {
    Semillas,
    Fertilizantes,
    Pesticidas,
    ManoObra,
    Maquinaria,
    Combustible,
    AguaRiego,
    Transporte,
    Almacenamiento,
    Otros,
}

impl CategoriaGasto {
    pub const ALL: [CategoriaGasto; 10] = [
        CategoriaGasto::Semillas,
        CategoriaGasto::Fertilizantes,
        CategoriaGasto::Pesticidas,
        CategoriaGasto::ManoObra,
        CategoriaGasto::Maquinaria,
        CategoriaGasto::Combustible,
        CategoriaGasto::AguaRiego,
        CategoriaGasto::Transporte,
        CategoriaGasto::Almacenamiento,
        CategoriaGasto::Otros,
    ];

    /// Display label for listings and prompts.
    pub fn etiqueta(&self) -> &'static str {
        match self {
            CategoriaGasto::Semillas => "Semillas",
            CategoriaGasto::Fertilizantes => "Fertilizantes",
            CategoriaGasto::Pesticidas => "Pesticidas",
            CategoriaGasto::ManoObra => "Mano de obra",
            CategoriaGasto::Maquinaria => "Maquinaria",
            CategoriaGasto::Combustible => "Combustible",
            CategoriaGasto::AguaRiego => "Agua de riego",
            CategoriaGasto::Transporte => "Transporte",
            CategoriaGasto::Almacenamiento => "Almacenamiento",
            CategoriaGasto::Otros => "Otros",
        }
    }
}

/// Recurrence cadence for repeating expenses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FrecuenciaRecurrencia {
    Semanal,
    Mensual,
    Estacional,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_gasto(monto: f64) -> Gasto {
        let fecha = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
        Gasto::new(Uuid::new_v4(), CategoriaGasto::Semillas, "Semilla maíz", monto, fecha)
    }

    #[test]
    fn cantidad_derives_precio_unitario() {
        let gasto = base_gasto(5000.0).with_cantidad("kg", 25.0);
        assert_eq!(gasto.precio_unitario, Some(200.0));
    }

    #[test]
    fn zero_cantidad_clears_precio_unitario() {
        let mut gasto = base_gasto(5000.0).with_cantidad("kg", 25.0);
        gasto.set_cantidad(Some(0.0));
        assert_eq!(gasto.precio_unitario, None);
    }

    #[test]
    fn set_monto_keeps_precio_unitario_consistent() {
        let mut gasto = base_gasto(5000.0).with_cantidad("kg", 25.0);
        gasto.set_monto(2500.0);
        assert_eq!(gasto.precio_unitario, Some(100.0));
    }

    #[test]
    fn categoria_serializes_with_original_wire_names() {
        let json = serde_json::to_string(&CategoriaGasto::ManoObra).unwrap();
        assert_eq!(json, "\"mano_obra\"");
        let json = serde_json::to_string(&CategoriaGasto::AguaRiego).unwrap();
        assert_eq!(json, "\"agua_riego\"");
    }
}
