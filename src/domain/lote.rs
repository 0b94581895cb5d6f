use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A tracked unit of cultivated land.
///
/// Owns zero-or-more [`crate::domain::Gasto`] and
/// [`crate::domain::Proyeccion`] records by `lote_id` reference; deleting a
/// lote is the only mechanism that removes its children.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lote {
    pub id: Uuid,
    pub nombre: String,
    pub hectareas: f64,
    pub cultivo: String,
    pub fecha_siembra: NaiveDate,
    pub fecha_cosecha_estimada: NaiveDate,
    pub estado: EstadoLote,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ubicacion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notas: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Lote {
    pub fn new(
        nombre: impl Into<String>,
        hectareas: f64,
        cultivo: impl Into<String>,
        fecha_siembra: NaiveDate,
        fecha_cosecha_estimada: NaiveDate,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            nombre: nombre.into(),
            hectareas,
            cultivo: cultivo.into(),
            fecha_siembra,
            fecha_cosecha_estimada,
            estado: EstadoLote::Planificado,
            ubicacion: None,
            notas: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_ubicacion(mut self, ubicacion: impl Into<String>) -> Self {
        self.ubicacion = Some(ubicacion.into());
        self
    }

    pub fn with_notas(mut self, notas: impl Into<String>) -> Self {
        self.notas = Some(notas.into());
        self
    }
}

/// Lifecycle state of a lote. Transitions are externally driven; any state is
/// settable at any time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EstadoLote {
    Planificado,
    Sembrado,
    Crecimiento,
    Cosechado,
}

impl EstadoLote {
    pub const ALL: [EstadoLote; 4] = [
        EstadoLote::Planificado,
        EstadoLote::Sembrado,
        EstadoLote::Crecimiento,
        EstadoLote::Cosechado,
    ];

    /// Display label for listings and prompts.
    pub fn etiqueta(&self) -> &'static str {
        match self {
            EstadoLote::Planificado => "Planificado",
            EstadoLote::Sembrado => "Sembrado",
            EstadoLote::Crecimiento => "En crecimiento",
            EstadoLote::Cosechado => "Cosechado",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_lote_starts_planificado() {
        let siembra = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
        let cosecha = NaiveDate::from_ymd_opt(2025, 11, 1).unwrap();
        let lote = Lote::new("Norte", 2.5, "Maíz", siembra, cosecha);
        assert_eq!(lote.estado, EstadoLote::Planificado);
        assert_eq!(lote.created_at, lote.updated_at);
        assert!(lote.ubicacion.is_none());
    }

    #[test]
    fn estado_serializes_snake_case() {
        let json = serde_json::to_string(&EstadoLote::Planificado).unwrap();
        assert_eq!(json, "\"planificado\"");
    }
}
