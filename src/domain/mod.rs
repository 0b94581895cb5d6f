//! Domain models: parcels, expenses, projections, and reporting shapes.

pub mod gasto;
pub mod lote;
pub mod proyeccion;
pub mod resumen;

pub use gasto::{CategoriaGasto, FrecuenciaRecurrencia, Gasto};
pub use lote::{EstadoLote, Lote};
pub use proyeccion::{Escenario, Proyeccion, ProyeccionBorrador};
pub use resumen::{EstadisticasLote, ResumenFinanciero};
