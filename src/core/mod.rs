//! Pure calculation engine and the services that compose it with storage.

pub mod calculos;
pub mod format;
pub mod proyecciones;
pub mod resumen;
pub mod services;
