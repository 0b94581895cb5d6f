//! Styled terminal output helpers.

use std::fmt;

use colored::Colorize;

use crate::core::format::{formatear_moneda, formatear_numero, formatear_porcentaje};
use crate::domain::{EstadisticasLote, Gasto, Lote, Proyeccion, ResumenFinanciero};

pub struct Formatter;

impl Formatter {
    pub fn new() -> Self {
        Self
    }

    pub fn print_header(&self, title: impl fmt::Display) {
        println!("\n{}", format!("=== {} ===", title).bold());
    }

    pub fn print_info(&self, message: impl fmt::Display) {
        println!("{message}");
    }

    pub fn print_success(&self, message: impl fmt::Display) {
        println!("{} {}", "✔".green(), message);
    }

    pub fn print_error(&self, message: impl fmt::Display) {
        eprintln!("{} {}", "✖".red(), message);
    }

    pub fn print_lote_row(&self, lote: &Lote) {
        println!(
            "  {}  {} — {} ({} ha, {})",
            lote.id.to_string()[..8].dimmed(),
            lote.nombre.bold(),
            lote.cultivo,
            formatear_numero(lote.hectareas),
            lote.estado.etiqueta()
        );
    }

    pub fn print_gasto_row(&self, gasto: &Gasto) {
        let cantidad = match (&gasto.unidad, gasto.cantidad) {
            (Some(unidad), Some(cantidad)) => {
                format!(" [{} {}]", formatear_numero(cantidad), unidad)
            }
            _ => String::new(),
        };
        println!(
            "  {}  {}  {}  {}{}",
            gasto.id.to_string()[..8].dimmed(),
            gasto.fecha,
            gasto.categoria.etiqueta(),
            formatear_moneda(gasto.monto),
            cantidad
        );
    }

    pub fn print_proyeccion(&self, proyeccion: &Proyeccion) {
        println!(
            "  {}  {}  ingreso {}  utilidad {}  margen {}",
            proyeccion.id.to_string()[..8].dimmed(),
            proyeccion.escenario.etiqueta(),
            formatear_moneda(proyeccion.ingreso_estimado),
            formatear_moneda(proyeccion.utilidad_estimada),
            formatear_porcentaje(proyeccion.margen_utilidad)
        );
    }

    pub fn print_resumen(&self, resumen: &ResumenFinanciero) {
        self.print_header("Resumen financiero");
        println!("Total de gastos:      {}", formatear_moneda(resumen.total_gastos));
        for (categoria, monto) in &resumen.gastos_por_categoria {
            if *monto > 0.0 {
                println!("  {:<20} {}", categoria.etiqueta(), formatear_moneda(*monto));
            }
        }
        println!("Ingreso proyectado:   {}", formatear_moneda(resumen.proyeccion_ingreso));
        println!("Utilidad estimada:    {}", formatear_moneda(resumen.utilidad_estimada));
        println!("Margen de utilidad:   {}", formatear_porcentaje(resumen.margen_utilidad));
        println!("Retorno de inversión: {}", formatear_porcentaje(resumen.retorno_inversion));
        println!(
            "Punto de equilibrio:  {} kg",
            formatear_numero(resumen.punto_equilibrio)
        );
    }

    pub fn print_estadisticas(&self, stats: &EstadisticasLote) {
        self.print_header("Estadísticas del lote");
        println!("Gasto total:          {}", formatear_moneda(stats.gasto_total));
        println!(
            "Gasto por hectárea:   {}",
            formatear_moneda(stats.gasto_promedio_por_hectarea)
        );
        println!(
            "Utilidad proyectada:  {}",
            formatear_moneda(stats.proyeccion_utilidad)
        );
        println!("Días hasta cosecha:   {}", stats.dias_hasta_cosecha);
        println!(
            "Progreso:             {}",
            formatear_porcentaje(stats.progreso_crecimiento as f64)
        );
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}
