//! Interactive dialoguer forms for creating records.

use chrono::NaiveDate;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use uuid::Uuid;

use crate::cli::CliError;
use crate::domain::{
    CategoriaGasto, Escenario, EstadoLote, FrecuenciaRecurrencia, Gasto, Lote,
};

const FORMATO_FECHA: &str = "%Y-%m-%d";

fn leer_texto(prompt: &str) -> Result<String, CliError> {
    let valor: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .interact_text()?;
    Ok(valor.trim().to_string())
}

fn leer_texto_opcional(prompt: &str) -> Result<Option<String>, CliError> {
    let valor: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("{prompt} (opcional)"))
        .allow_empty(true)
        .interact_text()?;
    let valor = valor.trim();
    Ok(if valor.is_empty() {
        None
    } else {
        Some(valor.to_string())
    })
}

fn leer_numero(prompt: &str) -> Result<f64, CliError> {
    let valor: f64 = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .interact_text()?;
    Ok(valor)
}

fn leer_fecha(prompt: &str) -> Result<NaiveDate, CliError> {
    let valor: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("{prompt} (AAAA-MM-DD)"))
        .validate_with(|input: &String| -> Result<(), &str> {
            NaiveDate::parse_from_str(input.trim(), FORMATO_FECHA)
                .map(|_| ())
                .map_err(|_| "fecha inválida, use AAAA-MM-DD")
        })
        .interact_text()?;
    Ok(NaiveDate::parse_from_str(valor.trim(), FORMATO_FECHA)
        .expect("validated by the prompt"))
}

fn seleccionar<T: Copy>(prompt: &str, opciones: &[T], etiquetas: &[&str]) -> Result<T, CliError> {
    let indice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(etiquetas)
        .default(0)
        .interact()?;
    Ok(opciones[indice])
}

/// Prompts for a new lote's fields.
pub fn formulario_lote() -> Result<Lote, CliError> {
    let nombre = leer_texto("Nombre del lote")?;
    let hectareas = leer_numero("Hectáreas")?;
    let cultivo = leer_texto("Cultivo")?;
    let fecha_siembra = leer_fecha("Fecha de siembra")?;
    let fecha_cosecha = leer_fecha("Fecha estimada de cosecha")?;
    let ubicacion = leer_texto_opcional("Ubicación")?;
    let notas = leer_texto_opcional("Notas")?;

    let mut lote = Lote::new(nombre, hectareas, cultivo, fecha_siembra, fecha_cosecha);
    lote.ubicacion = ubicacion;
    lote.notas = notas;
    Ok(lote)
}

/// Prompts for a new gasto against the given lote.
pub fn formulario_gasto(lote_id: Uuid) -> Result<Gasto, CliError> {
    let etiquetas: Vec<&str> = CategoriaGasto::ALL.iter().map(|c| c.etiqueta()).collect();
    let categoria = seleccionar("Categoría", &CategoriaGasto::ALL, &etiquetas)?;
    let descripcion = leer_texto("Descripción")?;
    let monto = leer_numero("Monto")?;
    let fecha = leer_fecha("Fecha del gasto")?;
    let proveedor = leer_texto_opcional("Proveedor")?;
    let unidad = leer_texto_opcional("Unidad (p. ej. kg)")?;

    let mut gasto = Gasto::new(lote_id, categoria, descripcion, monto, fecha);
    gasto.proveedor = proveedor;
    if let Some(unidad) = unidad {
        let cantidad = leer_numero("Cantidad")?;
        gasto = gasto.with_cantidad(unidad, cantidad);
    }
    if confirmar("¿Es un gasto recurrente?")? {
        let frecuencias = [
            FrecuenciaRecurrencia::Semanal,
            FrecuenciaRecurrencia::Mensual,
            FrecuenciaRecurrencia::Estacional,
        ];
        let frecuencia =
            seleccionar("Frecuencia", &frecuencias, &["Semanal", "Mensual", "Estacional"])?;
        gasto = gasto.with_recurrencia(frecuencia);
    }
    Ok(gasto)
}

/// Prompts for the base estimates and scenario of a new projection.
pub fn formulario_proyeccion() -> Result<(f64, f64, Escenario, Option<String>), CliError> {
    let rendimiento = leer_numero("Rendimiento estimado (kg/ha)")?;
    let precio = leer_numero("Precio de venta estimado (por kg)")?;
    let etiquetas: Vec<&str> = Escenario::ALL.iter().map(|e| e.etiqueta()).collect();
    let escenario = seleccionar("Escenario", &Escenario::ALL, &etiquetas)?;
    let notas = leer_texto_opcional("Notas")?;
    Ok((rendimiento, precio, escenario, notas))
}

/// Prompts for a lifecycle state.
pub fn seleccionar_estado() -> Result<EstadoLote, CliError> {
    let etiquetas: Vec<&str> = EstadoLote::ALL.iter().map(|e| e.etiqueta()).collect();
    seleccionar("Nuevo estado", &EstadoLote::ALL, &etiquetas)
}

fn confirmar(prompt: &str) -> Result<bool, CliError> {
    let indice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(&["No", "Sí"])
        .default(0)
        .interact()?;
    Ok(indice == 1)
}
