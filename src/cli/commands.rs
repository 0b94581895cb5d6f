//! Argument dispatch over the service layer.

use uuid::Uuid;

use crate::cli::{forms, output::Formatter, CliError, CliResult};
use crate::core::services::{
    GastoService, LoteService, ProyeccionService, ResumenService,
};
use crate::domain::Lote;
use crate::storage::JsonStorage;

pub fn dispatch(storage: &JsonStorage, formatter: &Formatter, args: &[String]) -> CliResult {
    let mut palabras = args.iter().map(String::as_str);
    match palabras.next() {
        None | Some("help") | Some("ayuda") => {
            print_help(formatter);
            Ok(())
        }
        Some("lote") => dispatch_lote(storage, formatter, &mut palabras),
        Some("gasto") => dispatch_gasto(storage, formatter, &mut palabras),
        Some("proyeccion") => dispatch_proyeccion(storage, formatter, &mut palabras),
        Some("resumen") => {
            let lote = resolver_lote(storage, palabras.next())?;
            let resumen = ResumenService::resumen_financiero(storage, lote.id)?;
            let stats = ResumenService::estadisticas(storage, lote.id)?;
            formatter.print_resumen(&resumen);
            formatter.print_estadisticas(&stats);
            Ok(())
        }
        Some(otro) => Err(CliError::Uso(format!("comando desconocido: {otro}"))),
    }
}

fn dispatch_lote<'a>(
    storage: &JsonStorage,
    formatter: &Formatter,
    palabras: &mut impl Iterator<Item = &'a str>,
) -> CliResult {
    match palabras.next() {
        Some("list") | None => {
            let lotes = LoteService::listar(storage)?;
            if lotes.is_empty() {
                formatter.print_info("No hay lotes registrados.");
                return Ok(());
            }
            formatter.print_header("Lotes");
            for lote in &lotes {
                formatter.print_lote_row(lote);
            }
            Ok(())
        }
        Some("add") => {
            let lote = LoteService::crear(storage, forms::formulario_lote()?)?;
            formatter.print_success(format!("Lote creado: {} ({})", lote.nombre, lote.id));
            Ok(())
        }
        Some("show") => {
            let lote = resolver_lote(storage, palabras.next())?;
            formatter.print_header(&lote.nombre);
            formatter.print_lote_row(&lote);
            let stats = ResumenService::estadisticas(storage, lote.id)?;
            formatter.print_estadisticas(&stats);
            Ok(())
        }
        Some("estado") => {
            let lote = resolver_lote(storage, palabras.next())?;
            let estado = forms::seleccionar_estado()?;
            LoteService::cambiar_estado(storage, lote.id, estado)?;
            formatter.print_success(format!(
                "Estado de {} actualizado a {}",
                lote.nombre,
                estado.etiqueta()
            ));
            Ok(())
        }
        Some("delete") => {
            let lote = resolver_lote(storage, palabras.next())?;
            LoteService::eliminar(storage, lote.id)?;
            formatter.print_success(format!(
                "Lote {} eliminado con sus gastos y proyecciones",
                lote.nombre
            ));
            Ok(())
        }
        Some(otro) => Err(CliError::Uso(format!("subcomando de lote desconocido: {otro}"))),
    }
}

fn dispatch_gasto<'a>(
    storage: &JsonStorage,
    formatter: &Formatter,
    palabras: &mut impl Iterator<Item = &'a str>,
) -> CliResult {
    match palabras.next() {
        Some("list") => {
            let lote = resolver_lote(storage, palabras.next())?;
            let gastos = GastoService::listar_por_lote(storage, lote.id)?;
            if gastos.is_empty() {
                formatter.print_info("No hay gastos registrados para este lote.");
                return Ok(());
            }
            formatter.print_header(format!("Gastos de {}", lote.nombre));
            for gasto in &gastos {
                formatter.print_gasto_row(gasto);
            }
            Ok(())
        }
        Some("add") => {
            let lote = resolver_lote(storage, palabras.next())?;
            let gasto = GastoService::crear(storage, forms::formulario_gasto(lote.id)?)?;
            formatter.print_success(format!(
                "Gasto registrado contra {}: {}",
                lote.nombre,
                crate::core::format::formatear_moneda(gasto.monto)
            ));
            Ok(())
        }
        Some("delete") => {
            let id = parse_id(palabras.next(), "gasto")?;
            if GastoService::eliminar(storage, id)? {
                formatter.print_success("Gasto eliminado");
            } else {
                formatter.print_info("No existe un gasto con ese identificador.");
            }
            Ok(())
        }
        _ => Err(CliError::Uso("uso: gasto <list|add|delete> ...".into())),
    }
}

fn dispatch_proyeccion<'a>(
    storage: &JsonStorage,
    formatter: &Formatter,
    palabras: &mut impl Iterator<Item = &'a str>,
) -> CliResult {
    match palabras.next() {
        Some("list") => {
            let lote = resolver_lote(storage, palabras.next())?;
            let proyecciones = ProyeccionService::listar_por_lote(storage, lote.id)?;
            if proyecciones.is_empty() {
                formatter.print_info("No hay proyecciones para este lote.");
                return Ok(());
            }
            formatter.print_header(format!("Proyecciones de {}", lote.nombre));
            for proyeccion in &proyecciones {
                formatter.print_proyeccion(proyeccion);
            }
            Ok(())
        }
        Some("add") => {
            let lote = resolver_lote(storage, palabras.next())?;
            let (rendimiento, precio, escenario, notas) = forms::formulario_proyeccion()?;
            let proyeccion = ProyeccionService::crear(
                storage, lote.id, rendimiento, precio, escenario, notas,
            )?;
            formatter.print_success(format!("Proyección {} creada", escenario.etiqueta()));
            formatter.print_proyeccion(&proyeccion);
            Ok(())
        }
        Some("delete") => {
            let id = parse_id(palabras.next(), "proyección")?;
            if ProyeccionService::eliminar(storage, id)? {
                formatter.print_success("Proyección eliminada");
            } else {
                formatter.print_info("No existe una proyección con ese identificador.");
            }
            Ok(())
        }
        _ => Err(CliError::Uso("uso: proyeccion <list|add|delete> ...".into())),
    }
}

/// Resolves a lote by full id, id prefix, or case-insensitive name.
fn resolver_lote(storage: &JsonStorage, referencia: Option<&str>) -> Result<Lote, CliError> {
    let referencia = referencia
        .ok_or_else(|| CliError::Uso("falta el nombre o id del lote".into()))?;
    let lotes = LoteService::listar(storage)?;

    if let Ok(id) = Uuid::parse_str(referencia) {
        if let Some(lote) = lotes.iter().find(|l| l.id == id) {
            return Ok(lote.clone());
        }
    }
    let en_minusculas = referencia.to_lowercase();
    lotes
        .iter()
        .find(|l| {
            l.nombre.to_lowercase() == en_minusculas
                || l.id.to_string().starts_with(&en_minusculas)
        })
        .cloned()
        .ok_or_else(|| CliError::Uso(format!("no se encontró el lote `{referencia}`")))
}

fn parse_id(valor: Option<&str>, entidad: &str) -> Result<Uuid, CliError> {
    let valor = valor
        .ok_or_else(|| CliError::Uso(format!("falta el identificador de {entidad}")))?;
    Uuid::parse_str(valor)
        .map_err(|_| CliError::Uso(format!("identificador de {entidad} inválido: {valor}")))
}

pub fn print_help(formatter: &Formatter) {
    formatter.print_header("agro_core_cli");
    formatter.print_info("Registro de lotes, gastos y proyecciones agrícolas.");
    formatter.print_info("");
    formatter.print_info("  lote list                 lista los lotes");
    formatter.print_info("  lote add                  crea un lote (formulario)");
    formatter.print_info("  lote show <lote>          detalle y estadísticas");
    formatter.print_info("  lote estado <lote>        cambia el estado");
    formatter.print_info("  lote delete <lote>        elimina el lote y sus registros");
    formatter.print_info("  gasto list <lote>         lista los gastos del lote");
    formatter.print_info("  gasto add <lote>          registra un gasto (formulario)");
    formatter.print_info("  gasto delete <id>         elimina un gasto");
    formatter.print_info("  proyeccion list <lote>    lista las proyecciones");
    formatter.print_info("  proyeccion add <lote>     crea una proyección (formulario)");
    formatter.print_info("  proyeccion delete <id>    elimina una proyección");
    formatter.print_info("  resumen <lote>            resumen financiero consolidado");
}
