mod common;

use agro_core::core::services::{GastoService, LoteService, ProyeccionService};
use agro_core::domain::{CategoriaGasto, Escenario, EstadoLote, Gasto, Lote};
use chrono::NaiveDate;
use uuid::Uuid;

fn lote_de_prueba() -> Lote {
    Lote::new(
        "Lote Norte",
        2.0,
        "Maíz",
        NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
        NaiveDate::from_ymd_opt(2025, 11, 1).unwrap(),
    )
}

fn gasto_de(lote: &Lote, monto: f64) -> Gasto {
    Gasto::new(
        lote.id,
        CategoriaGasto::Fertilizantes,
        "Abono",
        monto,
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
    )
}

#[test]
fn lote_round_trips_through_disk() {
    let storage = common::setup_test_storage();
    let lote = LoteService::crear(&storage, lote_de_prueba().with_ubicacion("Cartago"))
        .expect("create lote");

    let leido = LoteService::obtener(&storage, lote.id).expect("reload lote");
    assert_eq!(leido.nombre, "Lote Norte");
    assert_eq!(leido.ubicacion.as_deref(), Some("Cartago"));
    assert_eq!(leido.estado, EstadoLote::Planificado);
    assert_eq!(leido.fecha_siembra, lote.fecha_siembra);
    assert_eq!(leido.created_at, lote.created_at);
}

#[test]
fn eliminar_lote_cascades_to_children() {
    let storage = common::setup_test_storage();
    let lote = LoteService::crear(&storage, lote_de_prueba()).unwrap();
    let otro = LoteService::crear(&storage, lote_de_prueba()).unwrap();

    GastoService::crear(&storage, gasto_de(&lote, 1000.0)).unwrap();
    GastoService::crear(&storage, gasto_de(&otro, 700.0)).unwrap();
    ProyeccionService::crear(&storage, lote.id, 3000.0, 2.0, Escenario::Realista, None)
        .unwrap();

    assert!(LoteService::eliminar(&storage, lote.id).unwrap());

    assert!(GastoService::listar_por_lote(&storage, lote.id)
        .unwrap()
        .is_empty());
    assert!(ProyeccionService::listar_por_lote(&storage, lote.id)
        .unwrap()
        .is_empty());
    // Sibling records are untouched.
    assert_eq!(
        GastoService::listar_por_lote(&storage, otro.id).unwrap().len(),
        1
    );
}

#[test]
fn eliminar_missing_lote_returns_false() {
    let storage = common::setup_test_storage();
    assert!(!LoteService::eliminar(&storage, Uuid::new_v4()).unwrap());
}

#[test]
fn collections_survive_reopening_the_storage() {
    let storage = common::setup_test_storage();
    let lote = LoteService::crear(&storage, lote_de_prueba()).unwrap();
    GastoService::crear(&storage, gasto_de(&lote, 1234.0)).unwrap();

    let reabierta =
        agro_core::storage::JsonStorage::new(Some(storage.base_dir().to_path_buf())).unwrap();
    let gastos = GastoService::listar_por_lote(&reabierta, lote.id).unwrap();
    assert_eq!(gastos.len(), 1);
    assert!((gastos[0].monto - 1234.0).abs() < 1e-9);
}
