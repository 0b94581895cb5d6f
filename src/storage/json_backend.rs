use std::{
    fs,
    path::{Path, PathBuf},
};

use uuid::Uuid;

use crate::utils::app_data_dir;

use super::{Registro, RegistroDeLote, Result};

const TMP_EXTENSION: &str = "tmp";

/// File-backed key-value store: one JSON array per record type under the
/// application data directory. Writes are staged to a temporary file and
/// renamed into place so a crash never leaves a truncated collection.
#[derive(Clone)]
pub struct JsonStorage {
    root: PathBuf,
}

impl JsonStorage {
    /// Creates a store rooted at `root`, or at the default application data
    /// directory when `None`.
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let root = root.unwrap_or_else(app_data_dir);
        ensure_dir(&root)?;
        Ok(Self { root })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    pub fn base_dir(&self) -> &Path {
        &self.root
    }

    /// Loads the full collection for a record type; a missing file is an
    /// empty collection.
    pub fn todos<T: Registro>(&self) -> Result<Vec<T>> {
        let path = self.collection_path::<T>();
        if !path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Finds a record by id.
    pub fn buscar<T: Registro>(&self, id: Uuid) -> Result<Option<T>> {
        Ok(self.todos::<T>()?.into_iter().find(|r| r.id() == id))
    }

    /// Upserts a record by id, stamping its update timestamp, and returns the
    /// stored value.
    pub fn guardar<T: Registro>(&self, mut registro: T) -> Result<T> {
        registro.marcar_actualizado();
        let mut coleccion = self.todos::<T>()?;
        match coleccion.iter_mut().find(|r| r.id() == registro.id()) {
            Some(existente) => *existente = registro.clone(),
            None => coleccion.push(registro.clone()),
        }
        self.write_collection::<T>(&coleccion)?;
        Ok(registro)
    }

    /// Removes a record by id; true iff a record existed and was removed.
    pub fn eliminar<T: Registro>(&self, id: Uuid) -> Result<bool> {
        let mut coleccion = self.todos::<T>()?;
        let antes = coleccion.len();
        coleccion.retain(|r| r.id() != id);
        if coleccion.len() == antes {
            return Ok(false);
        }
        self.write_collection::<T>(&coleccion)?;
        Ok(true)
    }

    /// Loads every child record referencing the given lote.
    pub fn por_lote<T: RegistroDeLote>(&self, lote_id: Uuid) -> Result<Vec<T>> {
        Ok(self
            .todos::<T>()?
            .into_iter()
            .filter(|r| r.lote_id() == lote_id)
            .collect())
    }

    /// Removes every child record referencing the given lote.
    pub fn eliminar_por_lote<T: RegistroDeLote>(&self, lote_id: Uuid) -> Result<()> {
        let mut coleccion = self.todos::<T>()?;
        let antes = coleccion.len();
        coleccion.retain(|r| r.lote_id() != lote_id);
        if coleccion.len() != antes {
            self.write_collection::<T>(&coleccion)?;
        }
        Ok(())
    }

    fn collection_path<T: Registro>(&self) -> PathBuf {
        self.root.join(T::ARCHIVO)
    }

    fn write_collection<T: Registro>(&self, coleccion: &[T]) -> Result<()> {
        let path = self.collection_path::<T>();
        let tmp = path.with_extension(TMP_EXTENSION);
        let json = serde_json::to_string_pretty(coleccion)?;
        fs::write(&tmp, json)?;
        fs::rename(tmp, path)?;
        Ok(())
    }
}

fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CategoriaGasto, Gasto, Lote};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn storage() -> (JsonStorage, TempDir) {
        let temp = TempDir::new().expect("create temp dir");
        let storage =
            JsonStorage::new(Some(temp.path().to_path_buf())).expect("create storage");
        (storage, temp)
    }

    fn lote_de_prueba() -> Lote {
        Lote::new(
            "Norte",
            2.0,
            "Maíz",
            NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 11, 1).unwrap(),
        )
    }

    #[test]
    fn missing_file_reads_as_empty_collection() {
        let (storage, _guard) = storage();
        let lotes: Vec<Lote> = storage.todos().unwrap();
        assert!(lotes.is_empty());
    }

    #[test]
    fn guardar_round_trips_dates_losslessly() {
        let (storage, _guard) = storage();
        let lote = lote_de_prueba();
        let guardado = storage.guardar(lote.clone()).unwrap();

        let leido: Lote = storage.buscar(lote.id).unwrap().expect("lote persisted");
        assert_eq!(leido.fecha_siembra, lote.fecha_siembra);
        assert_eq!(leido.fecha_cosecha_estimada, lote.fecha_cosecha_estimada);
        assert_eq!(leido.created_at, guardado.created_at);
        assert_eq!(leido.updated_at, guardado.updated_at);
    }

    #[test]
    fn guardar_upserts_and_bumps_updated_at() {
        let (storage, _guard) = storage();
        let lote = storage.guardar(lote_de_prueba()).unwrap();

        let mut editado = lote.clone();
        editado.nombre = "Norte ampliado".into();
        let editado = storage.guardar(editado).unwrap();

        let lotes: Vec<Lote> = storage.todos().unwrap();
        assert_eq!(lotes.len(), 1);
        assert_eq!(lotes[0].nombre, "Norte ampliado");
        assert!(editado.updated_at >= lote.updated_at);
    }

    #[test]
    fn eliminar_reports_whether_a_record_existed() {
        let (storage, _guard) = storage();
        let lote = storage.guardar(lote_de_prueba()).unwrap();
        assert!(storage.eliminar::<Lote>(lote.id).unwrap());
        assert!(!storage.eliminar::<Lote>(lote.id).unwrap());
    }

    #[test]
    fn por_lote_filters_children() {
        let (storage, _guard) = storage();
        let lote_a = storage.guardar(lote_de_prueba()).unwrap();
        let lote_b = storage.guardar(lote_de_prueba()).unwrap();
        let fecha = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        storage
            .guardar(Gasto::new(lote_a.id, CategoriaGasto::Semillas, "a", 10.0, fecha))
            .unwrap();
        storage
            .guardar(Gasto::new(lote_b.id, CategoriaGasto::Otros, "b", 20.0, fecha))
            .unwrap();

        let de_a: Vec<Gasto> = storage.por_lote(lote_a.id).unwrap();
        assert_eq!(de_a.len(), 1);
        assert_eq!(de_a[0].descripcion, "a");

        storage.eliminar_por_lote::<Gasto>(lote_a.id).unwrap();
        let restantes: Vec<Gasto> = storage.todos().unwrap();
        assert_eq!(restantes.len(), 1);
        assert_eq!(restantes[0].lote_id, lote_b.id);
    }
}
