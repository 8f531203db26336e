// ============================================================================
// STORAGE - Contrato clave/valor durable (localStorage o memoria)
// ============================================================================

use serde::{de::DeserializeOwned, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Almacén clave/valor síncrono. Las escrituras devuelven el error del backend
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
    fn remove(&self, key: &str) -> Result<(), String>;
}

/// localStorage del navegador (ámbito del origen, sobrevive a recargas)
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        use gloo_storage::{LocalStorage, Storage};
        LocalStorage::raw().get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        use gloo_storage::{LocalStorage, Storage};
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| format!("Error guardando en localStorage: {:?}", e))
    }

    fn remove(&self, key: &str) -> Result<(), String> {
        use gloo_storage::{LocalStorage, Storage};
        LocalStorage::raw()
            .remove_item(key)
            .map_err(|e| format!("Error eliminando de localStorage: {:?}", e))
    }
}

/// Almacén en memoria. Los clones comparten el mismo mapa, lo que permite
/// simular una recarga creando un store nuevo sobre los mismos datos
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), String> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

pub fn save_json<T: Serialize>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), String> {
    let json = serde_json::to_string(value)
        .map_err(|e| format!("Error serializando datos: {}", e))?;
    store.set(key, &json)
}

/// Lee y deserializa. `Ok(None)` si la clave no existe, `Err` si el JSON es inválido
pub fn load_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>, String> {
    match store.get(key) {
        Some(json) => serde_json::from_str(&json)
            .map(Some)
            .map_err(|e| format!("Error deserializando '{}': {}", key, e)),
        None => Ok(None),
    }
}
