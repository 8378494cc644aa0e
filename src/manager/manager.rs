use std::collections::HashMap;
use std::sync::Arc;

use serde_json;

use super::managererror::ManagerError;

/// Mutable name → object map, filled while a configuration is being read.
///
/// Once loading is done the builder is turned into a [`FrozenManager`],
/// which is read-only and can be shared across threads.
pub struct ManagerBuilder<V: ?Sized> {
    map: HashMap<String, Arc<V>>
}

impl<V: ?Sized> ManagerBuilder<V> {
    pub fn new() -> ManagerBuilder<V> {
        ManagerBuilder { map: HashMap::new() }
    }

    pub fn insert(&mut self, name: String, value: Arc<V>) -> Option<Arc<V>> {
        self.map.insert(name, value)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn freeze(self) -> FrozenManager<V> {
        FrozenManager { map: self.map }
    }
}

impl<V: ?Sized> Default for ManagerBuilder<V> {
    fn default() -> Self {
        ManagerBuilder::new()
    }
}

/// Read-only view over the objects loaded by a [`ManagerBuilder`].
pub struct FrozenManager<V: ?Sized> {
    map: HashMap<String, Arc<V>>
}

impl<V: ?Sized> FrozenManager<V> {
    pub fn get(&self, name: &str) -> Result<Arc<V>, ManagerError> {
        self.map
            .get(name)
            .cloned()
            .ok_or_else(|| ManagerError::map_elem_not_found(name))
    }

    /// Names in ascending order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.map.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// Loader turning JSON objects into named entries of a [`ManagerBuilder`].
///
/// `S` carries whatever already-loaded objects a loader depends on; loaders
/// without dependencies use `()`.
pub trait IManager<V: ?Sized, S> {
    fn insert_obj_from_json(&self,
                            builder: &mut ManagerBuilder<V>,
                            json_value: serde_json::Value,
                            supports: &S) -> Result<(), ManagerError>;

    fn insert_obj_from_json_vec(&self,
                                builder: &mut ManagerBuilder<V>,
                                json_vec: &[serde_json::Value],
                                supports: &S) -> Result<(), ManagerError> {
        for j in json_vec.iter() {
            self.insert_obj_from_json(builder, j.clone(), supports)?;
        }
        Ok(())
    }
}
