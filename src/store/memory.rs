use super::FlowStore;
use crate::error::StoreError;
use crate::schema::Flow;
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use uuid::Uuid;

/// A store that keeps flows in memory, in insertion order.
///
/// The whole store can be written to and read back from a bincode snapshot
/// file, which is how the CLI persists between runs.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFlowStore {
    flows: Vec<Flow>,
}

impl InMemoryFlowStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.flows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flows.is_empty()
    }

    /// Appends a flow without the duplicate-id check. Only useful for
    /// reproducing corrupted stores.
    pub fn push_unchecked(&mut self, flow: Flow) {
        self.flows.push(flow);
    }

    /// Saves the store to a file using the bincode format.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), StoreError> {
        let path = path.as_ref();
        let bytes = encode_to_vec(&self.flows, standard())
            .map_err(|e| StoreError::Snapshot(format!("Serialization failed: {}", e)))?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(path, bytes).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads a store from a file. A missing file yields an empty store.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        match fs::read(path) {
            Ok(bytes) => Self::from_bytes(&bytes),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::new()),
            Err(source) => Err(StoreError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Deserializes a store from a byte slice.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, StoreError> {
        decode_from_slice(bytes, standard())
            .map(|(flows, _)| Self { flows })
            .map_err(|e| StoreError::Snapshot(format!("Deserialization failed: {}", e)))
    }

    fn position(&self, id: Uuid) -> Option<usize> {
        self.flows.iter().position(|f| f.id == id)
    }
}

impl FlowStore for InMemoryFlowStore {
    fn find_where(&self, predicate: &dyn Fn(&Flow) -> bool) -> Result<Vec<Flow>, StoreError> {
        Ok(self.flows.iter().filter(|f| predicate(f)).cloned().collect())
    }

    fn insert(&mut self, flow: Flow) -> Result<(), StoreError> {
        if self.position(flow.id).is_some() {
            return Err(StoreError::DuplicateId(flow.id));
        }
        self.flows.push(flow);
        Ok(())
    }

    fn update(&mut self, flow: Flow) -> Result<(), StoreError> {
        let index = self.position(flow.id).ok_or(StoreError::Missing(flow.id))?;
        self.flows[index] = flow;
        Ok(())
    }

    fn delete(&mut self, id: Uuid) -> Result<(), StoreError> {
        let before = self.flows.len();
        self.flows.retain(|f| f.id != id);
        if self.flows.len() == before {
            return Err(StoreError::Missing(id));
        }
        Ok(())
    }
}
