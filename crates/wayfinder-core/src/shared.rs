//! Lock-guarded graph for hosts that query while the operator keeps editing.
//!
//! A query is a read transaction: it either holds the read lock for its whole
//! run ([`SharedGraph::read_with`]) or works on a cloned snapshot
//! ([`SharedGraph::snapshot`]). Mutations take the write lock.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::graph::AdjacencyGraph;
use crate::types::GraphError;

#[derive(Debug, Clone, Default)]
pub struct SharedGraph {
    inner: Arc<RwLock<AdjacencyGraph>>,
}

impl SharedGraph {
    pub fn new(graph: AdjacencyGraph) -> Self {
        Self {
            inner: Arc::new(RwLock::new(graph)),
        }
    }

    pub fn read(&self) -> Result<RwLockReadGuard<'_, AdjacencyGraph>, GraphError> {
        self.inner.read().map_err(|_| GraphError::LockPoisoned)
    }

    pub fn write(&self) -> Result<RwLockWriteGuard<'_, AdjacencyGraph>, GraphError> {
        self.inner.write().map_err(|_| GraphError::LockPoisoned)
    }

    /// Run `f` with the read lock held for its entire duration.
    pub fn read_with<T>(&self, f: impl FnOnce(&AdjacencyGraph) -> T) -> Result<T, GraphError> {
        let guard = self.read()?;
        Ok(f(&guard))
    }

    /// Apply a mutation under the write lock.
    pub fn write_with<T>(
        &self,
        f: impl FnOnce(&mut AdjacencyGraph) -> Result<T, GraphError>,
    ) -> Result<T, GraphError> {
        let mut guard = self.write()?;
        f(&mut guard)
    }

    /// Detached copy of the current graph. Later writes do not affect it.
    pub fn snapshot(&self) -> Result<AdjacencyGraph, GraphError> {
        Ok(self.read()?.clone())
    }
}
