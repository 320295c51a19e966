//! Live vine sessions keyed by opaque ids.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use thiserror::Error;
use uuid::Uuid;

use crate::vine::{GrowthConfig, VineEngine, VineSnapshot};

#[derive(Debug, Error)]
pub enum RegistryError {
    /// Advancing a session id that is not (or no longer) registered.
    #[error("no active session {0}")]
    NotFound(Uuid),
}

/// Maps generated session ids to independently growing engines.
///
/// Mutual exclusion covers the map itself; each engine sits behind its own
/// lock so steps for different sessions never serialize against each other.
/// Caller contract: a single session id is driven by one sequential stream
/// of `advance` calls — pipelining concurrent steps for the same id is
/// unsupported.
#[derive(Default)]
pub struct SessionRegistry {
    sessions: Mutex<HashMap<Uuid, Arc<Mutex<VineEngine>>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct, register, and seed a new session. Returns its id and the
    /// (empty) initial state.
    pub fn create(&self, config: GrowthConfig) -> (Uuid, VineSnapshot) {
        let engine = VineEngine::new(config);
        let snapshot = engine.snapshot();
        let id = Uuid::new_v4();
        self.sessions
            .lock()
            .unwrap()
            .insert(id, Arc::new(Mutex::new(engine)));
        (id, snapshot)
    }

    /// Advance a session one step. The step that reports completion also
    /// evicts the session, so a later call with the same id is `NotFound`.
    pub fn advance(&self, id: Uuid) -> Result<VineSnapshot, RegistryError> {
        let engine = self
            .sessions
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or(RegistryError::NotFound(id))?;

        let snapshot = engine.lock().unwrap().step();
        if snapshot.completed {
            self.sessions.lock().unwrap().remove(&id);
        }
        Ok(snapshot)
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.sessions.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
