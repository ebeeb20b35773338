use std::sync::{Arc, RwLock};

use crate::types::EnvironmentSnapshot;

// callers re-invoke at every decision point: ambient flags can change
// between the page-load check and the later re-check, so a snapshot is
// never cached
pub trait EnvironmentProbe: Send + Sync {
    fn snapshot(&self) -> EnvironmentSnapshot;
}

#[derive(Clone)]
pub struct SharedProbe {
    inner: Arc<RwLock<EnvironmentSnapshot>>,
}

impl SharedProbe {
    pub fn new(snapshot: EnvironmentSnapshot) -> Self {
        Self {
            inner: Arc::new(RwLock::new(snapshot)),
        }
    }

    pub fn update(&self, apply: impl FnOnce(&mut EnvironmentSnapshot)) {
        let mut snapshot = self.inner.write().expect("probe lock poisoned");
        apply(&mut snapshot);
    }
}

impl EnvironmentProbe for SharedProbe {
    fn snapshot(&self) -> EnvironmentSnapshot {
        self.inner.read().expect("probe lock poisoned").clone()
    }
}
