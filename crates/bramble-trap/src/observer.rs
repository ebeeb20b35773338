use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::debug;

use crate::markup;

// honeypot flag for the page session: init false, set permanently true the
// first time the trap element is activated, never reset
#[derive(Debug, Default)]
pub struct TrapState {
    tripped: AtomicBool,
}

impl TrapState {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    // returns true only for the trip that flipped the flag
    pub fn trip(&self) -> bool {
        !self.tripped.swap(true, Ordering::SeqCst)
    }

    pub fn tripped(&self) -> bool {
        self.tripped.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickDisposition {
    // the observer cancels the trap element's default navigation
    SuppressNavigation,
    Ignore,
}

#[derive(Clone)]
pub struct TrapObserver {
    state: Arc<TrapState>,
    armed: bool,
}

impl TrapObserver {
    // armed only when the trap element exists in the document; a missing
    // element leaves the observer inert rather than failing
    pub fn install(state: Arc<TrapState>, document: &str) -> Self {
        let armed = markup::document_has_trap(document);
        if !armed {
            debug!("trap element absent, observer inert");
        }
        Self { state, armed }
    }

    pub fn armed(&self) -> bool {
        self.armed
    }

    pub fn on_trap_click(&self) -> ClickDisposition {
        if !self.armed {
            return ClickDisposition::Ignore;
        }
        if self.state.trip() {
            debug!("honeypot trap tripped");
        }
        ClickDisposition::SuppressNavigation
    }

    pub fn tripped(&self) -> bool {
        self.state.tripped()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_on_armed_observer_trips_and_suppresses_navigation() {
        let state = TrapState::new();
        let observer = TrapObserver::install(state.clone(), "<body><a id=\"bot-trap\"></a></body>");
        assert!(observer.armed());
        assert_eq!(observer.on_trap_click(), ClickDisposition::SuppressNavigation);
        assert!(state.tripped());
    }

    #[test]
    fn observer_without_trap_element_is_inert() {
        let state = TrapState::new();
        let observer = TrapObserver::install(state.clone(), "<body></body>");
        assert!(!observer.armed());
        assert_eq!(observer.on_trap_click(), ClickDisposition::Ignore);
        assert!(!state.tripped());
    }

    #[test]
    fn flag_is_write_once() {
        let state = TrapState::new();
        assert!(state.trip());
        assert!(!state.trip());
        assert!(state.tripped());
    }
}
