use std::sync::{Arc, Mutex};

use bramble_core::InteractionKind;
use tokio::sync::oneshot;
use tracing::trace;

type WinnerSlot = Arc<Mutex<Option<oneshot::Sender<InteractionKind>>>>;

// first-of-N interaction signals: every handle shares one winner slot, the
// first fire drains it and the whole group is detached, so later fires on
// any sibling are silent no-ops
pub struct InteractionRace {
    slot: WinnerSlot,
    winner: oneshot::Receiver<InteractionKind>,
}

#[derive(Clone)]
pub struct InteractionHandle {
    kind: InteractionKind,
    slot: WinnerSlot,
}

impl InteractionRace {
    pub fn new() -> Self {
        let (tx, rx) = oneshot::channel();
        Self {
            slot: Arc::new(Mutex::new(Some(tx))),
            winner: rx,
        }
    }

    pub fn handle(&self, kind: InteractionKind) -> InteractionHandle {
        InteractionHandle {
            kind,
            slot: self.slot.clone(),
        }
    }

    // resolves with the winning interaction class; pends forever if no
    // handle ever fires (the fallback timer wins that select)
    pub async fn won(self) -> InteractionKind {
        match self.winner.await {
            Ok(kind) => kind,
            Err(_) => std::future::pending().await,
        }
    }
}

impl Default for InteractionRace {
    fn default() -> Self {
        Self::new()
    }
}

impl InteractionHandle {
    // true only for the fire that won the race
    pub fn fire(&self) -> bool {
        let sender = self.slot.lock().expect("race slot poisoned").take();
        match sender {
            Some(tx) => {
                trace!(kind = ?self.kind, "interaction won the activation race");
                tx.send(self.kind).is_ok()
            }
            None => false,
        }
    }

    pub fn kind(&self) -> InteractionKind {
        self.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn first_fire_wins_and_detaches_siblings() {
        let race = InteractionRace::new();
        let scroll = race.handle(InteractionKind::Scroll);
        let click = race.handle(InteractionKind::Click);

        assert!(scroll.fire());
        assert!(!click.fire());
        assert!(!scroll.fire());

        assert_eq!(race.won().await, InteractionKind::Scroll);
    }

    #[tokio::test]
    async fn fire_after_race_dropped_is_a_no_op() {
        let race = InteractionRace::new();
        let key = race.handle(InteractionKind::KeyPress);
        drop(race);
        assert!(!key.fire());
    }
}
