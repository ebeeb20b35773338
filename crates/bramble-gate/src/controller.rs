use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use bramble_core::{
    ActivationOutcome, ActivationTrigger, AutomationSignal, EnvironmentProbe, InteractionKind,
};
use bramble_tag::TagLoader;
use bramble_trap::{TrapObserver, TrapState};
use serde::Deserialize;
use tokio::time::sleep;
use tracing::{debug, info, warn};
use uuid::Uuid;

const DEFAULT_FALLBACK_MS: u64 = 5000;

#[derive(Debug, Clone, Deserialize)]
pub struct GateConfig {
    pub tag_id: String,
    #[serde(default = "default_fallback_ms")]
    pub fallback_ms: u64,
}

fn default_fallback_ms() -> u64 {
    DEFAULT_FALLBACK_MS
}

impl GateConfig {
    pub fn new(tag_id: impl Into<String>) -> Self {
        Self {
            tag_id: tag_id.into(),
            fallback_ms: DEFAULT_FALLBACK_MS,
        }
    }

    pub fn fallback(&self) -> Duration {
        Duration::from_millis(self.fallback_ms)
    }
}

// owns the two session flags: the honeypot state shared with installed
// observers, and the one-shot tag_loaded guard (false -> true at most once
// per page session, never back)
pub struct ActivationController<P, L> {
    config: GateConfig,
    probe: P,
    loader: L,
    trap: Arc<TrapState>,
    tag_loaded: AtomicBool,
    session: Uuid,
}

pub enum Engagement<'a, P, L> {
    Suppressed(AutomationSignal),
    Armed(ArmedGate<'a, P, L>),
}

pub struct ArmedGate<'a, P, L> {
    controller: &'a ActivationController<P, L>,
    race: crate::race::InteractionRace,
}

impl<P, L> ActivationController<P, L>
where
    P: EnvironmentProbe,
    L: TagLoader,
{
    pub fn new(config: GateConfig, probe: P, loader: L) -> Self {
        Self {
            config,
            probe,
            loader,
            trap: TrapState::new(),
            tag_loaded: AtomicBool::new(false),
            session: Uuid::new_v4(),
        }
    }

    pub fn trap_state(&self) -> Arc<TrapState> {
        self.trap.clone()
    }

    pub fn install_trap_observer(&self, document: &str) -> TrapObserver {
        TrapObserver::install(self.trap.clone(), document)
    }

    pub fn tag_loaded(&self) -> bool {
        self.tag_loaded.load(Ordering::SeqCst)
    }

    // immediate check at page load: an agent detected here is denied even
    // the chance to trigger the later paths, so nothing is armed
    pub fn engage(&self) -> Engagement<'_, P, L> {
        if let Some(signal) = bramble_detect::evaluate(&self.probe.snapshot()) {
            info!(
                session = %self.session,
                kind = ?signal.kind,
                evidence = %signal.evidence,
                "automation detected at page load, gate disabled"
            );
            return Engagement::Suppressed(signal);
        }

        debug!(
            session = %self.session,
            fallback_ms = self.config.fallback_ms,
            "activation race armed"
        );
        Engagement::Armed(ArmedGate {
            controller: self,
            race: crate::race::InteractionRace::new(),
        })
    }

    // single convergence point for both race branches
    fn activate(&self, trigger: ActivationTrigger) -> ActivationOutcome {
        if self.tag_loaded.load(Ordering::SeqCst) {
            return ActivationOutcome::AlreadyLoaded;
        }

        // the trap outranks the interaction as evidence of automation
        if self.trap.tripped() {
            debug!(session = %self.session, "honeypot tripped, activation suppressed");
            return ActivationOutcome::SuppressedHoneypot;
        }

        if let Some(signal) = bramble_detect::evaluate(&self.probe.snapshot()) {
            debug!(
                session = %self.session,
                kind = ?signal.kind,
                "automation surfaced after arming, activation suppressed"
            );
            return ActivationOutcome::SuppressedRecheck(signal);
        }

        if self
            .tag_loaded
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return ActivationOutcome::AlreadyLoaded;
        }

        match self.loader.request_load(&self.config.tag_id) {
            Ok(()) => info!(
                session = %self.session,
                tag_id = %self.config.tag_id,
                trigger = ?trigger,
                "tag load requested"
            ),
            // non-fatal: the contract is "request load", not "confirm load"
            Err(e) => warn!(session = %self.session, error = %e, "tag loader failed"),
        }

        ActivationOutcome::Loaded { trigger }
    }

    // the fallback path catches humans who never produce a qualifying
    // interaction within the window; it re-checks the flag and the
    // evaluator before delegating
    fn fallback_fire(&self) -> ActivationOutcome {
        if self.tag_loaded.load(Ordering::SeqCst) {
            return ActivationOutcome::AlreadyLoaded;
        }
        if let Some(signal) = bramble_detect::evaluate(&self.probe.snapshot()) {
            return ActivationOutcome::SuppressedRecheck(signal);
        }
        self.activate(ActivationTrigger::Fallback)
    }
}

impl<P, L> ArmedGate<'_, P, L>
where
    P: EnvironmentProbe,
    L: TagLoader,
{
    pub fn handle(&self, kind: InteractionKind) -> crate::race::InteractionHandle {
        self.race.handle(kind)
    }

    // one handle per interaction class in the fixed menu
    pub fn handles(&self) -> Vec<crate::race::InteractionHandle> {
        InteractionKind::ALL
            .iter()
            .map(|&kind| self.race.handle(kind))
            .collect()
    }

    // whichever of {first interaction, fallback timer} fires first wins;
    // the losing branch is dropped by the select
    pub async fn wait(self) -> ActivationOutcome {
        let ArmedGate { controller, race } = self;

        tokio::select! {
            kind = race.won() => {
                controller.activate(ActivationTrigger::Interaction(kind))
            }
            _ = sleep(controller.config.fallback()) => {
                controller.fallback_fire()
            }
        }
    }
}
