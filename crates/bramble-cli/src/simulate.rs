use std::time::Duration;

use bramble_core::{ActivationOutcome, SharedProbe};
use bramble_gate::{ActivationController, Engagement};
use bramble_tag::RecordingLoader;
use tokio::time::sleep;
use tracing::info;

use crate::config::{Scenario, ScenarioAction};

pub async fn run_simulation(scenario: Scenario) -> Result<(), Box<dyn std::error::Error>> {
    let probe = SharedProbe::new(scenario.environment.clone());
    let loader = RecordingLoader::new();
    let controller = ActivationController::new(scenario.gate, probe.clone(), loader.clone());

    let observer = controller.install_trap_observer(&scenario.document);

    println!(
        "simulating page session ({} scripted events, trap {})...",
        scenario.events.len(),
        if observer.armed() { "armed" } else { "absent" }
    );

    let outcome = match controller.engage() {
        Engagement::Suppressed(signal) => ActivationOutcome::SuppressedImmediate(signal),
        Engagement::Armed(gate) => {
            let mut tasks = Vec::new();

            for event in &scenario.events {
                let delay = Duration::from_millis(event.at_ms);
                let at_ms = event.at_ms;

                match event.kind.action() {
                    ScenarioAction::Interaction(kind) => {
                        let handle = gate.handle(kind);
                        tasks.push(tokio::spawn(async move {
                            sleep(delay).await;
                            info!(at_ms, kind = ?kind, "interaction dispatched");
                            handle.fire();
                        }));
                    }
                    ScenarioAction::TrapClick => {
                        let observer = observer.clone();
                        tasks.push(tokio::spawn(async move {
                            sleep(delay).await;
                            info!(at_ms, "trap element clicked");
                            observer.on_trap_click();
                        }));
                    }
                    ScenarioAction::AutomationFlag => {
                        let probe = probe.clone();
                        tasks.push(tokio::spawn(async move {
                            sleep(delay).await;
                            info!(at_ms, "automation flag raised");
                            probe.update(|snapshot| snapshot.webdriver = true);
                        }));
                    }
                }
            }

            let outcome = gate.wait().await;

            // events scheduled past the outcome are moot
            for task in tasks {
                task.abort();
            }

            outcome
        }
    };

    println!("\n--- session outcome ---");
    match &outcome {
        ActivationOutcome::Loaded { trigger } => println!("tag loaded (trigger: {:?})", trigger),
        ActivationOutcome::SuppressedImmediate(signal) => {
            println!("suppressed at page load: {:?}: {}", signal.kind, signal.evidence)
        }
        ActivationOutcome::SuppressedHoneypot => println!("suppressed: honeypot tripped"),
        ActivationOutcome::SuppressedRecheck(signal) => {
            println!("suppressed on re-check: {:?}: {}", signal.kind, signal.evidence)
        }
        ActivationOutcome::AlreadyLoaded => println!("no-op: tag already loaded"),
    }
    println!("honeypot tripped: {}", observer.tripped());
    println!("load requests: {:?}", loader.requests());

    Ok(())
}
