use bramble_core::{AutomationSignal, EnvironmentSnapshot, SignalKind};

use crate::patterns;

// ordered OR of independent heuristics: any single match is sufficient,
// first match wins, no scoring
pub fn evaluate(snapshot: &EnvironmentSnapshot) -> Option<AutomationSignal> {
    check_agent_name(snapshot)
        .or_else(|| check_webdriver_flag(snapshot))
        .or_else(|| check_injected_globals(snapshot))
        .or_else(|| check_plugin_absence(snapshot))
        .or_else(|| check_language_absence(snapshot))
}

pub fn audit(snapshot: &EnvironmentSnapshot) -> Vec<AutomationSignal> {
    [
        check_agent_name(snapshot),
        check_webdriver_flag(snapshot),
        check_injected_globals(snapshot),
        check_plugin_absence(snapshot),
        check_language_absence(snapshot),
    ]
    .into_iter()
    .flatten()
    .collect()
}

pub fn is_automated(snapshot: &EnvironmentSnapshot) -> bool {
    evaluate(snapshot).is_some()
}

fn check_agent_name(snapshot: &EnvironmentSnapshot) -> Option<AutomationSignal> {
    patterns::matched_agent_fragment(&snapshot.user_agent).map(|fragment| AutomationSignal {
        kind: SignalKind::KnownAgentName,
        evidence: format!("identity string contains '{}'", fragment),
    })
}

fn check_webdriver_flag(snapshot: &EnvironmentSnapshot) -> Option<AutomationSignal> {
    snapshot.webdriver.then(|| AutomationSignal {
        kind: SignalKind::WebdriverFlag,
        evidence: "webdriver flag set by a remote-control protocol".to_string(),
    })
}

fn check_injected_globals(snapshot: &EnvironmentSnapshot) -> Option<AutomationSignal> {
    snapshot
        .injected_globals
        .iter()
        .find(|global| patterns::HEADLESS_GLOBAL_MARKERS.contains(&global.as_str()))
        .map(|marker| AutomationSignal {
            kind: SignalKind::InjectedGlobal,
            evidence: format!("headless library global '{}' present", marker),
        })
}

fn check_plugin_absence(snapshot: &EnvironmentSnapshot) -> Option<AutomationSignal> {
    // mobile browsers legitimately report zero plugins; a missing plugin
    // list means the capability is absent and the check does not apply
    match snapshot.plugin_count {
        Some(0) if !patterns::is_mobile_class(&snapshot.user_agent) => Some(AutomationSignal {
            kind: SignalKind::NoPlugins,
            evidence: "zero plugins on a desktop-class identity string".to_string(),
        }),
        _ => None,
    }
}

fn check_language_absence(snapshot: &EnvironmentSnapshot) -> Option<AutomationSignal> {
    if snapshot.language.is_none() && snapshot.languages.is_none() {
        Some(AutomationSignal {
            kind: SignalKind::MissingLanguages,
            evidence: "no preferred language or language list exposed".to_string(),
        })
    } else {
        None
    }
}
