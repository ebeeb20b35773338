use bramble_core::{EnvironmentSnapshot, InteractionKind};
use bramble_gate::GateConfig;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct Scenario {
    pub environment: EnvironmentSnapshot,
    pub gate: GateConfig,
    #[serde(default = "default_document")]
    pub document: String,
    #[serde(default)]
    pub events: Vec<ScenarioEvent>,
}

#[derive(Deserialize)]
pub struct ScenarioEvent {
    pub at_ms: u64,
    pub kind: EventKind,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventKind {
    Scroll,
    Click,
    TouchStart,
    KeyPress,
    PointerMove,
    Trap,
    AutomationFlag,
}

pub enum ScenarioAction {
    Interaction(InteractionKind),
    TrapClick,
    AutomationFlag,
}

impl EventKind {
    pub fn action(self) -> ScenarioAction {
        match self {
            EventKind::Scroll => ScenarioAction::Interaction(InteractionKind::Scroll),
            EventKind::Click => ScenarioAction::Interaction(InteractionKind::Click),
            EventKind::TouchStart => ScenarioAction::Interaction(InteractionKind::TouchStart),
            EventKind::KeyPress => ScenarioAction::Interaction(InteractionKind::KeyPress),
            EventKind::PointerMove => ScenarioAction::Interaction(InteractionKind::PointerMove),
            EventKind::Trap => ScenarioAction::TrapClick,
            EventKind::AutomationFlag => ScenarioAction::AutomationFlag,
        }
    }
}

fn default_document() -> String {
    bramble_trap::inject_trap("<html><head></head><body></body></html>")
}

impl Scenario {
    pub fn from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let scenario: Self = toml::from_str(&content)?;
        Ok(scenario)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_parses_with_defaults() {
        let scenario: Scenario = toml::from_str(
            r#"
            [environment]
            user_agent = "Mozilla/5.0 (X11; Linux x86_64) Firefox/121.0"
            plugin_count = 2
            language = "en-US"

            [gate]
            tag_id = "G-TEST1234"

            [[events]]
            at_ms = 1200
            kind = "scroll"

            [[events]]
            at_ms = 500
            kind = "trap"
            "#,
        )
        .expect("scenario must parse");

        assert_eq!(scenario.gate.tag_id, "G-TEST1234");
        assert_eq!(scenario.gate.fallback_ms, 5000);
        assert!(bramble_trap::document_has_trap(&scenario.document));
        assert_eq!(scenario.events.len(), 2);
        assert!(matches!(scenario.events[0].kind, EventKind::Scroll));
        assert!(matches!(scenario.events[1].kind.action(), ScenarioAction::TrapClick));
    }
}
