use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnvironmentSnapshot {
    pub user_agent: String,
    #[serde(default)]
    pub webdriver: bool,
    #[serde(default)]
    pub plugin_count: Option<u32>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub languages: Option<Vec<String>>,
    #[serde(default)]
    pub injected_globals: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutomationSignal {
    pub kind: SignalKind,
    pub evidence: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignalKind {
    KnownAgentName,
    WebdriverFlag,
    InjectedGlobal,
    NoPlugins,
    MissingLanguages,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InteractionKind {
    Scroll,
    Click,
    TouchStart,
    KeyPress,
    PointerMove,
}

impl InteractionKind {
    pub const ALL: [InteractionKind; 5] = [
        InteractionKind::Scroll,
        InteractionKind::Click,
        InteractionKind::TouchStart,
        InteractionKind::KeyPress,
        InteractionKind::PointerMove,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivationTrigger {
    Interaction(InteractionKind),
    Fallback,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ActivationOutcome {
    Loaded { trigger: ActivationTrigger },
    SuppressedImmediate(AutomationSignal),
    SuppressedHoneypot,
    SuppressedRecheck(AutomationSignal),
    AlreadyLoaded,
}

impl ActivationOutcome {
    pub fn loaded(&self) -> bool {
        matches!(self, ActivationOutcome::Loaded { .. })
    }
}
