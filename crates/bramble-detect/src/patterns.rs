use std::sync::LazyLock;

use regex::{Regex, RegexSet};

// identity-string fragments that self-identify crawlers, scrapers, SEO
// tooling, and headless-automation frameworks
pub const AGENT_NAME_FRAGMENTS: &[&str] = &[
    "bot", "crawl", "spider", "slurp", "mediapartners",
    "headless", "phantom", "selenium", "puppeteer", "playwright",
    "wget", "curl", "httpie", "python-requests", "axios", "node-fetch",
    "ahrefs", "semrush", "mj12bot", "dotbot", "petalbot",
    "bytespider", "gptbot", "ccbot", "claudebot", "anthropic",
    "dataforseo", "screaming frog", "lighthouse", "pagespeed",
    "google-inspectiontool", "facebookexternalhit", "twitterbot",
    "linkedinbot", "whatsapp", "telegrambot", "applebot",
    "yandexbot", "baiduspider", "sogou", "exabot",
    "ia_archiver", "archive.org_bot",
];

// globals that PhantomJS and Nightmare inject into the page context
pub const HEADLESS_GLOBAL_MARKERS: &[&str] = &["_phantom", "callPhantom", "__nightmare"];

static AGENT_NAME_SET: LazyLock<RegexSet> = LazyLock::new(|| {
    let patterns: Vec<String> = AGENT_NAME_FRAGMENTS
        .iter()
        .map(|fragment| format!("(?i){}", regex::escape(fragment)))
        .collect();
    RegexSet::new(&patterns).expect("agent name patterns must compile")
});

static MOBILE_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("(?i)mobile|android|iphone|ipad").expect("mobile pattern must compile")
});

pub fn matched_agent_fragment(user_agent: &str) -> Option<&'static str> {
    AGENT_NAME_SET
        .matches(user_agent)
        .iter()
        .next()
        .map(|idx| AGENT_NAME_FRAGMENTS[idx])
}

pub fn is_mobile_class(user_agent: &str) -> bool {
    MOBILE_CLASS.is_match(user_agent)
}
