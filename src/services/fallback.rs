// src/services/fallback.rs
use std::sync::{Mutex, PoisonError};

use chrono::NaiveTime;
use rand::{Rng, SeedableRng, rngs::StdRng};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Greeting,
    Weather,
    Time,
    Name,
    Help,
    Cyberpunk,
    Hack,
    Unknown,
}

#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub intent: Intent,
    pub keywords: &'static [&'static str],
}

/// Evaluated top to bottom, first hit wins. Matching is on lowercase substrings,
/// so "hi" also fires inside "this" or "thinking".
pub const RULES: [Rule; 7] = [
    Rule { intent: Intent::Greeting, keywords: &["hello", "hi", "hey"] },
    Rule { intent: Intent::Weather, keywords: &["weather"] },
    Rule { intent: Intent::Time, keywords: &["time"] },
    Rule { intent: Intent::Name, keywords: &["name"] },
    Rule { intent: Intent::Help, keywords: &["help"] },
    Rule { intent: Intent::Cyberpunk, keywords: &["cyber", "punk"] },
    Rule { intent: Intent::Hack, keywords: &["hack"] },
];

pub const GREETING: &str =
    "Greetings, citizen. The neural network is online. How can I assist you in this digital realm?";
pub const WEATHER: &str = "Weather systems are compromised. Last reading: 23°C with a chance of data storms. Recommend staying in the safe zones.";
pub const NAME: &str = "I am designated as CyberNet Assistant. In this dystopian future, names are data fragments in the network.";
pub const HELP: &str = "In this cyberpunk world, I can assist with information retrieval, conversation, and digital navigation. What do you need?";
pub const CYBERPUNK: &str = "Cyberpunk: A world of high tech and low life. Where the digital realm meets the streets. What aspect interests you?";
pub const HACK: &str =
    "Unauthorized access to systems is prohibited. I am a legal AI assistant, not a rogue netrunner.";

pub const GENERIC_RESPONSES: [&str; 8] = [
    "The data streams are vast. Can you specify your inquiry?",
    "Processing your request through the neural network...",
    "In the realm of cyberspace, information is power. What do you seek?",
    "The digital matrix is complex. I'll try to navigate and find what you need.",
    "In this networked world, every query is a connection to the global mind.",
    "Analyzing your request in the context of our cybernetic society...",
    "Accessing the information grid for your requested data.",
    "The system acknowledges your query. Processing with available algorithms.",
];

pub fn detect_intent(msg: &str) -> Intent {
    let msg_lower = msg.to_lowercase();

    RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|kw| msg_lower.contains(kw)))
        .map(|rule| rule.intent)
        .unwrap_or(Intent::Unknown)
}

pub fn time_response(now: NaiveTime) -> String {
    format!(
        "Local time: {}. Time in the system is always questionable.",
        now.format("%H:%M")
    )
}

fn local_time() -> NaiveTime {
    chrono::Local::now().time()
}

/// Canned answers for when the live model is unreachable. Never fails.
///
/// Randomness and the clock are both injectable so the only impure branches
/// (`Unknown` and `Time`) can be pinned in tests.
pub struct FallbackResponder {
    rng: Mutex<StdRng>,
    clock: fn() -> NaiveTime,
}

impl std::fmt::Debug for FallbackResponder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FallbackResponder").finish_non_exhaustive()
    }
}

impl Default for FallbackResponder {
    fn default() -> Self {
        Self::new()
    }
}

impl FallbackResponder {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
            clock: local_time,
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
            clock: local_time,
        }
    }

    pub fn with_clock(mut self, clock: fn() -> NaiveTime) -> Self {
        self.clock = clock;
        self
    }

    pub fn respond(&self, msg: &str) -> String {
        use Intent::*;

        match detect_intent(msg) {
            Greeting => GREETING.to_string(),
            Weather => WEATHER.to_string(),
            Time => time_response((self.clock)()),
            Name => NAME.to_string(),
            Help => HELP.to_string(),
            Cyberpunk => CYBERPUNK.to_string(),
            Hack => HACK.to_string(),
            Unknown => self.pick_generic().to_string(),
        }
    }

    fn pick_generic(&self) -> &'static str {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        GENERIC_RESPONSES[rng.gen_range(0..GENERIC_RESPONSES.len())]
    }
}
