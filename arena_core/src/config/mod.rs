//! Rules configuration: the bundled defaults and optional TOML overrides

mod rules;

pub use rules::{
    default_rules, load_rules, parse_rules, ArsenalRules, DurabilityRules, RulesConfig,
    RulesError, UpgradeRules,
};
