use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::error::ConfigError;

/// How header names are compared against the fields the assemblers fold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NameMatching {
    /// ASCII case is ignored, as HTTP requires.
    #[default]
    CaseInsensitive,
    /// Byte-for-byte comparison.
    Exact,
}

impl NameMatching {
    #[must_use]
    pub fn matches(self, name: &str, expected: &str) -> bool {
        match self {
            NameMatching::CaseInsensitive => name.eq_ignore_ascii_case(expected),
            NameMatching::Exact => name == expected,
        }
    }
}

/// What the header loop does with a line it cannot parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MalformedHeaderPolicy {
    /// Stop folding; headers after the bad line are ignored.
    #[default]
    Stop,
    /// Drop the bad line and continue with the next one.
    SkipLine,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ParserConfig {
    pub name_matching: NameMatching,
    pub on_malformed_header: MalformedHeaderPolicy,
}

impl ParserConfig {
    #[must_use]
    pub fn with_name_matching(mut self, name_matching: NameMatching) -> Self {
        self.name_matching = name_matching;
        self
    }

    #[must_use]
    pub fn with_malformed_header_policy(mut self, policy: MalformedHeaderPolicy) -> Self {
        self.on_malformed_header = policy;
        self
    }
}

impl fmt::Display for NameMatching {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NameMatching::CaseInsensitive => "case-insensitive",
            NameMatching::Exact => "exact",
        })
    }
}

impl FromStr for NameMatching {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "case-insensitive" | "insensitive" => Ok(NameMatching::CaseInsensitive),
            "exact" | "case-sensitive" => Ok(NameMatching::Exact),
            _ => Err(ConfigError::UnknownNameMatching(s.to_string())),
        }
    }
}

impl fmt::Display for MalformedHeaderPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MalformedHeaderPolicy::Stop => "stop",
            MalformedHeaderPolicy::SkipLine => "skip-line",
        })
    }
}

impl FromStr for MalformedHeaderPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "stop" => Ok(MalformedHeaderPolicy::Stop),
            "skip-line" | "skip" => Ok(MalformedHeaderPolicy::SkipLine),
            _ => Err(ConfigError::UnknownMalformedHeaderPolicy(s.to_string())),
        }
    }
}
