// Copyright 2026 Tobin Edwards
//
//    Licensed under the Apache License, Version 2.0 (the "License");
//    you may not use this file except in compliance with the License.
//    You may obtain a copy of the License at
//
//        http://www.apache.org/licenses/LICENSE-2.0
//
//    Unless required by applicable law or agreed to in writing, software
//    distributed under the License is distributed on an "AS IS" BASIS,
//    WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//    See the License for the specific language governing permissions and
//    limitations under the License.

/// Console settings read from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `tracing` filter directive (`CHESS_LOG`).
    pub log_filter: String,
    /// Ask before quitting (`CHESS_CONFIRM_QUIT`).
    pub confirm_quit: bool,
    /// List legal destinations after an illegal move (`CHESS_HINTS`).
    pub hints: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Config {
            log_filter: lookup("CHESS_LOG").unwrap_or(defaults.log_filter),
            confirm_quit: lookup("CHESS_CONFIRM_QUIT")
                .and_then(|v| parse_flag(&v))
                .unwrap_or(defaults.confirm_quit),
            hints: lookup("CHESS_HINTS")
                .and_then(|v| parse_flag(&v))
                .unwrap_or(defaults.hints),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_filter: "text_chess=warn".to_string(),
            confirm_quit: true,
            hints: false,
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
