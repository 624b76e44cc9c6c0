use serde::{Deserialize, Serialize};

pub const APP_NAME: &str = "milestone-changelog";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Owner used for project names given without one.
    pub owner: String,
    pub api_url: String,
    pub timeout_secs: u64,
    pub per_page: u32,
}

impl ::std::default::Default for Config {
    fn default() -> Self {
        Self {
            owner: String::from("jruby-gradle"),
            api_url: String::from("https://api.github.com"),
            timeout_secs: 30,
            per_page: 100,
        }
    }
}

impl Config {
    /// Applies a new default owner, returning whether it changed and should be stored.
    pub fn merge(&mut self, owner: Option<String>) -> bool {
        match owner.filter(|o| !o.is_empty() && *o != self.owner) {
            Some(owner) => {
                self.owner = owner;
                true
            }
            None => false,
        }
    }

    /// Copy of the config with overrides that only apply to the current run.
    pub fn with_overrides(&self, api_url: Option<String>, timeout_secs: Option<u64>) -> Self {
        let mut cfg = self.clone();
        if let Some(api_url) = api_url.filter(|u| !u.is_empty()) {
            cfg.api_url = api_url;
        }
        if let Some(timeout_secs) = timeout_secs {
            cfg.timeout_secs = timeout_secs;
        }
        cfg
    }
}
