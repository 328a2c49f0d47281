use std::collections::BTreeSet;

use tracing::debug;

use super::Config;

/// Scopes entered so far. Grows for the lifetime of its session and is never evicted.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ScopeHistory {
    scopes: BTreeSet<String>,
}

impl ScopeHistory {
    pub fn add(&mut self, scope: &str) {
        if self.scopes.insert(scope.to_string()) {
            debug!(%scope, "Scope remembered");
        }
    }

    #[cfg(test)]
    pub fn contains(&self, scope: &str) -> bool {
        self.scopes.contains(scope)
    }

    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    /// Completion candidates, sorted
    pub fn candidates(&self) -> Vec<String> {
        self.scopes.iter().cloned().collect()
    }
}

impl<S: AsRef<str>> FromIterator<S> for ScopeHistory {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            scopes: iter.into_iter().map(|s| s.as_ref().to_string()).collect(),
        }
    }
}

/// Everything one composing session works with: the settings and the scopes seen so far.
/// Dropped when the session ends.
#[derive(Debug)]
pub struct Session {
    pub config: Config,
    pub history: ScopeHistory,
}

impl Session {
    pub fn new(config: Config) -> Self {
        let history: ScopeHistory = config.scopes.iter().collect();
        debug!(scopes = history.len(), "Session started");
        Self { config, history }
    }
}
