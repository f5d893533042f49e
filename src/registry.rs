/// Append-only record of named registrations.
///
/// Replaces process-wide counters: whoever needs the count owns a registry and
/// passes it to constructors that register themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    /// Every name registered so far, oldest first
    names: Vec<String>,
}

impl Registry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a registration
    pub fn register(&mut self, name: &str) {
        self.names.push(name.to_string());
    }

    /// Number of registrations to date
    #[must_use]
    pub fn total(&self) -> usize {
        self.names.len()
    }

    /// Registered names, oldest first
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Forget all registrations
    pub fn reset(&mut self) {
        self.names.clear();
    }
}
