use log::info;

/// Records show-level progress through the `log` facade.
pub struct LogManager {
    scope: String,
}

impl LogManager {
    pub fn new(scope: impl Into<String>) -> Self {
        Self {
            scope: scope.into(),
        }
    }

    pub fn record(&self, message: &str) {
        info!("[{}] {}", self.scope, message);
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }
}

impl Default for LogManager {
    fn default() -> Self {
        Self::new("waves")
    }
}
