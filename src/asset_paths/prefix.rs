use crate::config::ResolverConfig;

/// Prefix applied to every path a resolver returns.
///
/// Static mode uses the base path. Dev mode uses the server URL alone: the dev server
/// serves sources from its own root, so the public base path does not apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPrefix {
    prefix: String,
}

impl PathPrefix {
    /// Build the prefix matching the configured mode.
    pub fn from_config(config: &ResolverConfig) -> Self {
        let prefix = if config.dev_enabled {
            config.server_url.clone()
        } else {
            config.base_path.clone()
        };
        Self { prefix }
    }

    /// The raw prefix string.
    pub fn as_str(&self) -> &str {
        &self.prefix
    }

    /// Prefix a single path.
    pub fn apply(&self, path: &str) -> String {
        format!("{}{}", self.prefix, path)
    }

    /// Prefix every path of an already resolved list.
    pub fn apply_all(&self, paths: Vec<String>) -> Vec<String> {
        if self.prefix.is_empty() {
            return paths;
        }
        paths.iter().map(|path| self.apply(path)).collect()
    }
}
