use std::fmt;

use serde::{Deserialize, Serialize};

use crate::world::WorldDeclarations;

const WASI_NAMESPACE_PREFIX: &str = "wasi:";

/// WASI ABI generation a component targets, reported as the config's `os`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformGeneration {
    Wasip1,
    Wasip2,
}

impl PlatformGeneration {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Wasip1 => "wasip1",
            Self::Wasip2 => "wasip2",
        }
    }
}

impl fmt::Display for PlatformGeneration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Best-effort guess: any `wasi:` interface in the root world means wasip2.
pub fn classify(decls: &WorldDeclarations) -> PlatformGeneration {
    if decls
        .declarations()
        .any(|d| d.starts_with(WASI_NAMESPACE_PREFIX))
    {
        PlatformGeneration::Wasip2
    } else {
        PlatformGeneration::Wasip1
    }
}

/// The `os` field: a non-empty override verbatim, else the classifier's guess.
pub fn resolve_os(os_override: Option<&str>, decls: &WorldDeclarations) -> String {
    match os_override.filter(|os| !os.is_empty()) {
        Some(os) => os.to_string(),
        None => {
            let generation = classify(decls);
            tracing::debug!(os = %generation, "Guessed platform generation from WIT");
            generation.to_string()
        }
    }
}
