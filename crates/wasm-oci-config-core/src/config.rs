use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::digest::ContentDigest;
use crate::error::ConfigError;
use crate::world::WorldDeclarations;

pub const ARCHITECTURE: &str = "wasm";

/// Caller-supplied values that replace computed ones. Empty strings count as unset.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// RFC 3339 creation time, passed through verbatim.
    pub created: Option<String>,
    /// `os` value, passed through verbatim instead of the WIT guess.
    pub os: Option<String>,
    /// Target world/interface name recorded under `component.target`.
    pub target: Option<String>,
}

impl ConfigOverrides {
    pub fn created(&self) -> Option<&str> {
        non_empty(&self.created)
    }

    pub fn os(&self) -> Option<&str> {
        non_empty(&self.os)
    }

    pub fn target(&self) -> Option<&str> {
        non_empty(&self.target)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// The `component` object of the config blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentSection {
    pub imports: Vec<String>,
    pub exports: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

/// Config blob (`application/vnd.wasm.config.v0+json`) for a component layer.
///
/// Field order here is the key order of the emitted JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WasmConfig {
    pub created: String,
    pub architecture: String,
    pub os: String,
    pub layer_digests: Vec<ContentDigest>,
    pub component: ComponentSection,
}

impl WasmConfig {
    /// Assemble a config stamped with the current UTC time unless overridden.
    pub fn assemble(
        decls: WorldDeclarations,
        os: String,
        layer_digest: ContentDigest,
        overrides: &ConfigOverrides,
    ) -> Self {
        Self::assemble_at(decls, os, layer_digest, overrides, Utc::now())
    }

    pub fn assemble_at(
        decls: WorldDeclarations,
        os: String,
        layer_digest: ContentDigest,
        overrides: &ConfigOverrides,
        now: DateTime<Utc>,
    ) -> Self {
        let created = match overrides.created() {
            Some(created) => created.to_string(),
            None => utc_timestamp(now),
        };

        Self {
            created,
            architecture: ARCHITECTURE.into(),
            os,
            layer_digests: vec![layer_digest],
            component: ComponentSection {
                imports: decls.imports,
                exports: decls.exports,
                target: overrides.target().map(str::to_string),
            },
        }
    }

    /// Compact JSON, no whitespace between tokens. Pushed with media type
    /// [`WASM_CONFIG_MEDIA_TYPE_V0`](crate::media_types::WASM_CONFIG_MEDIA_TYPE_V0).
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// ISO 8601 with microseconds and a literal `Z`, e.g. `2024-05-01T12:00:00.000000Z`.
pub fn utc_timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Micros, true)
}
