use std::path::Path;
use std::process::Command;

use crate::error::ConfigError;

/// Renders a component binary's interface world as WIT text.
pub trait WitRenderer {
    fn render(&self, component: &Path) -> Result<String, ConfigError>;
}

/// Shells out to `wasm-tools component wit <component>`.
#[derive(Debug, Clone)]
pub struct WasmToolsRenderer {
    wasm_tools_bin: String,
}

impl WasmToolsRenderer {
    pub fn new() -> Self {
        Self {
            wasm_tools_bin: "wasm-tools".into(),
        }
    }

    /// Override the path to the wasm-tools binary.
    pub fn with_bin(mut self, path: impl Into<String>) -> Self {
        self.wasm_tools_bin = path.into();
        self
    }

    pub fn bin(&self) -> &str {
        &self.wasm_tools_bin
    }
}

impl Default for WasmToolsRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl WitRenderer for WasmToolsRenderer {
    fn render(&self, component: &Path) -> Result<String, ConfigError> {
        tracing::debug!(
            bin = %self.wasm_tools_bin,
            component = %component.display(),
            "Rendering component WIT"
        );

        let output = Command::new(&self.wasm_tools_bin)
            .arg("component")
            .arg("wit")
            .arg(component)
            .output()
            .map_err(|source| ConfigError::RendererUnavailable {
                bin: self.wasm_tools_bin.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(ConfigError::RendererFailed {
                bin: self.wasm_tools_bin.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        Ok(String::from_utf8(output.stdout)?)
    }
}
