use std::path::Path;

use crate::config::{ConfigOverrides, WasmConfig};
use crate::digest::digest_file;
use crate::error::ConfigError;
use crate::platform::resolve_os;
use crate::render::WitRenderer;
use crate::world::parse_root_world;

/// Build the config blob for one component binary.
///
/// Runs the renderer, parses the root world, resolves `os`, hashes the
/// binary and assembles the result. The first failure aborts the run.
pub fn generate<R: WitRenderer>(
    component: &Path,
    renderer: &R,
    overrides: &ConfigOverrides,
) -> Result<WasmConfig, ConfigError> {
    let wit = renderer.render(component)?;

    let decls = parse_root_world(&wit);
    tracing::debug!(
        imports = decls.imports.len(),
        exports = decls.exports.len(),
        "Parsed root world"
    );
    if decls.is_empty() {
        tracing::warn!(
            component = %component.display(),
            "No root world declarations found in WIT output"
        );
    }

    let os = resolve_os(overrides.os(), &decls);
    let layer_digest = digest_file(component)?;

    Ok(WasmConfig::assemble(decls, os, layer_digest, overrides))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Returns fixed WIT text and counts calls.
    struct StubRenderer {
        wit: &'static str,
        calls: Cell<u32>,
    }

    impl StubRenderer {
        fn new(wit: &'static str) -> Self {
            Self {
                wit,
                calls: Cell::new(0),
            }
        }
    }

    impl WitRenderer for StubRenderer {
        fn render(&self, _component: &Path) -> Result<String, ConfigError> {
            self.calls.set(self.calls.get() + 1);
            Ok(self.wit.to_string())
        }
    }

    struct FailingRenderer;

    impl WitRenderer for FailingRenderer {
        fn render(&self, _component: &Path) -> Result<String, ConfigError> {
            Err(ConfigError::RendererUnavailable {
                bin: "wasm-tools".into(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            })
        }
    }

    const WORLD: &str = "world root {\n  import wasi:io/streams;\n  export my:app/run;\n}\n";

    fn component_file() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"\0asm\x0d\0\x01\0").unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn end_to_end_without_overrides() {
        let file = component_file();
        let renderer = StubRenderer::new(WORLD);

        let config = generate(file.path(), &renderer, &ConfigOverrides::default()).unwrap();

        assert_eq!(renderer.calls.get(), 1);
        assert_eq!(config.component.imports, vec!["wasi:io/streams"]);
        assert_eq!(config.component.exports, vec!["my:app/run"]);
        assert_eq!(config.component.target, None);
        assert_eq!(config.os, "wasip2");
        assert_eq!(config.architecture, "wasm");
        assert_eq!(config.layer_digests.len(), 1);

        let digest = config.layer_digests[0].to_string();
        let hex = digest.strip_prefix("sha256:").unwrap();
        assert_eq!(hex.len(), 64);
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit()));
        assert!(config.created.ends_with('Z'));
    }

    #[test]
    fn overrides_are_applied() {
        let file = component_file();
        let overrides = ConfigOverrides {
            created: Some("2024-01-01T00:00:00Z".into()),
            os: Some("wasip1".into()),
            target: Some("foo/bar".into()),
        };

        let config = generate(file.path(), &StubRenderer::new(WORLD), &overrides).unwrap();

        assert_eq!(config.created, "2024-01-01T00:00:00Z");
        assert_eq!(config.os, "wasip1");
        assert_eq!(config.component.target.as_deref(), Some("foo/bar"));
    }

    #[test]
    fn unparseable_wit_still_produces_config() {
        let file = component_file();
        let config = generate(
            file.path(),
            &StubRenderer::new("not wit at all"),
            &ConfigOverrides::default(),
        )
        .unwrap();
        assert!(config.component.imports.is_empty());
        assert!(config.component.exports.is_empty());
        assert_eq!(config.os, "wasip1");
    }

    #[test]
    fn renderer_failure_aborts() {
        let file = component_file();
        let err = generate(file.path(), &FailingRenderer, &ConfigOverrides::default()).unwrap_err();
        assert!(matches!(err, ConfigError::RendererUnavailable { .. }));
    }

    #[test]
    fn missing_component_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.component.wasm");
        let err = generate(&missing, &StubRenderer::new(WORLD), &ConfigOverrides::default())
            .unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
