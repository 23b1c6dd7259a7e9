//! Media types of the artifact this config describes.

/// Media type of the config blob produced by [`crate::WasmConfig::to_json`].
pub const WASM_CONFIG_MEDIA_TYPE_V0: &str = "application/vnd.wasm.config.v0+json";
