//! OCI config blobs for WebAssembly component artifacts.
//!
//! Given a `.component.wasm`, [`generate`] renders its WIT through
//! `wasm-tools`, reads the imports and exports of the root world, guesses the
//! WASI generation for the `os` field, hashes the binary and returns a
//! [`WasmConfig`] ready to be pushed as the manifest config
//! ([`media_types::WASM_CONFIG_MEDIA_TYPE_V0`]).
//!
//! ```rust,no_run
//! use std::path::Path;
//! use wasm_oci_config_core::{ConfigOverrides, WasmToolsRenderer, generate};
//!
//! # fn run() -> Result<(), wasm_oci_config_core::ConfigError> {
//! let config = generate(
//!     Path::new("greet.component.wasm"),
//!     &WasmToolsRenderer::new(),
//!     &ConfigOverrides::default(),
//! )?;
//! println!("{}", config.to_json()?);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod digest;
pub mod error;
pub mod generate;
pub mod media_types;
pub mod platform;
pub mod render;
pub mod world;

pub use config::{ComponentSection, ConfigOverrides, WasmConfig};
pub use digest::ContentDigest;
pub use error::ConfigError;
pub use generate::generate;
pub use platform::PlatformGeneration;
pub use render::{WasmToolsRenderer, WitRenderer};
pub use world::WorldDeclarations;
