#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod asset_paths;
pub mod config;
pub mod error;
pub mod manifest;
pub mod render;
pub mod resolver;
pub mod template;

pub use config::{ConfigError, ResolverConfig};
pub use error::{Result, ViteError};
pub use manifest::{Chunk, Manifest, ManifestStore};
pub use render::Markup;
pub use resolver::{AssetResolver, DEV_CLIENT_ENTRY, Mode, ViteManifest};
pub use template::{FunctionRegistry, TemplateFunction, ViteFunctions};
