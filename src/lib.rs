#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod combine;
pub mod config;
pub mod injector;
pub mod integrity;
pub mod models;
pub mod render;
pub mod resolve;
pub mod response;

pub use config::InjectorConfig;
pub use injector::RequirementsInjector;
pub use models::{
  AssetKind, PreloadAsset, ScriptEntry, ScriptOptions, ScriptPlacement, StylesheetEntry,
  StylesheetOptions,
};
pub use resolve::ThemedLookupError;
