#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod asset_paths;
pub mod config;
pub mod error;
pub mod injection;
pub mod inliner;
pub mod models;
pub mod reader;

pub use asset_paths::{AssetReference, PathResolver, RootResolver};
pub use config::InlinerConfig;
pub use error::{AssetError, ConfigError};
pub use injection::{BundleInjector, FrontendResources};
pub use inliner::ResourceInliner;
pub use models::{AssetClass, BundleResolution, BundledAsset, ResourceBundle};
pub use reader::{AssetReader, FsAssetReader};
