pub mod error;
pub use error::Result;
pub use error::Error;

pub mod metadata;
pub use metadata::MetadataStore;
pub use metadata::ModMetadata;
pub use metadata::ModHandle;
pub use metadata::PackageId;

pub mod config;
pub use config::LoadOrderOptions;

pub mod sorter;
pub mod diagnostics;
