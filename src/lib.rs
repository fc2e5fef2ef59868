#![no_std]

extern crate alloc;

pub(crate) mod config;
pub(crate) mod definition;
pub(crate) mod errors;
pub(crate) mod registry;

pub mod utils;

pub use config::Config;
pub use definition::Constant;
pub use errors::RegistryErrorKind;
pub use registry::{DefinitionRegistry, Definitions, IntoIter, Iter};
pub use utils::merge::Merge;
