mod registry;

pub use registry::RegistryErrorKind;
