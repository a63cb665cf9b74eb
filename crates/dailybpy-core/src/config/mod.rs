pub mod consts;
pub mod model;

pub use model::{
    Config, IndexConfig, InstallerConfig, PackageConfig, PythonVersion, RepositoryConfig,
};
