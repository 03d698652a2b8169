mod compile_config;
mod config_error;
mod config_set;
mod module_paths;
mod naming_policy;
mod output_layout;

pub use compile_config::CompileConfig;
pub use compile_config::DEFAULT_DOCUMENT_NODE_MODULE_NAME;
pub use compile_config::DEFAULT_GLOBAL_TYPES_MODULE_NAME;
pub use config_error::ConfigError;
pub use config_set::ConfigSet;
pub use module_paths::ModulePaths;
pub use naming_policy::CustomScalarNaming;
pub use naming_policy::NamingPolicy;
pub use output_layout::OutputLayout;

#[cfg(test)]
mod tests;
