//! File and stream I/O: configuration files, embedding models and report output

pub mod config_file;
pub mod formatter;
pub mod models;

pub use config_file::ConfigFile;
pub use formatter::{format_score, ReportFormatter, ENTITIES_HEADER};
pub use models::{find_models, is_model_file, load_model, load_models};
