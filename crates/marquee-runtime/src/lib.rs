pub mod catalog;
pub mod config;
mod error;
pub mod export;
pub mod session;
pub mod workspace;

pub use catalog::load_catalog;
pub use config::{Config, resolve_workspace_path};
pub use error::{Error, Result};
pub use export::{DEFAULT_SHARE_HEADER, render_share_text, write_share_csv};
pub use session::{Facets, Planner};
pub use workspace::Workspace;
