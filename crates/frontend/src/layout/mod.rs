pub mod portal_context;
pub mod shell;

pub use portal_context::{PortalConfig, PortalMode};
pub use shell::Shell;
