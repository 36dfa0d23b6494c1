//! CLI commands for blogline

pub mod channel;
pub mod children;
pub mod dispatch;
pub mod format;
pub mod init;
pub mod nav;
pub mod post;
pub mod reconcile;
