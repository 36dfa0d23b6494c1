pub mod support;

mod channel;
mod init;
mod logging;
mod nav;
mod post;
mod reconcile;
