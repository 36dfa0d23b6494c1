//! Blogline Core Library
//!
//! Channels, posts, and the two routines that keep them coherent: the
//! reconciler for channel child lists and the navigator for previous/next
//! sibling links.

pub mod config;
pub mod content;
pub mod db;
pub mod display;
pub mod error;
pub mod logging;
pub mod navigate;
pub mod reconcile;
pub mod site;
pub mod storage;
