//! wwwd - static HTML/CSS file server
//!
//! One request per connection, GET only, served from a document root.

pub mod config;
pub mod error;
pub mod files;
pub mod http;
pub mod server;
pub mod site;
