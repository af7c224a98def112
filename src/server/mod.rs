//! Accepting connections and dispatching their requests.

pub mod dispatch;
pub mod listener;
