// High-level overview:
//
// Protocol:                        in-process               http/json                 text
// Library Concept:      board  <--------------> server <-------------> client <-------------> user
//
// Implementing Binary:            relay-mock (lib)        relay-mock          relay-shell       test harness
//                                                                                               front-end

pub mod args;
pub mod board;
pub mod channel;
pub mod client;
pub mod error;
pub mod phrase;
pub mod server;

pub use board::RelayBoard;
pub use channel::*;
pub use error::InvalidRequest;
