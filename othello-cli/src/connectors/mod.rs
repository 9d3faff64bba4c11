//! Connectors let a session be played through different interfaces.

mod connector;
mod terminal;

pub use connector::Connector;
pub use terminal::TerminalConnector;
