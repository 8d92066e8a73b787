mod component;
pub mod config;
pub mod geometry;
mod state;
mod types;

pub use component::ConnectorLine;
pub use types::{ActiveLine, ConnectorRecord, NodeRecord, Point, SelectionSet, SelectionSnapshot};
