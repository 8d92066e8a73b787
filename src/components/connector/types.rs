use serde::Serialize;

/// A point in canvas pixel space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

/// Persisted connector record handed down by the host. Read-only here; the
/// component only re-emits it inside selection updates.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ConnectorRecord {
	pub start: String,
	pub end: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub color: Option<String>,
}

/// Reference to a node participating in the canvas-wide selection.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeRecord {
	pub id: String,
}

/// The canvas-wide selection. Always replaced atomically through the select
/// callback, never mutated in place.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectionSet {
	pub lines: Vec<ConnectorRecord>,
	pub nodes: Vec<NodeRecord>,
}

impl SelectionSet {
	/// Membership is keyed on value equality, not identity: records are
	/// value-like payloads handed down fresh each render.
	pub fn contains_line(&self, record: &ConnectorRecord) -> bool {
		self.lines.iter().any(|line| line == record)
	}
}

/// The in-progress line while the user is linking. `origin` is set when an
/// existing connector is being re-anchored rather than a new one drawn.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActiveLine {
	pub origin: Option<ConnectorRecord>,
}

/// Read-only view of the host's interaction state, handed down with every
/// render pass instead of being read from ambient context.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectionSnapshot {
	pub linking: bool,
	pub active_line: ActiveLine,
	pub selected: SelectionSet,
}
