//! Visual-state derivation and selection-set updates for connector lines.

use super::config::{ACTIVE_COLOR, NORMAL_COLOR, STROKE_LARGE_WIDTH, STROKE_WIDTH, TRANSITION};
use super::types::{ConnectorRecord, SelectionSet, SelectionSnapshot};

/// Emphasis flags supplied by the host plus the component's own hover state.
#[derive(Clone, Copy, Debug, Default)]
pub struct Emphasis {
	pub high_light: bool,
	pub selected: bool,
	pub hover: bool,
}

impl Emphasis {
	pub fn any(self) -> bool {
		self.high_light || self.selected || self.hover
	}
}

/// Whether this instance is the line currently being drawn: linking is
/// active, the draft has no persisted origin, and this line carries no record
/// of its own.
pub fn is_drafting(snapshot: &SelectionSnapshot, data: Option<&ConnectorRecord>) -> bool {
	snapshot.linking && snapshot.active_line.origin.is_none() && data.is_none()
}

/// Resolve the stroke/fill color: emphasis and drafting win over the record's
/// own color, which wins over the default.
pub fn resolve_color(emphasis: Emphasis, drafting: bool, data: Option<&ConnectorRecord>) -> String {
	if emphasis.any() || drafting {
		return ACTIVE_COLOR.into();
	}
	data.and_then(|record| record.color.clone())
		.unwrap_or_else(|| NORMAL_COLOR.into())
}

/// Width of the visible stroke, compensated for canvas zoom.
pub fn stroke_width(emphasis: Emphasis, scale: f64) -> f64 {
	let base = if emphasis.any() {
		STROKE_LARGE_WIDTH
	} else {
		STROKE_WIDTH
	};
	base / scale
}

/// Transitions are suppressed while linking so the draft tracks the pointer
/// without visible lag.
pub fn transition(linking: bool) -> &'static str {
	if linking { "none" } else { TRANSITION }
}

/// Compute the replacement selection set for a click on this line.
///
/// Without the multi-select modifier the whole set is replaced: a click on an
/// unselected line selects only it, a click on an already-selected line
/// clears the selection. With the modifier the line's membership is toggled,
/// keyed on value equality, and the node selection passes through untouched.
pub fn next_selection(
	current: &SelectionSet,
	data: Option<&ConnectorRecord>,
	selected: bool,
	multi: bool,
) -> SelectionSet {
	if !multi {
		let lines = if selected {
			Vec::new()
		} else {
			data.cloned().into_iter().collect()
		};
		return SelectionSet {
			lines,
			nodes: Vec::new(),
		};
	}
	let Some(record) = data else {
		// A draft line has no record to toggle
		return current.clone();
	};
	let mut next = current.clone();
	if selected {
		next.lines.retain(|line| line != record);
	} else {
		next.lines.push(record.clone());
	}
	next
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::connector::types::{ActiveLine, NodeRecord};

	fn record(id: &str) -> ConnectorRecord {
		ConnectorRecord {
			start: format!("{id}-out"),
			end: format!("{id}-in"),
			color: None,
		}
	}

	fn node(id: &str) -> NodeRecord {
		NodeRecord { id: id.into() }
	}

	fn emphasis(high_light: bool, selected: bool, hover: bool) -> Emphasis {
		Emphasis {
			high_light,
			selected,
			hover,
		}
	}

	#[test]
	fn high_light_alone_resolves_active() {
		let color = resolve_color(emphasis(true, false, false), false, None);
		assert_eq!(color, ACTIVE_COLOR);
	}

	#[test]
	fn selected_alone_resolves_active() {
		let color = resolve_color(emphasis(false, true, false), false, None);
		assert_eq!(color, ACTIVE_COLOR);
	}

	#[test]
	fn hover_alone_resolves_active() {
		let color = resolve_color(emphasis(false, false, true), false, None);
		assert_eq!(color, ACTIVE_COLOR);
	}

	#[test]
	fn drafting_line_resolves_active() {
		let snapshot = SelectionSnapshot {
			linking: true,
			active_line: ActiveLine::default(),
			selected: SelectionSet::default(),
		};
		assert!(is_drafting(&snapshot, None));
		let color = resolve_color(Emphasis::default(), true, None);
		assert_eq!(color, ACTIVE_COLOR);
	}

	#[test]
	fn editing_an_existing_line_is_not_drafting() {
		let snapshot = SelectionSnapshot {
			linking: true,
			active_line: ActiveLine {
				origin: Some(record("a")),
			},
			selected: SelectionSet::default(),
		};
		assert!(!is_drafting(&snapshot, None));
	}

	#[test]
	fn line_with_its_own_record_is_not_drafting() {
		let snapshot = SelectionSnapshot {
			linking: true,
			..Default::default()
		};
		let data = record("a");
		assert!(!is_drafting(&snapshot, Some(&data)));
	}

	#[test]
	fn record_color_wins_when_not_emphasized() {
		let data = ConnectorRecord {
			color: Some("#123456".into()),
			..record("a")
		};
		let color = resolve_color(Emphasis::default(), false, Some(&data));
		assert_eq!(color, "#123456");
	}

	#[test]
	fn default_color_without_record() {
		let color = resolve_color(Emphasis::default(), false, None);
		assert_eq!(color, NORMAL_COLOR);
	}

	#[test]
	fn hover_switches_to_large_stroke() {
		assert_eq!(stroke_width(emphasis(false, false, true), 1.0), STROKE_LARGE_WIDTH);
		assert_eq!(stroke_width(Emphasis::default(), 1.0), STROKE_WIDTH);
	}

	#[test]
	fn stroke_width_compensates_for_zoom() {
		assert_eq!(stroke_width(Emphasis::default(), 2.0), STROKE_WIDTH / 2.0);
	}

	#[test]
	fn linking_suppresses_transition() {
		assert_eq!(transition(true), "none");
		assert_eq!(transition(false), TRANSITION);
	}

	#[test]
	fn plain_click_on_unselected_replaces_selection() {
		let current = SelectionSet {
			lines: vec![record("a")],
			nodes: vec![node("n")],
		};
		let this = record("l");
		let next = next_selection(&current, Some(&this), false, false);
		assert_eq!(next.lines, vec![this]);
		assert!(next.nodes.is_empty());
	}

	#[test]
	fn plain_click_on_selected_clears_selection() {
		let this = record("l");
		let current = SelectionSet {
			lines: vec![this.clone()],
			nodes: vec![node("n")],
		};
		let next = next_selection(&current, Some(&this), true, false);
		assert!(next.lines.is_empty());
		assert!(next.nodes.is_empty());
	}

	#[test]
	fn modifier_click_appends_unselected_line() {
		let current = SelectionSet {
			lines: vec![record("a")],
			nodes: vec![node("n")],
		};
		let this = record("l");
		let next = next_selection(&current, Some(&this), false, true);
		assert_eq!(next.lines, vec![record("a"), this]);
		assert_eq!(next.nodes, vec![node("n")]);
	}

	#[test]
	fn modifier_click_removes_by_value_equality() {
		let current = SelectionSet {
			lines: vec![record("a"), record("l")],
			nodes: vec![node("n")],
		};
		// A fresh, structurally equal record, not the stored instance
		let this = record("l");
		let next = next_selection(&current, Some(&this), true, true);
		assert_eq!(next.lines, vec![record("a")]);
		assert_eq!(next.nodes, vec![node("n")]);
	}

	#[test]
	fn modifier_click_without_record_is_inert() {
		let current = SelectionSet {
			lines: vec![record("a")],
			nodes: vec![node("n")],
		};
		let next = next_selection(&current, None, false, true);
		assert_eq!(next, current);
	}
}
