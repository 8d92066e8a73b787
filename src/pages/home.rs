use leptos::prelude::*;
use log::debug;

use crate::components::connector::{
	ActiveLine, ConnectorLine, ConnectorRecord, NodeRecord, Point, SelectionSet,
	SelectionSnapshot,
};

const NODE_WIDTH: f64 = 120.0;
const NODE_HEIGHT: f64 = 40.0;
const CANVAS_WIDTH: f64 = 900.0;
const CANVAS_HEIGHT: f64 = 600.0;

#[derive(Clone)]
struct DemoNode {
	record: NodeRecord,
	label: &'static str,
	pos: Point,
}

fn demo_node(id: &str, label: &'static str, x: f64, y: f64) -> DemoNode {
	DemoNode {
		record: NodeRecord { id: id.into() },
		label,
		pos: Point { x, y },
	}
}

fn demo_nodes() -> Vec<DemoNode> {
	vec![
		demo_node("ingest", "Ingest", 120.0, 60.0),
		demo_node("parse", "Parse", 120.0, 240.0),
		demo_node("enrich", "Enrich", 420.0, 240.0),
		demo_node("store", "Store", 270.0, 440.0),
	]
}

fn demo_connectors() -> Vec<ConnectorRecord> {
	let connector = |start: &str, end: &str, color: Option<&str>| ConnectorRecord {
		start: start.into(),
		end: end.into(),
		color: color.map(Into::into),
	};
	vec![
		connector("ingest", "parse", None),
		connector("ingest", "enrich", Some("#7E57C2")),
		connector("parse", "store", None),
		connector("enrich", "store", None),
	]
}

fn anchor_bottom(node: &DemoNode) -> Point {
	Point {
		x: node.pos.x + NODE_WIDTH / 2.0,
		y: node.pos.y + NODE_HEIGHT,
	}
}

fn anchor_top(node: &DemoNode) -> Point {
	Point {
		x: node.pos.x + NODE_WIDTH / 2.0,
		y: node.pos.y,
	}
}

/// Demo topology canvas: a handful of nodes with connectors between them.
/// Owns the canonical selection set and replaces it atomically on each
/// selection callback.
#[component]
pub fn Home() -> impl IntoView {
	let selected = RwSignal::new(SelectionSet::default());
	let nodes = demo_nodes();
	let connectors = demo_connectors();

	let on_select = Callback::new(move |next: SelectionSet| {
		debug!(
			"selection replaced: {} lines, {} nodes",
			next.lines.len(),
			next.nodes.len()
		);
		selected.set(next);
	});

	let node_views = {
		let nodes = nodes.clone();
		move || {
			let selection = selected.get();
			nodes
				.iter()
				.map(|node| {
					let is_selected = selection.nodes.iter().any(|n| n == &node.record);
					let record = node.record.clone();
					let select_node = move |_| {
						selected.set(SelectionSet {
							lines: Vec::new(),
							nodes: vec![record.clone()],
						});
					};
					let (stroke, stroke_width) = if is_selected {
						("#1F8CEC", 2.0)
					} else {
						("#AAB7C4", 1.0)
					};
					let label_x = node.pos.x + NODE_WIDTH / 2.0;
					let label_y = node.pos.y + NODE_HEIGHT / 2.0 + 4.0;
					view! {
						<g on:click=select_node style="cursor: pointer;">
							<rect
								x=node.pos.x
								y=node.pos.y
								width=NODE_WIDTH
								height=NODE_HEIGHT
								rx="6"
								fill="#FFFFFF"
								stroke=stroke
								stroke-width=stroke_width
							/>
							<text
								x=label_x
								y=label_y
								text-anchor="middle"
								fill="#33404E"
								font-size="13"
							>
								{node.label}
							</text>
						</g>
					}
				})
				.collect_view()
		}
	};

	let line_views = {
		let nodes = nodes.clone();
		let connectors = connectors.clone();
		move || {
			let selection = selected.get();
			let snapshot = SelectionSnapshot {
				linking: false,
				active_line: ActiveLine::default(),
				selected: selection.clone(),
			};
			connectors
				.iter()
				.filter_map(|record| {
					let from = nodes.iter().find(|n| n.record.id == record.start)?;
					let to = nodes.iter().find(|n| n.record.id == record.end)?;
					Some(view! {
						<ConnectorLine
							start=anchor_bottom(from)
							end=anchor_top(to)
							data=Some(record.clone())
							selected=selection.contains_line(record)
							on_select=Some(on_select)
							snapshot=snapshot.clone()
						/>
					})
				})
				.collect_view()
		}
	};

	let clear_selection = move |_| selected.set(SelectionSet::default());

	view! {
		<div class="topology-canvas">
			<svg width=CANVAS_WIDTH height=CANVAS_HEIGHT>
				<rect
					width=CANVAS_WIDTH
					height=CANVAS_HEIGHT
					fill="#FAFBFC"
					on:click=clear_selection
				/>
				{node_views}
				{line_views}
			</svg>
			<p class="subtitle">
				"Click a connector to select it. Meta/Ctrl-click toggles membership. Click the background to clear."
			</p>
		</div>
	}
}
