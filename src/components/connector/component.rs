use leptos::prelude::*;
use serde::Serialize;
use web_sys::MouseEvent;

use super::config;
use super::geometry;
use super::state::{self, Emphasis};
use super::types::{ConnectorRecord, Point, SelectionSet, SelectionSnapshot};

/// Endpoint-edit context serialized onto the arrowhead element. The host's
/// drag handler reads it back through the `data-json` attribute, so the field
/// names are a wire contract.
#[derive(Serialize)]
struct EditPayload<'a> {
	origin: &'a ConnectorRecord,
	po: Endpoints,
}

#[derive(Serialize)]
struct Endpoints {
	start: Point,
	end: Point,
}

/// One connector between two nodes, drawn as three stacked SVG paths: a wide
/// transparent hit target, the visible stroke, and the arrowhead. All three
/// share the same geometry and click handler.
///
/// Hosts re-create the component on every render pass, so all props are plain
/// per-render values; the hover flag is the only instance-local state.
#[component]
pub fn ConnectorLine(
	start: Point,
	end: Point,
	#[prop(default = 0.0)] line_offset_y: f64,
	#[prop(default = None)] data: Option<ConnectorRecord>,
	#[prop(default = true)] arrow: bool,
	#[prop(default = false)] read_only: bool,
	#[prop(default = false)] selected: bool,
	#[prop(default = false)] high_light: bool,
	#[prop(default = None)] on_select: Option<Callback<SelectionSet>>,
	#[prop(default = 1.0)] scale_num: f64,
	snapshot: SelectionSnapshot,
) -> impl IntoView {
	let (hover, set_hover) = signal(false);

	let drafting = state::is_drafting(&snapshot, data.as_ref());
	let transition = state::transition(snapshot.linking);
	let style = format!("pointer-events: all; transition: {transition}");

	let anchor = geometry::arrow_anchor(end, config::TRIANGLE_WIDTH);
	// One path string for both the hit target and the visible stroke, so the
	// clickable region always coincides with the drawn line.
	let body_d = geometry::line_path(start, anchor, line_offset_y);
	let triangle_d = geometry::triangle_path(anchor, config::TRIANGLE_WIDTH);
	let trigger_width = config::TRIGGER_WIDTH / scale_num;
	let triangle_class = if read_only {
		""
	} else {
		"topology-line-end-triangle"
	};

	let data_json = data.as_ref().map_or_else(String::new, |record| {
		serde_json::to_string(&EditPayload {
			origin: record,
			po: Endpoints { start, end },
		})
		.unwrap_or_default()
	});

	let emphasis = move || Emphasis {
		high_light,
		selected,
		hover: hover.get(),
	};
	let color = {
		let data = data.clone();
		move || state::resolve_color(emphasis(), drafting, data.as_ref())
	};
	let width = move || state::stroke_width(emphasis(), scale_num);

	let handle_click = {
		let current = snapshot.selected.clone();
		move |ev: MouseEvent| {
			let Some(on_select) = on_select else {
				return;
			};
			let multi = ev.meta_key() || ev.ctrl_key();
			on_select.run(state::next_selection(&current, data.as_ref(), selected, multi));
		}
	};

	view! {
		<path
			on:click=handle_click.clone()
			stroke-width=trigger_width
			stroke="transparent"
			fill="none"
			style=style.clone()
			d=body_d.clone()
			on:mouseenter=move |_| set_hover.set(true)
			on:mouseleave=move |_| set_hover.set(false)
		/>
		<path
			on:click=handle_click.clone()
			stroke-width=width
			stroke=color.clone()
			fill="none"
			style=style.clone()
			d=body_d
			on:mouseenter=move |_| set_hover.set(true)
			on:mouseleave=move |_| set_hover.set(false)
		/>
		{arrow.then(|| {
			view! {
				<path
					class=triangle_class
					on:click=handle_click
					fill=color
					stroke="none"
					data-type=config::EDIT_END
					data-json=data_json
					style=style
					d=triangle_d
					on:mouseenter=move |_| set_hover.set(true)
					on:mouseleave=move |_| set_hover.set(false)
				/>
			}
		})}
	}
}
