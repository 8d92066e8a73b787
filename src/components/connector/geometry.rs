//! Pure SVG path computation for connector bodies and arrowheads.

use super::types::Point;

/// Anchor point of the arrowhead: the end point shifted up by the triangle
/// height, so the line body stops exactly where the arrowhead base begins.
pub fn arrow_anchor(end: Point, triangle_width: f64) -> Point {
	Point {
		x: end.x,
		y: end.y - triangle_width,
	}
}

/// Cubic Bezier from `start` to `end` with both control points at the
/// vertical midpoint, biased by `offset_y` so a connector can route around a
/// node body.
pub fn line_path(start: Point, end: Point, offset_y: f64) -> String {
	let mid_y = (start.y + end.y) / 2.0 + offset_y;
	format!(
		"M {} {} C {} {}, {} {}, {} {}",
		start.x, start.y, start.x, mid_y, end.x, mid_y, end.x, end.y
	)
}

/// Downward-pointing arrowhead with its base centered on `anchor` and its tip
/// `width` below it.
pub fn triangle_path(anchor: Point, width: f64) -> String {
	let half = width / 2.0;
	format!(
		"M {} {} L {} {} L {} {} Z",
		anchor.x - half,
		anchor.y,
		anchor.x + half,
		anchor.y,
		anchor.x,
		anchor.y + width
	)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn arrow_anchor_shifts_end_up_by_triangle_width() {
		let anchor = arrow_anchor(Point { x: 40.0, y: 120.0 }, 9.0);
		assert_eq!(anchor, Point { x: 40.0, y: 111.0 });
	}

	#[test]
	fn line_path_is_deterministic() {
		let (a, b) = (Point { x: 0.0, y: 0.0 }, Point { x: 10.0, y: 20.0 });
		assert_eq!(line_path(a, b, 0.0), line_path(a, b, 0.0));
	}

	#[test]
	fn offset_biases_control_points_but_not_endpoints() {
		let (a, b) = (Point { x: 0.0, y: 0.0 }, Point { x: 10.0, y: 20.0 });
		let flat = line_path(a, b, 0.0);
		let bent = line_path(a, b, 30.0);
		assert_ne!(flat, bent);
		assert!(bent.starts_with("M 0 0 "));
		assert!(bent.ends_with("10 20"));
	}

	#[test]
	fn triangle_base_sits_on_anchor() {
		let path = triangle_path(Point { x: 40.0, y: 111.0 }, 9.0);
		assert_eq!(path, "M 35.5 111 L 44.5 111 L 40 120 Z");
	}
}
