use std::f64::consts::{PI, TAU};

use super::scene::{PointArena, PointId};
use super::style::{ShapeStyle, ShapeStyleOverride, TextStyle, TextStyleOverride};
use super::surface::{DrawingSurface, paint_label, paint_path};
use crate::geometry::{Angle, LineSegment, Point, get_angle_between, normalize_rad};

/// How close the angle sum around a point must come to `0` or `2π`.
const CONTAINS_TOLERANCE: f64 = 0.001;

/// Gap between an angle arc and its degree label.
const ANGLE_LABEL_GAP: f64 = 10.0;

/// Distance from a vertex to its letter.
const VERTEX_LABEL_OFFSET: f64 = 12.0;

/// Radius of the dot marking each vertex.
const VERTEX_DOT_RADIUS: f64 = 3.0;

/// A triangle over three vertices stored in a [`PointArena`].
///
/// Collinear or coincident vertices are allowed; the math degrades to NaN
/// instead of failing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Triangle {
	/// Vertex A.
	pub a: PointId,
	/// Vertex B.
	pub b: PointId,
	/// Vertex C.
	pub c: PointId,
}

/// The arc spanning the interior angle at a vertex.
#[derive(Clone, Copy, Debug)]
struct InteriorArc {
	start: f64,
	end: f64,
	radius: f64,
}

impl InteriorArc {
	/// Interior arc at `b`, between its neighbours `a` and `c`.
	///
	/// The start/end pair is ordered so a clockwise arc from `start` to `end`
	/// sweeps the inside of the triangle, never the reflex side.
	fn at(a: Point, b: Point, c: Point) -> Self {
		let ba = LineSegment::from(b, a);
		let bc = LineSegment::from(b, c);

		let mut start = bc.angle().rad();
		let mut end = ba.angle().rad();
		if normalize_rad(end - start) > PI {
			std::mem::swap(&mut start, &mut end);
		}
		if end < start {
			end += TAU;
		}

		Self {
			start,
			end,
			radius: (ba.length() + bc.length()) / 10.0,
		}
	}

	fn mid(&self) -> f64 {
		(self.start + self.end) / 2.0
	}

	fn sweep(&self) -> Angle {
		Angle::from_rad(self.end - self.start)
	}
}

impl Triangle {
	/// Creates a triangle over three arena handles.
	pub const fn from(a: PointId, b: PointId, c: PointId) -> Self {
		Self { a, b, c }
	}

	/// The vertex handles in A, B, C order.
	pub fn vertices(&self) -> [PointId; 3] {
		[self.a, self.b, self.c]
	}

	/// Current coordinates of A, B, C.
	pub fn corners(&self, points: &PointArena) -> [Point; 3] {
		[points[self.a], points[self.b], points[self.c]]
	}

	/// Whether `p` lies inside the triangle.
	///
	/// Sums the angles ∠APC, ∠BPC and ∠BPA: for an interior point they go all
	/// the way around. A point on a vertex makes one of them NaN and is
	/// reported as outside.
	pub fn contains(&self, points: &PointArena, p: Point) -> bool {
		let [a, b, c] = self.corners(points);
		let apc = get_angle_between(a, p, c);
		let bpc = get_angle_between(b, p, c);
		let bpa = get_angle_between(b, p, a);
		let sum = normalize_rad(apc.rad() + bpc.rad() + bpa.rad());
		if sum.is_nan() {
			return false;
		}
		sum.abs() < CONTAINS_TOLERANCE || (sum - TAU).abs() < CONTAINS_TOLERANCE
	}

	/// Outlines A→B→C and closes the path. Defaults to a 1px black stroke
	/// and no fill.
	pub fn draw_shape(
		&self,
		points: &PointArena,
		surface: &mut impl DrawingSurface,
		style: &ShapeStyleOverride,
	) {
		let style = ShapeStyle::new(None, Some("black")).merge(style);
		let [a, b, c] = self.corners(points);

		surface.begin_path();
		surface.move_to(a.x, a.y);
		surface.line_to(b.x, b.y);
		surface.line_to(c.x, c.y);
		surface.close_path();
		paint_path(surface, &style);
	}

	/// Draws a wedge and a degree label for each interior angle.
	pub fn draw_angles(
		&self,
		points: &PointArena,
		surface: &mut impl DrawingSurface,
		style: &ShapeStyleOverride,
		text_style: &TextStyleOverride,
	) {
		let style = ShapeStyle::new(Some("pink"), Some("red")).merge(style);
		let text_style = TextStyle::new("11px", "Arial", "black").merge(text_style);
		let [a, b, c] = self.corners(points);

		for (prev, vertex, next) in [(a, b, c), (b, c, a), (c, a, b)] {
			draw_angle(surface, prev, vertex, next, &style, &text_style);
		}
	}

	/// Marks each vertex with a dot and its letter, placed outside the triangle.
	pub fn draw_points(
		&self,
		points: &PointArena,
		surface: &mut impl DrawingSurface,
		text_style: &TextStyleOverride,
	) {
		let text_style = TextStyle::new("14px", "Arial", "black").merge(text_style);
		if text_style.color.is_none() {
			return;
		}
		let [a, b, c] = self.corners(points);

		for (label, prev, vertex, next) in [("A", c, a, b), ("B", a, b, c), ("C", b, c, a)] {
			surface.begin_path();
			surface.arc(vertex.x, vertex.y, VERTEX_DOT_RADIUS, 0.0, TAU);
			surface.set_fill_style("black");
			surface.fill();

			let outward = InteriorArc::at(prev, vertex, next).mid() - PI;
			paint_label(
				surface,
				&text_style,
				label,
				vertex.x + outward.cos() * VERTEX_LABEL_OFFSET,
				vertex.y + outward.sin() * VERTEX_LABEL_OFFSET,
			);
		}
	}
}

fn draw_angle(
	surface: &mut impl DrawingSurface,
	a: Point,
	b: Point,
	c: Point,
	style: &ShapeStyle,
	text_style: &TextStyle,
) {
	let arc = InteriorArc::at(a, b, c);

	surface.begin_path();
	surface.move_to(b.x, b.y);
	surface.arc(b.x, b.y, arc.radius, arc.start, arc.end);
	paint_path(surface, style);

	let delta = arc.radius + ANGLE_LABEL_GAP;
	let mid = arc.mid();
	let text = format!("{}°", arc.sweep().deg().round());
	paint_label(
		surface,
		text_style,
		&text,
		b.x + mid.cos() * delta,
		b.y + mid.sin() * delta,
	);
}
