//! Backing storage for diagram geometry.
//!
//! Vertices live in a [`PointArena`] and are addressed by [`PointId`]. A
//! [`Triangle`] holds three ids rather than three points, so moving a vertex
//! through the arena is seen by every shape that references it.

use std::ops::{Index, IndexMut};

use super::triangle::Triangle;
use crate::geometry::Point;

/// Stable handle to a point in a [`PointArena`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PointId(usize);

/// Stable handle to a triangle in a [`Scene`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TriangleId(usize);

/// Append-only storage for points.
///
/// Ids are only minted by [`PointArena::insert`]; indexing with an id from a
/// different arena panics.
#[derive(Clone, Debug, Default)]
pub struct PointArena {
	points: Vec<Point>,
}

impl PointArena {
	/// An empty arena.
	pub fn new() -> Self {
		Self::default()
	}

	/// Stores `point` and returns its handle.
	pub fn insert(&mut self, point: Point) -> PointId {
		self.points.push(point);
		PointId(self.points.len() - 1)
	}

	/// The point behind `id`, if it belongs to this arena.
	pub fn get(&self, id: PointId) -> Option<&Point> {
		self.points.get(id.0)
	}

	/// Mutable access to the point behind `id`.
	pub fn get_mut(&mut self, id: PointId) -> Option<&mut Point> {
		self.points.get_mut(id.0)
	}

	/// Number of stored points.
	pub fn len(&self) -> usize {
		self.points.len()
	}

	/// Whether the arena holds no points.
	pub fn is_empty(&self) -> bool {
		self.points.is_empty()
	}
}

impl Index<PointId> for PointArena {
	type Output = Point;

	fn index(&self, id: PointId) -> &Point {
		&self.points[id.0]
	}
}

impl IndexMut<PointId> for PointArena {
	fn index_mut(&mut self, id: PointId) -> &mut Point {
		&mut self.points[id.0]
	}
}

/// Everything a diagram draws: the vertex arena and the triangles over it.
#[derive(Clone, Debug, Default)]
pub struct Scene {
	/// Vertex storage shared by all triangles.
	pub points: PointArena,
	triangles: Vec<Triangle>,
}

impl Scene {
	/// An empty scene.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a triangle with three fresh vertices.
	pub fn add_triangle(&mut self, a: Point, b: Point, c: Point) -> TriangleId {
		let triangle = Triangle::from(
			self.points.insert(a),
			self.points.insert(b),
			self.points.insert(c),
		);
		self.push_triangle(triangle)
	}

	/// Adds a triangle over vertices already in the arena.
	pub fn push_triangle(&mut self, triangle: Triangle) -> TriangleId {
		self.triangles.push(triangle);
		TriangleId(self.triangles.len() - 1)
	}

	/// The triangle behind `id`.
	pub fn triangle(&self, id: TriangleId) -> Option<&Triangle> {
		self.triangles.get(id.0)
	}

	/// Triangles in insertion (and drawing) order.
	pub fn triangles(&self) -> impl Iterator<Item = (TriangleId, &Triangle)> {
		self.triangles
			.iter()
			.enumerate()
			.map(|(i, t)| (TriangleId(i), t))
	}

	/// Moves one vertex by `(dx, dy)`.
	pub fn translate_point(&mut self, id: PointId, dx: f64, dy: f64) {
		if let Some(point) = self.points.get_mut(id) {
			point.translate(dx, dy);
		}
	}

	/// Moves every vertex of a triangle by `(dx, dy)`, keeping its shape.
	pub fn translate_triangle(&mut self, id: TriangleId, dx: f64, dy: f64) {
		let Some(triangle) = self.triangle(id).copied() else {
			return;
		};
		let vertices = triangle.vertices();
		for (i, vertex) in vertices.iter().enumerate() {
			// a shared id must only move once
			if !vertices[..i].contains(vertex) {
				self.translate_point(*vertex, dx, dy);
			}
		}
	}
}
