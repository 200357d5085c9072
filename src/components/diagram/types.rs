/// One triangle of the initial diagram, as literal coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct TriangleData {
	/// Vertex A.
	pub a: (f64, f64),
	/// Vertex B.
	pub b: (f64, f64),
	/// Vertex C.
	pub c: (f64, f64),
}

/// The shapes a diagram starts with.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DiagramData {
	/// Triangles in drawing order.
	pub triangles: Vec<TriangleData>,
}
