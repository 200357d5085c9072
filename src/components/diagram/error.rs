use wasm_bindgen::JsValue;

/// Why a diagram could not be attached to its canvas.
#[derive(Debug, thiserror::Error)]
pub enum DiagramError {
	/// Not running in a browser window.
	#[error("no window available")]
	NoWindow,
	/// The canvas refused a 2D context.
	#[error("canvas has no 2d rendering context")]
	NoContext,
	/// A DOM call threw.
	#[error("javascript error: {0}")]
	Js(String),
}

impl From<JsValue> for DiagramError {
	fn from(value: JsValue) -> Self {
		Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
	}
}
