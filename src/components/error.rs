use wasm_bindgen::JsValue;

/// Failures reported by the browser while drawing or reading files.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
	#[error("no browser window available")]
	NoWindow,
	#[error("canvas has no 2d rendering context")]
	NoContext,
	#[error("file reader produced no data URL")]
	NotDataUrl,
	#[error("javascript error: {0}")]
	Js(String),
}

impl From<JsValue> for HostError {
	fn from(value: JsValue) -> Self {
		HostError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
	}
}
