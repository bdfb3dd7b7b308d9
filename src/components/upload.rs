use log::error;
use wasm_bindgen::prelude::*;
use web_sys::{File, FileReader};

use super::error::HostError;

/// Reads `file` as a `data:` URL and hands it to `on_loaded` once the browser
/// has finished.
pub fn read_data_url(
	file: &File,
	on_loaded: impl FnOnce(String) + 'static,
) -> Result<(), HostError> {
	let reader = FileReader::new()?;
	let done = reader.clone();
	let onload = Closure::once_into_js(move || {
		let url = done
			.result()
			.map_err(HostError::from)
			.and_then(|v| v.as_string().ok_or(HostError::NotDataUrl));
		match url {
			Ok(url) => on_loaded(url),
			Err(e) => error!("failed to read image: {e}"),
		}
	});
	reader.set_onload(Some(onload.unchecked_ref()));
	reader.read_as_data_url(file)?;
	Ok(())
}
