//! Reading a picked file out of an `<input type="file">`.

use api::FilePart;

/// Multipart field the backend expects uploads under.
pub const UPLOAD_FIELD: &str = "file";

/// Read the first file selected in the input element `#input_id`.
#[cfg(target_arch = "wasm32")]
pub async fn read_selected_file(input_id: &str) -> Option<FilePart> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()?.document()?;
    let input: web_sys::HtmlInputElement = document
        .get_element_by_id(input_id)?
        .dyn_into()
        .ok()?;
    let file = input.files()?.get(0)?;

    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .inspect_err(|e| tracing::warn!("Failed to read {}: {e:?}", file.name()))
        .ok()?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();

    Some(FilePart {
        field: UPLOAD_FIELD.to_string(),
        file_name: file.name(),
        mime: mime_or_default(&file.type_()),
        bytes,
    })
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn read_selected_file(_input_id: &str) -> Option<FilePart> {
    None
}

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn mime_or_default(mime: &str) -> String {
    if mime.is_empty() {
        "application/octet-stream".to_string()
    } else {
        mime.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_fallback() {
        assert_eq!(mime_or_default(""), "application/octet-stream");
        assert_eq!(mime_or_default("application/pdf"), "application/pdf");
    }
}
