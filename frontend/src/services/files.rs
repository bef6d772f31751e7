//! Read user-selected files into memory.

use js_sys::Uint8Array;
use portfolio_core::UploadFile;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FileList};

/// Read every file of a `<input type="file">` selection.
pub async fn read_file_list(list: &FileList) -> Result<Vec<UploadFile>, String> {
    let mut files = Vec::with_capacity(list.length() as usize);
    for index in 0..list.length() {
        if let Some(file) = list.get(index) {
            files.push(read_file(&file).await?);
        }
    }
    Ok(files)
}

async fn read_file(file: &File) -> Result<UploadFile, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("Failed to read {}: {:?}", file.name(), e))?;
    let bytes = Uint8Array::new(&buffer).to_vec();

    let content_type = Some(file.type_()).filter(|t| !t.is_empty());
    log::debug!("Read {} ({} bytes)", file.name(), bytes.len());
    Ok(UploadFile::new(file.name(), content_type, bytes))
}
