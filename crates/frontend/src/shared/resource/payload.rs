//! Request payloads: a field bag encoded either as JSON or as multipart form data.

use serde_json::{Map, Value};
use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, FormData};

/// Binary file content picked in a form
#[derive(Clone, PartialEq, Eq)]
pub struct FileUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for FileUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileUpload")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl FileUpload {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// Read a file chosen through an `<input type="file">`
    pub async fn read(file: &web_sys::File) -> Result<Self, String> {
        let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
            .await
            .map_err(|e| format!("{e:?}"))?;
        let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
        Ok(Self::new(file.name(), file.type_(), bytes))
    }

    fn to_blob(&self) -> Result<Blob, JsValue> {
        let bytes = js_sys::Uint8Array::from(self.bytes.as_slice());
        let parts = js_sys::Array::of1(&bytes);
        let options = BlobPropertyBag::new();
        options.set_type(&self.content_type);
        Blob::new_with_u8_array_sequence_and_options(&parts, &options)
    }
}

/// Image slot of a draft
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ImageField {
    #[default]
    Empty,
    /// URL of the image already stored with the entity
    Existing(String),
    /// Newly picked file, uploaded on submit
    Selected(FileUpload),
}

impl ImageField {
    pub fn from_url(url: &str) -> Self {
        if url.trim().is_empty() {
            Self::Empty
        } else {
            Self::Existing(url.to_string())
        }
    }

    /// A new file was picked
    pub fn is_selected(&self) -> bool {
        matches!(self, Self::Selected(_))
    }

    pub fn upload(&self) -> Option<&FileUpload> {
        match self {
            Self::Selected(file) => Some(file),
            _ => None,
        }
    }

    pub fn existing_url(&self) -> Option<&str> {
        match self {
            Self::Existing(url) => Some(url),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadEncoding {
    Json,
    Multipart,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    File(FileUpload),
}

/// Ordered named fields of a create/update request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldBag {
    encoding: PayloadEncoding,
    fields: Vec<(&'static str, FieldValue)>,
}

impl FieldBag {
    pub fn json() -> Self {
        Self {
            encoding: PayloadEncoding::Json,
            fields: Vec::new(),
        }
    }

    pub fn multipart() -> Self {
        Self {
            encoding: PayloadEncoding::Multipart,
            fields: Vec::new(),
        }
    }

    pub fn text(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.fields.push((name, FieldValue::Text(value.into())));
        self
    }

    /// Adds the file only when the image slot holds a newly picked file
    pub fn image(mut self, name: &'static str, image: &ImageField) -> Self {
        if let Some(file) = image.upload() {
            self.fields.push((name, FieldValue::File(file.clone())));
        }
        self
    }

    pub fn encoding(&self) -> PayloadEncoding {
        self.encoding
    }

    pub fn fields(&self) -> &[(&'static str, FieldValue)] {
        &self.fields
    }

    pub fn get_text(&self, name: &str) -> Option<&str> {
        self.fields.iter().find_map(|(n, v)| match v {
            FieldValue::Text(s) if *n == name => Some(s.as_str()),
            _ => None,
        })
    }

    pub fn has_file(&self, name: &str) -> bool {
        self.fields
            .iter()
            .any(|(n, v)| *n == name && matches!(v, FieldValue::File(_)))
    }

    /// JSON object of the text fields. Files cannot travel as JSON and are skipped.
    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        for (name, value) in &self.fields {
            if let FieldValue::Text(s) = value {
                map.insert((*name).to_string(), Value::String(s.clone()));
            }
        }
        Value::Object(map)
    }

    pub fn to_form_data(&self) -> Result<FormData, JsValue> {
        let form = FormData::new()?;
        for (name, value) in &self.fields {
            match value {
                FieldValue::Text(s) => form.append_with_str(name, s)?,
                FieldValue::File(file) => {
                    let blob = file.to_blob()?;
                    form.append_with_blob_and_filename(name, &blob, &file.file_name)?;
                }
            }
        }
        Ok(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_skips_files() {
        let image = ImageField::Selected(FileUpload::new("a.png", "image/png", vec![1, 2, 3]));
        let bag = FieldBag::json()
            .text("title", "Summer")
            .image("image", &image);
        assert!(bag.has_file("image"));
        assert_eq!(bag.to_json(), serde_json::json!({ "title": "Summer" }));
    }

    #[test]
    fn test_existing_image_is_not_resent() {
        let bag = FieldBag::multipart()
            .text("productName", "Runner")
            .image("productImage", &ImageField::from_url("https://cdn/p.png"));
        assert!(!bag.has_file("productImage"));
        assert_eq!(bag.get_text("productName"), Some("Runner"));
        assert_eq!(bag.fields().len(), 1);
    }

    #[test]
    fn test_blank_url_is_empty_slot() {
        assert_eq!(ImageField::from_url("  "), ImageField::Empty);
        assert_eq!(
            ImageField::from_url("https://cdn/x.png").existing_url(),
            Some("https://cdn/x.png")
        );
    }
}
