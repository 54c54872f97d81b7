use shared_types::{AppError, Attachment};

/// One field of a multipart form.
#[derive(Debug, Clone, PartialEq)]
pub enum FormValue {
    Text(String),
    File(Attachment),
}

/// Body of an outgoing request.
///
/// Multipart forms are kept as plain data until send time so that a body
/// can be inspected, logged and rebuilt; `reqwest::multipart::Form` is
/// single-use.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestBody {
    #[default]
    Empty,
    Json(serde_json::Value),
    Multipart(Vec<(String, FormValue)>),
}

impl RequestBody {
    pub fn json<T: serde::Serialize>(value: &T) -> Result<Self, AppError> {
        serde_json::to_value(value)
            .map(RequestBody::Json)
            .map_err(|e| AppError::decode(format!("Failed to encode request body: {e}")))
    }

    pub fn form() -> FormBuilder {
        FormBuilder::default()
    }

    pub(crate) fn into_multipart(parts: Vec<(String, FormValue)>) -> Result<reqwest::multipart::Form, AppError> {
        let mut form = reqwest::multipart::Form::new();
        for (name, value) in parts {
            form = match value {
                FormValue::Text(text) => form.text(name, text),
                FormValue::File(file) => {
                    let part = reqwest::multipart::Part::bytes(file.bytes)
                        .file_name(file.file_name)
                        .mime_str(&file.content_type)
                        .map_err(|_| AppError::field(&name, "Unsupported attachment type"))?;
                    form.part(name, part)
                }
            };
        }
        Ok(form)
    }
}

/// Collects multipart fields in order.
#[derive(Debug, Clone, Default)]
pub struct FormBuilder {
    parts: Vec<(String, FormValue)>,
}

impl FormBuilder {
    pub fn text(mut self, name: &str, value: impl Into<String>) -> Self {
        self.parts.push((name.to_string(), FormValue::Text(value.into())));
        self
    }

    /// Adds the field only when a value is present.
    pub fn text_opt(self, name: &str, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(v) => self.text(name, v),
            None => self,
        }
    }

    pub fn file(mut self, name: &str, attachment: Option<Attachment>) -> Self {
        if let Some(file) = attachment {
            self.parts.push((name.to_string(), FormValue::File(file)));
        }
        self
    }

    pub fn build(self) -> RequestBody {
        RequestBody::Multipart(self.parts)
    }
}
