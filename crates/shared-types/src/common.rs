use serde::{Deserialize, Serialize};

/// A binary file sent alongside a multipart form (profile image, company logo).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    pub file_name: String,
    pub content_type: String,
    #[serde(skip)]
    pub bytes: Vec<u8>,
}

impl Attachment {
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

    /// Image uploads accept png, jpeg and gif only.
    pub fn is_image(&self) -> bool {
        matches!(
            self.content_type.as_str(),
            "image/png" | "image/jpeg" | "image/jpg" | "image/gif"
        )
    }
}

/// Rejects empty and whitespace-only input.
#[cfg(feature = "validation")]
pub fn not_blank(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        return Err(validator::ValidationError::new("blank"));
    }
    Ok(())
}

/// Rejects an attachment that is not an accepted image type.
#[cfg(feature = "validation")]
pub fn image_attachment(value: &Attachment) -> Result<(), validator::ValidationError> {
    if !value.is_image() {
        return Err(validator::ValidationError::new("image"));
    }
    Ok(())
}

/// Case-insensitive substring match over a record's searchable fields.
/// An empty (or whitespace-only) query matches everything.
pub fn matches_query<'a>(query: &str, fields: impl IntoIterator<Item = &'a str>) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    fields
        .into_iter()
        .any(|f| f.to_lowercase().contains(&needle))
}

/// Records a list screen can filter with its search box.
pub trait Searchable {
    fn matches(&self, query: &str) -> bool;
}

/// One page of `items`. `page` is zero-based; out-of-range pages are empty.
pub fn paginate<T>(items: &[T], page: usize, rows_per_page: usize) -> &[T] {
    if rows_per_page == 0 {
        return &[];
    }
    let start = page.saturating_mul(rows_per_page);
    if start >= items.len() {
        return &[];
    }
    let end = (start + rows_per_page).min(items.len());
    &items[start..end]
}
