//! Page-level types.

use serde::{Deserialize, Serialize};

/// A single page of extracted text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Page number (1-indexed)
    pub number: u32,

    /// Text of this page only
    pub text: String,
}

impl Page {
    /// Create a new page.
    pub fn new(number: u32, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }

    /// Create page 1 holding the whole text of a non-paginated resource.
    pub fn single(text: impl Into<String>) -> Self {
        Self::new(1, text)
    }

    /// Check if the page has no visible text.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Number a sequence of page texts 1, 2, 3, ... in order.
pub(crate) fn number_pages<I>(texts: I) -> Vec<Page>
where
    I: IntoIterator<Item = String>,
{
    texts
        .into_iter()
        .zip(1u32..)
        .map(|(text, number)| Page::new(number, text))
        .collect()
}
