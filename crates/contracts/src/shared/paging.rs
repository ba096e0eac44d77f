use serde::{Deserialize, Serialize};
use std::fmt;

/// One page of a listing or search response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageData<T> {
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    #[serde(rename = "totalPages", default)]
    pub total_pages: u32,
}

impl<T> PageData<T> {
    pub fn new(content: Vec<T>, total_pages: u32) -> Self {
        Self {
            content,
            total_pages,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// `data` of a listing response. Paged endpoints send [`PageData`]; some
/// search endpoints send the matching rows as a bare array.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PagePayload<T> {
    Rows(Vec<T>),
    Page(PageData<T>),
}

impl<T> From<PagePayload<T>> for PageData<T> {
    fn from(payload: PagePayload<T>) -> Self {
        match payload {
            PagePayload::Page(page) => page,
            PagePayload::Rows(rows) => PageData::new(rows, 1),
        }
    }
}

/// Row identifier. The backend uses numeric ids for most resources but some
/// endpoints hand out string codes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Int(i64),
    Text(String),
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityId::Int(v) => write!(f, "{}", v),
            EntityId::Text(v) => f.write_str(v),
        }
    }
}

impl From<i64> for EntityId {
    fn from(v: i64) -> Self {
        EntityId::Int(v)
    }
}

impl From<&str> for EntityId {
    fn from(v: &str) -> Self {
        EntityId::Text(v.to_string())
    }
}

impl From<String> for EntityId {
    fn from(v: String) -> Self {
        EntityId::Text(v)
    }
}

/// Anything that can be shown as a list row.
pub trait Entity {
    fn entity_id(&self) -> EntityId;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default() {
        let page: PageData<i64> = serde_json::from_str("{}").unwrap();
        assert!(page.is_empty());
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn test_bare_rows_are_one_page() {
        let paged: PagePayload<i64> =
            serde_json::from_str(r#"{"content":[1,2],"totalPages":4}"#).unwrap();
        let rows: PagePayload<i64> = serde_json::from_str("[3]").unwrap();
        assert_eq!(PageData::from(paged), PageData::new(vec![1, 2], 4));
        assert_eq!(PageData::from(rows), PageData::new(vec![3], 1));
    }

    #[test]
    fn test_entity_id_untagged() {
        let a: EntityId = serde_json::from_str("42").unwrap();
        let b: EntityId = serde_json::from_str("\"PO-7\"").unwrap();
        assert_eq!(a, EntityId::Int(42));
        assert_eq!(b.to_string(), "PO-7");
    }
}
