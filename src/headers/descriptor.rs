use std::borrow::Cow;

use serde::Serialize;

use crate::headers::category::Category;

/// 规范化查找键：去空白 + ASCII 小写
///
/// Borrows when `name` is already canonical, which is the case for almost
/// every row of the compiled-in table.
pub fn canonical_key(name: &str) -> Cow<'_, str> {
    let trimmed = name.trim();
    if trimmed.bytes().any(|b| b.is_ascii_uppercase()) {
        Cow::Owned(trimmed.to_ascii_lowercase())
    } else {
        Cow::Borrowed(trimmed)
    }
}

/// One registry entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct HeaderDescriptor {
    /// Name as it was seeded, original casing kept.
    pub wire_name: &'static str,
    pub canonical_key: Cow<'static, str>,
    pub category: Category,
    /// Informational only, may be empty.
    pub description: &'static str,
}

impl HeaderDescriptor {
    pub fn new(wire_name: &'static str, category: Category, description: &'static str) -> Self {
        Self {
            wire_name,
            canonical_key: canonical_key(wire_name),
            category,
            description,
        }
    }

    pub fn key(&self) -> &str {
        &self.canonical_key
    }

    /// `name` 是否指向本条目（大小写不敏感）
    pub fn matches(&self, name: &str) -> bool {
        canonical_key(name) == self.key()
    }
}
