use std::collections::HashMap;

use regex::Regex;
use thiserror::Error;

use crate::headers::{ category::Category, descriptor::canonical_key, names::SeedEntry };

lazy_static::lazy_static! {
    /// RFC 7230 `token`
    static ref TOKEN: Regex = Regex::new(r"^[!#$%&'*+\-.^_`|~0-9A-Za-z]+$").expect("token regex");
}

/// 种子表数据完整性问题
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SeedDefect {
    #[error("row {index}: empty header name")]
    EmptyName { index: usize },
    #[error("row {index}: {wire_name:?} is not a valid header token")]
    InvalidToken { index: usize, wire_name: String },
    /// Same canonical key, different description: not an alias.
    #[error("{key:?} seeded twice with different descriptions (rows {first} and {second})")]
    Conflict { key: String, first: usize, second: usize },
    #[error("{key:?} seeded twice under {category}")]
    DuplicateInCategory { key: String, category: Category },
}

/// Whether `name` is a syntactically valid header field name.
pub fn is_token(name: &str) -> bool {
    TOKEN.is_match(name)
}

/// Checks every row and reports all defects at once.
///
/// Two rows sharing a canonical key are accepted as an alias when they sit in
/// different categories with the same description.
pub fn validate_seed<'a, I>(rows: I) -> Result<(), Vec<SeedDefect>>
    where I: IntoIterator<Item = &'a SeedEntry>
{
    let mut defects = Vec::new();
    // key -> 出现过的行号
    let mut seen: HashMap<String, Vec<usize>> = HashMap::new();
    let mut rows_by_index: Vec<&SeedEntry> = Vec::new();

    for (index, row) in rows.into_iter().enumerate() {
        rows_by_index.push(row);
        let (wire_name, category, description) = *row;

        if wire_name.trim().is_empty() {
            defects.push(SeedDefect::EmptyName { index });
            continue;
        }
        if !is_token(wire_name) {
            defects.push(SeedDefect::InvalidToken {
                index,
                wire_name: wire_name.to_string(),
            });
        }

        let key = canonical_key(wire_name).into_owned();
        let earlier = seen.entry(key.clone()).or_default();
        for &prev in earlier.iter() {
            let (_, prev_category, prev_description) = *rows_by_index[prev];
            if prev_category == category {
                defects.push(SeedDefect::DuplicateInCategory {
                    key: key.clone(),
                    category,
                });
            } else if prev_description != description {
                defects.push(SeedDefect::Conflict {
                    key: key.clone(),
                    first: prev,
                    second: index,
                });
            }
        }
        earlier.push(index);
    }

    if defects.is_empty() { Ok(()) } else { Err(defects) }
}
