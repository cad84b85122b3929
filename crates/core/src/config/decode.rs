//! Normalization of the shorthand value shapes accepted in documents
//!
//! `hosts = "web1"` is read as `hosts = ["web1"]` and `cmd = "make"` is read
//! as `cmd = { "0" = "make" }`. Nothing past this module sees the shorthand.

use serde::{Deserialize, Deserializer};

use super::CommandTable;

/// Key used when a command table is given as a single string
pub const SHORTHAND_LABEL: &str = "0";

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrList {
    One(String),
    Many(Vec<String>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrMap {
    One(String),
    Map(CommandTable),
}

pub(crate) fn string_or_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match StringOrList::deserialize(deserializer)? {
        StringOrList::One(value) if value.is_empty() => Vec::new(),
        StringOrList::One(value) => vec![value],
        StringOrList::Many(values) => values,
    })
}

pub(crate) fn string_or_map<'de, D>(deserializer: D) -> Result<CommandTable, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match StringOrMap::deserialize(deserializer)? {
        StringOrMap::One(value) if value.is_empty() => CommandTable::new(),
        StringOrMap::One(value) => CommandTable::from([(SHORTHAND_LABEL.to_string(), value)]),
        StringOrMap::Map(table) => table,
    })
}
