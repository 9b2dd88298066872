//! # Content models for the three site documents
//!
//! | Struct | Source document |
//! |--------|-----------------|
//! | [`Profile`] | `data.json`: name, bio, about text, optional email and social links. |
//! | [`Education`] | `education.json`: formal degrees and "side quests". |
//! | [`Project`] | `projects.json`: an ordered array of projects. |
//!
//! The documents are hand-edited, so decoding is lenient: text fields accept
//! strings, numbers or booleans (a year written as `2019` reads as `"2019"`),
//! and `null` or a missing key reads as the empty string. Link mappings keep
//! the order they have in the document.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// `data.json`
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Profile {
    #[serde(default, deserialize_with = "text")]
    pub name: String,
    #[serde(default, deserialize_with = "text")]
    pub bio: String,
    #[serde(default, deserialize_with = "text")]
    pub about: String,
    #[serde(default, deserialize_with = "optional_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "links")]
    pub socials: Option<Vec<Link>>,
}

/// `education.json`
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Education {
    #[serde(default)]
    pub formal: Option<Vec<Degree>>,
    #[serde(default)]
    pub side_quests: Option<Vec<SideQuest>>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Degree {
    #[serde(default, deserialize_with = "text")]
    pub degree: String,
    #[serde(default, deserialize_with = "text")]
    pub institution: String,
    #[serde(default, deserialize_with = "text")]
    pub start: String,
    #[serde(default, deserialize_with = "text")]
    pub end: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SideQuest {
    #[serde(default, deserialize_with = "text")]
    pub title: String,
    #[serde(default, deserialize_with = "text")]
    pub organizer: String,
}

/// One entry of `projects.json`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Project {
    #[serde(default, deserialize_with = "text")]
    pub title: String,
    #[serde(default, deserialize_with = "text")]
    pub description: String,
    /// Markdown file name, relative to the configured markdown directory.
    #[serde(default, deserialize_with = "optional_text")]
    pub file: Option<String>,
    #[serde(default, deserialize_with = "links")]
    pub links: Option<Vec<Link>>,
}

/// A labelled URL from a `socials` or `links` mapping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Link {
    pub label: String,
    pub url: String,
}

fn value_text(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    }
}

fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Value::deserialize(deserializer).map(value_text)
}

/// Empty strings count as absent.
fn optional_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let text = value_text(Value::deserialize(deserializer)?);
    Ok((!text.is_empty()).then_some(text))
}

fn links<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Vec<Link>>, D::Error> {
    let map = Option::<Map<String, Value>>::deserialize(deserializer)?;
    Ok(map.map(|map| {
        map.into_iter()
            .map(|(label, url)| Link {
                label,
                url: value_text(url),
            })
            .collect()
    }))
}
