use serde::{Deserialize, Serialize};

use crate::ColumnId;

/// One alumni entry.
///
/// Keys keep the capitalized names used by the directory's JSON export.
/// A key missing from the input decodes to an empty string and renders as
/// an empty cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlumniRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Class")]
    pub class: String,
    #[serde(rename = "Family")]
    pub family: String,
    #[serde(rename = "Industry")]
    pub industry: String,
    #[serde(rename = "Company")]
    pub company: String,
    #[serde(rename = "Linkedin")]
    pub linkedin: String,
    #[serde(rename = "Title")]
    pub title: String,
}

impl AlumniRecord {
    /// The text value of `column` for this record.
    pub fn value(&self, column: ColumnId) -> &str {
        match column {
            ColumnId::Name => &self.name,
            ColumnId::Class => &self.class,
            ColumnId::Family => &self.family,
            ColumnId::Industry => &self.industry,
            ColumnId::Company => &self.company,
            ColumnId::Title => &self.title,
            ColumnId::Linkedin => &self.linkedin,
        }
    }

    /// The LinkedIn profile URL, or `None` when the field is empty.
    pub fn linkedin_url(&self) -> Option<&str> {
        if self.linkedin.is_empty() {
            None
        } else {
            Some(&self.linkedin)
        }
    }
}
