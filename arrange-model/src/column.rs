use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Column a listing can be ordered by.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SortColumn {
    #[default]
    Name,
    Size,
    Type,
    DateModified,
    DateCreated,
    Extension,
}

impl SortColumn {
    /// Every column, in display order.
    pub const ALL: [SortColumn; 6] = [
        SortColumn::Name,
        SortColumn::Size,
        SortColumn::Type,
        SortColumn::DateModified,
        SortColumn::DateCreated,
        SortColumn::Extension,
    ];

    /// Stable identifier used on the wire and on the command line.
    pub const fn id(self) -> &'static str {
        match self {
            SortColumn::Name => "name",
            SortColumn::Size => "size",
            SortColumn::Type => "type",
            SortColumn::DateModified => "date_modified",
            SortColumn::DateCreated => "date_created",
            SortColumn::Extension => "extension",
        }
    }

    /// Whether the column compares string values (and therefore honours
    /// natural sort and case sensitivity).
    pub const fn is_textual(self) -> bool {
        matches!(
            self,
            SortColumn::Name | SortColumn::Type | SortColumn::Extension
        )
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for SortColumn {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "name" | "filename" => Ok(SortColumn::Name),
            "size" => Ok(SortColumn::Size),
            "type" | "kind" => Ok(SortColumn::Type),
            "datemodified" | "modified" | "mtime" => {
                Ok(SortColumn::DateModified)
            }
            "datecreated" | "created" | "ctime" => Ok(SortColumn::DateCreated),
            "extension" | "ext" => Ok(SortColumn::Extension),
            _ => Err(ModelError::UnknownColumn(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ids_and_aliases() {
        for column in SortColumn::ALL {
            assert_eq!(column.id().parse::<SortColumn>(), Ok(column));
        }
        assert_eq!("Date-Modified".parse(), Ok(SortColumn::DateModified));
        assert_eq!("created".parse(), Ok(SortColumn::DateCreated));
        assert_eq!(" EXT ".parse(), Ok(SortColumn::Extension));
    }

    #[test]
    fn rejects_unknown_column() {
        assert_eq!(
            "owner".parse::<SortColumn>(),
            Err(ModelError::UnknownColumn("owner".to_string()))
        );
    }

    #[test]
    fn serializes_snake_case() {
        let json = serde_json::to_string(&SortColumn::DateModified).unwrap();
        assert_eq!(json, "\"date_modified\"");
    }

    #[test]
    fn textual_columns() {
        assert!(SortColumn::Name.is_textual());
        assert!(SortColumn::Extension.is_textual());
        assert!(!SortColumn::Size.is_textual());
        assert!(!SortColumn::DateCreated.is_textual());
    }
}
