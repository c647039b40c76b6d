use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Level {
    Intern,
    Junior,
    Senior,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Intern, Level::Junior, Level::Senior];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Intern => "Intern",
            Level::Junior => "Junior",
            Level::Senior => "Senior",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Level::ALL
            .into_iter()
            .find(|level| level.as_str() == value)
            .ok_or_else(|| anyhow::anyhow!("unknown experience level '{value}'"))
    }
}

/// A record that has not been persisted yet, or the replacement fields for an update.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct NewRecord {
    pub name: String,
    pub position: String,
    pub level: Level,
}

impl NewRecord {
    /// Checks the text fields the type system can't: both must be non-blank.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.name.trim().is_empty() {
            return Err(anyhow::anyhow!("name is required"));
        }

        if self.position.trim().is_empty() {
            return Err(anyhow::anyhow!("position is required"));
        }

        Ok(())
    }

    pub fn with_id(self, id: &str) -> Record {
        Record {
            id: id.to_string(),
            name: self.name,
            position: self.position,
            level: self.level,
        }
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Record {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub position: String,
    pub level: Level,
}

impl From<Record> for NewRecord {
    fn from(record: Record) -> Self {
        Self {
            name: record.name,
            position: record.position,
            level: record.level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_parse() {
        assert_eq!("Junior".parse::<Level>().unwrap(), Level::Junior);
        assert!("junior".parse::<Level>().is_err());
        assert!("".parse::<Level>().is_err());
    }

    #[test]
    fn test_record_accepts_document_id() {
        let record: Record = serde_json::from_str(
            r#"{"_id":"65a1","name":"Ana","position":"Engineer","level":"Junior"}"#,
        )
        .unwrap();

        assert_eq!(record.id, "65a1");
        assert_eq!(record.level, Level::Junior);
    }

    #[test]
    fn test_new_record_validate() {
        let new_record = NewRecord {
            name: "  ".to_owned(),
            position: "Engineer".to_owned(),
            level: Level::Senior,
        };
        assert!(new_record.validate().is_err());

        let new_record = NewRecord {
            name: "Ana".to_owned(),
            position: "Engineer".to_owned(),
            level: Level::Senior,
        };
        assert!(new_record.validate().is_ok());
    }
}
