use std::{fmt::Display, str::FromStr, sync::Arc};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Gender {
    #[serde(alias = "MAIL")]
    Male,
    #[serde(alias = "FEMAIL")]
    Female,
}

impl FromStr for Gender {
    type Err = String;

    /// Accepts the legacy `MAIL`/`FEMAIL` spellings the mobile client still sends.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_uppercase().as_str() {
            "MALE" | "MAIL" => Ok(Self::Male),
            "FEMALE" | "FEMAIL" => Ok(Self::Female),
            other => Err(format!("unknown gender `{other}`")),
        }
    }
}

impl Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gender::Male => f.write_str("MALE"),
            Gender::Female => f.write_str("FEMALE"),
        }
    }
}

/// A registered passenger.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    /// The global internal index used for O(1) array lookups in the repository.
    pub index: u32,
    /// Identifier assigned by the member store.
    pub id: u64,
    pub name: Arc<str>,
    pub nickname: Arc<str>,
    /// Stored exactly as registered. Not normalized.
    pub phone_number: Arc<str>,
    pub gender: Option<Gender>,
    pub birth_date: Option<NaiveDate>,
}

impl Member {
    pub fn new(id: u64, name: &str, phone_number: &str) -> Self {
        Self {
            index: 0,
            id,
            name: name.into(),
            nickname: name.into(),
            phone_number: phone_number.into(),
            gender: None,
            birth_date: None,
        }
    }

    pub fn with_nickname(mut self, nickname: &str) -> Self {
        self.nickname = nickname.into();
        self
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    pub fn with_birth_date(mut self, birth_date: NaiveDate) -> Self {
        self.birth_date = Some(birth_date);
        self
    }
}
