use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::recommendation::{
    entities::{errors::FormError, recommendation::RecommendationResult},
    value_objects::SubmitFormInput,
};

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema,
)]
pub enum Language {
    #[default]
    English,
    Tamil,
    Hindi,
    Spanish,
    French,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::English,
        Language::Tamil,
        Language::Hindi,
        Language::Spanish,
        Language::French,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Tamil => "Tamil",
            Language::Hindi => "Hindi",
            Language::Spanish => "Spanish",
            Language::French => "French",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        Language::ALL
            .into_iter()
            .find(|language| language.as_str() == value)
            .ok_or_else(|| FormError::UnsupportedLanguage(value.to_string()))
    }
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema,
)]
pub enum Gender {
    #[default]
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        Gender::ALL
            .into_iter()
            .find(|gender| gender.as_str() == value)
            .ok_or_else(|| FormError::UnsupportedGender(value.to_string()))
    }
}

/// Age in whole years, always within `[Age::MIN, Age::MAX]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Age(u8);

impl Age {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 120;

    pub fn clamped(years: i64) -> Self {
        Self(years.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl FromStr for Age {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        if value.is_empty() {
            return Ok(Age::default());
        }

        value
            .parse::<i64>()
            .map(Age::clamped)
            .map_err(|_| FormError::InvalidAge(value.to_string()))
    }
}

/// A validated form submission.
///
/// `age`, `gender` and `allergies` are collected and echoed back but are not
/// part of any prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormInput {
    pub disease_name: String,
    pub language: Language,
    pub age: Age,
    pub gender: Gender,
    pub allergies: Option<String>,
}

impl FormInput {
    pub fn parse(raw: &SubmitFormInput) -> Result<Self, FormError> {
        let disease_name = raw.disease.as_deref().unwrap_or_default();
        let language = raw.language.as_deref().unwrap_or_default();

        if disease_name.trim().is_empty() || language.trim().is_empty() {
            return Err(FormError::MissingRequiredFields);
        }

        let language = language.parse::<Language>()?;
        let gender = match raw.gender.as_deref() {
            Some(gender) if !gender.trim().is_empty() => gender.parse::<Gender>()?,
            _ => Gender::default(),
        };
        let age = raw.age.as_deref().unwrap_or_default().parse::<Age>()?;
        let allergies = raw
            .allergies
            .as_deref()
            .map(str::trim)
            .filter(|allergies| !allergies.is_empty())
            .map(str::to_string);

        Ok(Self {
            disease_name: disease_name.to_string(),
            language,
            age,
            gender,
            allergies,
        })
    }
}

/// What the page shows after a submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    Warning(FormError),
    Recommendations {
        input: FormInput,
        result: RecommendationResult,
    },
}
