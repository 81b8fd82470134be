use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Gemini model families this crate knows about.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum KnownModel {
    /// gemini-2.5-flash: fast and inexpensive, the default for text tasks.
    Gemini25Flash,

    /// gemini-2.5-pro: stronger reasoning, slower and costlier.
    Gemini25Pro,

    /// gemini-2.0-flash.
    Gemini20Flash,
}

impl KnownModel {
    /// The wire identifier of this model.
    pub fn as_str(&self) -> &'static str {
        match self {
            KnownModel::Gemini25Flash => "gemini-2.5-flash",
            KnownModel::Gemini25Pro => "gemini-2.5-pro",
            KnownModel::Gemini20Flash => "gemini-2.0-flash",
        }
    }
}

/// A model identifier: a known model or an arbitrary custom string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    /// A model this crate knows about.
    Known(KnownModel),

    /// Any other model identifier, passed through verbatim.
    Custom(String),
}

impl Model {
    /// The wire identifier of this model.
    pub fn as_str(&self) -> &str {
        match self {
            Model::Known(model) => model.as_str(),
            Model::Custom(model) => model,
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let model = match s {
            "gemini-2.5-flash" => Model::Known(KnownModel::Gemini25Flash),
            "gemini-2.5-pro" => Model::Known(KnownModel::Gemini25Pro),
            "gemini-2.0-flash" => Model::Known(KnownModel::Gemini20Flash),
            other => Model::Custom(other.to_string()),
        };
        Ok(model)
    }
}

impl Serialize for Model {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(s.parse().unwrap_or(Model::Custom(s)))
    }
}
