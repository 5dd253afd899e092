//! # Components
//!
//! The closed set of scaffolding units a project can be built from.
//!
//! List entries on screen are plain labels, so the TUI resolves the
//! highlighted entry back into a `Component` through [`Component::from_label`].
//! An unknown label maps to `None`, never to a placeholder member.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Component {
    #[serde(rename = "CLI")]
    Cli,
    #[serde(rename = "OracleDB")]
    OracleDb,
    #[serde(rename = "MongoDB")]
    MongoDb,
    #[serde(rename = "NATSConsumer")]
    NatsConsumer,
    #[serde(rename = "NATSProducer")]
    NatsProducer,
    #[serde(rename = "SqliteDB")]
    SqliteDb,
    #[serde(rename = "Web")]
    Web,
}

impl Component {
    /// Every component, in list display order.
    pub const ALL: [Component; 7] = [
        Component::Cli,
        Component::OracleDb,
        Component::MongoDb,
        Component::NatsConsumer,
        Component::NatsProducer,
        Component::SqliteDb,
        Component::Web,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Component::Cli => "CLI",
            Component::OracleDb => "OracleDB",
            Component::MongoDb => "MongoDB",
            Component::NatsConsumer => "NATSConsumer",
            Component::NatsProducer => "NATSProducer",
            Component::SqliteDb => "SqliteDB",
            Component::Web => "Web",
        }
    }

    /// Exact, case-sensitive label lookup.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|component| component.label() == label)
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown component: {0}")]
pub struct UnknownComponent(pub String);

impl FromStr for Component {
    type Err = UnknownComponent;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| UnknownComponent(s.to_string()))
    }
}
