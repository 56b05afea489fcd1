use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// Operating system images the creation service knows how to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OsKind {
    Centos,
    Ubuntu,
    Debian,
    Almalinux,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unsupported operating system {0:?} (expected one of: centos, ubuntu, debian, almalinux)")]
pub struct UnknownOs(pub String);

impl OsKind {
    /// All supported images, in the order the form lists them.
    pub fn all() -> [OsKind; 4] {
        [OsKind::Centos, OsKind::Ubuntu, OsKind::Debian, OsKind::Almalinux]
    }

    /// Identifier used in the creation service's URL path.
    pub fn id(&self) -> &'static str {
        match self {
            OsKind::Centos => "centos",
            OsKind::Ubuntu => "ubuntu",
            OsKind::Debian => "debian",
            OsKind::Almalinux => "almalinux",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OsKind::Centos => "Centos",
            OsKind::Ubuntu => "Ubuntu",
            OsKind::Debian => "Debian",
            OsKind::Almalinux => "almalinux",
        }
    }
}

impl fmt::Display for OsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for OsKind {
    type Err = UnknownOs;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        OsKind::all()
            .into_iter()
            .find(|os| os.id() == lower)
            .ok_or_else(|| UnknownOs(s.to_string()))
    }
}
