//! Supported Linux distribution families for container build images.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::core::properties::Properties;

/// A distribution family we can build images for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Distro {
    Centos,
    Rhel,
}

#[derive(Debug, Error)]
#[error("unknown distribution `{0}`, expected `centos` or `rhel`")]
pub struct UnknownDistro(String);

impl FromStr for Distro {
    type Err = UnknownDistro;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "centos" => Ok(Distro::Centos),
            "rhel" | "redhat" => Ok(Distro::Rhel),
            other => Err(UnknownDistro(other.to_string())),
        }
    }
}

impl fmt::Display for Distro {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Distro::Centos => "centos",
            Distro::Rhel => "rhel",
        })
    }
}

impl Distro {
    /// Property key for the distribution version.
    pub fn version_key(&self) -> &'static str {
        match self {
            Distro::Centos => "centos.version",
            Distro::Rhel => "rhel.version",
        }
    }

    /// Property key for the pinned compiler toolset version.
    pub fn toolset_key(&self) -> &'static str {
        match self {
            Distro::Centos => "centos.toolset.version",
            Distro::Rhel => "rhel.toolset.version",
        }
    }

    pub fn default_version(&self) -> &'static str {
        match self {
            Distro::Centos => "7",
            Distro::Rhel => "8.9",
        }
    }

    pub fn default_toolset_version(&self) -> &'static str {
        match self {
            Distro::Centos => "11",
            Distro::Rhel => "12",
        }
    }

    /// Image name component (`redhat` for RHEL, matching the UBI base).
    fn image_stem(&self) -> &'static str {
        match self {
            Distro::Centos => "centos",
            Distro::Rhel => "redhat",
        }
    }
}

/// A concrete image definition: distribution plus resolved versions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistroImage {
    pub distro: Distro,
    pub version: String,
    pub toolset_version: String,
}

impl DistroImage {
    /// Resolve versions from the property map, falling back to the
    /// distribution defaults.
    pub fn from_properties(distro: Distro, props: &Properties) -> Self {
        DistroImage {
            distro,
            version: props
                .get_or(distro.version_key(), distro.default_version())
                .to_string(),
            toolset_version: props
                .get_or(distro.toolset_key(), distro.default_toolset_version())
                .to_string(),
        }
    }

    /// Full image tag, e.g. `native/centos7:latest`.
    pub fn tag(&self) -> String {
        format!("native/{}{}:latest", self.distro.image_stem(), self.version)
    }
}
