use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::fmt;

/// Mode of transport available at a stop or served by a route
///
/// The realtime API transmits modes as upper-case strings. Values outside the
/// documented set are kept as [TransportMode::Unknown] instead of failing the
/// whole response.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TransportMode {
    /// Short- and long-distance bus routes
    Bus,
    /// Underground rail
    Metro,
    /// Intercity, regional and commuter rail
    Train,
    /// Light rail or street level rail
    Tram,
    /// Short-distance boat service
    Ferry,
    /// Long-distance boat service
    Ship,
    /// Any other value
    Unknown(String),
}

impl TransportMode {
    /// The wire representation of this mode
    pub fn as_str(&self) -> &str {
        match self {
            TransportMode::Bus => "BUS",
            TransportMode::Metro => "METRO",
            TransportMode::Train => "TRAIN",
            TransportMode::Tram => "TRAM",
            TransportMode::Ferry => "FERRY",
            TransportMode::Ship => "SHIP",
            TransportMode::Unknown(s) => s,
        }
    }
}

impl<'de> Deserialize<'de> for TransportMode {
    fn deserialize<D>(deserializer: D) -> Result<TransportMode, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(match s.as_str() {
            "BUS" => TransportMode::Bus,
            "METRO" => TransportMode::Metro,
            "TRAIN" => TransportMode::Train,
            "TRAM" => TransportMode::Tram,
            "FERRY" => TransportMode::Ferry,
            "SHIP" => TransportMode::Ship,
            _ => TransportMode::Unknown(s),
        })
    }
}

impl Serialize for TransportMode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Category of an [Alert](crate::Alert)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AlertType {
    /// Planned maintenance work
    Maintenance,
    /// Unplanned disruption of the service
    Disruption,
    /// Informational notice without service impact
    Information,
    /// Warning about a possible service impact
    Warning,
    /// Any other value
    Unknown(String),
}

impl AlertType {
    /// The wire representation of this alert category
    pub fn as_str(&self) -> &str {
        match self {
            AlertType::Maintenance => "MAINTENANCE",
            AlertType::Disruption => "DISRUPTION",
            AlertType::Information => "INFORMATION",
            AlertType::Warning => "WARNING",
            AlertType::Unknown(s) => s,
        }
    }
}

impl<'de> Deserialize<'de> for AlertType {
    fn deserialize<D>(deserializer: D) -> Result<AlertType, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(match s.as_str() {
            "MAINTENANCE" => AlertType::Maintenance,
            "DISRUPTION" => AlertType::Disruption,
            "INFORMATION" => AlertType::Information,
            "WARNING" => AlertType::Warning,
            _ => AlertType::Unknown(s),
        })
    }
}

impl Serialize for AlertType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// Describes the kind of a [StopGroup](crate::StopGroup)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StopGroupType {
    /// A meta stop grouping several physical stops under one name
    MetaStop,
    /// A national stop point (rikshållplats)
    Rikshallplats,
    /// Any other value
    Unknown(String),
}

impl StopGroupType {
    /// The wire representation of this group kind
    pub fn as_str(&self) -> &str {
        match self {
            StopGroupType::MetaStop => "META_STOP",
            StopGroupType::Rikshallplats => "RIKSHALLPLATS",
            StopGroupType::Unknown(s) => s,
        }
    }
}

impl<'de> Deserialize<'de> for StopGroupType {
    fn deserialize<D>(deserializer: D) -> Result<StopGroupType, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(match s.as_str() {
            "META_STOP" => StopGroupType::MetaStop,
            "RIKSHALLPLATS" => StopGroupType::Rikshallplats,
            _ => StopGroupType::Unknown(s),
        })
    }
}

impl Serialize for StopGroupType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
