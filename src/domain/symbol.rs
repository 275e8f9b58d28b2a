use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// The instruments the dashboard knows how to query. This is a closed
/// enumeration at the UI boundary; the backend is the source of truth for
/// which pair combinations are actually valid.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Symbol {
    BtcUsdt,
    EthUsdt,
    SolUsdt,
    AvaxUsdt,
    MaticUsdt,
}

impl Symbol {
    /// Lowercase wire code used in query strings (`btcusdt`, ...).
    pub fn code(&self) -> String {
        self.to_string()
    }

    /// Uppercase label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Symbol::BtcUsdt => "BTCUSDT",
            Symbol::EthUsdt => "ETHUSDT",
            Symbol::SolUsdt => "SOLUSDT",
            Symbol::AvaxUsdt => "AVAXUSDT",
            Symbol::MaticUsdt => "MATICUSDT",
        }
    }
}

/// Bar sampling cadence offered by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Timeframe {
    #[serde(rename = "1s")]
    S1,
    #[serde(rename = "1m")]
    M1,
    #[serde(rename = "5m")]
    M5,
}

impl Timeframe {
    pub fn code(&self) -> &'static str {
        match self {
            Timeframe::S1 => "1s",
            Timeframe::M1 => "1m",
            Timeframe::M5 => "5m",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Timeframe::S1 => "1 Second",
            Timeframe::M1 => "1 Minute",
            Timeframe::M5 => "5 Minutes",
        }
    }
}
