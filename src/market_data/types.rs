//! Derived market data structures
//!
//! Everything here is computed per refresh and discarded with the next one.

use std::fmt;
use std::str::FromStr;

use crate::provider::HistoryRange;

/// Headline index tracked by the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarketIndex {
    Nifty50,
    BankNifty,
    Sensex,
    Vix,
}

/// Indices shown in the ticker strip, in display order
pub const MAIN_INDICES: [MarketIndex; 3] =
    [MarketIndex::Nifty50, MarketIndex::BankNifty, MarketIndex::Sensex];

impl MarketIndex {
    pub fn name(&self) -> &'static str {
        match self {
            MarketIndex::Nifty50 => "NIFTY50",
            MarketIndex::BankNifty => "BANKNIFTY",
            MarketIndex::Sensex => "SENSEX",
            MarketIndex::Vix => "VIX",
        }
    }

    /// Provider symbol for the index
    pub fn symbol(&self) -> &'static str {
        match self {
            MarketIndex::Nifty50 => "^NSEI",
            MarketIndex::BankNifty => "^NSEBANK",
            MarketIndex::Sensex => "^BSESN",
            MarketIndex::Vix => "^INDIAVIX",
        }
    }
}

impl FromStr for MarketIndex {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "NIFTY50" => Ok(MarketIndex::Nifty50),
            "BANKNIFTY" => Ok(MarketIndex::BankNifty),
            "SENSEX" => Ok(MarketIndex::Sensex),
            "VIX" => Ok(MarketIndex::Vix),
            other => Err(anyhow::anyhow!("Unknown index: {}", other)),
        }
    }
}

impl fmt::Display for MarketIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lookback period for gainers/losers ranking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Period {
    #[default]
    OneDay,
    OneWeek,
    OneMonth,
    SixMonths,
    OneYear,
}

impl Period {
    pub const ALL: [Period; 5] = [
        Period::OneDay,
        Period::OneWeek,
        Period::OneMonth,
        Period::SixMonths,
        Period::OneYear,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Period::OneDay => "1D",
            Period::OneWeek => "1Week",
            Period::OneMonth => "1Month",
            Period::SixMonths => "6Months",
            Period::OneYear => "1Year",
        }
    }

    /// Trading days between the reference close and the latest close
    pub fn lookback_days(&self) -> usize {
        match self {
            Period::OneDay => 1,
            Period::OneWeek => 5,
            Period::OneMonth => 21,
            Period::SixMonths => 126,
            Period::OneYear => 252,
        }
    }

    /// History window fetched to cover the lookback
    pub fn history_range(&self) -> HistoryRange {
        match self {
            Period::OneDay => HistoryRange::FiveDays,
            Period::OneWeek => HistoryRange::OneMonth,
            Period::OneMonth => HistoryRange::ThreeMonths,
            Period::SixMonths => HistoryRange::OneYear,
            Period::OneYear => HistoryRange::TwoYears,
        }
    }

    /// Next period in selector order, wrapping around
    pub fn next(&self) -> Period {
        let idx = Self::ALL.iter().position(|p| p == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

impl FromStr for Period {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| anyhow::anyhow!("Unknown period: {}", s))
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Latest quote for an index
#[derive(Debug, Clone, PartialEq)]
pub struct IndexQuote {
    pub name: String,
    pub price: f64,
    pub change: f64,
    pub change_pct: f64,
    pub high: f64,
    pub low: f64,
    pub open: f64,
    pub volume: f64,
}

/// Percentage move of one equity over a period
#[derive(Debug, Clone, PartialEq)]
pub struct StockDelta {
    pub symbol: String,
    pub price: f64,
    pub change_pct: f64,
}

/// One-day move of a sector index
#[derive(Debug, Clone, PartialEq)]
pub struct SectorDelta {
    pub sector: String,
    pub price: f64,
    pub change_pct: f64,
}

/// Top movers of a universe
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GainersLosers {
    pub gainers: Vec<StockDelta>,
    pub losers: Vec<StockDelta>,
}

impl GainersLosers {
    pub fn is_empty(&self) -> bool {
        self.gainers.is_empty() && self.losers.is_empty()
    }
}

/// Exchange session state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarketStatus {
    Open,
    Closed,
}

impl MarketStatus {
    pub fn label(&self) -> &'static str {
        match self {
            MarketStatus::Open => "OPEN",
            MarketStatus::Closed => "CLOSED",
        }
    }
}

/// Main index quotes plus session state
#[derive(Debug, Clone, PartialEq)]
pub struct MarketSummary {
    pub quotes: Vec<IndexQuote>,
    pub status: MarketStatus,
}

/// Qualitative sentiment band
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentBand {
    ExtremeFear,
    Fear,
    Neutral,
    Greed,
    ExtremeGreed,
}

impl SentimentBand {
    /// Band for a score; bands are half-open on the upper bound
    pub fn from_score(score: f64) -> Self {
        if score < 25.0 {
            SentimentBand::ExtremeFear
        } else if score < 45.0 {
            SentimentBand::Fear
        } else if score < 55.0 {
            SentimentBand::Neutral
        } else if score < 75.0 {
            SentimentBand::Greed
        } else {
            SentimentBand::ExtremeGreed
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SentimentBand::ExtremeFear => "EXTREME FEAR",
            SentimentBand::Fear => "FEAR",
            SentimentBand::Neutral => "NEUTRAL",
            SentimentBand::Greed => "GREED",
            SentimentBand::ExtremeGreed => "EXTREME GREED",
        }
    }
}

impl fmt::Display for SentimentBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Fear/greed reading
#[derive(Debug, Clone, PartialEq)]
pub struct SentimentScore {
    pub score: f64,
    pub band: SentimentBand,
    pub vix: f64,
}

impl SentimentScore {
    /// Reading used when inputs are unavailable
    pub fn neutral() -> Self {
        Self {
            score: 50.0,
            band: SentimentBand::Neutral,
            vix: 0.0,
        }
    }
}
