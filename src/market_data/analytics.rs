//! Pure calculations over fetched history

use chrono::{Datelike, NaiveDateTime, NaiveTime};
use ordered_float::OrderedFloat;

use super::types::{
    GainersLosers, IndexQuote, MarketStatus, Period, SentimentBand, SentimentScore, StockDelta,
};
use crate::provider::PriceHistory;

/// Weight of the volatility component in the fear/greed blend
pub const VIX_WEIGHT: f64 = 0.6;
/// Weight of the index-momentum component in the fear/greed blend
pub const MOMENTUM_WEIGHT: f64 = 0.4;

fn session_open() -> NaiveTime {
    NaiveTime::from_hms_opt(9, 15, 0).unwrap_or(NaiveTime::MIN)
}

fn session_close() -> NaiveTime {
    NaiveTime::from_hms_opt(15, 30, 0).unwrap_or(NaiveTime::MIN)
}

/// Build an index quote from the tail of a daily history
pub fn quote_from_history(name: &str, history: &PriceHistory) -> Option<IndexQuote> {
    let last = history.last()?;
    let prev_close = history
        .candles
        .len()
        .checked_sub(2)
        .and_then(|idx| history.candles.get(idx))
        .map(|c| c.close)
        .unwrap_or(last.close);

    let change = last.close - prev_close;
    let change_pct = if prev_close != 0.0 {
        change / prev_close * 100.0
    } else {
        0.0
    };

    Some(IndexQuote {
        name: name.to_string(),
        price: last.close,
        change,
        change_pct,
        high: last.high,
        low: last.low,
        open: last.open,
        volume: last.volume.unwrap_or(0.0),
    })
}

/// Latest close and its percentage change over `period`.
///
/// Needs `lookback + 1` closes; the reference is the close `lookback`
/// sessions before the last one.
pub fn period_change(closes: &[f64], period: Period) -> Option<(f64, f64)> {
    let lookback = period.lookback_days();
    if closes.len() < lookback + 1 {
        return None;
    }

    let current = *closes.last()?;
    let reference = closes[closes.len() - 1 - lookback];
    if reference == 0.0 {
        return None;
    }

    let change_pct = (current - reference) / reference * 100.0;
    change_pct.is_finite().then_some((current, change_pct))
}

/// Sort by change descending and cut the top and bottom `limit` entries.
///
/// Losers come out most negative first.
pub fn rank_movers(mut deltas: Vec<StockDelta>, limit: usize) -> GainersLosers {
    deltas.retain(|d| d.change_pct.is_finite());
    deltas.sort_by_key(|d| std::cmp::Reverse(OrderedFloat(d.change_pct)));

    let gainers = deltas.iter().take(limit).cloned().collect();
    let losers = deltas.iter().rev().take(limit).cloned().collect();

    GainersLosers { gainers, losers }
}

fn clamp_score(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

/// Blend VIX level and index momentum into a 0-100 fear/greed score
pub fn compute_sentiment(vix: f64, index_change_pct: f64) -> SentimentScore {
    let vix_score = clamp_score((25.0 - vix) * 2.0 + 50.0);
    let momentum_score = clamp_score(50.0 + index_change_pct * 5.0);

    let blended = vix_score * VIX_WEIGHT + momentum_score * MOMENTUM_WEIGHT;
    let score = if blended.is_finite() {
        (clamp_score(blended) * 10.0).round() / 10.0
    } else {
        50.0
    };

    SentimentScore {
        score,
        band: SentimentBand::from_score(score),
        vix,
    }
}

/// Session state for a local wall-clock instant.
///
/// Open Monday through Friday between 09:15 and 15:30 inclusive.
pub fn market_status_at(now: NaiveDateTime) -> MarketStatus {
    let weekday = now.weekday().num_days_from_monday();
    let time = now.time();

    if weekday < 5 && time >= session_open() && time <= session_close() {
        MarketStatus::Open
    } else {
        MarketStatus::Closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::DailyCandle;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    fn delta(symbol: &str, change_pct: f64) -> StockDelta {
        StockDelta {
            symbol: symbol.to_string(),
            price: 100.0,
            change_pct,
        }
    }

    #[test]
    fn test_market_status_window() {
        // 2024-01-15 is a Monday
        assert_eq!(market_status_at(at(2024, 1, 15, 9, 14, 59)), MarketStatus::Closed);
        assert_eq!(market_status_at(at(2024, 1, 15, 9, 15, 0)), MarketStatus::Open);
        assert_eq!(market_status_at(at(2024, 1, 15, 12, 0, 0)), MarketStatus::Open);
        assert_eq!(market_status_at(at(2024, 1, 15, 15, 30, 0)), MarketStatus::Open);
        assert_eq!(market_status_at(at(2024, 1, 15, 15, 30, 1)), MarketStatus::Closed);
        // Friday open, Saturday and Sunday closed
        assert_eq!(market_status_at(at(2024, 1, 19, 10, 0, 0)), MarketStatus::Open);
        assert_eq!(market_status_at(at(2024, 1, 20, 10, 0, 0)), MarketStatus::Closed);
        assert_eq!(market_status_at(at(2024, 1, 21, 10, 0, 0)), MarketStatus::Closed);
    }

    #[test]
    fn test_quote_from_history() {
        let candle = |close: f64, volume: Option<f64>| DailyCandle {
            timestamp: 0,
            open: close - 1.0,
            high: close + 2.0,
            low: close - 2.0,
            close,
            volume,
        };
        let history = PriceHistory::new("^NSEI", vec![candle(200.0, None), candle(210.0, None)]);

        let quote = quote_from_history("NIFTY50", &history).unwrap();
        assert_eq!(quote.price, 210.0);
        assert_eq!(quote.change, 10.0);
        assert!((quote.change_pct - 5.0).abs() < 1e-9);
        assert_eq!(quote.high, 212.0);
        assert_eq!(quote.open, 209.0);
        assert_eq!(quote.volume, 0.0);

        let single = PriceHistory::new("^NSEI", vec![candle(50.0, Some(7.0))]);
        let quote = quote_from_history("NIFTY50", &single).unwrap();
        assert_eq!(quote.change, 0.0);
        assert_eq!(quote.change_pct, 0.0);
        assert_eq!(quote.volume, 7.0);

        assert!(quote_from_history("NIFTY50", &PriceHistory::new("^NSEI", vec![])).is_none());
    }

    #[test]
    fn test_period_change_uses_lookback_reference() {
        let closes: Vec<f64> = (1..=10).map(|v| v as f64 * 10.0).collect();

        let (price, pct) = period_change(&closes, Period::OneDay).unwrap();
        assert_eq!(price, 100.0);
        assert!((pct - 100.0 * (100.0 - 90.0) / 90.0).abs() < 1e-9);

        let (_, pct) = period_change(&closes, Period::OneWeek).unwrap();
        assert!((pct - 100.0 * (100.0 - 50.0) / 50.0).abs() < 1e-9);

        assert!(period_change(&closes, Period::OneMonth).is_none());
        assert!(period_change(&closes[..5], Period::OneWeek).is_none());
        assert!(period_change(&[0.0, 5.0], Period::OneDay).is_none());
    }

    #[test]
    fn test_rank_movers_respects_limit_and_order() {
        let deltas = vec![
            delta("A", 1.5),
            delta("B", -3.0),
            delta("C", 4.0),
            delta("D", -0.5),
            delta("E", 0.0),
            delta("F", f64::NAN),
        ];

        let ranked = rank_movers(deltas, 2);
        let gainers: Vec<&str> = ranked.gainers.iter().map(|d| d.symbol.as_str()).collect();
        let losers: Vec<&str> = ranked.losers.iter().map(|d| d.symbol.as_str()).collect();

        assert_eq!(gainers, vec!["C", "A"]);
        assert_eq!(losers, vec!["B", "D"]);
    }

    #[test]
    fn test_rank_movers_with_short_list() {
        let ranked = rank_movers(vec![delta("A", 1.0), delta("B", 2.0)], 10);
        assert_eq!(ranked.gainers.len(), 2);
        assert_eq!(ranked.losers.len(), 2);
        assert_eq!(ranked.gainers[0].symbol, "B");
        assert_eq!(ranked.losers[0].symbol, "A");

        assert!(rank_movers(Vec::new(), 10).is_empty());
    }

    #[test]
    fn test_sentiment_blend() {
        // vix 25 -> 50, flat index -> 50
        let neutral = compute_sentiment(25.0, 0.0);
        assert_eq!(neutral.score, 50.0);
        assert_eq!(neutral.band, SentimentBand::Neutral);

        // vix 15 -> 70, +2% -> 60, blend 66
        let greed = compute_sentiment(15.0, 2.0);
        assert_eq!(greed.score, 66.0);
        assert_eq!(greed.band, SentimentBand::Greed);
        assert_eq!(greed.vix, 15.0);

        // vix 40 -> 20, -5% -> 25, blend 22
        let fear = compute_sentiment(40.0, -5.0);
        assert_eq!(fear.score, 22.0);
        assert_eq!(fear.band, SentimentBand::ExtremeFear);
    }

    #[test]
    fn test_sentiment_is_clamped() {
        for (vix, pct) in [(0.0, 50.0), (-100.0, 1e9), (500.0, -1e9), (f64::NAN, 0.0)] {
            let reading = compute_sentiment(vix, pct);
            assert!((0.0..=100.0).contains(&reading.score), "{:?}", reading);
        }
        assert_eq!(compute_sentiment(0.0, 50.0).score, 100.0);
        assert_eq!(compute_sentiment(500.0, -1e9).score, 0.0);
    }
}
