//! Swing-point detection and swing-derived trend classification
//!
//! A candle at index `i` is a swing high iff its high is strictly greater
//! than every high in the symmetric window `[i - lookback, i + lookback]`
//! excluding itself; swing lows mirror. Detection therefore needs
//! `2 * lookback + 1` candles of context and the most recent `lookback`
//! bars can never be swings.

use crate::models::Candle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwingKind {
    High,
    Low,
}

/// One confirmed swing extreme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwingPoint {
    pub index: usize,
    pub price: f64,
    pub kind: SwingKind,
}

/// Find every swing point in the series, oldest first.
pub fn find_swing_points(candles: &[Candle], lookback: usize) -> Vec<SwingPoint> {
    let n = candles.len();
    let mut points = Vec::new();
    if lookback == 0 || n < 2 * lookback + 1 {
        return points;
    }

    for i in lookback..n - lookback {
        let window = &candles[i - lookback..=i + lookback];
        let high = candles[i].high;
        let low = candles[i].low;
        let is_high = window
            .iter()
            .enumerate()
            .all(|(j, c)| j == lookback || c.high < high);
        let is_low = window
            .iter()
            .enumerate()
            .all(|(j, c)| j == lookback || c.low > low);
        if is_high {
            points.push(SwingPoint {
                index: i,
                price: high,
                kind: SwingKind::High,
            });
        }
        if is_low {
            points.push(SwingPoint {
                index: i,
                price: low,
                kind: SwingKind::Low,
            });
        }
    }

    points
}

/// The most recent swings of one kind, newest last.
pub fn swings_of_kind(points: &[SwingPoint], kind: SwingKind) -> Vec<SwingPoint> {
    points.iter().copied().filter(|p| p.kind == kind).collect()
}

/// Uptrend: the last two swing highs and the last two swing lows are both
/// strictly ascending.
pub fn detect_trend_up(points: &[SwingPoint]) -> bool {
    ascending(&swings_of_kind(points, SwingKind::High))
        && ascending(&swings_of_kind(points, SwingKind::Low))
}

/// Downtrend: both swing sequences strictly descending.
pub fn detect_trend_down(points: &[SwingPoint]) -> bool {
    descending(&swings_of_kind(points, SwingKind::High))
        && descending(&swings_of_kind(points, SwingKind::Low))
}

fn ascending(swings: &[SwingPoint]) -> bool {
    swings.len() >= 2 && swings[swings.len() - 1].price > swings[swings.len() - 2].price
}

fn descending(swings: &[SwingPoint]) -> bool {
    swings.len() >= 2 && swings[swings.len() - 1].price < swings[swings.len() - 2].price
}
