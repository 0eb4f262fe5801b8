//! ADX (Average Directional Index) indicator

use crate::indicators::math;
use crate::models::Candle;

/// Parallel ADX, +DI and -DI series.
#[derive(Debug, Clone)]
pub struct AdxSeries {
    pub adx: Vec<f64>,
    pub plus_di: Vec<f64>,
    pub minus_di: Vec<f64>,
}

/// Calculate ADX with Wilder smoothing.
///
/// +DI / -DI come from smoothed directional movement over smoothed true
/// range; DX = 100 * |+DI - -DI| / (+DI + -DI); ADX is the Wilder-smoothed
/// DX, seeded as a prefix mean while the DX window fills. All three series
/// report 0 until enough history exists.
pub fn calculate_adx(candles: &[Candle], period: usize) -> AdxSeries {
    let n = candles.len();
    let mut adx = vec![0.0; n];
    let mut plus_di = vec![0.0; n];
    let mut minus_di = vec![0.0; n];
    if period == 0 || n < period + 1 {
        return AdxSeries {
            adx,
            plus_di,
            minus_di,
        };
    }

    let p = period as f64;
    let mut smooth_tr = 0.0;
    let mut smooth_plus = 0.0;
    let mut smooth_minus = 0.0;
    let mut dx_sum = 0.0;
    let mut dx_count = 0usize;
    let mut adx_prev = 0.0;

    for i in 1..n {
        let tr = math::true_range(candles[i].high, candles[i].low, candles[i - 1].close);
        let up_move = candles[i].high - candles[i - 1].high;
        let down_move = candles[i - 1].low - candles[i].low;
        let plus_dm = if up_move > down_move && up_move > 0.0 {
            up_move
        } else {
            0.0
        };
        let minus_dm = if down_move > up_move && down_move > 0.0 {
            down_move
        } else {
            0.0
        };

        if i <= period {
            smooth_tr += tr;
            smooth_plus += plus_dm;
            smooth_minus += minus_dm;
            if i < period {
                continue;
            }
        } else {
            smooth_tr = smooth_tr - smooth_tr / p + tr;
            smooth_plus = smooth_plus - smooth_plus / p + plus_dm;
            smooth_minus = smooth_minus - smooth_minus / p + minus_dm;
        }

        let (pdi, mdi) = if smooth_tr > f64::EPSILON {
            (
                100.0 * smooth_plus / smooth_tr,
                100.0 * smooth_minus / smooth_tr,
            )
        } else {
            (0.0, 0.0)
        };
        plus_di[i] = pdi;
        minus_di[i] = mdi;

        let di_sum = pdi + mdi;
        let dx = if di_sum > f64::EPSILON {
            100.0 * (pdi - mdi).abs() / di_sum
        } else {
            0.0
        };

        if dx_count < period {
            dx_sum += dx;
            dx_count += 1;
            adx_prev = dx_sum / dx_count as f64;
        } else {
            adx_prev = (adx_prev * (p - 1.0) + dx) / p;
        }
        adx[i] = adx_prev;
    }

    AdxSeries {
        adx,
        plus_di,
        minus_di,
    }
}

/// Calculate ADX with default period (14).
pub fn calculate_adx_default(candles: &[Candle]) -> AdxSeries {
    calculate_adx(candles, 14)
}
