//! Per-shape condition dispatch and rule-set evaluation.
//!
//! Each condition is stateless: the outcome is a function of the condition
//! and the current value bag alone. The dispatch switches on the catalog's
//! settings shape; features missing from the catalog fall back to a
//! permissive default (boolean truthy or finite number matches) so new
//! detectors never hard-fail a rule-set.

use crate::catalog::{self, SettingsShape};
use crate::indicators::{detect_crossover, CrossSignal};
use crate::models::{
    Candle, ConditionMode, ConditionOutcome, CrossType, EvaluationResult, PricePosition,
    ScanCondition,
};

use super::ValueBag;

fn cross_matches(signal: CrossSignal, want: CrossType) -> bool {
    matches!(
        (signal, want),
        (CrossSignal::Bullish, CrossType::Crossover)
            | (CrossSignal::Bearish, CrossType::Crossunder)
    )
}

fn cross_word(want: CrossType) -> &'static str {
    match want {
        CrossType::Crossover => "above",
        CrossType::Crossunder => "below",
    }
}

/// Evaluate one condition against the bag.
pub fn evaluate_condition(condition: &ScanCondition, bag: &ValueBag) -> ConditionOutcome {
    match catalog::find(&condition.feature).map(|f| f.shape) {
        Some(SettingsShape::Rsi) => eval_rsi(condition, bag),
        Some(SettingsShape::Ema) => eval_ema(condition, bag),
        Some(SettingsShape::Macd) => eval_macd(condition, bag),
        Some(SettingsShape::Bollinger) => eval_bollinger(condition, bag),
        Some(SettingsShape::Stochastic) => eval_stochastic(condition, bag),
        Some(SettingsShape::Oscillator) => eval_oscillator(condition, bag),
        Some(SettingsShape::PriceCross) => eval_price_cross(condition, bag),
        Some(SettingsShape::Pattern) => eval_flag(condition, bag, true),
        Some(SettingsShape::Smc) => eval_flag(condition, bag, false),
        None => eval_default(condition, bag),
    }
}

/// Evaluate a rule-set: every enabled condition must independently match
/// and at least one reason must have been produced. An empty enabled set
/// never matches.
pub fn evaluate_conditions(
    conditions: &[ScanCondition],
    bag: &ValueBag,
    candles: &[Candle],
) -> EvaluationResult {
    let enabled: Vec<&ScanCondition> = conditions.iter().filter(|c| c.enabled).collect();
    if enabled.is_empty() || candles.is_empty() {
        return EvaluationResult::no_match();
    }

    let mut all_matched = true;
    let mut reasons = Vec::new();
    for condition in enabled {
        let outcome = evaluate_condition(condition, bag);
        if outcome.matched {
            if !outcome.reason.is_empty() {
                reasons.push(outcome.reason);
            }
        } else {
            all_matched = false;
        }
    }

    EvaluationResult {
        matched: all_matched && !reasons.is_empty(),
        reasons,
    }
}

/// Range/comparison checks shared by the numeric shapes. Returns `false`
/// on a failed check; pushes a reason part on success. Missing optional
/// fields simply skip their check.
fn numeric_checks(
    condition: &ScanCondition,
    label: &str,
    value: f64,
    parts: &mut Vec<String>,
) -> bool {
    match condition.mode {
        ConditionMode::Range => {
            let (min, max) = (condition.min_value, condition.max_value);
            if min.is_none() && max.is_none() {
                return true;
            }
            if min.is_some_and(|m| value < m) || max.is_some_and(|m| value > m) {
                return false;
            }
            parts.push(match (min, max) {
                (Some(lo), Some(hi)) => format!("{label} {value:.2} within {lo}-{hi}"),
                (Some(lo), None) => format!("{label} {value:.2} >= {lo}"),
                (None, Some(hi)) => format!("{label} {value:.2} <= {hi}"),
                (None, None) => unreachable!(),
            });
            true
        }
        ConditionMode::Comparison => {
            let (Some(op), Some(target)) = (condition.operator, condition.compare_value) else {
                return true;
            };
            if !op.apply(value, target) {
                return false;
            }
            parts.push(format!("{label} {value:.2} {} {target}", op.symbol()));
            true
        }
        _ => true,
    }
}

fn outcome(ok: bool, parts: Vec<String>, fallback: impl FnOnce() -> String) -> ConditionOutcome {
    if !ok {
        return ConditionOutcome::unmatched();
    }
    if parts.is_empty() {
        ConditionOutcome::matched(fallback())
    } else {
        ConditionOutcome::matched(parts.join("; "))
    }
}

fn eval_rsi(condition: &ScanCondition, bag: &ValueBag) -> ConditionOutcome {
    let Some(value) = bag.number("rsi") else {
        return ConditionOutcome::unmatched();
    };
    let mut parts = Vec::new();
    let mut ok = numeric_checks(condition, "RSI", value, &mut parts);

    if condition.rsi_regular_divergence == Some(true) {
        if bag.flag("rsi_regular_bullish_divergence") == Some(true) {
            parts.push("RSI regular bullish divergence".to_string());
        } else if bag.flag("rsi_regular_bearish_divergence") == Some(true) {
            parts.push("RSI regular bearish divergence".to_string());
        } else {
            ok = false;
        }
    }
    if condition.rsi_hidden_divergence == Some(true) {
        if bag.flag("rsi_hidden_bullish_divergence") == Some(true) {
            parts.push("RSI hidden bullish divergence".to_string());
        } else if bag.flag("rsi_hidden_bearish_divergence") == Some(true) {
            parts.push("RSI hidden bearish divergence".to_string());
        } else {
            ok = false;
        }
    }

    outcome(ok, parts, || format!("RSI at {value:.2}"))
}

fn eval_ema(condition: &ScanCondition, bag: &ValueBag) -> ConditionOutcome {
    let Some(price) = bag.number("price") else {
        return ConditionOutcome::unmatched();
    };
    let mut parts = Vec::new();
    let mut ok = true;

    // Up to four independent period/position checks, all required.
    let mut configs: Vec<(u32, PricePosition)> = condition
        .ema_configs
        .iter()
        .take(4)
        .map(|c| (c.period, c.price_position))
        .collect();
    if configs.is_empty() {
        if let Some(period) = condition.period {
            configs.push((period, condition.price_position.unwrap_or_default()));
        }
    }
    for (period, position) in configs {
        let Some(ema) = bag.number(&format!("ema_{period}")) else {
            ok = false;
            continue;
        };
        match position {
            PricePosition::Any => {}
            PricePosition::Above => {
                if price > ema {
                    parts.push(format!("Price above EMA({period})"));
                } else {
                    ok = false;
                }
            }
            PricePosition::Below => {
                if price < ema {
                    parts.push(format!("Price below EMA({period})"));
                } else {
                    ok = false;
                }
            }
        }
    }

    if condition.ema_crossover == Some(true) {
        let fast = condition.ema_crossover_fast.unwrap_or(20);
        let slow = condition.ema_crossover_slow.unwrap_or(50);
        let want = condition.cross_type.unwrap_or(CrossType::Crossover);
        let crossed = match (
            bag.series(&format!("ema_{fast}")),
            bag.series(&format!("ema_{slow}")),
        ) {
            (Some(fast_series), Some(slow_series)) => {
                cross_matches(detect_crossover(fast_series, slow_series), want)
            }
            _ => false,
        };
        if crossed {
            parts.push(format!(
                "EMA({fast}) crossed {} EMA({slow})",
                cross_word(want)
            ));
        } else {
            ok = false;
        }
    }

    outcome(ok, parts, || format!("Price at {price:.2} vs EMA stack"))
}

fn eval_macd(condition: &ScanCondition, bag: &ValueBag) -> ConditionOutcome {
    let Some(histogram) = bag.number("macd_histogram") else {
        return ConditionOutcome::unmatched();
    };
    let mut parts = Vec::new();
    let mut ok = numeric_checks(condition, "MACD histogram", histogram, &mut parts);

    if condition.mode == ConditionMode::Cross {
        let want = condition.cross_type.unwrap_or(CrossType::Crossover);
        let crossed = match (bag.series("macd_line"), bag.series("macd_signal")) {
            (Some(line), Some(signal)) => cross_matches(detect_crossover(line, signal), want),
            _ => false,
        };
        if crossed {
            parts.push(format!("MACD line crossed {} signal line", cross_word(want)));
        } else {
            ok = false;
        }
    }

    outcome(ok, parts, || format!("MACD histogram at {histogram:.4}"))
}

fn eval_bollinger(condition: &ScanCondition, bag: &ValueBag) -> ConditionOutcome {
    let (Some(price), Some(upper), Some(lower)) = (
        bag.number("price"),
        bag.number("bb_upper"),
        bag.number("bb_lower"),
    ) else {
        return ConditionOutcome::unmatched();
    };
    let mut parts = Vec::new();
    let mut ok = true;

    if let Some(bandwidth) = bag.number("bb_bandwidth") {
        ok &= numeric_checks(condition, "Bollinger bandwidth", bandwidth, &mut parts);
    }

    match condition.price_position {
        Some(PricePosition::Above) => {
            if price > upper {
                parts.push("Price above upper Bollinger band".to_string());
            } else {
                ok = false;
            }
        }
        Some(PricePosition::Below) => {
            if price < lower {
                parts.push("Price below lower Bollinger band".to_string());
            } else {
                ok = false;
            }
        }
        _ => {}
    }

    if condition.mode == ConditionMode::Cross {
        let want = condition.cross_type.unwrap_or(CrossType::Crossover);
        let crossed = match want {
            CrossType::Crossover => match (bag.series("price"), bag.series("bb_upper")) {
                (Some(price_series), Some(band)) => {
                    detect_crossover(price_series, band) == CrossSignal::Bullish
                }
                _ => false,
            },
            CrossType::Crossunder => match (bag.series("price"), bag.series("bb_lower")) {
                (Some(price_series), Some(band)) => {
                    detect_crossover(price_series, band) == CrossSignal::Bearish
                }
                _ => false,
            },
        };
        if crossed {
            let band = match want {
                CrossType::Crossover => "upper",
                CrossType::Crossunder => "lower",
            };
            parts.push(format!(
                "Price crossed {} {band} Bollinger band",
                cross_word(want)
            ));
        } else {
            ok = false;
        }
    }

    outcome(ok, parts, || format!("Price at {price:.2} within bands"))
}

fn eval_stochastic(condition: &ScanCondition, bag: &ValueBag) -> ConditionOutcome {
    let Some(k) = bag.number("stoch_k") else {
        return ConditionOutcome::unmatched();
    };
    let mut parts = Vec::new();
    let mut ok = numeric_checks(condition, "Stochastic %K", k, &mut parts);

    match (condition.stoch_oversold, condition.stoch_overbought) {
        (Some(oversold), Some(overbought)) => {
            // Levels are exclusive zones, so either hit satisfies the rule.
            if k <= oversold {
                parts.push(format!("Stochastic %K {k:.2} oversold (<= {oversold})"));
            } else if k >= overbought {
                parts.push(format!("Stochastic %K {k:.2} overbought (>= {overbought})"));
            } else {
                ok = false;
            }
        }
        (Some(oversold), None) => {
            if k <= oversold {
                parts.push(format!("Stochastic %K {k:.2} oversold (<= {oversold})"));
            } else {
                ok = false;
            }
        }
        (None, Some(overbought)) => {
            if k >= overbought {
                parts.push(format!("Stochastic %K {k:.2} overbought (>= {overbought})"));
            } else {
                ok = false;
            }
        }
        (None, None) => {}
    }

    if condition.mode == ConditionMode::Cross {
        let want = condition.cross_type.unwrap_or(CrossType::Crossover);
        let crossed = match (bag.series("stoch_k"), bag.series("stoch_d")) {
            (Some(k_series), Some(d_series)) => {
                cross_matches(detect_crossover(k_series, d_series), want)
            }
            _ => false,
        };
        if crossed {
            parts.push(format!("Stochastic %K crossed {} %D", cross_word(want)));
        } else {
            ok = false;
        }
    }

    outcome(ok, parts, || format!("Stochastic %K at {k:.2}"))
}

fn eval_oscillator(condition: &ScanCondition, bag: &ValueBag) -> ConditionOutcome {
    let Some(value) = bag.number(&condition.feature) else {
        return ConditionOutcome::unmatched();
    };
    let label = catalog::display_name(&condition.feature).to_string();
    let mut parts = Vec::new();
    let ok = numeric_checks(condition, &label, value, &mut parts);
    outcome(ok, parts, || format!("{label} at {value:.2}"))
}

fn eval_price_cross(condition: &ScanCondition, bag: &ValueBag) -> ConditionOutcome {
    let key = if condition.feature == "sma" {
        "sma_20"
    } else {
        condition.feature.as_str()
    };
    let (Some(price), Some(value)) = (bag.number("price"), bag.number(key)) else {
        return ConditionOutcome::unmatched();
    };
    let label = catalog::display_name(&condition.feature).to_string();
    let mut parts = Vec::new();
    let mut ok = numeric_checks(condition, &label, value, &mut parts);

    match condition.price_position {
        Some(PricePosition::Above) => {
            if price > value {
                parts.push(format!("Price above {label}"));
            } else {
                ok = false;
            }
        }
        Some(PricePosition::Below) => {
            if price < value {
                parts.push(format!("Price below {label}"));
            } else {
                ok = false;
            }
        }
        _ => {}
    }

    if condition.mode == ConditionMode::Cross {
        let want = condition.cross_type.unwrap_or(CrossType::Crossover);
        let crossed = match (bag.series("price"), bag.series(key)) {
            (Some(price_series), Some(series)) => {
                cross_matches(detect_crossover(price_series, series), want)
            }
            _ => false,
        };
        if crossed {
            parts.push(format!("Price crossed {} {label}", cross_word(want)));
        } else {
            ok = false;
        }
    }

    outcome(ok, parts, || format!("{label} at {value:.2}"))
}

fn eval_flag(condition: &ScanCondition, bag: &ValueBag, is_pattern: bool) -> ConditionOutcome {
    match bag.flag(&condition.feature) {
        Some(true) => {
            let name = catalog::display_name(&condition.feature);
            if is_pattern {
                ConditionOutcome::matched(format!("{name} pattern"))
            } else {
                ConditionOutcome::matched(name.to_string())
            }
        }
        _ => ConditionOutcome::unmatched(),
    }
}

/// Permissive fallback for features absent from the catalog: a truthy
/// boolean or any finite number matches, with the value reported.
fn eval_default(condition: &ScanCondition, bag: &ValueBag) -> ConditionOutcome {
    if let Some(flag) = bag.flag(&condition.feature) {
        return if flag {
            ConditionOutcome::matched(format!("{} active", condition.feature))
        } else {
            ConditionOutcome::unmatched()
        };
    }
    if let Some(value) = bag.number(&condition.feature) {
        return ConditionOutcome::matched(format!("{} at {value:.2}", condition.feature));
    }
    ConditionOutcome::unmatched()
}
