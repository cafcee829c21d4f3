//! Deterministic text rendering of portfolio allocations.

use std::collections::BTreeMap;
use std::fmt::Write;

use crate::domain::Ticker;
use crate::portfolio::Portfolio;
use crate::stats::SeriesStats;

/// Render ticker → weight as a plain-text table, descending by weight
/// with alphabetical tie-breaks. Per-stock mean/std columns appear when
/// `stats` is supplied.
pub fn render_report(portfolio: &Portfolio, stats: Option<&BTreeMap<Ticker, SeriesStats>>) -> String {
    if !portfolio.is_allocated() {
        return String::from("portfolio (unallocated)\n");
    }

    let mut rows: Vec<(&Ticker, f64)> = portfolio
        .weights()
        .iter()
        .map(|(ticker, &weight)| (ticker, weight))
        .collect();
    rows.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.cmp(b.0))
    });

    let mut out = String::new();
    if stats.is_some() {
        out.push_str("ticker    weight      mean       std\n");
    } else {
        out.push_str("ticker    weight\n");
    }

    for (ticker, weight) in rows {
        match stats.and_then(|map| map.get(ticker)) {
            Some(series_stats) => {
                let _ = writeln!(
                    out,
                    "{:<8}  {:>6.2}%  {:>+8.4}  {:>8.4}",
                    ticker.as_str(),
                    weight * 100.0,
                    series_stats.mean,
                    series_stats.std,
                );
            }
            None => {
                let _ = writeln!(out, "{:<8}  {:>6.2}%", ticker.as_str(), weight * 100.0);
            }
        }
    }

    out
}
