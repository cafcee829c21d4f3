//! Behavior-driven tests for report rendering.

use std::collections::BTreeMap;

use stockfolio_tests::{
    compute_stats, mixed_portfolio, render_report, seeded_allocator, stock, Portfolio, Ticker,
};

fn portfolio_with_weights(weights: &[(&str, f64)]) -> Portfolio {
    let mut portfolio = Portfolio::new(
        weights
            .iter()
            .map(|(ticker, _)| stock(ticker, &[100.0, 102.0, 101.0]))
            .collect(),
    )
    .expect("portfolio should build");

    let map: BTreeMap<Ticker, f64> = weights
        .iter()
        .map(|(ticker, weight)| (Ticker::parse(ticker).expect("valid"), *weight))
        .collect();
    portfolio.set_weights(map).expect("weights should be accepted");
    portfolio
}

#[test]
fn rows_are_sorted_by_descending_weight() {
    let portfolio = portfolio_with_weights(&[("AAPL", 0.1), ("DE", 0.6), ("NVO", 0.3)]);
    let report = render_report(&portfolio, None);
    let order: Vec<&str> = report
        .lines()
        .skip(1)
        .map(|line| line.split_whitespace().next().expect("ticker column"))
        .collect();

    assert_eq!(order, vec!["DE", "NVO", "AAPL"]);
}

#[test]
fn equal_weights_fall_back_to_alphabetical_order() {
    let portfolio = portfolio_with_weights(&[("MSFT", 0.25), ("AAPL", 0.25), ("DE", 0.5)]);
    let report = render_report(&portfolio, None);
    let order: Vec<&str> = report
        .lines()
        .skip(1)
        .map(|line| line.split_whitespace().next().expect("ticker column"))
        .collect();

    assert_eq!(order, vec!["DE", "AAPL", "MSFT"]);
}

#[test]
fn report_shows_percent_weights() {
    let portfolio = portfolio_with_weights(&[("NVO", 0.75), ("DE", 0.25)]);
    let report = render_report(&portfolio, None);

    assert!(report.contains("75.00%"));
    assert!(report.contains("25.00%"));
}

#[test]
fn unallocated_portfolio_renders_placeholder() {
    let portfolio = Portfolio::new(vec![stock("NVO", &[100.0, 101.0])])
        .expect("portfolio should build");
    assert_eq!(render_report(&portfolio, None), "portfolio (unallocated)\n");
}

#[test]
fn stats_columns_appear_when_stats_are_supplied() {
    let portfolio = portfolio_with_weights(&[("NVO", 1.0)]);
    let ticker = Ticker::parse("NVO").expect("valid");
    let mut stats = BTreeMap::new();
    stats.insert(
        ticker.clone(),
        compute_stats(portfolio.series(&ticker).expect("series exists"))
            .expect("stats should compute"),
    );

    let report = render_report(&portfolio, Some(&stats));
    let header = report.lines().next().expect("header line");
    assert!(header.contains("mean"));
    assert!(header.contains("std"));
}

#[test]
fn allocated_portfolio_report_is_stable_for_a_seed() {
    let mut first = mixed_portfolio();
    let mut second = mixed_portfolio();
    seeded_allocator(150, 42).allocate(&mut first).expect("should succeed");
    seeded_allocator(150, 42).allocate(&mut second).expect("should succeed");

    assert_eq!(render_report(&first, None), render_report(&second, None));
}
