//! Console formatting helpers

use crate::market::{parse_price, Event};
use crate::research::{Action, EventResearch};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// Width of separator rules
pub const RULE_WIDTH: usize = 80;

/// Horizontal rule made of `ch`
pub fn rule(ch: char) -> String {
    std::iter::repeat(ch).take(RULE_WIDTH).collect()
}

/// Round half away from zero to `dp` places
fn fixed(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Dollar amount abbreviated to K/M
pub fn format_volume(volume: Decimal) -> String {
    if volume >= dec!(1000000) {
        format!("${:.1}M", fixed(volume / dec!(1000000), 1))
    } else if volume >= dec!(1000) {
        format!("${:.1}K", fixed(volume / dec!(1000), 1))
    } else {
        format!("${:.0}", fixed(volume, 0))
    }
}

/// Probability or edge as a percentage with one decimal
pub fn format_pct(value: Decimal) -> String {
    format!("{:.1}%", fixed(value * dec!(100), 1))
}

/// Console marker for an action
pub fn action_icon(action: Action) -> &'static str {
    match action {
        Action::BuyYes => "🟢",
        Action::BuyNo => "🔴",
        Action::Sell => "📤",
        Action::Hold => "⏸️",
        Action::Skip => "⏭️",
    }
}

/// `Yes: 52.0% │ No: 48.0%`, with `?` for missing or unparseable prices
pub fn outcome_pairs(outcomes: &[String], prices: &[String]) -> String {
    outcomes
        .iter()
        .enumerate()
        .map(|(i, outcome)| {
            let price = prices
                .get(i)
                .and_then(|p| parse_price(p))
                .map(format_pct)
                .unwrap_or_else(|| "?".to_string());
            format!("{}: {}", outcome, price)
        })
        .collect::<Vec<_>>()
        .join(" │ ")
}

/// Per-event block for `fetch-events`
pub fn print_event(event: &Event, index: usize) {
    println!("\n{}", rule('─'));
    println!("#{} │ {}", index + 1, event.title);
    println!("   │ ID: {}", event.id);
    println!(
        "   │ Volume: {} │ Liquidity: {}",
        format_volume(event.volume_or_zero()),
        format_volume(event.liquidity_or_zero())
    );
    println!("   │ End: {}", event.end_date.as_deref().unwrap_or("N/A"));

    for market in &event.markets {
        let outcomes = market.outcomes.decode().unwrap_or_default();
        let prices = market.outcome_prices.decode().unwrap_or_default();

        println!("   ├─ {}", market.question);
        println!("   │  {}", outcome_pairs(&outcomes, &prices));
    }
}

/// Research result with its most interesting markets
pub fn print_research(research: &EventResearch) {
    println!(
        "{} [{}] {}",
        action_icon(research.action),
        research.action,
        research.title
    );
    println!(
        "   Risk: {} │ {}",
        research.risk_level, research.action_reasoning
    );

    let mut interesting: Vec<_> = research
        .markets
        .iter()
        .filter(|m| m.edge.abs() > dec!(0.01))
        .collect();
    interesting.sort_by(|a, b| b.edge.abs().cmp(&a.edge.abs()));

    for m in interesting.into_iter().take(3) {
        let direction = if m.edge > Decimal::ZERO { "▲" } else { "▼" };
        println!(
            "   {} {}: market {} │ est. {} │ edge {}",
            direction,
            m.question,
            format_pct(m.current_price.yes),
            format_pct(m.estimated_probability),
            format_pct(m.edge)
        );
    }
    println!();
}
