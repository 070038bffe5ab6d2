//! Simple CLI output implementation
//!
//! Plain-text rendering of dashboard sections for one-shot commands.

use anyhow::Result;
use colored::{ColoredString, Colorize};

use crate::cli::Cli;
use crate::config::Config;
use crate::market_data::{IndexQuote, MarketIndex, MarketStatus, StockDelta};
use crate::provider::ProviderError;
use crate::sections::{SectionContent, SectionView, VIX_UNAVAILABLE};
use crate::ui::theme::change_arrow;

/// Display the welcome banner
pub fn display_welcome_page() {
    println!();
    println!("┌─ Bazaar ────────────────────────────────────────────────────────────┐");
    println!("│                                                                     │");
    println!("│   🏛️  Indian Stock Market Dashboard                                  │");
    println!("│                                                                     │");
    println!("│   Index tickers, top gainers & losers, market sentiment and         │");
    println!("│   sectoral performance, refreshed every minute.                     │");
    println!("│                                                                     │");
    println!("│   Keys: [r] refresh  [i] index  [t] period  [j/k] scroll  [q] quit  │");
    println!("│                                                                     │");
    println!("└─────────────────────────────────────────────────────────────────────┘");
    println!();
}

/// Print the effective configuration for `--dry-run`
pub fn print_dry_run_summary(cli: &Cli, config: &Config) -> Result<()> {
    println!("Dry-run mode configuration:");
    println!("Config file: {}", cli.config_file);
    println!("Log level: {}", cli.effective_log_level());
    println!("Provider: {}", config.provider.base_url);
    println!(
        "Refresh: every {}s, {}ms between sections",
        config.refresh.interval_secs, config.refresh.section_pacing_ms
    );
    println!(
        "Movers: {} / {} (top {}, max {} symbols)",
        config.market.default_universe,
        config.market.default_period,
        config.market.gainers_limit,
        config.market.max_universe_symbols
    );
    println!(
        "UI: colors {}, scaling {:.2}",
        if config.ui.enable_colors {
            "enabled"
        } else {
            "disabled"
        },
        config.ui.scaling
    );
    println!("Log file: {}", config.log.file_path);
    Ok(())
}

/// Colored change figure with arrow and absolute value
pub fn format_change(change_pct: f64) -> ColoredString {
    let text = format!("{} {:.2}%", change_arrow(change_pct), change_pct.abs());
    if change_pct >= 0.0 {
        text.green()
    } else {
        text.red()
    }
}

fn print_quote(quote: &IndexQuote) {
    println!(
        "   {:<10} {:>12.2}  {}  (O {:.2} H {:.2} L {:.2})",
        quote.name.bold(),
        quote.price,
        format_change(quote.change_pct),
        quote.open,
        quote.high,
        quote.low
    );
}

fn print_stock_list(title: &str, stocks: &[StockDelta]) {
    println!("   {}", title.bold());
    for (i, stock) in stocks.iter().enumerate() {
        println!(
            "   {:>2}. {:<14} ₹{:>10.2}  {}",
            i + 1,
            stock.symbol,
            stock.price,
            format_change(stock.change_pct)
        );
    }
}

fn print_failure<T>(view: &SectionView<T>) {
    match view {
        SectionView::Failed(message) => println!("   {} {}", "❌".red(), message.red()),
        SectionView::Loading => println!("   ⏳ Loading..."),
        SectionView::Ready(_) => {}
    }
}

/// Print one refresh cycle
pub fn print_snapshot(contents: &[SectionContent], enable_colors: bool) {
    if !enable_colors {
        colored::control::set_override(false);
    }

    println!("{}", "🏛️  Bazaar - Indian Stock Market Dashboard".bold().blue());

    for content in contents {
        println!();
        println!("{}", content.kind().title().bold());

        match content {
            SectionContent::Ticker(SectionView::Ready(summary)) => {
                let status = match summary.status {
                    MarketStatus::Open => summary.status.label().green(),
                    MarketStatus::Closed => summary.status.label().red(),
                };
                println!("   Market Status: {}", status.bold());
                for quote in &summary.quotes {
                    print_quote(quote);
                }
            }
            SectionContent::GainersLosers {
                filter,
                view: SectionView::Ready(movers),
            } => {
                println!("   {} / {}", filter.universe, filter.period);
                print_stock_list("🟢 Top Gainers", &movers.gainers);
                print_stock_list("🔴 Top Losers", &movers.losers);
            }
            SectionContent::Sentiment(SectionView::Ready(data)) => {
                match &data.vix {
                    Some(vix) => println!(
                        "   India VIX: {:.2}  {}",
                        vix.price,
                        format_change(vix.change_pct)
                    ),
                    None => println!("   India VIX: {}", VIX_UNAVAILABLE.dimmed()),
                }
                println!(
                    "   Greed Meter: {:.1} / 100  {}",
                    data.score.score,
                    data.score.band.label().bold()
                );
            }
            SectionContent::Sectoral(SectionView::Ready(sectors)) => {
                for sector in sectors {
                    println!(
                        "   {:<10} {}",
                        sector.sector,
                        format_change(sector.change_pct)
                    );
                }
            }
            SectionContent::Ticker(view) => print_failure(view),
            SectionContent::GainersLosers { view, .. } => print_failure(view),
            SectionContent::Sentiment(view) => print_failure(view),
            SectionContent::Sectoral(view) => print_failure(view),
        }
    }
    println!();
}

/// Report the outcome of a provider connectivity check
pub fn print_check_result(base_url: &str, index: MarketIndex, result: Result<usize, &ProviderError>) {
    match result {
        Ok(candles) => println!(
            "{} {} reachable: {} returned {} daily candles",
            "✓".green(),
            base_url,
            index,
            candles
        ),
        Err(e) => println!("{} {} unreachable: {}", "✗".red(), base_url, e),
    }
}
