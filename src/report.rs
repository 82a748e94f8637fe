//! Textual report renderers over the result table.
//!
//! Everything here builds strings; printing is the caller's business. The
//! layouts follow the suite's console reports: a timing table, a volume
//! summary with a TOTAL row, an ascending ranking with proportional bars,
//! and the author chart.

use std::fmt::Write as _;

use crate::authors::AuthorCount;
use crate::constants::report::{AUTHOR_BAR_WIDTH, HIGHLIGHT_COUNT, RANKING_BAR_WIDTH};
use crate::results::BenchResults;

/// Render the per-(method, field) timing table in table order.
pub fn render_timings(results: &BenchResults) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<25} {:<15} {:<15}", "Method", "Field", "Time (s)");
    let _ = writeln!(out, "{}", "-".repeat(60));
    for (algorithm, field, run) in results.iter() {
        let _ = writeln!(
            out,
            "{:<25} {:<15} {:<15.6}",
            algorithm,
            field,
            run.duration.as_secs_f64()
        );
    }
    out
}

/// Render the items-processed summary, descending by count, with a TOTAL row.
pub fn render_volume(results: &BenchResults) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "=".repeat(70));
    let _ = writeln!(out, "ITEMS PROCESSED PER SORTING METHOD");
    let _ = writeln!(out, "{}", "=".repeat(70));
    let _ = writeln!(out, "{:<35} {:<20}", "Method", "Items");
    let _ = writeln!(out, "{}", "-".repeat(70));

    let mut counts: Vec<(&str, usize)> = results.item_counts().collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    for (algorithm, count) in counts {
        let _ = writeln!(out, "{algorithm:<35} {count:<20}");
    }

    let _ = writeln!(out, "{}", "-".repeat(70));
    let _ = writeln!(out, "{:<35} {:<20}", "TOTAL", results.total_items());
    let _ = writeln!(out, "{}", "=".repeat(70));
    out
}

/// Render the ascending ranking chart with proportional bars and headline
/// statistics.
pub fn render_ranking(results: &BenchResults) -> String {
    let ranking = results.ranking();
    let mut out = String::new();
    if ranking.is_empty() {
        let _ = writeln!(out, "no timed runs recorded");
        return out;
    }

    let _ = writeln!(out, "ALGORITHMS RANKED BY RECORDED TIME (ASCENDING)");
    let _ = writeln!(out, "{}", "=".repeat(80));
    let _ = writeln!(out, "{:<8} {:<45} {:<15} {:<20}", "Pos.", "Algorithm", "Time (s)", "Bar");
    let _ = writeln!(out, "{}", "-".repeat(80));

    let max_seconds = ranking
        .last()
        .map(|entry| entry.duration.as_secs_f64())
        .unwrap_or(0.0);
    for (position, entry) in ranking.iter().enumerate() {
        let seconds = entry.duration.as_secs_f64();
        let filled = if max_seconds > 0.0 {
            (((seconds / max_seconds) * RANKING_BAR_WIDTH as f64) as usize).min(RANKING_BAR_WIDTH)
        } else {
            0
        };
        let bar = "\u{2588}".repeat(filled) + &"\u{2591}".repeat(RANKING_BAR_WIDTH - filled);
        let _ = writeln!(
            out,
            "{:<8} {:<45} {:<15.6} {}",
            position + 1,
            entry.label(),
            seconds,
            bar
        );
    }

    if let Some(summary) = results.summary() {
        let _ = writeln!(out);
        let _ = writeln!(out, "PERFORMANCE STATISTICS");
        let _ = writeln!(out, "  fastest: {:.6} s", summary.fastest.as_secs_f64());
        let _ = writeln!(out, "  slowest: {:.6} s", summary.slowest.as_secs_f64());
        let _ = writeln!(out, "  mean:    {:.6} s", summary.mean_seconds);
        let _ = writeln!(out, "  span:    {:.6} s", summary.span.as_secs_f64());
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "TOP {HIGHLIGHT_COUNT} FASTEST");
    for (i, entry) in ranking.iter().take(HIGHLIGHT_COUNT).enumerate() {
        let _ = writeln!(
            out,
            "  {}. {}: {:.6} s",
            i + 1,
            entry.label(),
            entry.duration.as_secs_f64()
        );
    }
    let _ = writeln!(out, "TOP {HIGHLIGHT_COUNT} SLOWEST");
    for (i, entry) in ranking.iter().rev().take(HIGHLIGHT_COUNT).enumerate() {
        let _ = writeln!(
            out,
            "  {}. {}: {:.6} s",
            i + 1,
            entry.label(),
            entry.duration.as_secs_f64()
        );
    }
    out
}

/// Render the top-author table with proportional bars.
pub fn render_author_chart(top: &[AuthorCount]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "=".repeat(70));
    let _ = writeln!(out, "TOP {} AUTHORS BY APPEARANCES (ASCENDING)", top.len());
    let _ = writeln!(out, "{}", "=".repeat(70));
    if top.is_empty() {
        let _ = writeln!(out, "no authors found");
        return out;
    }
    let _ = writeln!(out, "{:<6} {:<45} {:<12}", "Pos.", "Author", "Count");
    let _ = writeln!(out, "{}", "-".repeat(70));

    let max_count = top.iter().map(|entry| entry.appearances).max().unwrap_or(0);
    for (i, entry) in top.iter().enumerate() {
        let filled = if max_count > 0 {
            (entry.appearances * AUTHOR_BAR_WIDTH) / max_count
        } else {
            0
        };
        let _ = writeln!(
            out,
            "{:<6} {:<45} {:<12} {}",
            i + 1,
            entry.name,
            entry.appearances,
            "\u{2588}".repeat(filled)
        );
    }

    let total: usize = top.iter().map(|entry| entry.appearances).sum();
    let _ = writeln!(out, "{}", "-".repeat(70));
    let _ = writeln!(out, "{:<52} {:<12}", "TOTAL LISTED", total);
    let _ = writeln!(out, "{}", "=".repeat(70));
    out
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn sample_results() -> BenchResults {
        let mut results = BenchResults::default();
        results.record("Comb Sort", "title", Duration::from_micros(30), 12);
        results.record("HeapSort", "title", Duration::from_micros(10), 12);
        results
    }

    #[test]
    fn timing_table_lists_every_cell() {
        let rendered = render_timings(&sample_results());
        assert!(rendered.contains("Method"));
        assert!(rendered.contains("Comb Sort"));
        assert!(rendered.contains("title"));
        assert!(rendered.contains("0.000030"));
    }

    #[test]
    fn volume_summary_sorts_descending_and_totals() {
        let mut results = sample_results();
        results.record("HeapSort", "author", Duration::from_micros(5), 7);
        let rendered = render_volume(&results);

        let heap_at = rendered.find("HeapSort").expect("heap row");
        let comb_at = rendered.find("Comb Sort").expect("comb row");
        assert!(heap_at < comb_at, "larger count must render first");
        assert!(rendered.contains("TOTAL"));
        assert!(rendered.contains("31"));
    }

    #[test]
    fn volume_summary_renders_registered_methods_at_zero() {
        let mut results = sample_results();
        results.register("Gnome Sort");
        let rendered = render_volume(&results);

        let zero_row = rendered
            .lines()
            .find(|line| line.starts_with("Gnome Sort"))
            .expect("zero-count row");
        assert!(zero_row.contains('0'));
        let comb_at = rendered.find("Comb Sort").expect("comb row");
        let gnome_at = rendered.find("Gnome Sort").expect("gnome row");
        assert!(comb_at < gnome_at, "zero counts must sort last");
    }

    #[test]
    fn ranking_orders_ascending_with_full_bar_last() {
        let rendered = render_ranking(&sample_results());
        let heap_at = rendered.find("HeapSort (title)").expect("fastest row");
        let comb_at = rendered.find("Comb Sort (title)").expect("slowest row");
        assert!(heap_at < comb_at);
        assert!(rendered.contains(&"\u{2588}".repeat(15)));
        assert!(rendered.contains("PERFORMANCE STATISTICS"));
        assert!(rendered.contains("TOP 3 FASTEST"));
    }

    #[test]
    fn empty_ranking_renders_a_note() {
        let rendered = render_ranking(&BenchResults::default());
        assert!(rendered.contains("no timed runs recorded"));
    }

    #[test]
    fn author_chart_scales_bars_to_the_maximum() {
        let top = vec![
            AuthorCount { name: "ada lovelace".to_string(), appearances: 1 },
            AuthorCount { name: "alan turing".to_string(), appearances: 3 },
        ];
        let rendered = render_author_chart(&top);
        assert!(rendered.contains("TOP 2 AUTHORS"));
        assert!(rendered.contains(&"\u{2588}".repeat(30)));
        assert!(rendered.contains("TOTAL LISTED"));
        assert!(rendered.contains('4'));
    }
}
