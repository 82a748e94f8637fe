/// Canonical field names and benchmark field lists.
pub mod fields {
    /// Title field key.
    pub const TITLE: &str = "title";
    /// Author field key.
    pub const AUTHOR: &str = "author";
    /// Publication year field key.
    pub const YEAR: &str = "year";
    /// Journal field key.
    pub const JOURNAL: &str = "journal";

    /// Field benchmarked by the numeric-only catalogue.
    pub const NUMERIC_FIELD: &str = YEAR;
    /// Fields benchmarked by the general catalogue, in visit order.
    pub const GENERAL_FIELDS: [&str; 4] = [TITLE, AUTHOR, YEAR, JOURNAL];
    /// Digit count a cleaned year value must have to be accepted.
    pub const YEAR_DIGITS: usize = 4;
}

/// Constants used by the sorting algorithms.
pub mod sorts {
    /// Shrink factor applied to the comb sort gap on every pass.
    pub const COMB_SHRINK: f64 = 1.3;
    /// Digit base for radix sort's per-pass bucketing.
    pub const RADIX_BASE: u64 = 10;
    /// Largest value spread pigeonhole sort will allocate a counting array for.
    pub const PIGEONHOLE_SPAN_LIMIT: usize = 10_000_000;
}

/// Constants used by the textual report renderers.
pub mod report {
    /// Width of the proportional bar in the ranking chart.
    pub const RANKING_BAR_WIDTH: usize = 15;
    /// Width of the proportional bar in the author chart.
    pub const AUTHOR_BAR_WIDTH: usize = 30;
    /// Entries shown in the fastest/slowest highlight lists.
    pub const HIGHLIGHT_COUNT: usize = 3;
    /// Default number of authors in the frequency report.
    pub const DEFAULT_TOP_AUTHORS: usize = 15;
}
