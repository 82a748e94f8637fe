/// Name of a bibliographic field as it appears in a record.
/// Examples: `title`, `author`, `year`, `journal`
pub type FieldName = String;
/// Display name of a sorting algorithm as it appears in reports.
/// Examples: `Pigeonhole Sort`, `Binary Insertion Sort`
pub type AlgorithmName = String;
/// Field value as read from the source file, before extraction cleaning.
/// Examples: `A Survey of Sorting Networks`, `n.d.`
pub type RawValue = String;
/// Normalized author name used by the frequency analysis.
/// Examples: `d. e. knuth`, `k. e. batcher`
pub type AuthorName = String;
