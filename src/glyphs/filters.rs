use crate::ansi::strip_ansi;

/// The solid fill most block fonts are drawn with.
pub const FULL_BLOCK: char = '█';

/// What solid fill is swapped for when skipping lines: a block one eighth short, which leaves a
/// thin gap between consecutive rows.
pub const PARTIAL_BLOCK: char = '▇';

/// Drop any coloring already present in `block` and replace solid fill with [PARTIAL_BLOCK].
///
/// Border and box drawing characters are kept as they are.
pub fn skip_lines(block: &str) -> String {
    strip_ansi(block).replace(FULL_BLOCK, &PARTIAL_BLOCK.to_string())
}
