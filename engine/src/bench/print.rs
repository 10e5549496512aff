//! Result Slice Printer
//!
//! Renders the middle-height slice of a culled grid as ASCII art: one row
//! per z layer, one column per x position, `.` for culled and `#` for
//! visible. A quick eyeball check that a cull pass produced a plausible
//! frustum silhouette instead of garbage.

use crate::cull::CullBits;
use crate::data::offset_3d;

/// Render the y = `size / 2` slice of logical-order result bits, one
/// string per z row. Each cell is two characters (`". "` culled, `"# "`
/// visible), so rows line up in any fixed-width font.
pub fn format_result_slice(bits: &CullBits, size: usize) -> Vec<String> {
    let y = size / 2;
    let mut rows = Vec::with_capacity(size);
    for z in 0..size {
        let mut row = String::with_capacity(size * 2);
        for x in 0..size {
            let index = offset_3d(x, y, z, size);
            row.push_str(if bits.get(index) { ". " } else { "# " });
        }
        rows.push(row);
    }
    rows
}

/// Print the middle slice rendered by [`format_result_slice`].
pub fn print_result_slice(bits: &CullBits, size: usize) {
    for row in format_result_slice(bits, size) {
        println!("{row}");
    }
}

// ============================================================================
// Tests
// ============================================================================
