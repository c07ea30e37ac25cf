//! Column sizing for the members table.

use egui_extras::Column;
use roster_business::ColumnDescriptor;

pub const CHECKBOX_WIDTH: f32 = 32.0;
pub const HEADER_HEIGHT: f32 = 32.0;
const DEFAULT_WIDTH: f32 = 120.0;
const MIN_WIDTH: f32 = 60.0;

/// Starts at the descriptor's preferred width; the user can resize it.
#[inline]
pub fn column_spec(column: &ColumnDescriptor) -> Column {
    Column::initial(column.width.unwrap_or(DEFAULT_WIDTH))
        .at_least(MIN_WIDTH)
        .resizable(true)
        .clip(true)
}
