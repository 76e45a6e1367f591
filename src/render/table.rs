//! Generic fixed-width table engine.
//!
//! A [`Table`] is an ordered list of [`Column`] descriptors. Each column has
//! a title, a fixed character width, an alignment, and an extractor that
//! pulls the field text out of a record. The engine owns the shared layout
//! rules: fields padded to their column width, joined with `" | "`, the whole
//! line wrapped in one leading and one trailing space, and a header rule of
//! `=` characters exactly as long as the realized header line.
//!
//! Content wider than its column passes through unpadded and untruncated.
//! That is a deliberate display quirk of the format, not an error.

// ============================================================================
// Alignment
// ============================================================================

/// Horizontal alignment of a field within its column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    /// Pad on the right: names, free text, hex, addresses, statuses.
    Left,
    /// Pad on the left: ids, indices, counts, values, confirmations.
    Right,
}

/// Pad `text` to `width` characters. Wider content is returned as-is.
fn pad(text: &str, width: usize, align: Align) -> String {
    match align {
        Align::Left => format!("{text:<width$}"),
        Align::Right => format!("{text:>width$}"),
    }
}

// ============================================================================
// Column
// ============================================================================

/// One column of a table: title, fixed width, alignment, field extractor.
pub struct Column<R> {
    title: &'static str,
    width: usize,
    align: Align,
    extract: Box<dyn Fn(&R) -> String>,
}

impl<R> Column<R> {
    /// A left-aligned column.
    pub fn left(
        title: &'static str,
        width: usize,
        extract: impl Fn(&R) -> String + 'static,
    ) -> Self {
        Self {
            title,
            width,
            align: Align::Left,
            extract: Box::new(extract),
        }
    }

    /// A right-aligned column.
    pub fn right(
        title: &'static str,
        width: usize,
        extract: impl Fn(&R) -> String + 'static,
    ) -> Self {
        Self {
            title,
            width,
            align: Align::Right,
            extract: Box::new(extract),
        }
    }
}

// ============================================================================
// Table
// ============================================================================

/// A fixed-layout table for records of type `R`.
pub struct Table<R> {
    columns: Vec<Column<R>>,
}

impl<R> Table<R> {
    /// Build a table from its ordered column descriptors.
    #[must_use]
    pub fn new(columns: Vec<Column<R>>) -> Self {
        Self { columns }
    }

    /// Render one line from per-column field text.
    fn compose(&self, field: impl Fn(&Column<R>) -> String) -> String {
        let fields: Vec<String> = self
            .columns
            .iter()
            .map(|column| pad(&field(column), column.width, column.align))
            .collect();
        format!(" {} ", fields.join(" | "))
    }

    /// Render the header block: the title row followed by a rule of `=`
    /// characters sized to the realized title row.
    ///
    /// Call once per table, before any [`Table::row`] call.
    #[must_use]
    pub fn header(&self) -> String {
        let line = self.compose(|column| column.title.to_string());
        let rule = "=".repeat(line.len());
        format!("{line}\n{rule}")
    }

    /// Render one record as a row.
    #[must_use]
    pub fn row(&self, record: &R) -> String {
        self.compose(|column| (column.extract)(record))
    }
}

// ============================================================================
// Tests
// ============================================================================
