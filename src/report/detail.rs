//! "Campaign Details" sheet builder.
//!
//! One header row of presentational labels, then one row per campaign in
//! table order. Currency and rate columns get number formats, and rows whose
//! CPC exceeds the threshold are filled light red across every column.

use super::format::render_value;
use super::stats::exceeds_threshold;
use super::styles::{self, HIGH_CPC_FILL, KindFormats, MAX_COLUMN_WIDTH};
use crate::types::{CampaignField, FieldValue, MetricsTable};
use rust_xlsxwriter::{Format, Worksheet, XlsxError};
use std::collections::HashMap;

pub const DETAIL_SHEET_NAME: &str = "Campaign Details";

/// Whether a data row gets the highlight fill
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowStyle {
    Plain,
    HighCpc,
}

pub fn row_style(cpc: f64, threshold: f64) -> RowStyle {
    if exceeds_threshold(cpc, threshold) { RowStyle::HighCpc } else { RowStyle::Plain }
}

/// Row style of every data row, in table order
pub fn row_styles(table: &MetricsTable, threshold: f64) -> Vec<RowStyle> {
    table.rows().iter().map(|row| row_style(row.cpc, threshold)).collect()
}

/// Column position of each field on a sheet, built once per sheet
#[derive(Debug, Clone)]
pub struct ColumnMap {
    layout: Vec<CampaignField>,
    positions: HashMap<CampaignField, u16>,
}

impl ColumnMap {
    pub fn new(layout: &[CampaignField]) -> Self {
        let positions = layout.iter().enumerate().map(|(col, field)| (*field, col as u16)).collect();
        Self { layout: layout.to_vec(), positions }
    }

    pub fn column(&self, field: CampaignField) -> Option<u16> {
        self.positions.get(&field).copied()
    }

    /// Fields with their column index, left to right
    pub fn iter(&self) -> impl Iterator<Item = (u16, CampaignField)> + '_ {
        self.layout.iter().filter_map(|field| self.column(*field).map(|col| (col, *field)))
    }
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self::new(&CampaignField::REPORT)
    }
}

/// Width of each column: longest rendered value (header included) + 2, capped
pub fn column_widths(table: &MetricsTable, columns: &ColumnMap) -> Vec<(u16, usize)> {
    columns
        .iter()
        .map(|(col, field)| {
            let longest = table
                .rows()
                .iter()
                .map(|row| render_value(row.value(field), field.value_kind()).chars().count())
                .chain(std::iter::once(field.label().chars().count()))
                .max()
                .unwrap_or(0);
            (col, (longest + 2).min(MAX_COLUMN_WIDTH))
        })
        .collect()
}

struct DetailFormats {
    header: Format,
    plain: KindFormats,
    highlighted: KindFormats,
}

impl DetailFormats {
    fn new() -> Self {
        Self {
            header: styles::header_format(),
            plain: KindFormats::new(None),
            highlighted: KindFormats::new(Some(HIGH_CPC_FILL)),
        }
    }

    fn for_row(&self, style: RowStyle) -> &KindFormats {
        match style {
            RowStyle::Plain => &self.plain,
            RowStyle::HighCpc => &self.highlighted,
        }
    }
}

/// Build the detail worksheet.
///
/// # Arguments
/// * `table` - Campaign rows with metrics
/// * `threshold` - CPC above which a row is highlighted
pub fn build_detail_sheet(table: &MetricsTable, threshold: f64) -> Result<Worksheet, XlsxError> {
    let mut sheet = Worksheet::new();
    sheet.set_name(DETAIL_SHEET_NAME)?;

    let columns = ColumnMap::default();
    let formats = DetailFormats::new();

    for (col, field) in columns.iter() {
        sheet.write_string_with_format(0, col, field.label(), &formats.header)?;
    }

    let styles = row_styles(table, threshold);
    for (idx, (row, style)) in table.rows().iter().zip(styles).enumerate() {
        let row_num = idx as u32 + 1;
        let row_formats = formats.for_row(style);

        for (col, field) in columns.iter() {
            let format = row_formats.get(field.value_kind());
            match row.value(field) {
                FieldValue::Text(text) => sheet.write_string_with_format(row_num, col, text, format)?,
                FieldValue::Number(n) => sheet.write_number_with_format(row_num, col, n, format)?,
            };
        }
    }

    for (col, width) in column_widths(table, &columns) {
        sheet.set_column_width(col, width as f64)?;
    }

    Ok(sheet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::add_metrics;
    use crate::types::{CampaignRecord, CampaignTable};

    fn table(records: Vec<CampaignRecord>) -> MetricsTable {
        add_metrics(&CampaignTable::new(records))
    }

    #[test]
    fn test_row_style_boundary() {
        assert_eq!(row_style(20.0, 20.0), RowStyle::Plain);
        assert_eq!(row_style(20.01, 20.0), RowStyle::HighCpc);
        assert_eq!(row_style(0.0, 0.0), RowStyle::Plain);
    }

    #[test]
    fn test_row_styles_follow_table_order() {
        let rows = table(vec![
            CampaignRecord::new("Low CPC", 100.0, 10, 1000),  // 10.00
            CampaignRecord::new("High CPC", 500.0, 10, 1000), // 50.00
            CampaignRecord::new("Exact", 200.0, 10, 1000),    // 20.00
            CampaignRecord::new("Just Over", 200.1, 10, 1000), // 20.01
        ]);
        assert_eq!(
            row_styles(&rows, 20.0),
            vec![RowStyle::Plain, RowStyle::HighCpc, RowStyle::Plain, RowStyle::HighCpc]
        );
    }

    #[test]
    fn test_custom_threshold() {
        let rows = table(vec![CampaignRecord::new("A", 250.0, 10, 1000)]); // 25.00
        assert_eq!(row_styles(&rows, 20.0), vec![RowStyle::HighCpc]);
        assert_eq!(row_styles(&rows, 25.0), vec![RowStyle::Plain]);
        assert_eq!(row_styles(&rows, 30.0), vec![RowStyle::Plain]);
    }

    #[test]
    fn test_column_map_positions() {
        let columns = ColumnMap::default();
        assert_eq!(columns.column(CampaignField::CampaignName), Some(0));
        assert_eq!(columns.column(CampaignField::AmountSpent), Some(1));
        assert_eq!(columns.column(CampaignField::Ctr), Some(4));
        assert_eq!(columns.column(CampaignField::Cpc), Some(5));

        let partial = ColumnMap::new(&[CampaignField::Cpc, CampaignField::CampaignName]);
        assert_eq!(partial.column(CampaignField::Cpc), Some(0));
        assert_eq!(partial.column(CampaignField::Ctr), None);
    }

    #[test]
    fn test_column_widths_use_rendered_values() {
        let rows = table(vec![CampaignRecord::new("Summer Sale", 123456.0, 50, 2500)]);
        let widths: HashMap<u16, usize> = column_widths(&rows, &ColumnMap::default()).into_iter().collect();

        // "Campaign Name" (13) beats "Summer Sale" (11)
        assert_eq!(widths[&0], 15);
        // "R 123,456.00" (12) loses to "Amount Spent (ZAR)" (18)
        assert_eq!(widths[&1], 20);
    }

    #[test]
    fn test_column_widths_are_capped() {
        let long_name = "x".repeat(200);
        let rows = table(vec![CampaignRecord::new(long_name, 1.0, 1, 1)]);
        let widths = column_widths(&rows, &ColumnMap::default());
        assert_eq!(widths[0], (0, MAX_COLUMN_WIDTH));
    }

    #[test]
    fn test_build_detail_sheet() {
        let rows = table(vec![
            CampaignRecord::new("Summer Sale", 1000.0, 50, 2500),
            CampaignRecord::new("Expensive", 5000.0, 50, 2500),
        ]);
        assert!(build_detail_sheet(&rows, 20.0).is_ok());
        assert!(build_detail_sheet(&MetricsTable::default(), 20.0).is_ok());
    }
}
