//! Colors, number formats, and reusable cell formats for the workbook.

use crate::types::ValueKind;
use rust_xlsxwriter::{Format, FormatAlign, FormatBorder};

/// Dark blue header fill
pub const HEADER_FILL: u32 = 0x1F4E79;
/// Header text
pub const HEADER_FONT: u32 = 0xFFFFFF;
/// Light red fill for rows above the CPC threshold
pub const HIGH_CPC_FILL: u32 = 0xFFC7CE;
/// Summary sheet header fill
pub const SUMMARY_HEADER_FILL: u32 = 0x2E75B6;
/// Summary value cells
pub const SUMMARY_VALUE_FILL: u32 = 0xD6DCE4;
/// Emphasized summary values and the summary title
pub const ACCENT_FONT: u32 = 0x1F4E79;
/// Generation timestamp caption
pub const CAPTION_FONT: u32 = 0x666666;

/// ZAR currency, thousands separator, two decimals
pub const CURRENCY_FORMAT: &str = "\"R\" #,##0.00";
/// CTR values are already percentages, so only the sign is appended
pub const PERCENTAGE_FORMAT: &str = "0.00\"%\"";

/// Upper bound for auto-sized detail columns, in characters
pub const MAX_COLUMN_WIDTH: usize = 50;

/// Bold white text on dark blue, centered
pub fn header_format() -> Format {
    Format::new()
        .set_bold()
        .set_font_color(HEADER_FONT)
        .set_background_color(HEADER_FILL)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
}

/// Cell formats for one row style, one per value kind
#[derive(Clone)]
pub struct KindFormats {
    text: Format,
    currency: Format,
    count: Format,
    percent: Format,
}

impl KindFormats {
    /// Formats with an optional solid fill applied to every kind
    pub fn new(fill: Option<u32>) -> Self {
        let base = || match fill {
            Some(color) => Format::new().set_background_color(color),
            None => Format::new(),
        };

        Self {
            text: base(),
            currency: base().set_num_format(CURRENCY_FORMAT),
            count: base(),
            percent: base().set_num_format(PERCENTAGE_FORMAT),
        }
    }

    pub fn get(&self, kind: ValueKind) -> &Format {
        match kind {
            ValueKind::Text => &self.text,
            ValueKind::Currency => &self.currency,
            ValueKind::Count => &self.count,
            ValueKind::Percent => &self.percent,
        }
    }
}

/// Formats used on the summary sheet
pub struct SummaryFormats {
    pub title: Format,
    pub caption: Format,
    pub header: Format,
    pub label: Format,
    pub value: Format,
    pub emphasized_value: Format,
}

impl SummaryFormats {
    pub fn new() -> Self {
        let value = Format::new()
            .set_background_color(SUMMARY_VALUE_FILL)
            .set_align(FormatAlign::Right)
            .set_align(FormatAlign::VerticalCenter)
            .set_border(FormatBorder::Thin);

        Self {
            title: Format::new()
                .set_bold()
                .set_font_size(16)
                .set_font_color(ACCENT_FONT)
                .set_align(FormatAlign::Center)
                .set_align(FormatAlign::VerticalCenter),
            caption: Format::new().set_italic().set_font_size(10).set_font_color(CAPTION_FONT).set_align(FormatAlign::Center),
            header: Format::new()
                .set_bold()
                .set_font_color(HEADER_FONT)
                .set_background_color(SUMMARY_HEADER_FILL)
                .set_align(FormatAlign::Center)
                .set_align(FormatAlign::VerticalCenter)
                .set_border(FormatBorder::Thin),
            label: Format::new()
                .set_bold()
                .set_align(FormatAlign::Left)
                .set_align(FormatAlign::VerticalCenter)
                .set_border(FormatBorder::Thin),
            emphasized_value: value.clone().set_bold().set_font_color(ACCENT_FONT),
            value,
        }
    }
}

impl Default for SummaryFormats {
    fn default() -> Self {
        Self::new()
    }
}
