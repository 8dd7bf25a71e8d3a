//! Cell formats for ratings sheets, built once and shared

use crate::types::RatingColor;
use crate::workbook::CellStyle;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatUnderline};
use std::sync::LazyLock;

pub const LIGHT_RED: u32 = 0xFFCCCC;
pub const LIGHT_BLUE: u32 = 0xCCE5FF;
pub const RED: u32 = 0xFF0000;
pub const ORANGE: u32 = 0xFFA500;
pub const YELLOW: u32 = 0xFFFF00;
pub const GREEN: u32 = 0x00B050;

pub const HEADER_FONT_SIZE: f64 = 20.0;

static STYLES: LazyLock<SheetStyles> = LazyLock::new(SheetStyles::new);

/// Process-wide style table
pub fn styles() -> &'static SheetStyles {
    &STYLES
}

pub struct SheetStyles {
    header: Format,
    entry: Format,
    rating_plain: Format,
    rating_red: Format,
    rating_orange: Format,
    rating_yellow: Format,
    rating_green: Format,
    average: Format,
}

impl SheetStyles {
    fn new() -> Self {
        let bold_box = || {
            Format::new()
                .set_bold()
                .set_align(FormatAlign::Center)
                .set_border(FormatBorder::Thick)
        };
        let rating = |rgb: u32| bold_box().set_background_color(Color::RGB(rgb));

        Self {
            header: bold_box()
                .set_font_size(HEADER_FONT_SIZE)
                .set_underline(FormatUnderline::Single)
                .set_background_color(Color::RGB(LIGHT_RED)),
            entry: bold_box().set_background_color(Color::RGB(LIGHT_BLUE)),
            rating_plain: bold_box(),
            rating_red: rating(RED),
            rating_orange: rating(ORANGE),
            rating_yellow: rating(YELLOW),
            rating_green: rating(GREEN),
            average: Format::new()
                .set_bold()
                .set_align(FormatAlign::Center)
                .set_font_color(Color::White)
                .set_background_color(Color::Black),
        }
    }

    pub fn format_for(&self, style: CellStyle) -> &Format {
        match style {
            CellStyle::Header => &self.header,
            CellStyle::Entry => &self.entry,
            CellStyle::Rating(None) => &self.rating_plain,
            CellStyle::Rating(Some(color)) => self.rating(color),
            CellStyle::AverageLabel | CellStyle::AverageValue => &self.average,
        }
    }

    fn rating(&self, color: RatingColor) -> &Format {
        match color {
            RatingColor::Red => &self.rating_red,
            RatingColor::Orange => &self.rating_orange,
            RatingColor::Yellow => &self.rating_yellow,
            RatingColor::Green => &self.rating_green,
        }
    }
}
