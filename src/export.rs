use chrono::{DateTime, Utc};
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook, XlsxError};

use crate::models::Submission;

pub const CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

const SHEET_NAME: &str = "Form Submissions";

const HEADERS: [&str; 12] = [
    "S.No",
    "Mobile No.",
    "Shop Name",
    "Owner Name",
    "Industry Name",
    "Pin Code",
    "Address",
    "City",
    "District",
    "State",
    "Country",
    "Submitted At",
];

const COLUMN_WIDTHS: [f64; 12] = [
    8.0, 15.0, 25.0, 20.0, 20.0, 12.0, 40.0, 15.0, 15.0, 15.0, 15.0, 22.0,
];

const HEADER_FILL: u32 = 0x4F46E5;

/// Attachment filename carrying the generation timestamp.
pub fn filename(now: DateTime<Utc>) -> String {
    format!("form_submissions_{}.xlsx", now.format("%Y%m%d_%H%M%S"))
}

/// Render the given records into a styled workbook: one header row, then one
/// data row per record in list order, sequence numbers assigned 1..N by
/// position. Zero records produce a header-only sheet.
pub fn render(submissions: &[Submission]) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    let header_format = Format::new()
        .set_bold()
        .set_font_size(11)
        .set_font_color(Color::White)
        .set_background_color(Color::RGB(HEADER_FILL))
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_text_wrap()
        .set_border(FormatBorder::Thin);

    let cell_format = Format::new()
        .set_align(FormatAlign::VerticalCenter)
        .set_border(FormatBorder::Thin);

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    for (i, sub) in submissions.iter().enumerate() {
        let row = (i + 1) as u32;
        worksheet.write_number_with_format(row, 0, (i + 1) as f64, &cell_format)?;
        worksheet.write_string_with_format(row, 1, &sub.mobile_no, &cell_format)?;
        worksheet.write_string_with_format(row, 2, &sub.shop_name, &cell_format)?;
        worksheet.write_string_with_format(row, 3, &sub.owner_name, &cell_format)?;
        worksheet.write_string_with_format(row, 4, &sub.ind_name, &cell_format)?;
        worksheet.write_string_with_format(row, 5, &sub.area_pin_code, &cell_format)?;
        worksheet.write_string_with_format(row, 6, &sub.address, &cell_format)?;
        worksheet.write_string_with_format(row, 7, &sub.city, &cell_format)?;
        worksheet.write_string_with_format(row, 8, &sub.dist, &cell_format)?;
        worksheet.write_string_with_format(row, 9, &sub.state, &cell_format)?;
        worksheet.write_string_with_format(row, 10, &sub.country, &cell_format)?;
        worksheet.write_string_with_format(row, 11, sub.created_at.to_rfc3339(), &cell_format)?;
    }

    for (col, width) in COLUMN_WIDTHS.iter().enumerate() {
        worksheet.set_column_width(col as u16, *width)?;
    }

    workbook.save_to_buffer()
}
