// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Export document assembly.
//!
//! The export is a single grid: a customer details block followed by the
//! order summary table. Rendering the grid as a binary spreadsheet is left to
//! an external tool; this crate renders it as CSV.

use csv::{Writer, WriterBuilder};
use galley_order_domain::{CustomerDetails, OrderLineItem, validate_line_item};

use crate::error::{ApiError, translate_domain_error};

/// Shown when the customer has not entered an email address.
pub const EMAIL_REQUIRED_MESSAGE: &str =
    "Please enter your email before downloading the Excel sheet.";

/// Shown when the summary has no lines to export.
pub const EMPTY_ORDER_MESSAGE: &str =
    "Order summary is empty. Please add at least one product before downloading.";

/// Header row of the order summary table.
pub const SUMMARY_HEADER: [&str; 6] = [
    "Category",
    "Bin Code",
    "Description",
    "Packaging",
    "Quantity",
    "Chef Comment",
];

/// A rendered export: file name plus a grid of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportDocument {
    /// The download file name, `Order_<orderNumber>.xlsx`.
    pub file_name: String,
    /// The grid rows. Rows may have different lengths.
    pub rows: Vec<Vec<String>>,
}

impl ExportDocument {
    /// Renders the grid as CSV.
    ///
    /// # Errors
    ///
    /// Returns an error if the CSV writer fails.
    pub fn to_csv(&self) -> Result<String, ApiError> {
        let mut writer: Writer<Vec<u8>> = WriterBuilder::new().flexible(true).from_writer(vec![]);

        for row in &self.rows {
            writer.write_record(row).map_err(|e| ApiError::Internal {
                message: format!("Failed to write export row: {e}"),
            })?;
        }

        let bytes: Vec<u8> = writer.into_inner().map_err(|e| ApiError::Internal {
            message: format!("Failed to finish export: {e}"),
        })?;
        String::from_utf8(bytes).map_err(|e| ApiError::Internal {
            message: format!("Export is not valid UTF-8: {e}"),
        })
    }

    /// Returns the CSV file name matching [`ExportDocument::file_name`].
    #[must_use]
    pub fn csv_file_name(&self) -> String {
        self.file_name
            .strip_suffix(".xlsx")
            .map_or_else(|| format!("{}.csv", self.file_name), |stem| format!("{stem}.csv"))
    }
}

/// An export ready to hand to the customer: the grid and its CSV rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedExport {
    /// The export grid.
    pub document: ExportDocument,
    /// The grid rendered as CSV.
    pub csv: String,
}

/// Checks that an order may be exported.
///
/// # Errors
///
/// Returns `ApiError::ValidationFailed` if the email is blank, no line has a
/// positive quantity, or a line breaks a field limit.
pub fn validate_export(customer: &CustomerDetails, lines: &[OrderLineItem]) -> Result<(), ApiError> {
    if customer.email.trim().is_empty() {
        return Err(ApiError::ValidationFailed {
            field: String::from("email"),
            message: String::from(EMAIL_REQUIRED_MESSAGE),
        });
    }

    if !lines.iter().any(|line| line.quantity > 0) {
        return Err(ApiError::ValidationFailed {
            field: String::from("items"),
            message: String::from(EMPTY_ORDER_MESSAGE),
        });
    }

    for line in lines {
        validate_line_item(line).map_err(translate_domain_error)?;
    }

    Ok(())
}

/// Builds the export grid for an order.
///
/// Only lines with a positive quantity are written.
#[must_use]
pub fn build_export_document(
    customer: &CustomerDetails,
    lines: &[OrderLineItem],
) -> ExportDocument {
    let order_number: String = customer.order_number.to_string();

    let mut rows: Vec<Vec<String>> = vec![
        cells(&["Customer Details"]),
        cells(&["Name", "Phone", "Order Date *"]),
        cells(&[&customer.name, &customer.phone, &customer.order_date]),
        cells(&["Email", "Boat Name *", ""]),
        cells(&[&customer.email, &customer.boat_name, ""]),
        cells(&["Order Number", &order_number, ""]),
        Vec::new(),
        cells(&["Order Summary"]),
        cells(&SUMMARY_HEADER),
    ];

    rows.extend(
        lines
            .iter()
            .filter(|line| line.quantity > 0)
            .map(|line| {
                vec![
                    line.category.clone(),
                    line.bin_code_or_empty().to_string(),
                    line.description.clone(),
                    line.packaging.clone(),
                    line.quantity.to_string(),
                    line.chef_comment_or_empty().to_string(),
                ]
            }),
    );

    ExportDocument {
        file_name: format!("Order_{order_number}.xlsx"),
        rows,
    }
}

fn cells(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}
