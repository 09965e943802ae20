// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Catalog document loading and spreadsheet conversion.
//!
//! The catalog document maps sheet names to rows. It is produced offline
//! from the workbook's sheets (exported as CSV) by [`convert_sheets`] and
//! [`render_catalog_document`], and read at startup by
//! [`load_catalog_document`].

use csv::{Reader, ReaderBuilder, StringRecord};
use galley_order_domain::{Catalog, CatalogRow, is_excluded_sheet};
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

use crate::error::ApiError;

/// Parses a catalog document.
///
/// Extra fields on a row are ignored and missing text fields become empty.
///
/// # Errors
///
/// Returns `ApiError::CatalogUnavailable` if the document is not a catalog.
pub fn load_catalog_document(json: &str) -> Result<Catalog, ApiError> {
    let catalog: Catalog =
        serde_json::from_str(json).map_err(|e| ApiError::CatalogUnavailable {
            reason: format!("Malformed catalog document: {e}"),
        })?;
    info!(categories = catalog.len(), "Loaded catalog");
    Ok(catalog)
}

/// Reads and parses a catalog document from disk.
///
/// # Errors
///
/// Returns `ApiError::CatalogUnavailable` if the file cannot be read or parsed.
pub fn load_catalog_file<P: AsRef<Path>>(path: P) -> Result<Catalog, ApiError> {
    let path: &Path = path.as_ref();
    let json: String =
        std::fs::read_to_string(path).map_err(|e| ApiError::CatalogUnavailable {
            reason: format!("Failed to read {}: {e}", path.display()),
        })?;
    load_catalog_document(&json)
}

/// One row of the catalog document as written by the converter.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CatalogDocumentRow<'a> {
    category: &'a str,
    bin_code: &'a str,
    description: &'a str,
    packaging: &'a str,
    quantity: u32,
    chef_comment: &'a str,
    shopper_comment: &'a str,
}

/// Renders a catalog as a pretty-printed catalog document.
///
/// Every row carries `quantity: 0` and empty comments alongside its catalog
/// fields.
///
/// # Errors
///
/// Returns `ApiError::Internal` if serialization fails.
pub fn render_catalog_document(catalog: &Catalog) -> Result<String, ApiError> {
    let mut document: IndexMap<&str, Vec<CatalogDocumentRow<'_>>> = IndexMap::new();

    for name in catalog.category_names() {
        let rows: &[CatalogRow] = catalog.rows(name).unwrap_or_default();
        document.insert(
            name,
            rows.iter()
                .map(|row| CatalogDocumentRow {
                    category: &row.category,
                    bin_code: &row.bin_code,
                    description: &row.description,
                    packaging: &row.packaging,
                    quantity: 0,
                    chef_comment: "",
                    shopper_comment: "",
                })
                .collect(),
        );
    }

    serde_json::to_string_pretty(&document).map_err(|e| ApiError::Internal {
        message: format!("Failed to render catalog document: {e}"),
    })
}

/// Normalizes a CSV header for case-insensitive, whitespace-tolerant matching.
fn normalize_header(header: &str) -> String {
    header.trim().to_lowercase()
}

/// Builds a normalized header name to column index map.
fn header_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, header)| (normalize_header(header), idx))
        .collect()
}

/// Returns the trimmed cell under the first header present with a non-empty value.
fn first_non_empty(
    record: &StringRecord,
    headers: &HashMap<String, usize>,
    names: &[&str],
) -> String {
    names
        .iter()
        .filter_map(|name| headers.get(*name).and_then(|&idx| record.get(idx)))
        .map(str::trim)
        .find(|value| !value.is_empty())
        .unwrap_or_default()
        .to_string()
}

/// Converts one sheet's CSV export into catalog rows.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` if the CSV cannot be parsed.
pub fn convert_sheet(sheet_name: &str, csv_text: &str) -> Result<Vec<CatalogRow>, ApiError> {
    let mut reader: Reader<&[u8]> = ReaderBuilder::new()
        .flexible(true)
        .from_reader(csv_text.as_bytes());

    let headers: HashMap<String, usize> =
        header_map(reader.headers().map_err(|e| ApiError::InvalidInput {
            field: String::from(sheet_name),
            message: format!("Invalid sheet header: {e}"),
        })?);

    let mut rows: Vec<CatalogRow> = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record: StringRecord = result.map_err(|e| ApiError::InvalidInput {
            field: String::from(sheet_name),
            message: format!("Invalid row {}: {e}", row_idx + 1),
        })?;

        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }

        let mut category: String = first_non_empty(&record, &headers, &["category"]);
        if category.is_empty() {
            category = sheet_name.to_string();
        }

        rows.push(CatalogRow {
            category,
            bin_code: first_non_empty(&record, &headers, &["bin code"]),
            description: first_non_empty(&record, &headers, &["description"]),
            packaging: first_non_empty(&record, &headers, &["packaging details", "packaging"]),
        });
    }

    Ok(rows)
}

/// Converts a workbook's sheets into a catalog.
///
/// Sheets whose name mentions "welcome" or "order summary" are skipped.
///
/// # Arguments
///
/// * `sheets` - `(sheet name, CSV text)` pairs in workbook order
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` if a sheet cannot be parsed.
pub fn convert_sheets(sheets: &[(String, String)]) -> Result<Catalog, ApiError> {
    let mut catalog: Catalog = Catalog::new();

    for (sheet_name, csv_text) in sheets {
        if is_excluded_sheet(sheet_name) {
            debug!(sheet = %sheet_name, "Skipping non-catalog sheet");
            continue;
        }
        let rows: Vec<CatalogRow> = convert_sheet(sheet_name, csv_text)?;
        debug!(sheet = %sheet_name, rows = rows.len(), "Converted sheet");
        catalog.insert_category(sheet_name, rows);
    }

    Ok(catalog)
}
