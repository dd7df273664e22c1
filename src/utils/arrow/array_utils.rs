//! Utilities for working with Arrow arrays.
//!
//! This module provides utility functions for safely extracting and converting
//! data from Arrow record batches, handling type adaptation and error handling.

use arrow::array::ArrayRef;
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;
use log::{info, warn};

use crate::error::{Error, Result};

/// Get a column from a record batch with automatic type adaptation
///
/// Extracts a column by name, ensuring it has the expected data type. When the
/// stored type differs, the column is adapted with Arrow's cast kernel (safe
/// mode: unconvertible values become null rather than aborting the batch).
///
/// # Arguments
///
/// * `batch` - The record batch containing the column
/// * `column_name` - The name of the column to extract
/// * `expected_type` - The expected data type for the column
/// * `required` - Whether the column is required (error if missing) or optional (None if missing)
///
/// # Returns
///
/// * `Ok(Some(ArrayRef))` - The column array (converted if necessary) if found
/// * `Ok(None)` - If the column is not found and `required` is false
/// * `Err(Error)` - If the column is not found and `required` is true, or if type conversion fails
pub fn get_column(
    batch: &RecordBatch,
    column_name: &str,
    expected_type: &DataType,
    required: bool,
) -> Result<Option<ArrayRef>> {
    let Ok(index) = batch.schema().index_of(column_name) else {
        if required {
            return Err(Error::ColumnNotFound {
                column: column_name.to_string(),
            });
        }
        warn!("Column '{column_name}' not found in record batch");
        return Ok(None);
    };

    let column = batch.column(index);
    let actual_type = column.data_type();

    if actual_type == expected_type {
        return Ok(Some(column.clone()));
    }

    info!("Converting column '{column_name}' from {actual_type:?} to {expected_type:?}");
    match arrow::compute::kernels::cast::cast(column, expected_type) {
        Ok(converted) => Ok(Some(converted)),
        Err(err) => {
            warn!("Failed to convert column '{column_name}' to {expected_type:?}: {err}");
            Err(Error::Arrow(err))
        }
    }
}

/// Downcast a column to a specific array type with clear error messages
///
/// # Arguments
///
/// * `array` - The array reference to downcast
/// * `column_name` - The name of the column (for error messages)
/// * `expected_type_name` - A human-readable name of the expected type (for error messages)
pub fn downcast_array<'a, A: 'static>(
    array: &'a ArrayRef,
    column_name: &str,
    expected_type_name: &'static str,
) -> Result<&'a A> {
    array
        .as_any()
        .downcast_ref::<A>()
        .ok_or_else(|| Error::ColumnType {
            column: column_name.to_string(),
            expected: expected_type_name,
        })
}
