//! Shared helpers for integration tests

use std::sync::Arc;

use arrow::array::{ArrayRef, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use serosurvey::schema::survey;

/// Builds an all-Utf8 survey batch the way the external loader would deliver
/// one. Coordinate columns stay textual so the adapter's type adaptation is
/// exercised too.
#[derive(Default)]
pub struct BatchBuilder {
    rows: Vec<Vec<Option<String>>>,
}

impl BatchBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push one raw row: values in `survey::REQUIRED` column order
    pub fn row(mut self, values: [Option<&str>; 10]) -> Self {
        self.rows
            .push(values.iter().map(|v| v.map(String::from)).collect());
        self
    }

    /// Push a managed-cohort row with every field present
    #[allow(clippy::too_many_arguments)]
    pub fn managed(
        self,
        colony: &str,
        lon: &str,
        lat: &str,
        date: &str,
        age: &str,
        stage: &str,
        titer: &str,
        fiv: &str,
        felv: &str,
    ) -> Self {
        self.row([
            Some(colony),
            Some("managed"),
            Some(lon),
            Some(lat),
            Some(date),
            Some(age),
            Some(stage),
            Some(titer),
            Some(fiv),
            Some(felv),
        ])
    }

    pub fn build(self) -> RecordBatch {
        let fields: Vec<Field> = survey::REQUIRED
            .iter()
            .map(|name| Field::new(*name, DataType::Utf8, true))
            .collect();

        let columns: Vec<ArrayRef> = (0..survey::REQUIRED.len())
            .map(|index| {
                let column: StringArray =
                    self.rows.iter().map(|row| row[index].clone()).collect();
                Arc::new(column) as ArrayRef
            })
            .collect();

        RecordBatch::try_new(Arc::new(Schema::new(fields)), columns)
            .expect("test batch construction")
    }
}
