use std::{fs::File, io::Write, path::Path};

use thiserror::Error;

use crate::domain::page_record::{OutputRow, PageRecord};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Rows collected over a whole run, written out once at the end.
#[derive(Debug, Default)]
pub struct ResultSink {
    rows: Vec<OutputRow>,
}

impl ResultSink {
    pub fn new() -> Self {
        ResultSink::default()
    }

    pub fn append(&mut self, record: &PageRecord) {
        self.rows.push(OutputRow::from(record));
    }

    pub fn rows(&self) -> &[OutputRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn export(&self, path: impl AsRef<Path>) -> Result<(), ExportError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| ExportError::Io {
            path: path.display().to_string(),
            source,
        })?;

        self.export_to_writer(file)
    }

    pub fn export_to_writer<W: Write>(&self, writer: W) -> Result<(), ExportError> {
        let mut writer = csv::Writer::from_writer(writer);
        writer.write_record(OutputRow::HEADER)?;
        for row in self.rows.iter() {
            writer.write_record([&row.url, &row.text, &row.keywords])?;
        }
        writer.flush().map_err(csv::Error::from)?;

        Ok(())
    }

    /// Reads back a file written by `export`.
    pub fn load(path: impl AsRef<Path>) -> Result<Vec<OutputRow>, ExportError> {
        let mut reader = csv::Reader::from_path(path)?;
        let rows = reader
            .deserialize::<OutputRow>()
            .collect::<Result<Vec<OutputRow>, csv::Error>>()?;

        Ok(rows)
    }
}
