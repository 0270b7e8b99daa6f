//! CSV rendering of trend rows for download.
//! A plain data transform: header plus one record per bucket, returned
//! as a text blob. Persisting it is the caller's business.

use csv::Writer;

use crate::error::{AppError, AppResult};
use crate::report::trend::TrendRow;

pub fn trend_to_csv(rows: &[TrendRow]) -> AppResult<String> {
    let mut wtr = Writer::from_writer(Vec::new());

    wtr.write_record(["Label", "Present", "Absent", "Rate (%)"])
        .map_err(csv_err)?;
    for row in rows {
        wtr.write_record([
            row.label.clone(),
            row.present.to_string(),
            row.absent.to_string(),
            row.rate.to_string(),
        ])
        .map_err(csv_err)?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::Export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| AppError::Export(e.to_string()))
}

fn csv_err(e: csv::Error) -> AppError {
    AppError::Export(e.to_string())
}
