//! CSV export of the filtered researcher view.
//!
//! Fields are written verbatim with no quoting, so a comma or newline inside
//! a value shifts the columns of that row. Consumers of the file have always
//! received it this way.

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::models::Researcher;

pub const EXPORT_FILE_NAME: &str = "researchers_data.csv";
pub const EXPORT_MIME: &str = "text/csv";

pub const HEADERS: [&str; 11] = [
    "Name",
    "Mobile",
    "Email",
    "Unit",
    "Specialty",
    "ZSM",
    "BDM",
    "Mode",
    "Status",
    "Progress",
    "Location",
];

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write export: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("csv output is not valid utf-8")]
    Encoding(#[from] std::string::FromUtf8Error),
}

fn row(r: &Researcher) -> [String; 11] {
    [
        r.name.clone(),
        r.mobile.clone(),
        r.email.clone(),
        r.unit.clone(),
        r.specialty.clone(),
        r.zsm.clone(),
        r.bdm.clone(),
        r.mode.to_string(),
        r.status.to_string(),
        format!("{}%", r.survey_progress),
        r.location.clone(),
    ]
}

/// Header line plus one line per record, joined by `\n` without a trailing
/// newline.
pub fn to_csv<'a, I>(records: I) -> Result<String, ExportError>
where
    I: IntoIterator<Item = &'a Researcher>,
{
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .flexible(true)
        .from_writer(Vec::new());

    writer.write_record(HEADERS)?;
    for r in records {
        writer.write_record(row(r))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Io(e.into_error()))?;
    let mut text = String::from_utf8(bytes)?;
    if text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}

/// Write `researchers_data.csv` into `dir`, creating the directory if needed.
pub fn write_csv<'a, I>(records: I, dir: &Path) -> Result<PathBuf, ExportError>
where
    I: IntoIterator<Item = &'a Researcher>,
{
    let content = to_csv(records)?;
    std::fs::create_dir_all(dir)?;
    let path = dir.join(EXPORT_FILE_NAME);
    std::fs::write(&path, content)?;
    tracing::info!(path = %path.display(), "csv export written");
    Ok(path)
}
