//! Parsers for the three reference tables.
//!
//! - Region table (tab-separated): `id, code, name`
//! - Democratic table (comma-separated): `state, date, type, total, super`
//! - Republican table (comma-separated): `state, date, type, total, method`
//!
//! Later rows replace earlier rows sharing a key; the replacement is logged.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use dmap_model::{
    ModelError, PartyDetail, PrimaryRecord, Region, RegionId, parse_primary_date,
};

use crate::error::{IngestError, Result};
use crate::reference::{PrimaryTable, RegionTable, TableKind};

#[derive(Debug, Deserialize)]
struct RegionRow {
    id: String,
    code: String,
    name: String,
}

#[derive(Debug, Deserialize)]
struct DemocraticRow {
    state: String,
    date: String,
    #[serde(rename = "type")]
    primary_type: String,
    total: u32,
    #[serde(rename = "super")]
    super_delegates: u32,
}

#[derive(Debug, Deserialize)]
struct RepublicanRow {
    state: String,
    date: String,
    #[serde(rename = "type")]
    primary_type: String,
    total: u32,
    method: String,
}

impl RegionRow {
    fn into_region(self) -> std::result::Result<Region, ModelError> {
        let id: RegionId = self.id.parse()?;
        Region::new(id, self.code, self.name)
    }
}

impl DemocraticRow {
    fn into_record(self) -> std::result::Result<PrimaryRecord, ModelError> {
        Ok(PrimaryRecord {
            date: parse_primary_date(&self.date)?,
            region_name: non_empty_name(self.state)?,
            primary_type: self.primary_type,
            delegates: self.total,
            detail: PartyDetail::Democratic {
                super_delegates: self.super_delegates,
            },
        })
    }
}

impl RepublicanRow {
    fn into_record(self) -> std::result::Result<PrimaryRecord, ModelError> {
        Ok(PrimaryRecord {
            date: parse_primary_date(&self.date)?,
            region_name: non_empty_name(self.state)?,
            primary_type: self.primary_type,
            delegates: self.total,
            detail: PartyDetail::Republican {
                method: self.method,
            },
        })
    }
}

fn non_empty_name(name: String) -> std::result::Result<String, ModelError> {
    if name.is_empty() {
        Err(ModelError::EmptyRegionName)
    } else {
        Ok(name)
    }
}

/// Load the region table from a TSV file.
pub fn load_regions(path: &Path) -> Result<RegionTable> {
    read_regions(open(path)?, path)
}

/// Load the Democratic primary table from a CSV file.
pub fn load_democratic(path: &Path) -> Result<PrimaryTable> {
    read_democratic(open(path)?, path)
}

/// Load the Republican primary table from a CSV file.
pub fn load_republican(path: &Path) -> Result<PrimaryTable> {
    read_republican(open(path)?, path)
}

/// Parse a region table; `source` is only used in errors and logs.
pub fn read_regions<R: Read>(reader: R, source: &Path) -> Result<RegionTable> {
    let mut table = BTreeMap::new();
    for (line, row) in rows::<RegionRow, R>(reader, b'\t', TableKind::Regions, source)? {
        let region = row
            .into_region()
            .map_err(|e| invalid(TableKind::Regions, source, line, e))?;
        if let Some(previous) = table.insert(region.id, region) {
            warn!(
                table = %TableKind::Regions,
                id = %previous.id,
                line,
                "duplicate region id replaces earlier row"
            );
        }
    }
    debug!(
        table = %TableKind::Regions,
        rows = table.len(),
        path = %source.display(),
        "loaded table"
    );
    Ok(table)
}

/// Parse a Democratic primary table.
pub fn read_democratic<R: Read>(reader: R, source: &Path) -> Result<PrimaryTable> {
    let kind = TableKind::Democratic;
    let records = rows::<DemocraticRow, R>(reader, b',', kind, source)?
        .into_iter()
        .map(|(line, row)| {
            row.into_record()
                .map(|record| (line, record))
                .map_err(|e| invalid(kind, source, line, e))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(key_by_region(kind, source, records))
}

/// Parse a Republican primary table.
pub fn read_republican<R: Read>(reader: R, source: &Path) -> Result<PrimaryTable> {
    let kind = TableKind::Republican;
    let records = rows::<RepublicanRow, R>(reader, b',', kind, source)?
        .into_iter()
        .map(|(line, row)| {
            row.into_record()
                .map(|record| (line, record))
                .map_err(|e| invalid(kind, source, line, e))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(key_by_region(kind, source, records))
}

fn key_by_region(
    kind: TableKind,
    source: &Path,
    records: Vec<(u64, PrimaryRecord)>,
) -> PrimaryTable {
    let mut table = BTreeMap::new();
    for (line, record) in records {
        if let Some(previous) = table.insert(record.region_name.clone(), record) {
            warn!(
                table = %kind,
                region = %previous.region_name,
                line,
                "duplicate primary record replaces earlier row"
            );
        }
    }
    debug!(table = %kind, rows = table.len(), path = %source.display(), "loaded table");
    table
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| IngestError::read(path, e))
}

/// Deserialize every row, pairing it with its 1-based line number.
fn rows<T, R>(reader: R, delimiter: u8, kind: TableKind, source: &Path) -> Result<Vec<(u64, T)>>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delimiter)
        .trim(Trim::All)
        .from_reader(reader);
    let csv_error = |error: csv::Error| IngestError::Csv {
        table: kind,
        path: source.to_path_buf(),
        source: error,
    };
    let headers = reader.headers().map_err(csv_error)?.clone();
    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(csv_error)?;
        let line = record.position().map_or(0, csv::Position::line);
        let row = record.deserialize::<T>(Some(&headers)).map_err(csv_error)?;
        rows.push((line, row));
    }
    Ok(rows)
}

fn invalid(kind: TableKind, source: &Path, line: u64, error: ModelError) -> IngestError {
    IngestError::InvalidRow {
        table: kind,
        path: source.to_path_buf(),
        line,
        source: error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> &'static Path {
        Path::new("inline")
    }

    #[test]
    fn reads_tab_separated_regions() {
        let tsv = "id\tcode\tname\n56\tWY\tWyoming\n05\tAR\tArkansas\n";
        let table = read_regions(tsv.as_bytes(), source()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table[&RegionId::new(5)].name, "Arkansas");
        assert_eq!(table[&RegionId::new(56)].code, "WY");
    }

    #[test]
    fn reads_democratic_rows_with_super_delegates() {
        let csv = "state,date,type,total,super\nWyoming,2016-03-01,caucus,14,4\n";
        let table = read_democratic(csv.as_bytes(), source()).unwrap();
        let record = &table["Wyoming"];
        assert_eq!(record.delegates, 14);
        assert_eq!(record.detail, PartyDetail::Democratic { super_delegates: 4 });
    }

    #[test]
    fn reads_republican_rows_with_method() {
        let csv = "state,date,type,total,method\nWyoming, 3/1/2016 ,caucus,29,winner-take-all\n";
        let table = read_republican(csv.as_bytes(), source()).unwrap();
        let record = &table["Wyoming"];
        assert_eq!(record.display_date(), "2016-03-01");
        assert_eq!(
            record.detail,
            PartyDetail::Republican {
                method: "winner-take-all".to_string()
            }
        );
    }

    #[test]
    fn two_digit_years_load_in_the_right_century() {
        let csv = "state,date,type,total,super\nWyoming,03/01/16,caucus,14,4\n";
        let table = read_democratic(csv.as_bytes(), source()).unwrap();
        assert_eq!(table["Wyoming"].display_date(), "2016-03-01");
    }

    #[test]
    fn duplicate_rows_keep_the_last() {
        let csv = "state,date,type,total,super\nIowa,2016-02-01,caucus,44,8\nIowa,2016-02-01,caucus,45,8\n";
        let table = read_democratic(csv.as_bytes(), source()).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table["Iowa"].delegates, 45);
    }

    #[test]
    fn invalid_date_reports_line() {
        let csv = "state,date,type,total,super\nIowa,2016-02-01,caucus,44,8\nOhio,soon,primary,143,17\n";
        let err = read_democratic(csv.as_bytes(), source()).unwrap_err();
        match err {
            IngestError::InvalidRow { line, table, .. } => {
                assert_eq!(line, 3);
                assert_eq!(table, TableKind::Democratic);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_numeric_total_is_a_csv_error() {
        let csv = "state,date,type,total,method\nOhio,2016-03-15,primary,many,winner-take-all\n";
        let err = read_republican(csv.as_bytes(), source()).unwrap_err();
        assert!(matches!(err, IngestError::Csv { .. }));
    }
}
