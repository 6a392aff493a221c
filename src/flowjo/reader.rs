use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use bigdecimal::BigDecimal;

use crate::error::FlowCountError;

/// Qualifier FlowJo appends to gate columns exported as percent-of-parent.
const GATE_QUALIFIER: &str = "Freq. of Parent (%)";
const HEADER_SEPARATOR: &str = " | ";

/// The raw content of one export: cleaned gate paths in column order and
/// one row of percent fractions per tube.
#[derive(Debug)]
pub struct ParsedExport {
    pub gate_paths: Vec<String>,
    pub tubes: Vec<TubeRow>,
}

#[derive(Debug)]
pub struct TubeRow {
    pub name: String,
    /// Percent-of-parent per gate column, already divided by 100.
    pub percents: Vec<BigDecimal>,
}

pub fn read_export(path: &Path) -> Result<ParsedExport, FlowCountError> {
    let file = File::open(path)?;
    parse_export(file)
}

/// Parse a FlowJo percent-of-parent export.
///
/// The first row is the header: column 0 is the sample name and the last
/// column is the blank extra column FlowJo appends, both excluded. Gate
/// headers look like `Singlets/Live | Freq. of Parent (%)`; a missing
/// separator means the file is not a FlowJo export, while an unexpected
/// qualifier is only warned about. `Mean` and `SD` summary rows are
/// skipped and tube names lose their trailing `.fcs`.
pub fn parse_export<R: Read>(input: R) -> Result<ParsedExport, FlowCountError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);
    let mut records = reader.records();

    let header = records
        .next()
        .ok_or_else(|| FlowCountError::MalformedPath("export is empty".to_string()))??;
    if header.len() < 3 {
        return Err(FlowCountError::MalformedPath(
            "export has no gate columns".to_string(),
        ));
    }

    let mut gate_paths = Vec::with_capacity(header.len() - 2);
    for cell in header.iter().skip(1).take(header.len() - 2) {
        let Some((path, qualifier)) = cell.split_once(HEADER_SEPARATOR) else {
            return Err(FlowCountError::MalformedPath(format!(
                "gate column '{}' has no '|' separator; is this export from FlowJo?",
                cell
            )));
        };
        if qualifier != GATE_QUALIFIER {
            eprintln!("Warning: '{}' is not {}.", path, GATE_QUALIFIER);
        }
        gate_paths.push(path.to_string());
    }

    let mut tubes = Vec::new();
    for result in records {
        let row = result?;
        let first = row.get(0).unwrap_or("");
        if first == "Mean" || first == "SD" {
            continue;
        }
        let name = first.strip_suffix(".fcs").unwrap_or(first).to_string();

        let cells: Vec<&str> = row.iter().skip(1).collect();
        // The trailing blank column again.
        let cells = &cells[..cells.len().saturating_sub(1)];
        if cells.len() != gate_paths.len() {
            return Err(FlowCountError::TubeShape {
                tube: name,
                expected: gate_paths.len(),
                found: cells.len(),
            });
        }

        let mut percents = Vec::with_capacity(cells.len());
        for cell in cells {
            let fraction =
                percent_fraction(cell).map_err(|_| FlowCountError::PercentParse {
                    tube: name.clone(),
                    value: cell.to_string(),
                })?;
            percents.push(fraction);
        }
        tubes.push(TubeRow { name, percents });
    }

    Ok(ParsedExport { gate_paths, tubes })
}

/// Turn a raw percent string into an exact fraction.
///
/// Dividing by 100 is a pure exponent shift on the decimal, so `"50"`
/// becomes exactly `0.50` with no rounding step involved.
fn percent_fraction(raw: &str) -> Result<BigDecimal, bigdecimal::ParseBigDecimalError> {
    let value = BigDecimal::from_str(raw.trim())?;
    let (digits, scale) = value.into_bigint_and_exponent();
    Ok(BigDecimal::new(digits, scale + 2))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn parses_header_rows_and_percents() {
        let data = "\
,Singlets | Freq. of Parent (%),Singlets/Live | Freq. of Parent (%),
tube1.fcs,90,80,
Mean,45,40,
SD,5,2,
tube2.fcs,88.8,75.5,
";
        let export = parse_export(data.as_bytes()).unwrap();
        assert_eq!(export.gate_paths, vec!["Singlets", "Singlets/Live"]);

        assert_eq!(export.tubes.len(), 2, "Mean and SD rows must be skipped");
        assert_eq!(export.tubes[0].name, "tube1");
        assert_eq!(export.tubes[0].percents, vec![dec("0.90"), dec("0.80")]);
        assert_eq!(export.tubes[1].name, "tube2");
        assert_eq!(export.tubes[1].percents, vec![dec("0.888"), dec("0.755")]);
    }

    #[test]
    fn percent_fraction_round_trips_through_display() {
        let fraction = percent_fraction("50").unwrap();
        assert_eq!(fraction.to_string(), "0.50");
        assert_eq!(&fraction * BigDecimal::from(100), BigDecimal::from(50));
    }

    #[test]
    fn header_without_separator_is_malformed() {
        let data = ",Singlets,\ntube1.fcs,90,\n";
        let err = parse_export(data.as_bytes()).unwrap_err();
        assert!(matches!(err, FlowCountError::MalformedPath(_)));
    }

    #[test]
    fn bad_percent_names_the_tube() {
        let data = "\
,Singlets | Freq. of Parent (%),
tube1.fcs,ninety,
";
        let err = parse_export(data.as_bytes()).unwrap_err();
        match err {
            FlowCountError::PercentParse { tube, value } => {
                assert_eq!(tube, "tube1");
                assert_eq!(value, "ninety");
            }
            other => panic!("expected PercentParse, got {:?}", other),
        }
    }

    #[test]
    fn short_row_names_the_tube() {
        let data = "\
,A | Freq. of Parent (%),B | Freq. of Parent (%),
tube1.fcs,90,
";
        let err = parse_export(data.as_bytes()).unwrap_err();
        match err {
            FlowCountError::TubeShape {
                tube,
                expected,
                found,
            } => {
                assert_eq!(tube, "tube1");
                assert_eq!(expected, 2);
                assert_eq!(found, 1);
            }
            other => panic!("expected TubeShape, got {:?}", other),
        }
    }
}
