//! The compact layout: a `Percents` block and a `Cell Numbers` block,
//! each one tube per row with a column per gate.

use crate::export::formats::{count_cell, percent_cell};
use crate::flowjo::TubeSample;

const CONCENTRATION_HEADER: &str = "Cell Concentration [10e4]";

pub fn content(gates: &[String], tubes: &[TubeSample], grouping: bool) -> Vec<Vec<String>> {
    let header = header_row(gates, grouping);

    let mut rows = vec![vec!["Percents".to_string()], header.clone()];
    for tube in tubes {
        rows.push(tube_row(tube, grouping, true));
    }
    rows.push(vec![String::new()]);
    rows.push(vec!["Cell Numbers".to_string()]);
    rows.push(header);
    for tube in tubes {
        rows.push(tube_row(tube, grouping, false));
    }
    rows
}

fn header_row(gates: &[String], grouping: bool) -> Vec<String> {
    let mut header = vec!["Name".to_string()];
    if grouping {
        header.push("Group".to_string());
    }
    header.extend(gates.iter().cloned());
    header.push(CONCENTRATION_HEADER.to_string());
    header
}

fn tube_row(tube: &TubeSample, grouping: bool, percents: bool) -> Vec<String> {
    let mut row = vec![tube.name.clone()];
    if grouping {
        row.push(tube.group.clone().unwrap_or_default());
    }
    if percents {
        row.extend(tube.percents.iter().map(percent_cell));
    } else {
        row.extend(tube.counts.iter().map(count_cell));
    }
    row.push(tube.cell_concentration.to_string());
    row
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::formats::fixtures::tube;

    fn gates() -> Vec<String> {
        vec!["Singlets/Live".to_string(), "Singlets".to_string()]
    }

    #[test]
    fn two_blocks_share_the_header() {
        let tubes = vec![tube("tube1", None)];
        let rows = content(&gates(), &tubes, false);

        assert_eq!(rows[0], vec!["Percents"]);
        assert_eq!(
            rows[1],
            vec![
                "Name",
                "Singlets/Live",
                "Singlets",
                "Cell Concentration [10e4]"
            ]
        );
        assert_eq!(rows[2], vec!["tube1", "80.00", "50.00", "10"]);
        assert_eq!(rows[3], vec![""]);
        assert_eq!(rows[4], vec!["Cell Numbers"]);
        assert_eq!(rows[5], rows[1]);
        // The second gate is an ignored ancestor: blank count cell.
        assert_eq!(rows[6], vec!["tube1", "8.00", "", "10"]);
    }

    #[test]
    fn grouping_adds_a_group_column() {
        let tubes = vec![tube("tube1", Some("ctrl"))];
        let rows = content(&gates(), &tubes, true);

        assert_eq!(rows[1][..2], ["Name".to_string(), "Group".to_string()]);
        assert_eq!(rows[2][..2], ["tube1".to_string(), "ctrl".to_string()]);
    }
}
