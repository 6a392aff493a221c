//! The long layout, shaped for pasting into Prism: one chunk per metric,
//! chunks separated by blank rows. In grouped mode tubes are zipped into
//! one column per group.

use crate::export::formats::{count_cell, percent_cell};
use crate::flowjo::TubeSample;

pub fn content(gates: &[String], tubes: &[TubeSample], grouping: bool) -> Vec<Vec<String>> {
    if grouping {
        grouped_content(gates, tubes)
    } else {
        plain_content(gates, tubes)
    }
}

fn plain_content(gates: &[String], tubes: &[TubeSample]) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    plain_chunk(&mut rows, "Cell Concentration", tubes, |t| {
        t.cell_concentration.to_string()
    });
    for (i, gate) in gates.iter().enumerate() {
        plain_chunk(&mut rows, &format!("% {}", gate), tubes, |t| {
            percent_cell(&t.percents[i])
        });
    }
    for (i, gate) in gates.iter().enumerate() {
        plain_chunk(&mut rows, &format!("# {}", gate), tubes, |t| {
            count_cell(&t.counts[i])
        });
    }
    rows
}

fn plain_chunk(
    rows: &mut Vec<Vec<String>>,
    header: &str,
    tubes: &[TubeSample],
    cell: impl Fn(&TubeSample) -> String,
) {
    if !rows.is_empty() {
        rows.push(vec![String::new()]);
    }
    rows.push(vec![String::new(), header.to_string()]);
    for tube in tubes {
        rows.push(vec![tube.name.clone(), cell(tube)]);
    }
}

fn grouped_content(gates: &[String], tubes: &[TubeSample]) -> Vec<Vec<String>> {
    let (group_names, matrix) = group_matrix(tubes);
    let mut rows = Vec::new();
    grouped_chunk(&mut rows, "Tube ID", &group_names, &matrix, |t| {
        t.name.clone()
    });
    grouped_chunk(&mut rows, "Cell Concentration", &group_names, &matrix, |t| {
        t.cell_concentration.to_string()
    });
    for (i, gate) in gates.iter().enumerate() {
        grouped_chunk(&mut rows, &format!("% {}", gate), &group_names, &matrix, |t| {
            percent_cell(&t.percents[i])
        });
    }
    for (i, gate) in gates.iter().enumerate() {
        grouped_chunk(&mut rows, &format!("# {}", gate), &group_names, &matrix, |t| {
            count_cell(&t.counts[i])
        });
    }
    rows
}

/// Tubes zipped into group columns, one column per group in label order.
/// Shorter groups pad the bottom of their column with blanks.
fn group_matrix(tubes: &[TubeSample]) -> (Vec<String>, Vec<Vec<Option<&TubeSample>>>) {
    let mut groups: Vec<(String, Vec<&TubeSample>)> = Vec::new();
    for tube in tubes {
        let label = tube.group.clone().unwrap_or_default();
        match groups.iter_mut().find(|(name, _)| *name == label) {
            Some((_, members)) => members.push(tube),
            None => groups.push((label, vec![tube])),
        }
    }

    let depth = groups
        .iter()
        .map(|(_, members)| members.len())
        .max()
        .unwrap_or(0);
    let names = groups.iter().map(|(name, _)| name.clone()).collect();
    let mut matrix = Vec::with_capacity(depth);
    for i in 0..depth {
        matrix.push(
            groups
                .iter()
                .map(|(_, members)| members.get(i).copied())
                .collect(),
        );
    }
    (names, matrix)
}

fn grouped_chunk(
    rows: &mut Vec<Vec<String>>,
    header: &str,
    group_names: &[String],
    matrix: &[Vec<Option<&TubeSample>>],
    cell: impl Fn(&TubeSample) -> String,
) {
    if !rows.is_empty() {
        rows.push(vec![String::new()]);
    }
    rows.push(vec![header.to_string()]);
    rows.push(group_names.to_vec());
    for row in matrix {
        rows.push(
            row.iter()
                .map(|tube| tube.map(&cell).unwrap_or_default())
                .collect(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::formats::fixtures::tube;

    fn gates() -> Vec<String> {
        vec!["Singlets/Live".to_string(), "Singlets".to_string()]
    }

    #[test]
    fn plain_layout_emits_one_chunk_per_metric() {
        let tubes = vec![tube("tube1", None), tube("tube2", None)];
        let rows = content(&gates(), &tubes, false);

        assert_eq!(rows[0], vec!["", "Cell Concentration"]);
        assert_eq!(rows[1], vec!["tube1", "10"]);
        assert_eq!(rows[2], vec!["tube2", "10"]);
        assert_eq!(rows[3], vec![""]);
        assert_eq!(rows[4], vec!["", "% Singlets/Live"]);
        assert_eq!(rows[5], vec!["tube1", "80.00"]);
        // Chunks: concentration + two percent + two count chunks, with
        // blank separators between them.
        assert_eq!(rows.len(), 5 * 3 + 4);
        let count_header = rows
            .iter()
            .position(|r| r == &vec!["", "# Singlets/Live"])
            .expect("count chunk present");
        assert_eq!(rows[count_header + 1], vec!["tube1", "8.00"]);
    }

    #[test]
    fn grouped_layout_zips_unequal_groups() {
        let tubes = vec![
            tube("a1", Some("ctrl")),
            tube("a2", Some("ctrl")),
            tube("b1", Some("treated")),
        ];
        let rows = content(&gates(), &tubes, true);

        assert_eq!(rows[0], vec!["Tube ID"]);
        assert_eq!(rows[1], vec!["ctrl", "treated"]);
        assert_eq!(rows[2], vec!["a1", "b1"]);
        // The shorter group pads with a blank cell.
        assert_eq!(rows[3], vec!["a2", ""]);
        assert_eq!(rows[4], vec![""]);
        assert_eq!(rows[5], vec!["Cell Concentration"]);
    }
}
