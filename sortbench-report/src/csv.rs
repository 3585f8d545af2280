//! CSV Output
//!
//! One row per ranked result. Algorithm names are quoted only when they
//! contain a delimiter, quote or newline.

use crate::ranking::Standing;
use crate::report::Report;

const HEADER: &str = "rank,algorithm,elapsed_secs,elapsed_ns,cycles,ratio,standing";

/// Generate CSV for the ranked results of a report
pub fn generate_csv_report(report: &Report) -> String {
    let mut output = String::new();
    output.push_str(HEADER);
    output.push('\n');

    let Some(table) = report.ranking.table() else {
        return output;
    };

    for row in &table.rows {
        let standing = match row.standing {
            Standing::Fastest => "fastest",
            Standing::Slowest => "slowest",
            Standing::Slower => "slower",
        };
        output.push_str(&format!(
            "{},{},{:.9},{:.0},{},{:.4},{}\n",
            row.rank,
            escape(&row.algorithm),
            row.elapsed_secs,
            row.elapsed_secs * 1e9,
            row.cycles,
            row.ratio,
            standing
        ));
    }

    output
}

fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
