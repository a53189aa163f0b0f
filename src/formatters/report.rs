use thousands::Separable;

use crate::models::{ErrorRecord, Report};

/// Renders a report as human-readable text, one section per block.
///
/// Versions and error kinds are listed in ascending order; error details keep
/// the order in which the files were recorded.
pub fn render_report(report: &Report) -> String {
    let mut lines = vec![format!("-- Report for {} --", report.root.display())];

    let Some(percentage) = report.loaded_percentage() else {
        lines.push("No files found.".to_string());
        return lines.join("\n");
    };

    lines.push(format!(
        "Loaded {}/{} files ({:.0}%)",
        report.loaded_count().separate_with_commas(),
        report.total_files.separate_with_commas(),
        percentage.floor()
    ));
    lines.push(format!(
        "{} files with unsynchronized frames.",
        report.unsync_count.separate_with_commas()
    ));
    lines.push(format!(
        "{} files without tags.",
        report.missing_count.separate_with_commas()
    ));

    lines.push(String::new());
    lines.push("ID3 Versions:".to_string());
    for (version, count) in &report.version_histogram {
        lines.push(format!("  {}\t{}", version, count.separate_with_commas()));
    }

    if !report.exception_histogram.is_empty() {
        lines.push(String::new());
        lines.push("Exceptions:".to_string());
        for (kind, count) in &report.exception_histogram {
            lines.push(format!(
                "  {:<20}\t{}",
                kind.as_str(),
                count.separate_with_commas()
            ));
        }
    }

    lines.push(String::new());
    if report.error_records.is_empty() {
        lines.push("No errors.".to_string());
    } else {
        lines.push("ERRORS:".to_string());
        for record in &report.error_records {
            lines.push(String::new());
            lines.extend(format_error_record(record));
        }
    }

    lines.join("\n")
}

fn format_error_record(record: &ErrorRecord) -> Vec<String> {
    let mut lines = vec![
        format!("Reading {}:", record.path.display()),
        format!("{}: {}", record.kind, record.message),
    ];
    lines.extend(
        record
            .trace
            .iter()
            .map(|cause| format!("  caused by: {}", cause)),
    );
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_format_error_record_lists_causes() {
        let record = ErrorRecord {
            path: PathBuf::from("/music/bad.mp3"),
            kind: "Id3v2".into(),
            message: "ID3v2: Encountered an invalid frame ID".to_string(),
            trace: vec!["stream did not contain valid UTF-8".to_string()],
        };

        assert_eq!(
            format_error_record(&record),
            vec![
                "Reading /music/bad.mp3:".to_string(),
                "Id3v2: ID3v2: Encountered an invalid frame ID".to_string(),
                "  caused by: stream did not contain valid UTF-8".to_string(),
            ]
        );
    }
}
