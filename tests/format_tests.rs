#[cfg(test)]
mod tests {
    use id3scan::formatters::{render_report, Writer};
    use id3scan::models::{ParseFailure, Report, TagInfo, TagVersion};
    use std::path::Path;

    #[test]
    fn test_empty_report() {
        let report = Report::new("/music/empty");
        assert_eq!(
            render_report(&report),
            "-- Report for /music/empty --\nNo files found."
        );
    }

    #[test]
    fn test_full_report_layout() {
        let mut report = Report::new("/music");
        report.record_success(&TagInfo::new(TagVersion::new(2, 4, 0), false));
        report.record_success(&TagInfo::new(TagVersion::new(2, 3, 0), true));
        report.record_missing(Path::new("/music/untagged.mp3"));
        report.record_error(
            Path::new("/music/broken.mp3"),
            ParseFailure::new("SizeMismatch", "Encountered an invalid item size")
                .with_trace(vec!["frame TIT2 overruns the tag".to_string()]),
        );

        let expected = [
            "-- Report for /music --",
            "Loaded 3/4 files (75%)",
            "1 files with unsynchronized frames.",
            "1 files without tags.",
            "",
            "ID3 Versions:",
            "  2.3.0\t1",
            "  2.4.0\t1",
            "",
            "Exceptions:",
            "  SizeMismatch        \t1",
            "",
            "ERRORS:",
            "",
            "Reading /music/broken.mp3:",
            "SizeMismatch: Encountered an invalid item size",
            "  caused by: frame TIT2 overruns the tag",
        ]
        .join("\n");

        assert_eq!(render_report(&report), expected);
    }

    #[test]
    fn test_report_without_errors() {
        let mut report = Report::new("/music");
        report.record_success(&TagInfo::new(TagVersion::new(2, 3, 0), true));

        let expected = [
            "-- Report for /music --",
            "Loaded 1/1 files (100%)",
            "1 files with unsynchronized frames.",
            "0 files without tags.",
            "",
            "ID3 Versions:",
            "  2.3.0\t1",
            "",
            "No errors.",
        ]
        .join("\n");

        assert_eq!(render_report(&report), expected);
    }

    #[test]
    fn test_percentage_rounds_down() {
        let mut report = Report::new("/music");
        report.record_missing(Path::new("/music/a.mp3"));
        report.record_missing(Path::new("/music/b.mp3"));
        report.record_error(Path::new("/music/c.mp3"), ParseFailure::new("Io", "boom"));

        assert!(render_report(&report).contains("Loaded 2/3 files (66%)"));
    }

    #[test]
    fn test_large_counts_use_separators() {
        let mut report = Report::new("/music");
        for _ in 0..1500 {
            report.record_missing(Path::new("/music/a.mp3"));
        }

        let rendered = render_report(&report);
        assert!(rendered.contains("Loaded 1,500/1,500 files (100%)"));
        assert!(rendered.contains("1,500 files without tags."));
    }

    #[test]
    fn test_writer_appends_newlines() {
        let mut writer = Writer::new(Vec::new());
        writer.write("Scanning /music").unwrap();
        writer.write("done").unwrap();

        let output = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(output, "Scanning /music\ndone\n");
    }
}
