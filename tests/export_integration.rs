use pretty_assertions::assert_eq;
use report_export::export::{
    csv_text, export_csv, export_pdf, unescape_field, CsvOptions, DiskSaver, MediaType,
    MemorySaver, QuoteEscape,
};
use report_export::error::ExportError;
use report_export::input::parse_json;
use report_export::notify::{RecordingNotifier, NO_DATA_MESSAGE};
use report_export::record;

const USERS_JSON: &str = r#"[{"name": "Alice", "age": 30}, {"name": "Bob", "age": 25}]"#;

#[test]
fn users_json_to_csv() {
    let data = parse_json(USERS_JSON).unwrap();
    let saver = MemorySaver::new();
    let notifier = RecordingNotifier::new();

    export_csv(&data, "users.csv", &saver, &notifier).unwrap();

    let files = saver.files();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].filename, "users.csv");
    assert_eq!(files[0].media_type, MediaType::Csv);
    assert_eq!(
        std::str::from_utf8(&files[0].contents).unwrap(),
        "\"name\",\"age\"\n\"Alice\",\"30\"\n\"Bob\",\"25\""
    );
    assert!(notifier.messages().is_empty());
}

#[test]
fn empty_input_saves_nothing_from_either_exporter() {
    let data = parse_json("[]").unwrap();

    let saver = MemorySaver::new();
    let notifier = RecordingNotifier::new();
    export_csv(&data, "anything.csv", &saver, &notifier).unwrap();
    assert!(saver.files().is_empty());
    assert_eq!(notifier.messages(), [NO_DATA_MESSAGE]);

    let saver = MemorySaver::new();
    let notifier = RecordingNotifier::new();
    export_pdf("Anything", &data, &saver, &notifier).unwrap();
    assert!(saver.files().is_empty());
    assert_eq!(notifier.messages(), [NO_DATA_MESSAGE]);
}

#[test]
fn header_row_is_first_record_keys_quoted() {
    let data = vec![
        record! { "Zone" => "north", "Total Sales" => 12.5, "active" => true },
        record! { "Zone" => "south", "Total Sales" => 3, "active" => false },
    ];
    let text = csv_text(&data, &CsvOptions::default()).unwrap();
    assert_eq!(
        text.lines().next().unwrap(),
        "\"Zone\",\"Total Sales\",\"active\""
    );
    assert_eq!(text.lines().count(), data.len() + 1);
}

#[test]
fn backslash_policy_round_trips_quotes() {
    for original in [r#"she said "no""#, r#"""#, r#"a\"b"#, "plain"] {
        let data = vec![record! { "v" => original }];
        let text = csv_text(&data, &CsvOptions::default()).unwrap();
        let field = text.lines().nth(1).unwrap();
        assert_eq!(unescape_field(field, QuoteEscape::Backslash), original);
    }
}

#[test]
fn disk_saver_writes_both_formats() {
    let dir = tempfile::tempdir().unwrap();
    let saver = DiskSaver::new(dir.path());
    let notifier = RecordingNotifier::new();
    let data = parse_json(USERS_JSON).unwrap();

    export_csv(&data, "users.csv", &saver, &notifier).unwrap();
    export_pdf("Monthly Report", &data, &saver, &notifier).unwrap();

    let csv = std::fs::read_to_string(dir.path().join("users.csv")).unwrap();
    assert!(csv.starts_with("\"name\",\"age\""));

    let pdf = std::fs::read(dir.path().join("monthly_report.pdf")).unwrap();
    assert!(pdf.starts_with(b"%PDF"));
}

#[test]
fn large_pdf_export_succeeds() {
    let data: Vec<_> = (0..300)
        .map(|i| {
            record! {
                "id" => i,
                "description" => "a fairly long description that will need wrapping in its column",
                "ok" => i % 3 == 0,
            }
        })
        .collect();
    let saver = MemorySaver::new();
    export_pdf("Inventory Dump", &data, &saver, &RecordingNotifier::new()).unwrap();
    assert_eq!(saver.files()[0].filename, "inventory_dump.pdf");
}

#[test]
fn titles_with_path_parts_stay_inside_out_dir() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    let saver = DiskSaver::new(&out);
    let notifier = RecordingNotifier::new();
    let data = parse_json(USERS_JSON).unwrap();

    for title in ["Q3/Q4 Sales", "../escape"] {
        let err = export_pdf(title, &data, &saver, &notifier).unwrap_err();
        assert!(
            matches!(err, ExportError::InvalidFilename { .. }),
            "{title}: {err}"
        );
    }
    assert!(!dir.path().join("escape.pdf").exists());
    assert!(!out.join("q3").exists());
}
