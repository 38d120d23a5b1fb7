use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::Result;
use std::path::PathBuf;

use report_export::export::{
    export_csv_with, export_pdf_with, pdf_filename, CsvOptions, DiskSaver, PdfOptions,
    QuoteEscape,
};
use report_export::input::load_json;
use report_export::logging::init_tracing;
use report_export::notify::stderr_notifier;

#[derive(Parser, Debug)]
#[command(name = "report-export")]
#[command(about = "Export JSON records to CSV or a PDF table report")]
#[command(version)]
struct Args {
    /// Enable debug logging (or set REPORT_EXPORT_LOG)
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the records as CSV
    Csv {
        /// JSON array of records (`-` for stdin)
        #[arg(long, short)]
        input: PathBuf,

        /// Output file name
        #[arg(long, short)]
        output: String,

        /// Directory the file is written to
        #[arg(long, value_name = "DIR", default_value = ".")]
        out_dir: PathBuf,

        /// How quotes inside fields are escaped
        #[arg(long, value_enum, default_value_t = EscapeArg::Backslash)]
        quote_escape: EscapeArg,
    },

    /// Write the records as a PDF table under a title
    Pdf {
        /// JSON array of records (`-` for stdin)
        #[arg(long, short)]
        input: PathBuf,

        /// Report title; also names the file
        #[arg(long, short)]
        title: String,

        /// Directory the file is written to
        #[arg(long, value_name = "DIR", default_value = ".")]
        out_dir: PathBuf,

        /// Place each value under its own header instead of in record order
        #[arg(long)]
        align_rows: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum EscapeArg {
    /// `\"`
    Backslash,
    /// `""` (RFC 4180)
    Doubled,
}

impl From<EscapeArg> for QuoteEscape {
    fn from(arg: EscapeArg) -> Self {
        match arg {
            EscapeArg::Backslash => QuoteEscape::Backslash,
            EscapeArg::Doubled => QuoteEscape::Doubled,
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    init_tracing(args.verbose);

    let notifier = stderr_notifier();

    match args.command {
        Command::Csv {
            input,
            output,
            out_dir,
            quote_escape,
        } => {
            let data = load_json(&input)?;
            let saver = DiskSaver::new(&out_dir);
            let options = CsvOptions {
                quote_escape: quote_escape.into(),
                ..CsvOptions::default()
            };
            export_csv_with(&data, &output, &options, &saver, notifier.as_ref())?;
            if !data.is_empty() {
                println!("Exported to CSV: {}", saver.path_for(&output).display());
            }
        }
        Command::Pdf {
            input,
            title,
            out_dir,
            align_rows,
        } => {
            let data = load_json(&input)?;
            let saver = DiskSaver::new(&out_dir);
            let options = PdfOptions {
                align_rows_to_headers: align_rows,
                ..PdfOptions::default()
            };
            export_pdf_with(&title, &data, &options, &saver, notifier.as_ref())?;
            if !data.is_empty() {
                println!(
                    "Exported to PDF: {}",
                    saver.path_for(&pdf_filename(&title)).display()
                );
            }
        }
    }

    Ok(())
}
