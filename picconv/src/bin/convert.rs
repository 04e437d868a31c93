use clap::Parser as _;
use log::{info, warn, LevelFilter};
use miette::IntoDiagnostic;
use piccommon::DeviceFamily;
use picconv::conversion::{convert_file, convert_source, read_source};
use picconv::Parser;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};
use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;

/// Convert MPASM source into ASPIC (pic-as) source.
#[derive(clap::Parser, Debug)]
struct Args {
    asm_path: PathBuf,
    /// Defaults to the input path with an `.S` extension.
    out_path: Option<PathBuf>,
    /// Device family or part number, e.g. `midrange` or `PIC16F887`.
    #[arg(long, short, default_value = "PIC16F877")]
    device: String,
    /// Write the converted source to stdout instead of a file.
    #[arg(long)]
    stdout: bool,
    #[arg(long = "log", value_parser = <LevelFilter as FromStr>::from_str, default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,
}

fn main() -> miette::Result<()> {
    let Args {
        asm_path,
        out_path,
        device,
        stdout,
        log_level,
    } = Args::parse();

    TermLogger::init(
        log_level,
        ConfigBuilder::new()
            .add_filter_allow_str("picconv")
            .add_filter_allow_str("piccommon")
            .add_filter_allow_str("convert")
            .build(),
        TerminalMode::Stderr,
        ColorChoice::Always,
    )
    .into_diagnostic()?;

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .context_lines(1)
                .tab_width(4)
                .build(),
        )
    }))?;

    let family: DeviceFamily = device.parse()?;
    info!("Converting {} for the {} family", asm_path.display(), family);
    let parser = Parser::for_family(family);

    let (source, report) = if stdout {
        let source = read_source(&asm_path)?;
        let conversion = convert_source(&parser, &source);
        std::io::stdout()
            .lock()
            .write_all(conversion.output.as_bytes())
            .into_diagnostic()?;
        (source, conversion.report)
    } else {
        let converted = convert_file(&parser, &asm_path, out_path)?;
        (converted.source, converted.report)
    };

    for line in &report.unclassifiable {
        eprintln!(
            "{:?}",
            miette::Report::new(*line).with_source_code(source.clone())
        );
    }
    if !report.unclassifiable.is_empty() {
        warn!(
            "{} of {} lines need manual review",
            report.unclassifiable.len(),
            report.lines
        );
    }
    info!("Done, OK");
    Ok(())
}
