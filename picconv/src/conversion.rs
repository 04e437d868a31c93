use crate::parsing::Parser;
use crate::rendering::render;
use crate::tokenizing::TokenSet;
pub use error::*;
use log::{info, warn};
use miette::SourceSpan;
use std::path::{Path, PathBuf};
use tap::prelude::*;

/// Extension given to converted files when no output path is supplied.
pub const TARGET_EXTENSION: &str = "S";

#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct ConversionReport {
    pub lines: usize,
    pub blank: usize,
    pub comments: usize,
    pub labels: usize,
    pub instructions: usize,
    pub unclassifiable: Vec<UnclassifiableLine>,
}

impl ConversionReport {
    fn record(&mut self, tokens: &TokenSet, line_number: usize, at: SourceSpan) {
        self.lines += 1;
        if tokens.is_unclassifiable() {
            warn!("Line {} could not be converted, marked for review", line_number);
            self.unclassifiable
                .push(UnclassifiableLine::new(line_number, at));
            return;
        }
        if tokens.is_blank() {
            self.blank += 1;
        } else if tokens.fields().next().is_none() {
            self.comments += 1;
        }
        if tokens.has_label_marker() {
            self.labels += 1;
        }
        if tokens.indent > 0 {
            self.instructions += 1;
        }
    }
}

#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Conversion {
    /// Every line is newline-terminated.
    pub output: String,
    pub report: ConversionReport,
}

/// Converts a whole source text line by line. A line that cannot be converted is marked, never
/// fatal.
pub fn convert_source(parser: &Parser, source: &str) -> Conversion {
    let mut conversion = Conversion {
        output: String::with_capacity(source.len()),
        ..Conversion::default()
    };

    let mut offset = 0;
    for (index, raw) in source.split_inclusive('\n').enumerate() {
        let line = raw.trim_end_matches(|c: char| c == '\n' || c == '\r');
        let tokens = parser.parse(line);
        conversion
            .report
            .record(&tokens, index + 1, (offset, line.len()).into());
        conversion.output.push_str(&render(&tokens));
        conversion.output.push('\n');
        offset += raw.len();
    }

    conversion
}

/// The input path with its extension swapped for [`TARGET_EXTENSION`].
pub fn default_output_path(input: impl AsRef<Path>) -> Result<PathBuf, ConversionError> {
    let input = input.as_ref();
    if input.extension().map_or(false, |extension| extension == TARGET_EXTENSION) {
        return Err(ConversionError::would_overwrite(input));
    }
    Ok(input.with_extension(TARGET_EXTENSION))
}

pub fn read_source(path: impl AsRef<Path>) -> Result<String, ConversionError> {
    let path = path.as_ref();
    std::fs::read_to_string(path)
        .map_err(|source| ConversionError::read(path, source))
        .tap_ok(|contents| info!("Read {} bytes from {}", contents.len(), path.display()))
}

#[derive(Debug, Clone)]
pub struct FileConversion {
    pub source: String,
    pub output_path: PathBuf,
    pub report: ConversionReport,
}

/// Reads `input`, converts it and writes the result to `output` (or the default output path).
pub fn convert_file(
    parser: &Parser,
    input: impl AsRef<Path>,
    output: Option<PathBuf>,
) -> Result<FileConversion, ConversionError> {
    let input = input.as_ref();
    let output_path = match output {
        Some(path) => path,
        None => default_output_path(input)?,
    };

    let source = read_source(input)?;
    let Conversion { output, report } = convert_source(parser, &source);
    info!(
        "Converted {} lines ({} labels, {} instructions)",
        report.lines, report.labels, report.instructions
    );

    std::fs::write(&output_path, output)
        .map_err(|error| ConversionError::write(&output_path, error))?;
    info!("Wrote {}", output_path.display());

    Ok(FileConversion {
        source,
        output_path,
        report,
    })
}

mod error {
    use miette::{Diagnostic, SourceSpan};
    use piccommon::UnsupportedDeviceFamily;
    use std::path::{Path, PathBuf};
    use thiserror::Error;

    #[derive(Debug, Error, Diagnostic)]
    pub enum ConversionError {
        #[error("Could not read '{}'", .path.display())]
        #[diagnostic(code(picconv::conversion::read))]
        Read {
            path: PathBuf,
            #[source]
            source: std::io::Error,
        },
        #[error("Could not write '{}'", .path.display())]
        #[diagnostic(code(picconv::conversion::write))]
        Write {
            path: PathBuf,
            #[source]
            source: std::io::Error,
        },
        #[error("Converting '{}' would overwrite it", .path.display())]
        #[diagnostic(
            code(picconv::conversion::would_overwrite_input),
            help("pass an output path explicitly")
        )]
        WouldOverwriteInput { path: PathBuf },

        #[error(transparent)]
        #[diagnostic(transparent)]
        Device(#[from] UnsupportedDeviceFamily),
    }

    impl ConversionError {
        pub(super) fn read(path: &Path, source: std::io::Error) -> Self {
            Self::Read {
                path: path.to_path_buf(),
                source,
            }
        }

        pub(super) fn write(path: &Path, source: std::io::Error) -> Self {
            Self::Write {
                path: path.to_path_buf(),
                source,
            }
        }

        pub(super) fn would_overwrite(path: &Path) -> Self {
            Self::WouldOverwriteInput {
                path: path.to_path_buf(),
            }
        }
    }

    #[derive(Debug, Copy, Clone, Eq, PartialEq, Error, Diagnostic)]
    #[error("Line {} could not be split into fields", .line_number)]
    #[diagnostic(
        code(picconv::conversion::unclassifiable_line),
        severity(Warning),
        help("the line was kept as-is and marked with `;#PARSE_ERROR` for manual review")
    )]
    pub struct UnclassifiableLine {
        pub line_number: usize,
        #[label("here")]
        pub at: SourceSpan,
    }

    impl UnclassifiableLine {
        pub(super) fn new(line_number: usize, at: SourceSpan) -> Self {
            Self { line_number, at }
        }
    }
}
