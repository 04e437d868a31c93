use clap::Parser as _;
use piccommon::DeviceFamily;
use picconv::conversion::read_source;
use picconv::Parser;
use std::path::PathBuf;

/// Dump the fields of every line of an MPASM file.
#[derive(clap::Parser, Debug)]
struct Args {
    asm_path: PathBuf,
    #[arg(long, short, default_value = "midrange")]
    device: String,
}

fn main() -> miette::Result<()> {
    let Args { asm_path, device } = Args::parse();
    let parser = Parser::for_family(device.parse::<DeviceFamily>()?);
    let contents = read_source(asm_path)?;

    for line in contents.lines() {
        drop(dbg!(parser.parse(line)));
    }

    Ok(())
}
