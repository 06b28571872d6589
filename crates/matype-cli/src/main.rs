use anyhow::Context as _;
use clap::Parser as _;
use matype::{Parser, Report};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(clap::Parser)]
#[command(name = "matype")]
#[command(about = "Compile matype shorthand to LaTeX", long_about = None)]
struct Cli {
    /// Shorthand source to read (stdin when omitted)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// File to write the LaTeX to (stdout when omitted)
    #[arg(value_name = "OUTPUT", requires = "input")]
    output: Option<PathBuf>,

    /// Emit the result as a JSON report
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    env_logger::init();
    let cli = Cli::parse();

    let reader: Box<dyn BufRead> = match &cli.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("failed to open {}", path.display()))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };
    let result = compile_stream(reader)?;

    let mut writer: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("failed to create {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };

    if cli.json {
        let report = Report::from(result);
        writeln!(writer, "{}", report.to_json()?)?;
        writer.flush()?;
        return Ok(if report.is_success() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    match result {
        Ok(latex) => {
            writeln!(writer, "{latex}")?;
            writer.flush()?;
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprintln!("Failed to parse! {err}");
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Feeds the input line by line, stopping at the first parse error.
fn compile_stream(mut reader: impl BufRead) -> anyhow::Result<Result<String, matype::ParseError>> {
    let mut parser = Parser::new();
    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        if let Err(err) = parser.update(&line) {
            log::debug!("stopped reading at {}", parser.position());
            return Ok(Err(err));
        }
    }
    Ok(parser.finish())
}
