//! Command line front end: read a DDF object definition, write an
//! Anjay object skeleton.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use lwm2mgen_codegen::{Dialect, GenerateOptions};

#[derive(Debug, Parser)]
#[command(name = "lwm2mgen")]
#[command(version)]
#[command(about = "Parses an LwM2M object definition XML and generates an Anjay object skeleton")]
struct Args {
    /// Input DDF XML filename, or - to read from stdin
    #[arg(short, long)]
    input: PathBuf,

    /// Output filename, or - to write to stdout
    #[arg(short, long, default_value = "-")]
    output: PathBuf,

    /// Generate C++ code (default: C)
    #[arg(short = 'x', long = "c++")]
    cxx: bool,
}

impl Args {
    fn options(&self) -> GenerateOptions {
        GenerateOptions {
            dialect: if self.cxx { Dialect::Cxx } else { Dialect::C },
            timestamp: None,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run(&Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let xml = read_input(&args.input)?;
    tracing::debug!("loaded {} bytes from {}", xml.len(), args.input.display());

    let skeleton = lwm2mgen_codegen::generate_from_xml(&xml, &args.options())?;
    tracing::debug!("generated {} bytes", skeleton.len());

    write_output(&args.output, &skeleton)
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut xml = String::new();
        std::io::stdin()
            .read_to_string(&mut xml)
            .context("failed to read object definition from stdin")?;
        Ok(xml)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
    }
}

fn write_output(path: &Path, skeleton: &str) -> Result<()> {
    if path.as_os_str() == "-" {
        std::io::stdout()
            .write_all(skeleton.as_bytes())
            .context("failed to write skeleton to stdout")
    } else {
        std::fs::write(path, skeleton)
            .with_context(|| format!("failed to write {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_default_to_c_on_stdout() {
        let args = Args::try_parse_from(["lwm2mgen", "-i", "switch.xml"]).unwrap();
        assert_eq!(args.input, PathBuf::from("switch.xml"));
        assert_eq!(args.output, PathBuf::from("-"));
        assert!(!args.cxx);
        assert_eq!(args.options().dialect, Dialect::C);
    }

    #[test]
    fn test_args_cxx_flag() {
        let short = Args::try_parse_from(["lwm2mgen", "-i", "-", "-x"]).unwrap();
        assert!(short.cxx);
        assert_eq!(short.options().dialect, Dialect::Cxx);

        let long = Args::try_parse_from(["lwm2mgen", "-i", "-", "--c++", "-o", "out.cpp"]).unwrap();
        assert!(long.cxx);
        assert_eq!(long.output, PathBuf::from("out.cpp"));
    }

    #[test]
    fn test_args_require_input() {
        assert!(Args::try_parse_from(["lwm2mgen"]).is_err());
    }
}
