/// Command line converter from FSD to FDI

use clap::{arg, crate_version, value_parser, ArgAction, Command};
use fsd2fdi::{convert_file, derive_output_path, GapConfig};
use log::info;
use std::path::PathBuf;
use std::process::ExitCode;

fn cli() -> Command {
    Command::new("fsd2fdi")
        .about("Converts FSD sector dumps into FDI disk images.")
        .after_long_help(
            "If OUTPUT is omitted it is INPUT with `.fsd` replaced by `.fdi`.
Set RUST_LOG environment variable to control logging level.
  levels: trace,debug,info,warn,error",
        )
        .version(crate_version!())
        .arg(arg!(<INPUT> "FSD file to read").value_parser(value_parser!(PathBuf)))
        .arg(arg!([OUTPUT] "FDI file to write").value_parser(value_parser!(PathBuf)))
        .arg(arg!(-v --verbose "show disc details while converting").action(ArgAction::SetTrue))
        .arg(
            arg!(--gap1 <BYTES> "size of GAP#1")
                .value_parser(value_parser!(u8).range(1..))
                .required(false),
        )
        .arg(
            arg!(--gap3 <BYTES> "size of GAP#3")
                .value_parser(value_parser!(u8).range(1..))
                .required(false),
        )
}

fn main() -> ExitCode {
    let matches = cli().get_matches();

    let default_level = if matches.get_flag("verbose") { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let input = matches
        .get_one::<PathBuf>("INPUT")
        .cloned()
        .unwrap_or_default();
    let output = matches
        .get_one::<PathBuf>("OUTPUT")
        .cloned()
        .unwrap_or_else(|| derive_output_path(&input));

    let mut gaps = GapConfig::acorn_dfs();
    if let Some(&gap1) = matches.get_one::<u8>("gap1") {
        gaps = gaps.gap1(gap1);
    }
    if let Some(&gap3) = matches.get_one::<u8>("gap3") {
        gaps = gaps.gap3(gap3);
    }

    info!("Converting {} to {}", input.display(), output.display());
    match convert_file(&input, &output, &gaps) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
