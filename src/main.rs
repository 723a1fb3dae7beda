use std::{fs, path::PathBuf, process::ExitCode};

use clap::Parser;
use jspy::{
    config::Options,
    translate_with,
    translator::{
        codegen::Generator,
        context::{Context, Externals},
    },
};
use log::LevelFilter;

/// jspy translates a small JavaScript-flavoured scripting language into
/// Python.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The script to translate.
    input: PathBuf,

    /// Where to write the generated Python. Defaults to standard output.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Spaces per indentation level in the generated code.
    #[arg(long, default_value_t = jspy::config::DEFAULT_INDENT_WIDTH)]
    indent: usize,

    /// Prints more about what the translator is doing; repeat for more.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Error,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new().filter_level(level)
                              .parse_default_env()
                              .init();

    let Ok(source) = fs::read_to_string(&args.input) else {
        eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                  args.input.display());
        return ExitCode::FAILURE;
    };

    let options = Options { indent_width: args.indent,
                            ..Options::default() };
    let mut context = Context::with_options(Externals::host_defaults(), &options);
    let translation = translate_with(&source, &mut context, &Generator::new(options));

    for diagnostic in &translation.diagnostics {
        eprintln!("{diagnostic}");
    }

    match args.output {
        Some(path) => {
            if let Err(e) = fs::write(&path, &translation.code) {
                eprintln!("Failed to write the output file '{}': {e}", path.display());
                return ExitCode::FAILURE;
            }
            log::info!("wrote {}", path.display());
        },
        None => print!("{}", translation.code),
    }

    ExitCode::SUCCESS
}
