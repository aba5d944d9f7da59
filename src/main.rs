//! mvn-color binary entry point.

use anyhow::Result;
use std::ffi::OsString;
use std::path::Path;

use mvn_color::cli::{split_args, Cli};
use mvn_color::{logging, tool, ColorMode, Config, Driver, Invocation, Tool};

fn main() {
    logging::init();

    let code = match run() {
        Ok(code) => code,
        Err(e) => {
            let known = e.downcast_ref::<mvn_color::Error>();
            let label = match known {
                Some(err) if err.is_config() => "configuration error",
                _ => "error",
            };
            eprintln!("mvn-color: {}: {:#}", label, e);
            known.map_or(1, mvn_color::Error::exit_code)
        }
    };
    std::process::exit(code);
}

/// Parse the invocation, locate the tool and run it.
///
/// Returns the wrapped tool's exit code.
#[cfg(not(tarpaulin_include))]
fn run() -> Result<i32> {
    let mut args = std::env::args_os();
    let argv0 = args.next().unwrap_or_else(|| OsString::from("mvn"));
    let split = split_args(args);

    let bin_name = Path::new(&argv0)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "mvn".to_string());
    let cli = match Cli::parse_flags(&bin_name, &split.wrapper) {
        Ok(cli) => cli,
        Err(e) => {
            eprint!("{}", Cli::usage_error(&bin_name, &e));
            std::process::exit(e.exit_code());
        }
    };

    let tool = Tool::from_invocation(&argv0)?;
    let config = Config::load()?;
    let home = tool::resolve_home(&config, |var| std::env::var_os(var))?;

    let mode: ColorMode = cli.color.or(config.color).unwrap_or_default();
    let invocation = Invocation::new(tool.locate(&home), split.tool);

    Ok(Driver::new().run(&invocation, mode)?)
}
