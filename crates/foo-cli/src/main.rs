use std::ffi::OsString;
use std::fmt;
use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind as ClapErrorKind;
use foo_core::{AgeParse, Foo, FooOptions};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const EXIT_SUCCESS: u8 = 0;
const EXIT_FAILURE: u8 = 1;

/// Used for the usage line when argv is empty.
const DEFAULT_PROGRAM_NAME: &str = "foo";

/// Options only. `<name>` and `<age>` are never seen by clap: they are
/// always the last two arguments, taken verbatim.
#[derive(Parser, Debug)]
#[command(
    name = "foo",
    version,
    about = "Build and validate a Foo record",
    override_usage = "foo [OPTIONS] <name> <age>",
    after_help = "Options must come before <name> and <age>. The last two arguments are \
                  always the name and the age, even when they look like flags."
)]
struct Cli {
    /// tracing filter, written to stderr (e.g. `debug`, `foo_core=trace`)
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Reject age text that is not a plain integer instead of reading it as 0.
    #[arg(long, default_value_t = false)]
    strict: bool,
}

impl Cli {
    fn options(&self) -> FooOptions {
        FooOptions {
            age_parse: if self.strict {
                AgeParse::Strict
            } else {
                AgeParse::Permissive
            },
        }
    }
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"));
    // try_init: run() may be called more than once in one process (tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}

/// Write one diagnostic line to `err`. The run fails whether or not the
/// write succeeds.
fn report(err: &mut impl Write, line: impl fmt::Display) -> u8 {
    if let Err(e) = writeln!(err, "{line}") {
        debug!(error = %e, "could not write diagnostic");
    }
    EXIT_FAILURE
}

/// Driver: Start -> ParseArgs -> {UsageFail | Construct -> {ConstructFail | Print -> Release}}.
///
/// `argv[0]` is the program name used in the usage line. The last two
/// arguments are the name and the age; anything before them must be an
/// option. Returns the process exit code.
fn run<I, T>(argv: I, out: &mut impl Write, err: &mut impl Write) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();
    let (program, user) = match argv.split_first() {
        Some((program, user)) => (program.clone(), user),
        None => (OsString::from(DEFAULT_PROGRAM_NAME), &[][..]),
    };
    let program_name = program.to_string_lossy().into_owned();
    let usage = format!("usage: {program_name} <name> <age>");

    let (options, positionals) = if user.len() >= 2 {
        user.split_at(user.len() - 2)
    } else {
        (user, &[][..])
    };

    // clap would swallow a separator and shift the positionals
    if options.iter().any(|a| a.to_str() == Some("--")) {
        return report(err, usage);
    }

    let cli = match Cli::try_parse_from(std::iter::once(&program).chain(options)) {
        Ok(cli) => cli,
        Err(e)
            if matches!(
                e.kind(),
                ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion
            ) =>
        {
            if let Err(io_err) = write!(out, "{}", e.render()) {
                debug!(error = %io_err, "could not write help");
                return EXIT_FAILURE;
            }
            return EXIT_SUCCESS;
        }
        Err(_) => return report(err, usage),
    };

    let [name, age] = positionals else {
        return report(err, usage);
    };

    init_tracing(&cli.log_level);
    debug!(program = %program_name, strict = cli.strict, "constructing record");

    let name = name.to_string_lossy();
    let age = age.to_string_lossy();
    let opts = cli.options();
    let foo = match Foo::with_options(Some(&*name), Some(&*age), &opts) {
        Ok(foo) => foo,
        Err(e) => {
            debug!(kind = ?e.kind(), "construction failed");
            return report(err, format_args!("ERROR: {e}"));
        }
    };

    if let Err(e) = writeln!(out, "{foo}") {
        debug!(error = %e, "could not write record");
        return EXIT_FAILURE;
    }

    // Release
    drop(foo);
    EXIT_SUCCESS
}

fn main() -> ExitCode {
    let code = run(
        std::env::args_os(),
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );
    ExitCode::from(code)
}
