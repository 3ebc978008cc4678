mod app;
mod command;
mod config;
mod consts;
mod game;
mod menu;
mod options;
mod util;
mod warning;
use crate::app::App;
use crate::config::Config;
use crate::options::Difficulty;
use crate::util::Globals;
use crate::warning::Warning;
use anyhow::Context;
use lexopt::{Arg, ValueExt};
use std::io::{self, ErrorKind};
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    match Arguments::from_parser(lexopt::Parser::from_env()) {
        Ok(args) => args.run(),
        Err(e) => {
            eprintln!("ratduel: {e}");
            ExitCode::from(2)
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
enum Arguments {
    Run(Run),
    Help,
    Version,
}

impl Arguments {
    fn from_parser(mut parser: lexopt::Parser) -> Result<Arguments, lexopt::Error> {
        let mut run = Run::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    run.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('d') | Arg::Long("difficulty") => {
                    run.difficulty = Some(parser.value()?.parse()?);
                }
                Arg::Short('h') | Arg::Long("help") => return Ok(Arguments::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Arguments::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Arguments::Run(run))
    }

    fn run(self) -> ExitCode {
        match self {
            Arguments::Run(run) => run.run(),
            Arguments::Help => {
                println!("Usage: ratduel [<options>]");
                println!();
                println!("Race an AI snake for food in the terminal");
                println!();
                println!("Options:");
                println!("  -c <file>, --config <file>");
                println!("                    Read configuration from the given file");
                println!();
                println!("  -d <level>, --difficulty <level>");
                println!("                    Start at the given difficulty: easy, medium, or hard");
                println!();
                println!("  -h, --help        Display this help message and exit");
                println!("  -V, --version     Show the program version and exit");
                ExitCode::SUCCESS
            }
            Arguments::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                ExitCode::SUCCESS
            }
        }
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct Run {
    config: Option<PathBuf>,
    difficulty: Option<Difficulty>,
}

impl Run {
    fn run(self) -> ExitCode {
        let (config, warning) = match self.load_config() {
            Ok(config) => (config, None),
            Err(e) => (Config::default(), Some(Warning::from(&e))),
        };
        let mut globals = Globals {
            difficulty: config.difficulty,
            theme: config.styles.to_theme(),
        };
        if let Some(difficulty) = self.difficulty {
            globals.difficulty = difficulty;
        }
        let terminal = ratatui::init();
        let r = App::new(globals, warning).run(terminal);
        ratatui::restore();
        io_exit(r)
    }

    /// Read the configuration file given on the command line, or the file at
    /// the default path if no file was given.  A missing file is only an error
    /// when its path came from the command line.
    fn load_config(&self) -> anyhow::Result<Config> {
        let r = match self.config.as_deref() {
            Some(path) => Config::load(path, false),
            None => Config::default_path().and_then(|path| Config::load(&path, true)),
        };
        r.context("Failed to load configuration")
    }
}

fn io_exit(r: io::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.kind() == ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(2)
        }
    }
}
