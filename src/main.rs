mod tui;
use crate::tui::App;
use anyhow::Context;
use calview::{
    init_file_logging, parse_date, CalendarEngine, Clock, FixedClock, JsonFileStore,
    MemoryStore, SelectionController, SystemClock, DEMO_TODAY,
};
use lexopt::{Arg, Parser, ValueExt};
use ratatui::DefaultTerminal;
use std::path::PathBuf;
use time::Date;

const DEFAULT_LIMIT: usize = 5;

#[derive(Clone, Debug, Eq, PartialEq)]
enum Command {
    Run(RunOptions),
    Help,
    Version,
}

#[derive(Clone, Debug, Eq, PartialEq)]
struct RunOptions {
    /// Day to select on startup
    date: Option<Date>,
    /// JSON file to read events from; the demo events are shown if unset
    events: Option<PathBuf>,
    /// Overrides the clock
    today: Option<Date>,
    limit: usize,
    log_dir: Option<PathBuf>,
}

impl Default for RunOptions {
    fn default() -> RunOptions {
        RunOptions {
            date: None,
            events: None,
            today: None,
            limit: DEFAULT_LIMIT,
            log_dir: None,
        }
    }
}

impl Command {
    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut opts = RunOptions::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                Arg::Short('e') | Arg::Long("events") => {
                    opts.events = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('t') | Arg::Long("today") => {
                    opts.today = Some(parser.value()?.parse_with(parse_date)?);
                }
                Arg::Short('n') | Arg::Long("limit") => {
                    opts.limit = parser.value()?.parse()?;
                }
                Arg::Long("log-dir") => opts.log_dir = Some(PathBuf::from(parser.value()?)),
                Arg::Value(value) if opts.date.is_none() => {
                    opts.date = Some(value.parse_with(parse_date)?);
                }
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Command::Run(opts))
    }

    fn run(self) -> anyhow::Result<()> {
        match self {
            Command::Run(opts) => opts.run(),
            Command::Help => {
                println!("Usage: calview [<options>] [YYYY-MM-DD]");
                println!();
                println!("Month-view calendar of events with an agenda of what's coming up");
                println!();
                println!("Options:");
                println!("  -e, --events <FILE>     Read events from a JSON file instead of");
                println!("                          showing the demo events");
                println!("  -t, --today <DATE>      Pretend that today is DATE");
                println!("  -n, --limit <N>         Show at most N upcoming events [default: 5]");
                println!("      --log-dir <DIR>     Write logs to files in DIR");
                println!("  -h, --help              Display this help message and exit");
                println!("  -V, --version           Show the program version and exit");
                Ok(())
            }
            Command::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

impl RunOptions {
    /// The demo events are fixed in time, so they are viewed from a fixed
    /// date unless told otherwise
    fn clock(&self) -> Box<dyn Clock> {
        match (self.today, &self.events) {
            (Some(today), _) => Box::new(FixedClock(today)),
            (None, Some(_)) => Box::new(SystemClock),
            (None, None) => Box::new(FixedClock(DEMO_TODAY)),
        }
    }

    fn engine(&self, today: Date) -> anyhow::Result<CalendarEngine> {
        let mut controller = SelectionController::new(today);
        if let Some(date) = self.date {
            controller = controller
                .selected(date)
                .with_context(|| format!("cannot show the month of {date}"))?;
        }
        let engine = match self.events {
            Some(ref path) => CalendarEngine::load(&JsonFileStore::new(path), controller)?,
            None => CalendarEngine::load(&MemoryStore::demo(), controller)?,
        };
        log::info!(
            "loaded {} events ({} rejected)",
            engine.index().len(),
            engine.index().rejected().len()
        );
        Ok(engine)
    }

    fn run(self) -> anyhow::Result<()> {
        let _logger = match self.log_dir {
            Some(ref dir) => Some(
                init_file_logging(dir)
                    .with_context(|| format!("failed to start logging to {}", dir.display()))?,
            ),
            None => None,
        };
        let clock = self.clock();
        let engine = self.engine(clock.today())?;
        with_terminal(|mut terminal| {
            terminal.hide_cursor().context("failed to hide cursor")?;
            App::new(engine, clock, self.limit).run(&mut terminal)?;
            Ok(())
        })
    }
}

fn main() -> anyhow::Result<()> {
    Command::from_parser(Parser::from_env())?.run()
}

fn with_terminal<F, T>(func: F) -> anyhow::Result<T>
where
    F: FnOnce(DefaultTerminal) -> anyhow::Result<T>,
{
    let terminal = ratatui::init();
    let r = func(terminal);
    ratatui::restore();
    r
}
