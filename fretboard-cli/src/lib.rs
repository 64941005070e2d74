mod diagram;
mod dto;
mod error;
mod grid;
mod position;
mod profile;
mod scale;

use std::{
    fmt::{self, Debug, Display},
    fs::File,
    io::{self, Read, Write},
    path::PathBuf,
};

use clap::Parser;
use diagram::SvgOptions;
use fretboard::FretboardError;
use grid::GridOptions;
use position::PositionOptions;
use scale::ScaleOptions;

#[derive(Parser)]
#[command(name = "fret", version)]
struct MainOptions {
    /// Write output to a file instead of stdout
    #[arg(long = "of")]
    output_file: Option<PathBuf>,

    #[command(subcommand)]
    command: MainCommand,
}

#[derive(Parser)]
enum MainCommand {
    /// Print the degrees of a major scale
    #[command(name = "scale")]
    Scale(ScaleOptions),

    /// Write the fretboard grid of a major scale as a YAML file
    #[command(name = "grid")]
    Grid(GridOptions),

    /// Print the notes of a grid inside a position window
    #[command(name = "position")]
    Position(PositionOptions),

    /// Render the notes of a grid inside a position window as an SVG diagram
    #[command(name = "svg")]
    Svg(SvgOptions),

    /// List the named hand positions and their anchor frets
    #[command(name = "shapes")]
    Shapes,
}

impl MainOptions {
    fn run(self) -> CliResult {
        let stdin = io::stdin();
        let input = Box::new(stdin.lock());

        let stdout = io::stdout();
        let output: Box<dyn Write> = match self.output_file {
            Some(output_file) => Box::new(File::create(output_file)?),
            None => Box::new(stdout.lock()),
        };

        let stderr = io::stderr();
        let error = Box::new(stderr.lock());

        let mut app = App {
            input,
            output,
            error,
        };

        self.command.run(&mut app)
    }
}

impl MainCommand {
    fn run(self, app: &mut App) -> CliResult {
        match self {
            MainCommand::Scale(options) => options.run(app)?,
            MainCommand::Grid(options) => options.run(app)?,
            MainCommand::Position(options) => options.run(app)?,
            MainCommand::Svg(options) => options.run(app)?,
            MainCommand::Shapes => position::print_shapes(app)?,
        }
        Ok(())
    }
}

pub fn run_in_shell_env(args: impl IntoIterator<Item = String>) -> CliResult {
    let options = match MainOptions::try_parse_from(args) {
        Err(err) => {
            return if err.use_stderr() {
                Err(CliError::CommandError(err.to_string()))
            } else {
                print!("{err}");
                Ok(())
            };
        }
        Ok(options) => options,
    };

    options.run()
}

struct App<'a> {
    input: Box<dyn 'a + Read>,
    output: Box<dyn 'a + Write>,
    error: Box<dyn 'a + Write>,
}

impl App<'_> {
    pub fn write(&mut self, message: impl Display) -> io::Result<()> {
        write!(&mut self.output, "{message}")
    }

    pub fn writeln(&mut self, message: impl Display) -> io::Result<()> {
        writeln!(&mut self.output, "{message}")
    }

    pub fn errln(&mut self, message: impl Display) -> io::Result<()> {
        writeln!(&mut self.error, "{message}")
    }

    pub fn read(&mut self) -> &mut dyn Read {
        &mut self.input
    }
}

pub type CliResult<T = ()> = Result<T, CliError>;

pub enum CliError {
    IoError(io::Error),
    CommandError(String),
}

impl Debug for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::IoError(err) => write!(f, "IO error / {err}"),
            CliError::CommandError(err) => write!(f, "The command failed / {err}"),
        }
    }
}

impl From<String> for CliError {
    fn from(v: String) -> Self {
        CliError::CommandError(v)
    }
}

impl From<FretboardError> for CliError {
    fn from(v: FretboardError) -> Self {
        CliError::CommandError(v.to_string())
    }
}

impl From<io::Error> for CliError {
    fn from(v: io::Error) -> Self {
        CliError::IoError(v)
    }
}
