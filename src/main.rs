//! `simspace`: command-line host for the room planner.
//!
//! Every subcommand opens the layout from the state file, does one thing and
//! lets the editor persist the result.


use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use planner::dimensions::annotations;
use planner::doc::{DoorConflict, door_conflicts};
use planner::engine::{EditError, Editor};
use planner::monitor::{MonitorPreset, PlacementTemplate, attachment};
use planner::reducer::Action;
use planner::store::FileStore;
use planner::units::{Units, format_length};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("invalid action: {0}")]
    InvalidAction(#[source] serde_json::Error),
    #[error("failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
    #[error(transparent)]
    Edit(#[from] EditError),
}

#[derive(Parser, Debug)]
#[command(name = "simspace", about = "Plan a sim-racing room layout")]
struct Cli {
    /// Layout state file.
    #[arg(long, env = "SIMSPACE_STATE", default_value = "simspace.json")]
    state: PathBuf,

    /// Log debug detail to stderr.
    #[arg(long, short, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Summarise the layout.
    Show,
    /// Write the layout as JSON to stdout or a file.
    Export {
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Replace the layout with a JSON document.
    Import { path: PathBuf },
    /// Apply one action, e.g. '{"type":"SET_ROOM","widthCm":450,"depthCm":320}'.
    Apply {
        #[arg(long)]
        data: String,
    },
    /// List monitor presets.
    Presets,
    /// Attach a monitor preset to the simulator.
    Monitor { preset: String },
    /// Tag the simulator with a placement template.
    Template {
        #[arg(value_enum)]
        template: TemplateArg,
    },
    /// Print the simulator's monitor rig in room coordinates.
    Rig,
    /// Start over with a default layout.
    Reset,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TemplateArg {
    ProAm,
    Pro,
    Generic,
}

impl From<TemplateArg> for PlacementTemplate {
    fn from(arg: TemplateArg) -> Self {
        match arg {
            TemplateArg::ProAm => Self::ProAm,
            TemplateArg::Pro => Self::Pro,
            TemplateArg::Generic => Self::Generic,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut stdout = io::stdout().lock();
    match run(cli, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::WARN };
    tracing_subscriber::fmt().with_writer(io::stderr).with_max_level(level).init();
}

fn run(cli: Cli, out: &mut impl Write) -> Result<(), CliError> {
    let mut editor = Editor::open(FileStore::new(&cli.state));

    match cli.command {
        Command::Show => show(&editor, out),
        Command::Export { output } => {
            let text = editor.export()?;
            match output {
                Some(path) => fs::write(&path, text).map_err(|source| CliError::Write { path, source }),
                None => Ok(writeln!(out, "{text}")?),
            }
        }
        Command::Import { path } => {
            let text = fs::read_to_string(&path).map_err(|source| CliError::Read { path, source })?;
            editor.import(&text)?;
            Ok(writeln!(out, "imported")?)
        }
        Command::Apply { data } => {
            let action: Action = serde_json::from_str(&data).map_err(CliError::InvalidAction)?;
            let name = action.name();
            editor.submit(action)?;
            Ok(writeln!(out, "applied {name}")?)
        }
        Command::Presets => presets(out),
        Command::Monitor { preset } => {
            editor.set_monitor_preset(&preset)?;
            Ok(writeln!(out, "attached {preset}")?)
        }
        Command::Template { template } => {
            let template = PlacementTemplate::from(template);
            editor.apply_template(template)?;
            Ok(writeln!(out, "simulator is now {}", template.display_name())?)
        }
        Command::Rig => rig(&editor, out),
        Command::Reset => {
            editor.reset();
            Ok(writeln!(out, "reset")?)
        }
    }
}

fn show(editor: &Editor<FileStore>, out: &mut impl Write) -> Result<(), CliError> {
    let doc = editor.document();
    let len = |cm: f64| format_length(cm, doc.units);

    writeln!(out, "room     {} x {}", len(doc.room.width_cm), len(doc.room.depth_cm))?;
    writeln!(out, "objects  {}", doc.objects.len())?;
    for object in &doc.objects {
        writeln!(
            out,
            "  {:<24} {} x {} at ({}, {}) {}° {}",
            object.name,
            len(object.width_cm),
            len(object.depth_cm),
            len(object.x_cm),
            len(object.y_cm),
            object.rotation_deg,
            doc.object_color(object),
        )?;
    }
    writeln!(out, "doors    {}", doc.doors.len())?;
    for door in &doc.doors {
        writeln!(
            out,
            "  {:<24} {:?} at {} width {}",
            door.id,
            door.wall,
            len(door.offset_cm),
            len(door.width_cm)
        )?;
    }
    for conflict in door_conflicts(&doc.doors, &doc.room) {
        match conflict {
            DoorConflict::Overlap(a, b) => writeln!(out, "warning: doors {a} and {b} overlap")?,
            DoorConflict::OutOfBounds(id) => writeln!(out, "warning: door {id} runs past its wall")?,
        }
    }
    for dim in annotations(doc) {
        writeln!(out, "dim      {:?} {}", dim.measured, dim.label)?;
    }
    Ok(())
}

fn presets(out: &mut impl Write) -> Result<(), CliError> {
    for preset in MonitorPreset::ALL {
        let a = attachment(preset);
        writeln!(
            out,
            "{:<11} {:?} {} x {}",
            preset.key(),
            a.layout,
            format_length(a.panel_width_cm, Units::Metric),
            format_length(a.panel_depth_cm, Units::Metric),
        )?;
    }
    Ok(())
}

fn rig(editor: &Editor<FileStore>, out: &mut impl Write) -> Result<(), CliError> {
    let doc = editor.document();
    match doc.simulator_object().and_then(|sim| sim.rig()) {
        Some(rig) => {
            writeln!(out, "{}", serde_json::to_string_pretty(&rig)?)?;
            writeln!(out, "span {}", format_length(rig.span_cm, doc.units))?;
        }
        None => writeln!(out, "simulator has no monitor rig")?,
    }
    Ok(())
}
