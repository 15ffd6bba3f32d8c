use clap::{Parser, Subcommand};

use vitrine::{CompositeSpec, VitrineError, presets};

#[derive(Parser, Debug)]
#[command(name = "vitrine", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Composite the pound cake onto the blurred photo backdrop (800x800).
    Cake,
    /// Composite the crepe onto the blurred photo backdrop (800x800).
    Crepe,
    /// Re-canvas the cut-out pound cake onto a flat fill (600x600).
    Recanvas,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let spec = match cli.cmd {
        Command::Cake => presets::pound_cake(),
        Command::Crepe => presets::crepe(),
        Command::Recanvas => presets::recanvas(),
    };

    run_spec(&spec)
}

fn run_spec(spec: &CompositeSpec) -> anyhow::Result<()> {
    match vitrine::run(spec) {
        Ok(out) => {
            eprintln!("wrote {}", out.display());
            Ok(())
        }
        // A missing foreground ends the run normally: nothing to composite,
        // nothing written.
        Err(VitrineError::MissingInput(path)) => {
            tracing::error!(path = %path.display(), "foreground not found, nothing written");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}
