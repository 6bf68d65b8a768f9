//! bntc - rebuild Blender node trees from a captured document.

use anyhow::{bail, Context};
use bntc::{
    export_document_with_options, Document, ExportMode, ExportOptions, ExportOutput, Indentation,
};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bntc")]
#[command(about = "Turn captured Blender node trees into Python that rebuilds them")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Export a captured document as a script or add-on package
    Export {
        /// Captured node tree document (JSON)
        document: PathBuf,

        /// Export options (TOML). Defaults to script mode.
        #[arg(long, short)]
        config: Option<PathBuf>,

        /// Write the script here instead of stdout (script mode only)
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Package destination directory, switches to package mode
        #[arg(long)]
        package: Option<PathBuf>,

        /// Indentation of the generated code
        #[arg(long, value_enum)]
        indent: Option<IndentArg>,

        /// Exit with an error status if any error diagnostic was reported
        #[arg(long)]
        strict: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum IndentArg {
    Spaces2,
    Spaces4,
    Spaces8,
    Tabs,
}

impl From<IndentArg> for Indentation {
    fn from(arg: IndentArg) -> Self {
        match arg {
            IndentArg::Spaces2 => Indentation::Spaces2,
            IndentArg::Spaces4 => Indentation::Spaces4,
            IndentArg::Spaces8 => Indentation::Spaces8,
            IndentArg::Tabs => Indentation::Tabs,
        }
    }
}

fn main() -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match args.command {
        Command::Export {
            document,
            config,
            output,
            package,
            indent,
            strict,
        } => {
            let doc = Document::from_file(&document)
                .with_context(|| format!("loading {}", document.display()))?;

            let mut options = match &config {
                Some(path) => ExportOptions::from_file(path)?,
                None => ExportOptions::script(),
            };
            if let Some(destination) = package {
                options.mode = ExportMode::Package;
                options.package.destination = Some(destination);
            }
            if let Some(indent) = indent {
                options = options.with_indentation(indent.into());
            }

            let report = match export_document_with_options(&doc, &options) {
                Ok(report) => report,
                Err(e) if e.is_precondition() => bail!("export cancelled: {e}"),
                Err(e) => return Err(e.into()),
            };
            for diagnostic in &report.diagnostics {
                eprintln!("{diagnostic}");
            }

            match &report.output {
                ExportOutput::Script(code) => match output {
                    Some(path) => std::fs::write(&path, code)
                        .with_context(|| format!("writing {}", path.display()))?,
                    None => print!("{code}"),
                },
                ExportOutput::Package(package) => {
                    let dir = package.write()?;
                    tracing::info!("Saved package to {}", dir.display());
                }
            }

            if strict && report.diagnostics.has_errors() {
                bail!(
                    "export reported {} errors",
                    report.diagnostics.error_count()
                );
            }
        }
    }
    Ok(())
}
