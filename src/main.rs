use std::path::PathBuf;

use clap::Parser;
use texproj::confirm::{AutoConfirm, Confirmation, InteractiveConfirm};
use texproj::registry::{PathField, Registry};
use texproj::{AppError, scaffold, tools};

#[derive(Parser)]
#[command(name = "texproj")]
#[command(version)]
#[command(
    about = "Manage LaTeX project paths and deploy project template scaffolding",
    long_about = None
)]
struct Cli {
    /// Create a new project with this name and select it
    #[arg(short = 'n', long = "new", value_name = "NAME")]
    new_project: Option<String>,

    /// Select an existing project
    #[arg(short = 'p', long = "project", value_name = "NAME", conflicts_with = "new_project")]
    project: Option<String>,

    /// Set the project root path
    #[arg(long, value_name = "PATH")]
    path: Option<PathBuf>,

    /// Set the figures directory
    #[arg(long, value_name = "PATH")]
    figdir: Option<PathBuf>,

    /// Set the main .tex file path
    #[arg(long, value_name = "PATH")]
    texfile: Option<PathBuf>,

    /// Copy the project template into the project directory
    #[arg(long)]
    template: bool,

    /// Run every figure script in the project's figures directory
    #[arg(long)]
    figures: bool,

    /// Compile the main document with latexmk
    #[arg(long)]
    compile: bool,

    /// Remove the selected project from the registry (files are kept)
    #[arg(short, long)]
    delete: bool,

    /// Print the full registry as JSON
    #[arg(long)]
    list: bool,

    /// Answer yes to every confirmation prompt
    #[arg(short = 'y', long)]
    yes: bool,

    /// Use an alternate registry file
    #[arg(long, value_name = "FILE")]
    registry: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// One invocation maps to an ordered sequence of registry and scaffolder
/// calls: create, set paths, scaffold, figures, compile, delete, list.
/// Every mutation is persisted immediately; the scaffolder saves on its own.
fn run(cli: Cli) -> Result<(), AppError> {
    let registry_path = match &cli.registry {
        Some(path) => path.clone(),
        None => texproj::default_registry_path()?,
    };
    let mut registry = Registry::load(&registry_path)?;

    let confirm: &dyn Confirmation = if cli.yes { &AutoConfirm } else { &InteractiveConfirm };

    let selected = if let Some(name) = &cli.new_project {
        registry.add(name)?;
        registry.save()?;
        println!("Created project '{name}'");
        Some(name.clone())
    } else {
        cli.project.clone()
    };

    if let Some(name) = &selected {
        if let Some(path) = &cli.path {
            registry.set_path(name, PathField::Project, path)?;
            registry.save()?;
        }
        if let Some(path) = &cli.figdir {
            registry.set_path(name, PathField::Figures, path)?;
            registry.save()?;
        }
        if let Some(path) = &cli.texfile {
            registry.set_path(name, PathField::Texfile, path)?;
            registry.save()?;
        }

        if cli.template {
            scaffold::setup_template(name, &mut registry, confirm)?;
        }

        if cli.figures {
            match registry.get_path(name, PathField::Figures)? {
                Some(figures_dir) => {
                    println!("Generating figures in {}", figures_dir.display());
                    tools::run_figure_scripts(figures_dir)?;
                }
                None => println!("No figure directory set."),
            }
        }

        if cli.compile {
            match registry.get_path(name, PathField::Texfile)? {
                Some(texfile) => {
                    let project_root = registry
                        .get_path(name, PathField::Project)?
                        .ok_or_else(|| AppError::ProjectPathUnset(name.clone()))?;
                    let output = tools::compile_document(texfile, project_root)?;
                    println!("Compiled document saved to: {}", output.display());
                }
                None => println!("No tex path set."),
            }
        }

        if cli.delete {
            registry.delete(name)?;
            registry.save()?;
            println!("Deleted project '{name}' from the registry");
        }
    }

    if cli.list {
        println!("{}", registry.to_pretty_json()?);
    }

    Ok(())
}
