use clap::{Parser, Subcommand, ValueEnum};
use mise::prelude::*;
use mise::units::format_amount;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Define a CLI-specific enum for clap to parse.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum KindCli {
    Volume,
    Weight,
}

/// Recipe unit conversion and record maintenance
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Directory used by the recipe store
    #[arg(long, env = "MISE_DATA_DIR", default_value = "recipes", global = true)]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the catalog units
    Units {
        #[arg(short, long, value_enum)]
        kind: Option<KindCli>,
    },
    /// Convert an amount between two catalog units (ids or abbreviations)
    Convert { amount: f64, from: String, to: String },
    /// Render a recipe record file of any schema version
    Show { path: PathBuf },
    /// Rewrite a recipe record file in the current schema version
    Upgrade {
        path: PathBuf,
        /// Where to write the upgraded record; defaults to overwriting the input
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Import a recipe record file into the store
    Save {
        path: PathBuf,
        #[arg(short, long)]
        owner: String,
    },
    /// List an owner's stored recipes
    List {
        #[arg(short, long)]
        owner: String,
    },
    /// Delete a stored recipe by id
    Delete {
        id: String,
        #[arg(short, long)]
        owner: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("mise=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    debug!(data_dir = %cli.data_dir.display(), "starting");

    match cli.command {
        Command::Units { kind } => list_units(kind),
        Command::Convert { amount, from, to } => convert(amount, &from, &to),
        Command::Show { path } => println!("{}", load_recipe(&path).render()),
        Command::Upgrade { path, output } => upgrade(&path, output),
        Command::Save { path, owner } => {
            let mut recipe = load_recipe(&path);
            let mut store = FileStore::new(&cli.data_dir);
            store
                .save(&owner, &mut recipe)
                .unwrap_or_else(|e| exit_with_error(&format!("Failed to save recipe: {}", e)));
            println!("Saved '{}' ({})", recipe.title, recipe.id);
        }
        Command::List { owner } => {
            let store = FileStore::new(&cli.data_dir);
            let recipes = store
                .list(&owner)
                .unwrap_or_else(|e| exit_with_error(&format!("Failed to list recipes: {}", e)));
            if recipes.is_empty() {
                println!("No recipes stored for '{}'", owner);
            }
            for recipe in recipes {
                println!("{}  {}", recipe.id, recipe.title);
            }
        }
        Command::Delete { id, owner } => {
            let mut store = FileStore::new(&cli.data_dir);
            let removed = store
                .delete(&owner, &id)
                .unwrap_or_else(|e| exit_with_error(&format!("Failed to delete recipe: {}", e)));
            if removed {
                println!("Deleted {}", id);
            } else {
                println!("No recipe '{}' stored for '{}'", id, owner);
            }
        }
    }
}

fn list_units(kind: Option<KindCli>) {
    let units: Vec<&UnitDescriptor> = match kind {
        Some(KindCli::Volume) => UnitCatalog::by_kind(UnitKind::UsVolume),
        Some(KindCli::Weight) => UnitCatalog::by_kind(UnitKind::UsWeight),
        None => UnitCatalog::all().iter().collect(),
    };
    for unit in units {
        println!(
            "{:<16} {:<6} {:<12} {:<10} x{}",
            unit.id,
            unit.abbreviation,
            unit.name,
            unit.kind.to_string(),
            unit.conversion_factor
        );
    }
}

fn convert(amount: f64, from: &str, to: &str) {
    let source = UnitCatalog::find(from)
        .unwrap_or_else(|| exit_with_error(&format!("Unknown unit '{}'", from)));
    let target = UnitCatalog::find(to)
        .unwrap_or_else(|| exit_with_error(&format!("Unknown unit '{}'", to)));

    let quantity = Quantity::new(amount, source.id.clone())
        .unwrap_or_else(|e| exit_with_error(&e.to_string()));
    let converted = quantity
        .convert_to(target)
        .unwrap_or_else(|e| exit_with_error(&format!("Conversion failed: {}", e)));

    println!(
        "{} = {}  ({} {})",
        quantity.render(&UnitCatalog),
        converted.render(&UnitCatalog),
        format_amount(converted.amount),
        target.name
    );
}

fn upgrade(path: &Path, output: Option<PathBuf>) {
    let json = read_file(path);
    let record = RecipeRecord::from_json(&json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse '{}': {}", path.display(), e)));
    let from_version = record.version.clone().unwrap_or_else(|| "1".to_string());

    let recipe = Recipe::from_record(&record)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load '{}': {}", path.display(), e)));
    let upgraded = recipe
        .to_json()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to encode recipe: {}", e)));

    let destination = output.unwrap_or_else(|| path.to_path_buf());
    fs::write(&destination, upgraded).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Could not write to file '{}': {}",
            destination.display(),
            e
        ))
    });
    println!(
        "Upgraded '{}' from schema {} to {} -> '{}'",
        recipe.title,
        from_version,
        SchemaVersion::CURRENT,
        destination.display()
    );
}

fn load_recipe(path: &Path) -> Recipe {
    let json = read_file(path);
    Recipe::from_json(&json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load '{}': {}", path.display(), e)))
}

fn read_file(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| {
        exit_with_error(&format!("Failed to read file '{}': {}", path.display(), e))
    })
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
