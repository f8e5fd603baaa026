use clap::{Parser, ValueEnum};
use mise::schema::{
    CustomUnitRecord, IngredientRecord, QuantityRecord, RecipeRecord, SchemaVersion, StepRecord,
};
use mise::units::{UnitCatalog, UnitKind};
use rand::Rng;
use rand::rngs::ThreadRng;
use rand::seq::IndexedRandom;
use std::fs;
use std::path::PathBuf;

const INGREDIENT_NAMES: [&str; 12] = [
    "flour", "sugar", "butter", "milk", "salt", "baking soda", "vanilla", "rice", "olive oil",
    "garlic", "honey", "water",
];

const STEP_VERBS: [&str; 6] = ["Whisk", "Fold in", "Simmer", "Season with", "Stir in", "Knead"];

// Amounts that exercise every fraction glyph, plus a few that should print as decimals.
const AMOUNTS: [f64; 10] = [0.25, 0.5, 0.75, 1.0, 1.5, 2.0, 1.0 / 3.0, 2.0 / 3.0, 0.1, 3.2];

/// Define a CLI-specific enum for clap to parse.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum VersionCli {
    V1,
    V2,
}

/// A CLI tool to generate random recipe records for exercising the loaders
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The directory to write the generated record files to
    #[arg(short, long, default_value = "generated_recipes")]
    output: PathBuf,

    /// How many recipe records to generate
    #[arg(short, long, default_value_t = 5)]
    count: usize,

    /// The schema version the records are written in
    #[arg(long, value_enum, default_value = "v2")]
    schema: VersionCli,

    /// The maximum number of ingredients per recipe
    #[arg(long, default_value_t = 8)]
    max_ingredients: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if cli.max_ingredients == 0 {
        eprintln!("Error: --max-ingredients must be at least 1");
        std::process::exit(1);
    }

    let version = match cli.schema {
        VersionCli::V1 => SchemaVersion::V1,
        VersionCli::V2 => SchemaVersion::V2,
    };
    println!(
        "Generating {} recipe record(s) in schema version {}...",
        cli.count, version
    );

    fs::create_dir_all(&cli.output)?;
    for n in 0..cli.count {
        let record = generate_recipe(&mut rng, n, version, cli.max_ingredients);
        let path = cli.output.join(format!("{}.json", record.id));
        fs::write(&path, serde_json::to_string_pretty(&record)?)?;
        println!(
            "-> '{}' with {} ingredient(s) and {} step(s).",
            record.title,
            record.ingredients.len(),
            record.steps.len()
        );
    }

    println!(
        "Successfully generated and saved records to '{}'",
        cli.output.display()
    );

    Ok(())
}

fn generate_recipe(
    rng: &mut ThreadRng,
    n: usize,
    version: SchemaVersion,
    max_ingredients: usize,
) -> RecipeRecord {
    let custom_units = match version {
        SchemaVersion::V1 => None,
        SchemaVersion::V2 => Some(vec![
            CustomUnitRecord {
                id: "pinch".to_string(),
                name: "pinch".to_string(),
                abbreviation: "pinch".to_string(),
            },
            CustomUnitRecord {
                id: "clove".to_string(),
                name: "clove".to_string(),
                abbreviation: "clove".to_string(),
            },
        ]),
    };

    let ingredient_count = rng.random_range(1..=max_ingredients);
    let ingredients: Vec<IngredientRecord> = (0..ingredient_count)
        .map(|i| generate_ingredient(rng, n, i, version))
        .collect();

    let steps = ingredients
        .chunks(2)
        .enumerate()
        .map(|(i, used)| StepRecord {
            id: Some(format!("recipe-{}-step-{}", n, i)),
            description: format!(
                "{} the {}",
                STEP_VERBS.choose(rng).copied().unwrap_or("Mix"),
                used.iter().map(|u| u.name.as_str()).collect::<Vec<_>>().join(" and ")
            ),
            ingredients: used.iter().filter_map(|u| u.id.clone()).collect(),
        })
        .collect();

    RecipeRecord {
        id: format!("recipe-{}", n),
        title: format!("Generated recipe #{}", n + 1),
        description: "Randomly generated test data".to_string(),
        steps,
        ingredients,
        custom_units,
        version: match version {
            // Pre-versioning records carry no tag at all.
            SchemaVersion::V1 => None,
            SchemaVersion::V2 => Some(version.to_string()),
        },
    }
}

fn generate_ingredient(
    rng: &mut ThreadRng,
    n: usize,
    i: usize,
    version: SchemaVersion,
) -> IngredientRecord {
    let quantity = AMOUNTS.choose(rng).copied().unwrap_or(1.0);
    let name = INGREDIENT_NAMES.choose(rng).copied().unwrap_or("water");
    let id = Some(format!("recipe-{}-ingredient-{}", n, i));

    match version {
        SchemaVersion::V1 => {
            let volume = UnitCatalog::by_kind(UnitKind::UsVolume);
            let unit = volume.choose(rng).map_or("cup", |u| u.abbreviation.as_str());
            IngredientRecord {
                id,
                name: name.to_string(),
                description: String::new(),
                amount: None,
                volume_amount: Some(QuantityRecord {
                    quantity,
                    units: unit.to_string(),
                }),
            }
        }
        SchemaVersion::V2 => {
            let mut choices: Vec<&str> = UnitCatalog::all().iter().map(|u| u.id.as_str()).collect();
            choices.extend(["pinch", "clove"]);
            let unit = choices.choose(rng).copied().unwrap_or("pinch");
            IngredientRecord {
                id,
                name: name.to_string(),
                description: String::new(),
                amount: Some(QuantityRecord {
                    quantity,
                    units: unit.to_string(),
                }),
                volume_amount: None,
            }
        }
    }
}
