use clap::{Parser, Subcommand};
use fitness_core::*;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "fitplan")]
#[command(about = "Fitness & calorie burn recommendation system", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override session log file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Load configuration from this file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the demonstration transcript (default)
    Demo,

    /// Recommend a plan for the configured profile
    Recommend {
        /// Fitness goal (e.g. "Lose weight", "Build muscle")
        #[arg(long)]
        goal: Option<String>,

        /// Body weight in kilograms
        #[arg(long, allow_negative_numbers = true)]
        weight: Option<f64>,

        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compute body mass index
    Bmi {
        /// Body weight in kilograms
        #[arg(long, allow_negative_numbers = true)]
        weight: Option<f64>,

        /// Height in centimeters
        #[arg(long, allow_negative_numbers = true)]
        height: Option<f64>,
    },

    /// Merge the recommended plan with the sample plan
    Merge {
        /// Fitness goal
        #[arg(long)]
        goal: Option<String>,
    },

    /// Show logged sessions
    History,

    /// Export the recommended plan's calorie breakdown to CSV
    Export {
        /// Output CSV file
        #[arg(long)]
        out: PathBuf,

        /// Fitness goal
        #[arg(long)]
        goal: Option<String>,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    fitness_core::logging::init();

    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref());
    let demo = matches!(cli.command, Some(Commands::Demo) | None);

    // The demo never reads the profile, so a broken config only costs it the log path
    let config = match config {
        Ok(config) => config,
        Err(e) if demo => {
            tracing::warn!("Ignoring unreadable config: {}. Using defaults.", e);
            Config::default()
        }
        Err(e) => return Err(e),
    };
    let log_path = cli.log_file.unwrap_or_else(|| config.log.path.clone());

    match cli.command {
        Some(Commands::Demo) | None => cmd_demo(&log_path),
        Some(Commands::Recommend { goal, weight, json }) => {
            cmd_recommend(&config, goal, weight, json)
        }
        Some(Commands::Bmi { weight, height }) => cmd_bmi(&config, weight, height),
        Some(Commands::Merge { goal }) => cmd_merge(&config, goal),
        Some(Commands::History) => cmd_history(&log_path),
        Some(Commands::Export { out, goal }) => cmd_export(&config, goal, &out),
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

/// Configured user with command-line overrides applied
fn profile_user(config: &Config, goal: Option<String>, weight: Option<f64>) -> User {
    let mut user = config.user();
    if let Some(goal) = goal {
        user.set_goal(goal);
    }
    if let Some(weight) = weight {
        user.person_mut().set_weight(weight);
    }
    user
}

fn show_plan(plan: &WorkoutPlan) {
    let lines = plan.display();
    if let Some((header, items)) = lines.split_first() {
        println!("Workout Plan ({}):", header);
        for line in items {
            println!("  - {}", line);
        }
    }
}

fn cmd_demo(log_path: &Path) -> Result<()> {
    println!("=== Fitness & Calorie Burn Recommendation System ===");

    let person = Person::new("Devin M.", 22, 72.5, 175.0, Gender::Male);
    let user = User::new(person, "Lose weight");
    println!("User: {}, Goal: {}", user.name(), user.goal());

    let recommended = recommend(&user);
    show_plan(&recommended);
    println!(
        "Estimated total calories for plan: {:.2}",
        recommended.total_calories(user.person())
    );

    let extras = sample_plan();
    let merged = &recommended + &extras;
    println!();
    println!("Merged plan:");
    show_plan(&merged);
    println!(
        "Merged calories estimate: {:.2}",
        merged.total_calories(user.person())
    );

    let temp_jog = Workout::cardio("Temp Jog", 30, 6, 7.0);
    let calories = temp_jog.estimate_calories(user.person());
    let mut sink = TextLogSink::new(log_path);
    match sink.log_session(user.person(), &temp_jog, calories) {
        Ok(()) => {
            tracing::info!("Appended demo session to {:?}", sink.path());
            println!("Logged session: {} calories: {:.2}", temp_jog, calories);
        }
        Err(e) => {
            tracing::error!("Failed to append to {:?}: {}", sink.path(), e);
            eprintln!("Logging failed: {}", e);
        }
    }

    let bad_user = User::new(
        Person::new("ZeroHeight", 30, 70.0, 0.0, Gender::Female),
        "Maintain",
    );
    println!("Attempting BMI for {}", bad_user.name());
    match bad_user.bmi() {
        Ok(bmi) => println!("BMI: {:.2}", bmi),
        Err(e) => println!("Caught exception as expected: {}", e),
    }

    println!();
    println!("Demo finished.");
    Ok(())
}

fn cmd_recommend(
    config: &Config,
    goal: Option<String>,
    weight: Option<f64>,
    json: bool,
) -> Result<()> {
    let user = profile_user(config, goal, weight);
    let plan = recommend(&user);

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    println!("User: {}, Goal: {}", user.name(), user.goal());
    show_plan(&plan);
    for row in plan.breakdown(user.person()) {
        println!("  {}. {}: {:.2} kcal", row.position, row.workout.name(), row.calories);
    }
    println!(
        "Estimated total calories for plan: {:.2}",
        plan.total_calories(user.person())
    );
    Ok(())
}

fn cmd_bmi(config: &Config, weight: Option<f64>, height: Option<f64>) -> Result<()> {
    let mut user = profile_user(config, None, weight);
    if let Some(height) = height {
        user.person_mut().set_height(height);
    }

    let bmi = match user.bmi() {
        Ok(bmi) => bmi,
        Err(e) => {
            tracing::warn!("BMI unavailable for {}: {}", user.name(), e);
            return Err(e);
        }
    };
    println!("BMI for {}: {:.2}", user.name(), bmi);
    Ok(())
}

fn cmd_merge(config: &Config, goal: Option<String>) -> Result<()> {
    let user = profile_user(config, goal, None);
    let merged = recommend(&user) + sample_plan();

    show_plan(&merged);
    println!(
        "Merged calories estimate: {:.2}",
        merged.total_calories(user.person())
    );
    Ok(())
}

fn cmd_history(log_path: &Path) -> Result<()> {
    let entries = read_entries(log_path)?;
    if entries.is_empty() {
        println!("No sessions logged yet.");
        return Ok(());
    }

    let total: f64 = entries.iter().map(|e| e.calories).sum();
    for entry in &entries {
        println!(
            "[{}] {}: {} ({} min) {:.2} kcal",
            entry.timestamp,
            entry.person_name,
            entry.workout_name,
            entry.duration_minutes,
            entry.calories
        );
    }
    println!("{} sessions, {:.2} kcal total", entries.len(), total);
    Ok(())
}

fn cmd_export(config: &Config, goal: Option<String>, out: &Path) -> Result<()> {
    let user = profile_user(config, goal, None);
    let plan = recommend(&user);
    let count = write_plan_csv(&plan, user.person(), out)?;

    println!("✓ Exported {} workouts", count);
    println!("  CSV: {}", out.display());
    Ok(())
}
