//! Terminal intake wizard for the migration advisory service
//!
//! Walks the three wizard steps on stdin/stdout, keeps the household
//! composition valid through the constraint engine, and prints the ranked
//! recommendations plus the generated advisory.

use std::io::{self, BufRead, Write};

use advisory_client::AdvisoryClient;
use anyhow::{Context, Result};
use clap::Parser;
use shared_types::{Field, HealthCondition};
use tracing::info;
use wizard_core::{WizardSession, WizardStep};

#[derive(Parser, Debug)]
#[command(name = "advisor", about = "Migration advisory intake wizard")]
struct Args {
    /// Base URL of the advisory service
    #[arg(long, default_value = "http://localhost:8000")]
    api_url: String,

    /// Print the full results bundle as JSON instead of a summary
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let client = AdvisoryClient::new(&args.api_url);
    info!("using advisory service at {}", client.base_url());

    let cities = client
        .city_names()
        .await
        .context("fetching city catalog")?;
    let professions = client
        .professions()
        .await
        .context("fetching profession catalog")?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut session = WizardSession::new();

    run_personal_info(&mut session, &mut input, &professions)?;
    session.advance()?;
    run_location(&mut session, &mut input, &cities)?;
    session.advance()?;
    run_family_health(&mut session, &mut input)?;

    println!("\nSubmitting your profile for analysis...");
    let request = session.recommendation_request()?;
    let recommendations = client
        .recommendations(&request)
        .await
        .context("requesting recommendations")?;
    let advisory = client
        .advisory(&session.advisory_request(&recommendations))
        .await
        .context("requesting advisory")?;

    let bundle = session.results_bundle(recommendations, advisory);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&bundle)?);
        return Ok(());
    }

    println!("\nCurrent AQI in {}: {:.0}", bundle.location.current_city, bundle.current_aqi);
    println!("Relocation readiness: {:.1}/10", bundle.readiness_score);
    println!("\nTop destinations:");
    for (rank, city) in bundle.recommendations.iter().take(5).enumerate() {
        println!(
            "  {}. {} ({}) — AQI {:.0}, {:.0} km away, suitability {:.1}/10",
            rank + 1,
            city.city_name,
            city.state,
            city.target_aqi,
            city.distance_km,
            city.suitability_score,
        );
    }
    println!("\nAdvisory:\n{}", bundle.advisory);

    Ok(())
}

fn run_personal_info(
    session: &mut WizardSession,
    input: &mut impl BufRead,
    professions: &[String],
) -> Result<()> {
    print_step_header(WizardStep::PersonalInfo);

    loop {
        let name = prompt(input, "Full name")?;
        if !name.trim().is_empty() {
            session.set_name(name.trim());
            break;
        }
        println!("A name is required.");
    }

    let age = prompt(input, "Age (18-80)")?;
    session.set_age(age.trim().parse().unwrap_or(30));

    let profession = choose(input, "Profession", professions)?;
    session.set_profession(&profession);
    Ok(())
}

fn run_location(
    session: &mut WizardSession,
    input: &mut impl BufRead,
    cities: &[String],
) -> Result<()> {
    print_step_header(WizardStep::Location);

    let city = choose(input, "Current city", cities)?;
    session.set_current_city(&city);

    let distance = prompt(input, "Maximum migration distance in km (100-2500)")?;
    session.set_max_distance_km(distance.trim().parse().unwrap_or(500));

    let budget = prompt(input, "Monthly rent budget (blank for none)")?;
    session.set_monthly_budget_raw(&budget);
    Ok(())
}

fn run_family_health(session: &mut WizardSession, input: &mut impl BufRead) -> Result<()> {
    print_step_header(WizardStep::FamilyHealth);

    let labels: Vec<String> = shared_types::FamilyType::all()
        .iter()
        .map(|t| t.label().to_string())
        .collect();
    let family_type = choose(input, "Family type", &labels)?;
    session.edit_household_raw(Field::FamilyType, &family_type);

    for field in [Field::TotalMembers, Field::Children, Field::Elderly] {
        let constraint = session.household_constraint(field);
        let current = household_value(session, field);
        if !constraint.editable {
            println!("{}: {} (fixed for this family type)", field, current);
            continue;
        }
        // Bounds are always present for the numeric fields
        let (min, max) = constraint.bounds.unwrap_or((0, 0));
        let raw = prompt(
            input,
            &format!("{} ({}-{}, currently {})", field, min, max, current),
        )?;
        if !raw.trim().is_empty() {
            session.edit_household_raw(field, &raw);
        }
    }

    println!("\nHealth conditions in family (toggle by number, blank to finish):");
    loop {
        for (index, condition) in HealthCondition::all().iter().enumerate() {
            let mark = if session.health().contains(*condition) {
                "x"
            } else {
                " "
            };
            println!("  [{}] {}. {} — {}", mark, index + 1, condition, condition.description());
        }
        let raw = prompt(input, "Toggle")?;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            break;
        }
        match trimmed.parse::<usize>() {
            Ok(n) if (1..=HealthCondition::all().len()).contains(&n) => {
                session.toggle_health(HealthCondition::all()[n - 1]);
            }
            _ => println!("Enter a number between 1 and {}.", HealthCondition::all().len()),
        }
    }
    Ok(())
}

fn household_value(session: &WizardSession, field: Field) -> u8 {
    let household = session.household();
    match field {
        Field::TotalMembers => household.total_members,
        Field::Children => household.children,
        Field::Elderly => household.elderly,
        Field::FamilyType => 0,
    }
}

fn print_step_header(step: WizardStep) {
    println!("\n== Step {}: {} ==", step.index() + 1, step.label());
}

fn prompt(input: &mut impl BufRead, label: &str) -> Result<String> {
    print!("{}: ", label);
    io::stdout().flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\n', '\r']).to_string())
}

fn choose(input: &mut impl BufRead, label: &str, options: &[String]) -> Result<String> {
    println!("{}:", label);
    for (index, option) in options.iter().enumerate() {
        println!("  {}. {}", index + 1, option);
    }
    loop {
        let raw = prompt(input, &format!("{} (1-{})", label, options.len()))?;
        if let Ok(n) = raw.trim().parse::<usize>() {
            if (1..=options.len()).contains(&n) {
                return Ok(options[n - 1].clone());
            }
        }
        println!("Enter a number between 1 and {}.", options.len());
    }
}
