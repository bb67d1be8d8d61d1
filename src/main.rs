use clap::Parser;
use std::path::Path;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use gi_diary_rs::cli::{Cli, Command};
use gi_diary_rs::clock::{Clock, FixedClock, SystemClock};
use gi_diary_rs::error::{GiError, Result};
use gi_diary_rs::interface::{
    NextIntakeCard, ProgressBar, collect_plan_items, display_fuel_plan, display_products,
    display_progress, display_session, prompt_duration_minutes, prompt_email, prompt_yes_no,
};
use gi_diary_rs::logging;
use gi_diary_rs::models::Session;
use gi_diary_rs::planner::{
    ScheduleConfig, calculate_carb_rate, calculate_required_carbs, generate_plan,
};
use gi_diary_rs::state::{SessionManager, load_products, load_sessions, save_sessions};
use gi_diary_rs::utils::{format_carb_rate, format_carbs, format_duration_minutes, from_iso_string};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let ctx = Context {
        sessions: cli.sessions,
        catalog: cli.catalog,
        color: !cli.no_color,
        now: SystemClock.now(),
    };

    match cli.command.unwrap_or_default() {
        Command::Progress => cmd_progress(&ctx),
        Command::Plan {
            name,
            duration,
            target,
            interval,
            first,
            start,
            email,
        } => {
            let config = ScheduleConfig {
                duration_minutes: duration,
                target_carbs_per_hour: target,
                interval_minutes: interval,
                first_intake_minutes: first,
            };
            cmd_plan(&ctx, name, config, start.as_deref(), email.as_deref())
        }
        Command::Build {
            name,
            duration,
            target,
            start,
        } => cmd_build(&ctx, name, duration, target, start.as_deref()),
        Command::Summary { id } => cmd_summary(&ctx, id.as_deref()),
        Command::Next { id, elapsed } => cmd_next(&ctx, id.as_deref(), elapsed),
        Command::Take { index, id } => cmd_take(&ctx, index, id.as_deref()),
        Command::Complete { id } => cmd_complete(&ctx, id.as_deref()),
        Command::Required { duration, target } => {
            let grams = calculate_required_carbs(duration, target);
            println!("{}", format_carbs(grams));
            Ok(())
        }
        Command::Rate { carbs, duration } => {
            let rate = calculate_carb_rate(carbs, duration);
            println!("{}", format_carb_rate(rate));
            Ok(())
        }
        Command::Products => cmd_products(&ctx),
    }
}

/// Settings shared by all commands. `now` is read once per invocation.
struct Context {
    sessions: String,
    catalog: String,
    color: bool,
    now: DateTime<Utc>,
}

impl Context {
    /// Load session history; a missing file is an empty history.
    fn load_manager(&self) -> Result<SessionManager> {
        let path = Path::new(&self.sessions);
        if !path.exists() {
            info!(path = %self.sessions, "no session history yet");
            return Ok(SessionManager::new(Vec::new()));
        }
        Ok(SessionManager::new(load_sessions(path)?))
    }

    fn save_manager(&self, manager: SessionManager) -> Result<()> {
        save_sessions(&self.sessions, &manager.into_sessions())?;
        debug!(path = %self.sessions, "saved session history");
        Ok(())
    }

    fn start_time(&self, start: Option<&str>) -> Result<DateTime<Utc>> {
        match start {
            Some(s) => from_iso_string(s),
            None => Ok(self.now),
        }
    }
}

/// Show overall and weekly progress.
fn cmd_progress(ctx: &Context) -> Result<()> {
    let manager = ctx.load_manager()?;
    let progress = ProgressBar::from_history(&manager, &FixedClock(ctx.now));

    display_progress(&progress, ctx.color);
    Ok(())
}

/// Generate a plan from the catalog and store it as a new session.
fn cmd_plan(
    ctx: &Context,
    name: String,
    config: ScheduleConfig,
    start: Option<&str>,
    email: Option<&str>,
) -> Result<()> {
    if config.duration_minutes == 0 {
        return Err(GiError::InvalidInput(
            "Session duration must be greater than zero".to_string(),
        ));
    }

    let started_at = ctx.start_time(start)?;
    let products = load_products(&ctx.catalog)?;
    if products.is_empty() {
        return Err(GiError::NoProducts);
    }

    let plan = generate_plan(&products, &config);
    info!(intakes = plan.len(), "generated fuel plan");

    let mut manager = ctx.load_manager()?;
    let mut session = Session::new(
        manager.next_id(),
        name,
        started_at,
        config.duration_minutes,
        config.target_carbs_per_hour,
        plan,
    );
    if let Some(email) = email {
        session.set_athlete_email(email)?;
    }

    display_session(&session, ctx.now, ctx.color);

    let id = session.id.clone();
    manager.add(session)?;
    ctx.save_manager(manager)?;
    println!("Saved session {}.", id);
    Ok(())
}

/// Enter a plan interactively and store it as a new session.
fn cmd_build(
    ctx: &Context,
    name: String,
    duration: Option<u32>,
    target: f64,
    start: Option<&str>,
) -> Result<()> {
    let started_at = ctx.start_time(start)?;
    let products = load_products(&ctx.catalog)?;
    display_products(&products);

    let duration = match duration {
        Some(d) if d > 0 => d,
        Some(_) => {
            return Err(GiError::InvalidInput(
                "Session duration must be greater than zero".to_string(),
            ));
        }
        None => prompt_duration_minutes()?,
    };

    let plan = collect_plan_items(&products, duration)?;
    println!();
    display_fuel_plan(&plan, duration);

    let mut manager = ctx.load_manager()?;
    let mut session = Session::new(manager.next_id(), name, started_at, duration, target, plan);

    if prompt_yes_no("Add a contact email?", false)? {
        let email = prompt_email()?;
        session.set_athlete_email(&email)?;
    }

    if !prompt_yes_no("Save session?", true)? {
        return Ok(());
    }

    let id = session.id.clone();
    manager.add(session)?;
    ctx.save_manager(manager)?;
    println!("Saved session {}.", id);
    Ok(())
}

fn cmd_summary(ctx: &Context, id: Option<&str>) -> Result<()> {
    let manager = ctx.load_manager()?;
    let session = manager.resolve(id)?;
    display_session(session, ctx.now, ctx.color);
    Ok(())
}

fn cmd_next(ctx: &Context, id: Option<&str>, elapsed: Option<u32>) -> Result<()> {
    let manager = ctx.load_manager()?;
    let session = manager.resolve(id)?;

    let elapsed = elapsed.unwrap_or_else(|| session.elapsed_minutes(ctx.now));
    let card = NextIntakeCard::new(session.next_intake(), elapsed);

    println!(
        "{} · {} elapsed",
        session.name,
        format_duration_minutes(elapsed)
    );
    println!("{}", card.render(ctx.color));
    Ok(())
}

fn cmd_take(ctx: &Context, index: usize, id: Option<&str>) -> Result<()> {
    let mut manager = ctx.load_manager()?;
    let session = manager.resolve_mut(id)?;
    session.mark_taken(index)?;

    let item = &session.fuel_plan.items()[index];
    println!(
        "Took {} ({}). Total taken: {}",
        item.product_name,
        format_carbs(item.carbs_total),
        format_carbs(session.taken_carbs())
    );

    ctx.save_manager(manager)
}

fn cmd_complete(ctx: &Context, id: Option<&str>) -> Result<()> {
    let mut manager = ctx.load_manager()?;
    let id = manager.resolve(id)?.id.clone();
    manager.complete(&id)?;
    println!("Completed session {}.", id);

    ctx.save_manager(manager)
}

fn cmd_products(ctx: &Context) -> Result<()> {
    display_products(&load_products(&ctx.catalog)?);
    Ok(())
}
