use chrono::{DateTime, Utc};
use owo_colors::OwoColorize;

use crate::clock::Clock;
use crate::models::{FuelPlan, FuelProduct, NextIntake, Session};
use crate::planner::calculations::calculate_carb_rate;
use crate::planner::constants::{
    CARBS_GAP_TOLERANCE, PROGRESS_BAR_WIDTH, PROGRESS_COMPLETE_PERCENT, PROGRESS_ON_TRACK_PERCENT,
    READY_WINDOW_MINUTES,
};
use crate::state::SessionManager;
use crate::utils::format::{
    format_carb_rate, format_carbs, format_duration_minutes, to_iso_string,
};

/// Display tone, mapped to a terminal color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Info,
    Warning,
    Danger,
    Muted,
}

impl Tone {
    pub fn paint(self, text: &str, color: bool) -> String {
        if !color {
            return text.to_string();
        }
        match self {
            Tone::Success => text.green().to_string(),
            Tone::Info => text.blue().to_string(),
            Tone::Warning => text.yellow().to_string(),
            Tone::Danger => text.red().to_string(),
            Tone::Muted => text.dimmed().to_string(),
        }
    }
}

/// Session completion progress, optionally with this week's counters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProgressBar {
    pub completed: u32,
    pub total: u32,
    pub week_completed: Option<u32>,
    pub week_total: Option<u32>,
}

impl ProgressBar {
    pub fn new(completed: u32, total: u32) -> Self {
        Self {
            completed,
            total,
            ..Default::default()
        }
    }

    /// Overall counts plus the counts for the clock's current ISO week.
    pub fn from_history(manager: &SessionManager, clock: &impl Clock) -> Self {
        let (week_completed, week_total) = manager.week_counts(clock.now());
        Self::new(manager.completed_count(), manager.len() as u32)
            .with_week(week_completed, week_total)
    }

    pub fn with_week(mut self, week_completed: u32, week_total: u32) -> Self {
        self.week_completed = Some(week_completed);
        self.week_total = Some(week_total);
        self
    }

    /// Completion percentage in `0..=100`. Zero when there are no sessions.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.completed as f64 / self.total as f64 * 100.0).min(100.0)
    }

    pub fn tone(&self) -> Tone {
        let percent = self.percent();
        if percent >= PROGRESS_COMPLETE_PERCENT {
            Tone::Success
        } else if percent >= PROGRESS_ON_TRACK_PERCENT {
            Tone::Info
        } else {
            Tone::Warning
        }
    }

    pub fn label(&self) -> String {
        let mut label = format!("{}/{} sessions", self.completed, self.total);
        if let (Some(done), Some(total)) = (self.week_completed, self.week_total) {
            label.push_str(&format!(" · this week {}/{}", done, total));
        }
        label
    }

    /// Text bar such as `[#####-----] 50%`.
    pub fn render(&self, width: usize) -> String {
        let percent = self.percent();
        let filled = ((percent / 100.0) * width as f64).round() as usize;
        let filled = filled.min(width);
        format!(
            "[{}{}] {:.0}%",
            "#".repeat(filled),
            "-".repeat(width - filled),
            percent
        )
    }
}

/// Where the session clock stands relative to the next planned intake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntakeStatus {
    Finished,
    Ready,
    Upcoming { in_minutes: u32 },
    Overdue { by_minutes: u32 },
}

/// Live card for the next intake.
#[derive(Debug, Clone, PartialEq)]
pub struct NextIntakeCard {
    pub next: Option<NextIntake>,
    pub elapsed_minutes: u32,
}

impl NextIntakeCard {
    pub fn new(next: Option<NextIntake>, elapsed_minutes: u32) -> Self {
        Self {
            next,
            elapsed_minutes,
        }
    }

    pub fn status(&self) -> IntakeStatus {
        let Some(next) = &self.next else {
            return IntakeStatus::Finished;
        };

        let timing = next.timing_minute;
        let elapsed = self.elapsed_minutes;
        if timing.abs_diff(elapsed) <= READY_WINDOW_MINUTES {
            IntakeStatus::Ready
        } else if timing > elapsed {
            IntakeStatus::Upcoming {
                in_minutes: timing - elapsed,
            }
        } else {
            IntakeStatus::Overdue {
                by_minutes: elapsed - timing,
            }
        }
    }

    pub fn tone(&self) -> Tone {
        match self.status() {
            IntakeStatus::Finished => Tone::Muted,
            IntakeStatus::Ready => Tone::Success,
            IntakeStatus::Upcoming { .. } => Tone::Info,
            IntakeStatus::Overdue { .. } => Tone::Danger,
        }
    }

    pub fn headline(&self) -> String {
        let name = self
            .next
            .as_ref()
            .map(|n| n.product_name.as_str())
            .unwrap_or_default();

        match self.status() {
            IntakeStatus::Finished => "All intakes done".to_string(),
            IntakeStatus::Ready => format!("Take {} now", name),
            IntakeStatus::Upcoming { in_minutes } => {
                format!("{} in {}", name, format_duration_minutes(in_minutes))
            }
            IntakeStatus::Overdue { by_minutes } => {
                format!("{} overdue by {}", name, format_duration_minutes(by_minutes))
            }
        }
    }

    /// Carbs per serving and planned time, e.g. `"25g at 1h 15min"`.
    pub fn detail(&self) -> Option<String> {
        self.next.as_ref().map(|n| {
            format!(
                "{} at {}",
                format_carbs(n.carbs_per_serving),
                format_duration_minutes(n.timing_minute)
            )
        })
    }

    pub fn render(&self, color: bool) -> String {
        let headline = self.tone().paint(&self.headline(), color);
        match self.detail() {
            Some(detail) => format!("{}\n  {}", headline, detail),
            None => headline,
        }
    }
}

/// Display a fuel plan as a table with totals.
pub fn display_fuel_plan(plan: &FuelPlan, duration_minutes: u32) {
    if plan.is_empty() {
        println!("No intakes planned.");
        return;
    }

    let max_name_len = plan
        .iter()
        .map(|i| i.product_name.len())
        .max()
        .unwrap_or(10);

    for (i, item) in plan.iter().enumerate() {
        println!(
            "{:>3}. {:>9}  {:<width$}  x{:<4} {:>7}",
            i,
            format_duration_minutes(item.timing_minutes),
            item.product_name,
            item.quantity,
            format_carbs(item.carbs_total),
            width = max_name_len
        );
    }

    println!();
    println!("Total carbs: {}", format_carbs(plan.total_carbs()));
    if duration_minutes > 0 {
        let rate = calculate_carb_rate(plan.total_carbs(), duration_minutes as f64);
        println!("Planned rate: {}", format_carb_rate(rate));
    }
}

/// Display a session with its plan, targets and next intake.
pub fn display_session(session: &Session, now: DateTime<Utc>, color: bool) {
    println!();
    println!("=== {} ({}) ===", session.name, session.id);
    println!("Started: {}", to_iso_string(&session.started_at));
    println!(
        "Duration: {} | Target: {}",
        format_duration_minutes(session.duration_minutes),
        format_carb_rate(session.target_carbs_per_hour)
    );
    println!();

    display_fuel_plan(&session.fuel_plan, session.duration_minutes);

    let gap = session.carbs_gap();
    let gap_tone = if gap.abs() <= CARBS_GAP_TOLERANCE {
        Tone::Success
    } else {
        Tone::Warning
    };
    println!("Required carbs: {}", format_carbs(session.required_carbs()));
    println!(
        "Gap to target: {}",
        gap_tone.paint(&format_carbs(gap), color)
    );
    println!(
        "Taken so far: {} ({} of {} intakes)",
        format_carbs(session.taken_carbs()),
        session.taken.len(),
        session.fuel_plan.len()
    );

    if session.completed {
        println!("{}", Tone::Muted.paint("Session completed.", color));
    } else {
        let elapsed = session.elapsed_minutes(now);
        let card = NextIntakeCard::new(session.next_intake(), elapsed);
        println!();
        println!("{}", card.render(color));
    }
    println!();
}

/// Display the session progress bar.
pub fn display_progress(progress: &ProgressBar, color: bool) {
    let bar = progress.tone().paint(&progress.render(PROGRESS_BAR_WIDTH), color);
    println!("{}", bar);
    println!("{}", progress.label());
}

/// Display the fuel product catalog.
pub fn display_products(products: &[FuelProduct]) {
    if products.is_empty() {
        println!("Fuel catalog: (none)");
        return;
    }

    println!();
    println!("=== Fuel catalog ({} items) ===", products.len());
    println!();

    for product in products {
        let label = if product.serving_label.is_empty() {
            String::new()
        } else {
            format!(" per {}", product.serving_label)
        };
        println!(
            "  [{}] {} - {}{}",
            product.id,
            product.name,
            format_carbs(product.carbs_per_serving),
            label
        );
    }

    println!();
}
