use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{GiError, Result};
use crate::models::{FuelPlan, NextIntake};
use crate::planner::calculations::{calculate_carb_rate, calculate_required_carbs};
use crate::utils::validation::is_valid_email;

/// A timed endurance session with its fuel plan and intake log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,

    pub name: String,

    pub started_at: DateTime<Utc>,

    pub duration_minutes: u32,

    /// Target intake in grams per hour.
    pub target_carbs_per_hour: f64,

    #[serde(default)]
    pub fuel_plan: FuelPlan,

    #[serde(default)]
    pub completed: bool,

    /// Plan item indices that have been taken.
    #[serde(default)]
    pub taken: Vec<usize>,

    /// Athlete contact for session reports.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub athlete_email: Option<String>,
}

impl Session {
    pub fn new(
        id: String,
        name: String,
        started_at: DateTime<Utc>,
        duration_minutes: u32,
        target_carbs_per_hour: f64,
        fuel_plan: FuelPlan,
    ) -> Self {
        Self {
            id,
            name,
            started_at,
            duration_minutes,
            target_carbs_per_hour,
            fuel_plan,
            completed: false,
            taken: Vec::new(),
            athlete_email: None,
        }
    }

    /// Attach a contact email. Rejects addresses that are not `local@domain.tld` shaped.
    pub fn set_athlete_email(&mut self, email: &str) -> Result<()> {
        let email = email.trim();
        if !is_valid_email(email) {
            return Err(GiError::InvalidInput(format!("invalid email: {}", email)));
        }
        self.athlete_email = Some(email.to_string());
        Ok(())
    }

    /// Planned carbohydrate grams.
    pub fn total_carbs(&self) -> f64 {
        self.fuel_plan.total_carbs()
    }

    /// Planned intake rate in g/h. Non-finite for zero-length sessions.
    pub fn planned_rate(&self) -> f64 {
        calculate_carb_rate(self.total_carbs(), self.duration_minutes as f64)
    }

    /// Grams needed to hit the target rate over the whole session.
    pub fn required_carbs(&self) -> f64 {
        calculate_required_carbs(self.duration_minutes as f64, self.target_carbs_per_hour)
    }

    /// Required minus planned grams. Negative when the plan overshoots.
    pub fn carbs_gap(&self) -> f64 {
        self.required_carbs() - self.total_carbs()
    }

    /// Whole minutes since the session started; zero before the start.
    pub fn elapsed_minutes(&self, now: DateTime<Utc>) -> u32 {
        let minutes = (now - self.started_at).num_minutes();
        u32::try_from(minutes.max(0)).unwrap_or(u32::MAX)
    }

    /// Earliest intake not yet taken. Missed intakes stay pending until taken.
    pub fn next_intake(&self) -> Option<NextIntake> {
        self.fuel_plan.next_untaken(&self.taken)
    }

    /// Mark a plan item as taken. Marking twice is a no-op.
    pub fn mark_taken(&mut self, index: usize) -> Result<()> {
        let len = self.fuel_plan.len();
        if index >= len {
            return Err(GiError::IntakeOutOfRange { index, len });
        }

        if !self.taken.contains(&index) {
            self.taken.push(index);
        }
        Ok(())
    }

    /// Carbohydrate grams from intakes marked as taken.
    pub fn taken_carbs(&self) -> f64 {
        let items = self.fuel_plan.items();
        self.taken
            .iter()
            .filter_map(|&i| items.get(i))
            .map(|item| item.carbs_total)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FuelPlanItem;
    use chrono::{Duration, TimeZone};

    fn sample_session() -> Session {
        let plan = FuelPlan::from_items(vec![
            FuelPlanItem::new(1, "Gel".to_string(), 1.0, 30, 25.0),
            FuelPlanItem::new(2, "Drink".to_string(), 1.0, 60, 35.0),
        ]);
        Session::new(
            "ride-1".to_string(),
            "Long ride".to_string(),
            Utc.with_ymd_and_hms(2026, 3, 2, 8, 0, 0).unwrap(),
            90,
            60.0,
            plan,
        )
    }

    #[test]
    fn test_rates() {
        let session = sample_session();
        assert!((session.total_carbs() - 60.0).abs() < 0.001);
        assert!((session.required_carbs() - 90.0).abs() < 0.001);
        assert!((session.planned_rate() - 40.0).abs() < 0.001);
        assert!((session.carbs_gap() - 30.0).abs() < 0.001);
    }

    #[test]
    fn test_elapsed_minutes() {
        let session = sample_session();
        let later = session.started_at + Duration::seconds(25 * 60 + 59);
        assert_eq!(session.elapsed_minutes(later), 25);

        let before = session.started_at - Duration::minutes(5);
        assert_eq!(session.elapsed_minutes(before), 0);
    }

    #[test]
    fn test_mark_taken() {
        let mut session = sample_session();
        session.mark_taken(1).unwrap();
        session.mark_taken(1).unwrap();
        assert_eq!(session.taken, vec![1]);
        assert!((session.taken_carbs() - 35.0).abs() < 0.001);

        let err = session.mark_taken(2).unwrap_err();
        assert!(matches!(err, GiError::IntakeOutOfRange { index: 2, len: 2 }));
    }

    #[test]
    fn test_next_intake_moves_past_taken() {
        let mut session = sample_session();
        assert_eq!(session.next_intake().unwrap().product_name, "Gel");

        session.mark_taken(0).unwrap();
        assert_eq!(session.next_intake().unwrap().product_name, "Drink");

        session.mark_taken(1).unwrap();
        assert!(session.next_intake().is_none());
    }

    #[test]
    fn test_set_athlete_email() {
        let mut session = sample_session();
        session.set_athlete_email(" coach@club.org ").unwrap();
        assert_eq!(session.athlete_email.as_deref(), Some("coach@club.org"));

        assert!(session.set_athlete_email("coach@club").is_err());
        assert_eq!(session.athlete_email.as_deref(), Some("coach@club.org"));
    }

    #[test]
    fn test_zero_duration_rate_is_not_finite() {
        let mut session = sample_session();
        session.duration_minutes = 0;
        assert!(!session.planned_rate().is_finite());
    }
}
