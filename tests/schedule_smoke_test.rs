use chrono::{Duration, TimeZone, Utc};

use gi_diary_rs::interface::{IntakeStatus, NextIntakeCard};
use gi_diary_rs::models::{FuelProduct, Session};
use gi_diary_rs::planner::{ScheduleConfig, calculate_required_carbs, generate_plan};

fn sample_products() -> Vec<FuelProduct> {
    vec![
        FuelProduct {
            id: 1,
            name: "Energy Gel".to_string(),
            carbs_per_serving: 22.0,
            serving_label: "gel".to_string(),
        },
        FuelProduct {
            id: 2,
            name: "Drink Mix".to_string(),
            carbs_per_serving: 40.0,
            serving_label: "500ml".to_string(),
        },
        FuelProduct {
            id: 3,
            name: "Chews".to_string(),
            carbs_per_serving: 12.0,
            serving_label: "2 chews".to_string(),
        },
    ]
}

#[test]
fn test_generate_plan_stays_inside_session() {
    let config = ScheduleConfig::new(150, 80.0);
    let plan = generate_plan(&sample_products(), &config);

    assert!(!plan.is_empty());
    for item in &plan {
        assert!(
            item.timing_minutes < 150,
            "Intake at minute {} is after the session",
            item.timing_minutes
        );
    }
}

#[test]
fn test_generate_plan_total_near_required() {
    let config = ScheduleConfig::new(180, 60.0);
    let plan = generate_plan(&sample_products(), &config);

    let required = calculate_required_carbs(180.0, 60.0);
    let largest_serving = 40.0;
    assert!(
        (plan.total_carbs() - required).abs() <= largest_serving,
        "Planned {} vs required {}",
        plan.total_carbs(),
        required
    );
}

#[test]
fn test_generate_plan_empty_catalog() {
    let plan = generate_plan(&[], &ScheduleConfig::new(120, 60.0));
    assert!(plan.is_empty(), "Plan should be empty without products");
}

#[test]
fn test_generate_plan_zero_target() {
    let plan = generate_plan(&sample_products(), &ScheduleConfig::new(120, 0.0));
    assert!(plan.is_empty(), "Plan should be empty with zero target");
}

#[test]
fn test_timings_are_monotonic() {
    let config = ScheduleConfig {
        interval_minutes: 15,
        first_intake_minutes: 10,
        ..ScheduleConfig::new(120, 90.0)
    };
    let plan = generate_plan(&sample_products(), &config);

    for window in plan.items().windows(2) {
        assert!(window[1].timing_minutes > window[0].timing_minutes);
        assert_eq!((window[1].timing_minutes - 10) % 15, 0);
    }
}

#[test]
fn test_session_next_intake_card_follows_clock() {
    let config = ScheduleConfig::new(90, 60.0);
    let plan = generate_plan(&sample_products(), &config);
    let first_timing = plan.sorted_by_timing().items()[0].timing_minutes;

    let start = Utc.with_ymd_and_hms(2026, 6, 1, 9, 0, 0).unwrap();
    let mut session = Session::new("s1".to_string(), "Race".to_string(), start, 90, 60.0, plan);

    let now = start + Duration::minutes(first_timing as i64);
    let card = NextIntakeCard::new(session.next_intake(), session.elapsed_minutes(now));
    assert_eq!(card.status(), IntakeStatus::Ready);

    // Nothing taken: the first intake is still pending at the end
    let end = start + Duration::minutes(200);
    let card = NextIntakeCard::new(session.next_intake(), session.elapsed_minutes(end));
    assert_eq!(
        card.status(),
        IntakeStatus::Overdue {
            by_minutes: 200 - first_timing
        }
    );

    for index in 0..session.fuel_plan.len() {
        session.mark_taken(index).unwrap();
    }
    let card = NextIntakeCard::new(session.next_intake(), session.elapsed_minutes(end));
    assert_eq!(card.status(), IntakeStatus::Finished);
}
