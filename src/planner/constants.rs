/// Minutes either side of a planned intake during which it counts as ready.
pub const READY_WINDOW_MINUTES: u32 = 2;

/// Default target intake rate (g/h).
pub const DEFAULT_TARGET_CARBS_PER_HOUR: f64 = 60.0;

/// Default spacing between generated intakes.
pub const DEFAULT_INTAKE_INTERVAL_MINUTES: u32 = 20;

/// Default offset of the first generated intake.
pub const DEFAULT_FIRST_INTAKE_MINUTES: u32 = 15;

/// Upper bound on generated intakes per session.
pub const MAX_INTAKES: usize = 100;

// ─────────────────────────────────────────────────────────────────────────────
// Display thresholds
// ─────────────────────────────────────────────────────────────────────────────

/// Progress at or above this percentage is shown as on track.
pub const PROGRESS_ON_TRACK_PERCENT: f64 = 50.0;

/// Progress at or above this percentage is shown as complete.
pub const PROGRESS_COMPLETE_PERCENT: f64 = 100.0;

/// Default width of the text progress bar, in cells.
pub const PROGRESS_BAR_WIDTH: usize = 20;

/// Gap between planned and required carbs (g) below which a plan counts as on target.
pub const CARBS_GAP_TOLERANCE: f64 = 5.0;
