pub mod ui_consts {
    //! Dashboard Configuration Constants
    //!
    //! Shared constants for the chart views and the UI event loop,
    //! organized by functional area.

    use std::time::Duration;

    // =============================================================================
    // SCORE SCALE
    // =============================================================================
    // Assessment scores live on a 1-5 scale. Axes start there and only widen
    // when data falls outside the scale (suggested-range semantics).

    /// Suggested lower bound of every score axis.
    pub const SCORE_AXIS_MIN: f64 = 1.0;

    /// Suggested upper bound of every score axis.
    pub const SCORE_AXIS_MAX: f64 = 5.0;

    /// Tick step on radial score axes.
    pub const SCORE_TICK_STEP: f64 = 1.0;

    // =============================================================================
    // UI EVENT LOOP
    // =============================================================================

    /// The maximum number of events to keep in the activity strip.
    pub const MAX_ACTIVITY_LOGS: usize = 50;

    /// Event buffer size between the insight worker and the UI loop.
    pub const EVENT_QUEUE_SIZE: usize = 32;

    /// How long the splash screen stays up before the view appears.
    pub const SPLASH_DURATION: Duration = Duration::from_secs(2);

    /// Poll interval for terminal input events.
    pub const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(100);

    // =============================================================================
    // INSIGHT MESSAGES
    // =============================================================================
    // User-facing texts for the insight panel. The application speaks Croatian
    // to its users; keep these aligned with the web frontend wording.

    /// Shown while an insight request is in flight.
    pub const INSIGHT_PENDING: &str = "Generiranje u tijeku...";

    /// Shown when the server rejects the request without an error payload.
    pub const INSIGHT_FAILED: &str = "Generiranje nije uspjelo.";

    /// Shown when the service cannot be reached at all.
    pub const INSIGHT_SERVICE_ERROR: &str = "Došlo je do pogreške pri pozivu usluge.";
}
