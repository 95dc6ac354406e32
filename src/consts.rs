pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! This module contains all configuration constants for the dashboard
    //! client, organized by functional area for clarity and maintainability.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of status events to keep in the status feed.
    pub const MAX_STATUS_EVENTS: usize = 50;

    /// Maximum number of buffered events between fetch tasks and the UI loop.
    pub const EVENT_QUEUE_SIZE: usize = 100;

    // =============================================================================
    // DATE CONFIGURATION
    // =============================================================================

    /// How far back the date picker reaches, in days. The selectable window
    /// is `[today - DATE_WINDOW_DAYS, today]`.
    pub const DATE_WINDOW_DAYS: i64 = 30;

    // =============================================================================
    // NETWORK CONFIGURATION
    // =============================================================================

    /// Content fetching retry configuration
    pub mod fetching {
        use std::time::Duration;

        /// Total request budget per fetch. Two failed requests settle the
        /// fetch key into the error state; no third request is made.
        pub const MAX_ATTEMPTS: u32 = 2;

        /// Base delay before retrying a failed request (milliseconds).
        /// Doubles per attempt.
        pub const INITIAL_BACKOFF_MS: u64 = 500;

        /// Request and connect timeout for API calls (seconds). A timeout
        /// surfaces as a transport error and counts against the budget.
        pub const REQUEST_TIMEOUT_SECS: u64 = 10;

        /// Helper function to get initial backoff duration
        pub const fn initial_backoff() -> Duration {
            Duration::from_millis(INITIAL_BACKOFF_MS)
        }

        /// Helper function to get the request timeout
        pub const fn request_timeout() -> Duration {
            Duration::from_secs(REQUEST_TIMEOUT_SECS)
        }
    }

    // =============================================================================
    // UI CONFIGURATION
    // =============================================================================

    /// Number of placeholder skeleton cards shown while a fetch is in flight.
    pub const SKELETON_CARDS: usize = 6;

    /// How long the splash screen stays up before the dashboard appears.
    pub const SPLASH_DURATION_SECS: u64 = 1;

    /// Lines scrolled per page-up/page-down press.
    pub const PAGE_SCROLL_LINES: u16 = 10;
}
