pub mod dashboard_consts {
    //! Dashboard Configuration Constants
    //!
    //! This module contains all configuration constants for the dashboard
    //! client, organized by functional area for clarity and maintainability.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Maximum number of buffered events between the refresher and the UI.
    pub const EVENT_QUEUE_SIZE: usize = 100;

    /// Maximum number of buffered snapshot updates between the refresher and the UI.
    pub const UPDATE_QUEUE_SIZE: usize = 8;

    /// Maximum number of buffered commands from the UI to the refresher.
    pub const COMMAND_QUEUE_SIZE: usize = 16;

    // =============================================================================
    // REFRESH CONFIGURATION
    // =============================================================================

    /// Periodic refresh cadence configuration.
    pub mod refresh {
        use std::time::Duration;

        /// Period of the recurring refresh timer (seconds).
        pub const INTERVAL_SECS: u64 = 30;

        /// Trailing window presets selectable from the UI, in days.
        pub const TIME_RANGE_PRESETS: [u32; 3] = [7, 14, 30];

        /// Default trailing window for conversation history, in days.
        pub const DEFAULT_TIME_RANGE_DAYS: u32 = 7;

        pub const fn interval() -> Duration {
            Duration::from_secs(INTERVAL_SECS)
        }
    }

    // =============================================================================
    // NETWORK CONFIGURATION
    // =============================================================================

    /// HTTP client timeouts for the analytics feeds.
    pub mod http {
        use std::time::Duration;

        pub const CONNECT_TIMEOUT_SECS: u64 = 10;
        pub const REQUEST_TIMEOUT_SECS: u64 = 10;

        pub const fn connect_timeout() -> Duration {
            Duration::from_secs(CONNECT_TIMEOUT_SECS)
        }

        pub const fn request_timeout() -> Duration {
            Duration::from_secs(REQUEST_TIMEOUT_SECS)
        }
    }

    // =============================================================================
    // PRESENTATION CONFIGURATION
    // =============================================================================

    /// Number of popular products shown in the ranking list and table.
    pub const TOP_PRODUCTS_SHOWN: usize = 5;

    /// Notification auto-dismiss configuration.
    pub mod notifications {
        use std::time::Duration;

        /// How long error notifications stay on screen.
        pub const ERROR_TTL_SECS: u64 = 5;

        /// How long success notifications stay on screen.
        pub const SUCCESS_TTL_SECS: u64 = 3;

        /// Maximum notifications kept on screen at once.
        pub const MAX_VISIBLE: usize = 4;

        pub const fn error_ttl() -> Duration {
            Duration::from_secs(ERROR_TTL_SECS)
        }

        pub const fn success_ttl() -> Duration {
            Duration::from_secs(SUCCESS_TTL_SECS)
        }
    }

    /// Report export configuration.
    pub mod reports {
        use std::time::Duration;

        /// Fixed preparation delay for report exports. The backend has no
        /// export endpoint yet, so preparation is simulated client-side.
        pub const PREPARATION_DELAY_SECS: u64 = 2;

        pub const fn preparation_delay() -> Duration {
            Duration::from_secs(PREPARATION_DELAY_SECS)
        }
    }
}
