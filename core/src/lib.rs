pub mod context;
pub mod countdown;
pub mod render;
pub mod signup;

// Re-exports for convenience
pub use context::{AppConfig, AppConfigExt, BackgroundTasks, ConfigError};
pub use countdown::{
    Clock, CountdownEngine, CountdownError, CountdownEvent, CountdownHandle, CountdownSnapshot,
    CountdownState, ManualClock, SystemClock, TargetInstant, Tick, compute,
};
pub use render::CountdownDisplay;
pub use signup::{
    EmailFieldState, LocalStorage, SignupError, SignupForm, SignupOutcome, StorageError,
    SubscriberList, classify_email, is_valid_email,
};
