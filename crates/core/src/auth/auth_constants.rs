/// Required PIN length, in ASCII digits.
pub const PIN_LENGTH: usize = 4;

/// Failed attempts tolerated inside the window before login is locked.
pub const MAX_LOGIN_ATTEMPTS: i64 = 5;

/// Sliding window for counting failed attempts, in minutes.
pub const ATTEMPT_WINDOW_MINUTES: i64 = 5;
