// src/constants.rs

/// Title shown above the checkbox list when neither `--title` nor a matrix file sets one.
pub const DEFAULT_TITLE: &str = "Jenkins Matrix Filter Generator";

/// Rows of the checkbox list visible at once in the terminal surface.
pub const TERMINAL_PAGE_SIZE: usize = 20;

/// Base log level index before any `-v`: errors only.
pub const BASE_VERBOSITY: u8 = 1;
