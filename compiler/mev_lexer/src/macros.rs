// Thin wrappers so the `log` dependency can be compiled out.

#[cfg(feature = "logging")]
macro_rules! lex_trace {
    ($($arg:tt)*) => { log::trace!($($arg)*) };
}

#[cfg(not(feature = "logging"))]
macro_rules! lex_trace {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "logging")]
macro_rules! lex_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "logging"))]
macro_rules! lex_debug {
    ($($arg:tt)*) => {};
}
