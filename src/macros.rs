//! Crate-internal logging shim over the `log` facade.
//!
//! `game_log!(debug, "...", args)` forwards to `log::debug!` when the
//! `logging` feature is on and type-checks the arguments without emitting
//! anything when it is off.

#[cfg(feature = "logging")]
macro_rules! game_log {
    ($level:ident, $($arg:tt)+) => {
        ::log::$level!(target: "chess_rules", $($arg)+)
    };
}

#[cfg(not(feature = "logging"))]
macro_rules! game_log {
    ($level:ident, $($arg:tt)+) => {
        if false {
            let _ = ::std::format!($($arg)+);
        }
    };
}
