//! Internal logging helpers. Everything in here compiles to nothing unless the `log` feature is enabled.

/// Evaluates an expression and logs how long that took
#[cfg(feature = "log")]
macro_rules! timed {
    ($name: literal, $expr: expr) => {{
        let start = std::time::Instant::now();
        let ret = $expr;
        log::trace!(concat!("time to run ", $name, ": {:?}"), start.elapsed());
        ret
    }};
}
#[cfg(not(feature = "log"))]
macro_rules! timed {
    ($name: literal, $expr: expr) => {
        $expr
    };
}

#[cfg(feature = "log")]
macro_rules! search_trace {
    ($($arg: tt)+) => {
        log::trace!($($arg)+)
    };
}
#[cfg(not(feature = "log"))]
macro_rules! search_trace {
    ($($arg: tt)+) => {};
}
