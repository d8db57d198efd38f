//! Logging shims: forward to `defmt` on embedded targets, `log` on hosts,
//! and compile to nothing when neither feature is enabled.

#[cfg(feature = "defmt")]
macro_rules! morse_debug {
    ($($arg:tt)*) => { defmt::debug!($($arg)*) };
}

#[cfg(all(feature = "log", not(feature = "defmt")))]
macro_rules! morse_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(any(feature = "defmt", feature = "log")))]
macro_rules! morse_debug {
    ($($arg:tt)*) => {{
        if false {
            let _ = ($($arg)*,);
        }
    }};
}

#[cfg(feature = "defmt")]
macro_rules! morse_info {
    ($($arg:tt)*) => { defmt::info!($($arg)*) };
}

#[cfg(all(feature = "log", not(feature = "defmt")))]
macro_rules! morse_info {
    ($($arg:tt)*) => { log::info!($($arg)*) };
}

#[cfg(not(any(feature = "defmt", feature = "log")))]
macro_rules! morse_info {
    ($($arg:tt)*) => {{
        if false {
            let _ = ($($arg)*,);
        }
    }};
}

#[cfg(feature = "defmt")]
macro_rules! morse_warn {
    ($($arg:tt)*) => { defmt::warn!($($arg)*) };
}

#[cfg(all(feature = "log", not(feature = "defmt")))]
macro_rules! morse_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(any(feature = "defmt", feature = "log")))]
macro_rules! morse_warn {
    ($($arg:tt)*) => {{
        if false {
            let _ = ($($arg)*,);
        }
    }};
}

pub(crate) use morse_debug;
pub(crate) use morse_info;
pub(crate) use morse_warn;
