//! Miscellaneous utility functionality.
//!
//! Specifically, nothing in here is Lox-related, even though
//! it might be useful outside of this crate.
use macro_pub::macro_pub;

/// Builds a [`HashMap`](std::collections::HashMap) from `key => value` pairs.
///
/// Listing the same key twice is a programming error and trips a debug assertion.
#[macro_pub]
macro_rules! map {
    ($($key:expr => $value:expr),* $(,)?) => {{
        let mut map = ::std::collections::HashMap::new();
        $(
            let previous = map.insert($key, $value);
            debug_assert!(previous.is_none(), "duplicate key in map! literal");
        )*
        map
    }};
}
