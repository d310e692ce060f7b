//! Checked-in-debug indexing for the hot update loop.
//!
//! The occupancy index is hit several times per particle per tick. Callers
//! always run `in_bounds` first, so release builds skip the second bounds check.
//!
//! Usage:
//! ```rust
//! use sandfall_engine::fast;
//!
//! let mut live = vec![0u16; 4];
//! fast!(live, [2] = 1);
//! assert_eq!(*fast!(live, [2]), 1);
//! ```

/// Slice access that is bounds-checked in debug and unchecked in release.
///
/// Only use with an index that was derived from coordinates already
/// validated against the owning grid.
#[macro_export]
macro_rules! fast {
    ($slice:expr, [$index:expr]) => {{
        #[cfg(debug_assertions)]
        {
            &$slice[$index]
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { $slice.get_unchecked($index) }
        }
    }};

    ($slice:expr, [$index:expr] = $val:expr) => {{
        #[cfg(debug_assertions)]
        {
            $slice[$index] = $val;
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe {
                *$slice.get_unchecked_mut($index) = $val;
            }
        }
    }};
}
