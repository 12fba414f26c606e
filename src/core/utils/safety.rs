//! Zero-Cost Safety Macros
//!
//! Debug builds keep normal bounds-checked indexing (clear panics in tests),
//! release builds use unchecked access on the hot snapshot/sweep loops.
//!
//! Usage:
//! ```rust
//! use collisions::fast;
//!
//! // Body buffer stride is 5: [posX, posY, velX, velY, radius]
//! let mut buffer = vec![0.0f32; 10];
//! let base = 5;
//! fast!(buffer, [base + 4] = 15.0);
//! assert_eq!(*fast!(buffer, [base + 4]), 15.0);
//! ```

/// Bounds-checked indexing in debug, `get_unchecked` in release.
///
/// Callers must guarantee the index is in range; debug builds verify it.
#[macro_export]
macro_rules! fast {
    // Read pattern: fast!(slice, [index])
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

    // Write pattern: fast!(slice, [index] = value)
    ($slice:expr, [$index:expr] = $val:expr) => {{
        #[cfg(debug_assertions)]
        {
            $slice[$index] = $val;
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { *$slice.get_unchecked_mut($index) = $val; }
        }
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn fast_read_returns_element() {
        let radii = vec![4.0f32, 7.0, 15.0];
        let r = *fast!(radii, [1]);
        assert_eq!(r, 7.0);
    }

    #[test]
    fn fast_write_stores_element() {
        let mut rgb = vec![0u8; 6];
        fast!(rgb, [3] = 255);
        assert_eq!(rgb[3], 255);
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn fast_bounds_check_in_debug() {
        let arr = vec![1.0f32, 2.0, 3.0];
        let _ = *fast!(arr, [10]);
    }
}
