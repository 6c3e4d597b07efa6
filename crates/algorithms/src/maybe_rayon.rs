//! Switch between rayon and sequential iteration.
//!
//! With the `parallel` feature this re-exports rayon's parallel iterators.
//! Without it (e.g. for WASM or single-threaded embedding), `into_par_iter`
//! falls back to `into_iter`, so kernels are written once against the same
//! method names.
#[cfg(feature = "parallel")]
pub use rayon::prelude::*;

#[cfg(not(feature = "parallel"))]
mod sequential {
    /// Sequential stand-in for `rayon::prelude::IntoParallelIterator`.
    ///
    /// The rest of the chain (`.map()`, `.collect()`, ...) resolves to the
    /// standard `Iterator` methods.
    pub trait IntoParallelIterator {
        type Iter;
        type Item;
        fn into_par_iter(self) -> Self::Iter;
    }

    impl<I: IntoIterator> IntoParallelIterator for I {
        type Iter = I::IntoIter;
        type Item = I::Item;
        fn into_par_iter(self) -> Self::Iter {
            self.into_iter()
        }
    }
}

#[cfg(not(feature = "parallel"))]
pub use sequential::*;
