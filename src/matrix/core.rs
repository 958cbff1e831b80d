//! Core Matrix type

use crate::dtype::{Element, Promote};
use crate::error::{Error, Result};
use rand::Rng;
use rand_distr::Distribution;
use std::fmt;
use std::ops::{Index, IndexMut};

/// Fixed-shape matrix of `M` rows by `N` columns
///
/// `Matrix` is the fundamental data structure in lazymat. The shape is part
/// of the type, not a runtime field: element-wise operations require equal
/// shapes, products require matching inner dimensions, and `identity` exists
/// only for square types - all enforced by the compiler. Storage is a
/// row-major `Vec` of exactly `M * N` elements.
///
/// Value-producing operations always allocate a fresh matrix; only the
/// compound-assignment operators mutate in place.
///
/// # Example
///
/// ```
/// use lazymat::matrix::Matrix;
///
/// let a = Matrix::<f64, 2, 2>::from_rows([[1.0, 2.0], [2.0, 1.0]]);
/// let b = Matrix::<f64, 2, 2>::identity();
/// assert_eq!(&a * &b, a);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<T: Element, const M: usize, const N: usize> {
    /// Row-major element storage, length `M * N`
    pub(crate) data: Vec<T>,
}

/// A row vector with `N` elements
pub type RowVector<T, const N: usize> = Matrix<T, 1, N>;

/// A column vector with `N` elements
pub type ColVector<T, const N: usize> = Matrix<T, N, 1>;

impl<T: Element, const M: usize, const N: usize> Matrix<T, M, N> {
    /// Create a zero-filled matrix
    pub fn zeros() -> Self {
        Self {
            data: vec![T::zero(); M * N],
        }
    }

    /// Create a matrix from nested row arrays
    ///
    /// The element count is checked by the type system: an array with the
    /// wrong number of rows or columns does not compile.
    pub fn from_rows(rows: [[T; N]; M]) -> Self {
        Self {
            data: rows.into_iter().flatten().collect(),
        }
    }

    /// Create a matrix from a row-major slice of data
    ///
    /// # Panics
    ///
    /// Panics if `data.len()` does not equal `M * N`. For a fallible
    /// alternative, use [`Self::try_from_slice`].
    pub fn from_slice(data: &[T]) -> Self {
        Self::try_from_slice(data).expect("Matrix::from_slice failed")
    }

    /// Create a matrix from a row-major slice of data (fallible version)
    ///
    /// Returns [`Error::ShapeMismatch`] if `data.len()` does not equal
    /// `M * N`.
    pub fn try_from_slice(data: &[T]) -> Result<Self> {
        if data.len() != M * N {
            return Err(Error::shape_mismatch(M * N, data.len()));
        }
        Ok(Self {
            data: data.to_vec(),
        })
    }

    /// Create a matrix from a row-major `Vec`, taking ownership
    ///
    /// Returns [`Error::ShapeMismatch`] if `data.len()` does not equal
    /// `M * N`.
    pub fn from_vec(data: Vec<T>) -> Result<Self> {
        if data.len() != M * N {
            return Err(Error::shape_mismatch(M * N, data.len()));
        }
        Ok(Self { data })
    }

    /// Create a matrix by evaluating `f(row, col)` for every position
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(M * N);
        for i in 0..M {
            for j in 0..N {
                data.push(f(i, j));
            }
        }
        Self { data }
    }

    /// Create a matrix with every element set to `value`
    ///
    /// Accepts any scalar type that promotes to `T` without widening;
    /// anything else is rejected at compile time.
    pub fn constant<S>(value: S) -> Self
    where
        S: Element,
        T: Promote<S, Output = T>,
    {
        Self {
            data: vec![<T as Promote<S>>::promote_rhs(value); M * N],
        }
    }

    /// Create a matrix filled with ones
    ///
    /// Equivalent to `constant(1)`.
    pub fn ones() -> Self {
        Self {
            data: vec![T::one(); M * N],
        }
    }

    /// Create a matrix with every element drawn uniformly from [0, 1)
    ///
    /// Samples from the process-wide generator, which is lazily initialized
    /// on first use and never reseeded. Callers needing reproducibility
    /// should use [`Self::random_with`] with their own generator.
    pub fn random() -> Self {
        let mut rng = rand::rng();
        Self::from_fn(|_, _| T::from_f64(rng.random::<f64>()))
    }

    /// Create a matrix by sampling every element independently from `dist`
    ///
    /// # Example
    ///
    /// ```
    /// use lazymat::matrix::Matrix;
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use rand_distr::StandardNormal;
    ///
    /// let mut rng = StdRng::seed_from_u64(42);
    /// let m = Matrix::<f64, 3, 3>::random_with(&StandardNormal, &mut rng);
    /// assert_eq!(m.size(), 9);
    /// ```
    pub fn random_with<D, G>(dist: &D, rng: &mut G) -> Self
    where
        D: Distribution<T>,
        G: Rng + ?Sized,
    {
        Self::from_fn(|_, _| dist.sample(rng))
    }

    /// Number of rows
    #[inline]
    pub const fn rows(&self) -> usize {
        M
    }

    /// Number of columns
    #[inline]
    pub const fn cols(&self) -> usize {
        N
    }

    /// Total number of elements
    #[inline]
    pub const fn size(&self) -> usize {
        M * N
    }

    /// Get a reference to the element at `(i, j)`
    ///
    /// Returns [`Error::IndexOutOfBounds`] if either index is out of range.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Result<&T> {
        if i >= M {
            return Err(Error::index_out_of_bounds(i, M));
        }
        if j >= N {
            return Err(Error::index_out_of_bounds(j, N));
        }
        Ok(&self.data[i * N + j])
    }

    /// Get a mutable reference to the element at `(i, j)`
    ///
    /// Returns [`Error::IndexOutOfBounds`] if either index is out of range.
    #[inline]
    pub fn get_mut(&mut self, i: usize, j: usize) -> Result<&mut T> {
        if i >= M {
            return Err(Error::index_out_of_bounds(i, M));
        }
        if j >= N {
            return Err(Error::index_out_of_bounds(j, N));
        }
        Ok(&mut self.data[i * N + j])
    }

    /// Get a reference to the `i`th element of a row or column vector
    ///
    /// Returns [`Error::NotVector`] unless `M == 1` or `N == 1`, and
    /// [`Error::IndexOutOfBounds`] past the end.
    #[inline]
    pub fn at(&self, i: usize) -> Result<&T> {
        if M != 1 && N != 1 {
            return Err(Error::not_vector(M, N));
        }
        if i >= M * N {
            return Err(Error::index_out_of_bounds(i, M * N));
        }
        Ok(&self.data[i])
    }

    /// Get a mutable reference to the `i`th element of a row or column vector
    ///
    /// Same validation as [`Self::at`].
    #[inline]
    pub fn at_mut(&mut self, i: usize) -> Result<&mut T> {
        if M != 1 && N != 1 {
            return Err(Error::not_vector(M, N));
        }
        if i >= M * N {
            return Err(Error::index_out_of_bounds(i, M * N));
        }
        Ok(&mut self.data[i])
    }

    /// View the elements as a row-major slice
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// View the elements as a mutable row-major slice
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Return the transpose, with rows and columns swapped
    pub fn transpose(&self) -> Matrix<T, N, M> {
        let mut out = Matrix::<T, N, M>::zeros();
        for i in 0..M {
            for j in 0..N {
                out.data[j * M + i] = self.data[i * N + j];
            }
        }
        out
    }

    /// Apply `f` to every element, producing a matrix of the results
    pub fn map<U: Element>(&self, mut f: impl FnMut(T) -> U) -> Matrix<U, M, N> {
        Matrix {
            data: self.data.iter().map(|&v| f(v)).collect(),
        }
    }

    /// Convert every element to another element type
    ///
    /// Conversion goes through f64 (the [`Element`] bridge), truncating
    /// toward zero when narrowing into an integer type.
    pub fn cast<U: Element>(&self) -> Matrix<U, M, N> {
        self.map(|v| U::from_f64(v.to_f64()))
    }
}

impl<T: Element, const D: usize> Matrix<T, D, D> {
    /// Create an identity matrix
    ///
    /// Only defined for square shapes; requesting it for a non-square type
    /// does not compile.
    pub fn identity() -> Self {
        let mut out = Self::zeros();
        for i in 0..D {
            out.data[i * D + i] = T::one();
        }
        out
    }
}

impl<T: Element> Matrix<T, 1, 1> {
    /// Extract the single element of a 1x1 matrix
    #[inline]
    pub fn item(&self) -> T {
        self.data[0]
    }
}

impl<T: Element, const M: usize, const N: usize> Default for Matrix<T, M, N> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T: Element, const M: usize, const N: usize> Index<(usize, usize)> for Matrix<T, M, N> {
    type Output = T;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &T {
        match self.get(i, j) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T: Element, const M: usize, const N: usize> IndexMut<(usize, usize)> for Matrix<T, M, N> {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        match self.get_mut(i, j) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

/// Linear indexing for row and column vectors
///
/// Panics for non-vector shapes; see [`Matrix::at`] for the fallible form.
impl<T: Element, const M: usize, const N: usize> Index<usize> for Matrix<T, M, N> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        match self.at(i) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T: Element, const M: usize, const N: usize> IndexMut<usize> for Matrix<T, M, N> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        match self.at_mut(i) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

macro_rules! impl_scalar_decay {
    ($($ty:ty),+ $(,)?) => {
        $(
            /// Scalar decay: a 1x1 matrix converts to its element
            impl From<Matrix<$ty, 1, 1>> for $ty {
                #[inline]
                fn from(mat: Matrix<$ty, 1, 1>) -> $ty {
                    mat.data[0]
                }
            }
        )+
    };
}

impl_scalar_decay!(f64, f32, i64, i32, i16, i8, u64, u32, u16, u8);

impl<T: Element, const M: usize, const N: usize> fmt::Display for Matrix<T, M, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for i in 0..M {
            if i > 0 {
                write!(f, "\n ")?;
            }
            write!(f, "[")?;
            for j in 0..N {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", self.data[i * N + j])?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}
