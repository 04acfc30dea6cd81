use crate::{
    error::{check_dimension, check_index, Error, Result},
    Scalar, Vector,
};

/// Mutable staging area for a [`Vector`].
///
/// The size is fixed when the builder is created. Elements are set with [`VectorBuilder::put`],
/// [`VectorBuilder::put_all`] and [`VectorBuilder::nulls_to_element`], and
/// [`VectorBuilder::build`] produces the finished vector once every index has been set.
///
/// `build` takes `&self` and returns a snapshot, so a builder can be modified and built again
/// afterwards. Vectors built earlier are unaffected.
///
/// # Examples
///
/// ```
/// # use exact_linalg::*;
/// let mut builder = VectorBuilder::new(3).unwrap();
/// builder.put(1, BigInt::from(7)).unwrap();
/// builder.nulls_to_element(BigInt::from(0));
/// let v = builder.build().unwrap();
/// assert_eq!(v.size(), 3);
/// assert_eq!(v[1], BigInt::from(7));
/// assert_eq!(v[3], BigInt::from(0));
/// ```
#[derive(Debug, Clone)]
pub struct VectorBuilder<T> {
    elements: Vec<Option<T>>,
}

impl<T: Scalar> VectorBuilder<T> {
    /// Creates a builder for a vector with `size` elements, none of which are set yet.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if `size` is 0.
    pub fn new(size: usize) -> Result<Self> {
        check_dimension("size", size)?;
        Ok(Self {
            elements: vec![None; size],
        })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.elements.len()
    }

    /// Sets the element at the 1-based `index`, replacing any earlier value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index` is not in `[1, size]`.
    pub fn put(&mut self, index: usize, value: T) -> Result<&mut Self> {
        check_index("index", self.size(), index)?;
        self.elements[index - 1] = Some(value);
        Ok(self)
    }

    /// Sets every element to `value`.
    pub fn put_all(&mut self, value: T) -> &mut Self {
        self.elements.fill(Some(value));
        self
    }

    /// Sets every element that hasn't been set yet to `value`.
    pub fn nulls_to_element(&mut self, value: T) -> &mut Self {
        for elem in self.elements.iter_mut().filter(|elem| elem.is_none()) {
            *elem = Some(value.clone());
        }
        self
    }

    /// Returns the finished [`Vector`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::IncompleteContainer`] if any element is still unset.
    pub fn build(&self) -> Result<Vector<T>> {
        let elements = self.elements.iter().cloned().collect::<Option<Vec<_>>>();
        match elements {
            Some(elements) => Ok(Vector::from_vec(elements)),
            None => Err(Error::IncompleteContainer {
                missing: self.elements.iter().filter(|elem| elem.is_none()).count(),
            }),
        }
    }
}
