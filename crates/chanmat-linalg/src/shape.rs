use crate::error::LinalgError;

/// The two array shapes the converter understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinalgShape {
    /// A two axis `rows x cols` array, implicitly one channel.
    Plane,
    /// A three axis `rows x cols x slices` array.
    Volume,
}

impl LinalgShape {
    /// Classify an array by its number of axes.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::UnsupportedShape`] for anything other than 2 or 3 axes.
    ///
    /// # Examples
    ///
    /// ```
    /// use chanmat_linalg::LinalgShape;
    ///
    /// assert_eq!(LinalgShape::from_ndim(2).unwrap(), LinalgShape::Plane);
    /// assert_eq!(LinalgShape::from_ndim(3).unwrap(), LinalgShape::Volume);
    /// assert!(LinalgShape::from_ndim(4).is_err());
    /// ```
    pub fn from_ndim(ndim: usize) -> Result<Self, LinalgError> {
        match ndim {
            2 => Ok(LinalgShape::Plane),
            3 => Ok(LinalgShape::Volume),
            _ => Err(LinalgError::UnsupportedShape(ndim)),
        }
    }

    /// Number of axes of this shape.
    pub fn ndim(&self) -> usize {
        match self {
            LinalgShape::Plane => 2,
            LinalgShape::Volume => 3,
        }
    }
}

impl std::fmt::Display for LinalgShape {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            LinalgShape::Plane => write!(f, "plane"),
            LinalgShape::Volume => write!(f, "volume"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_from_ndim() {
        assert_eq!(LinalgShape::from_ndim(2).ok(), Some(LinalgShape::Plane));
        assert_eq!(LinalgShape::from_ndim(3).ok(), Some(LinalgShape::Volume));
        for ndim in [0, 1, 4, 5] {
            assert!(matches!(
                LinalgShape::from_ndim(ndim),
                Err(LinalgError::UnsupportedShape(n)) if n == ndim
            ));
        }
    }

    #[test]
    fn shape_ndim_roundtrip() {
        for shape in [LinalgShape::Plane, LinalgShape::Volume] {
            assert_eq!(LinalgShape::from_ndim(shape.ndim()).ok(), Some(shape));
        }
        assert_eq!(LinalgShape::Volume.to_string(), "volume");
    }
}
