//! Read-only 2D views: the [`GridView`] contract and the zero-copy
//! transpose adapter.
//!
//! An ADI half-step runs the same line kernel in two orientations; the
//! second half-step hands the kernel [`Transposed`] views so "sweep along
//! the other axis" is index remapping, not a copied field.

use crate::grid2d::Field2D;

/// Read-only indexing contract over a 2D grid.
///
/// `rows()` is the line-index extent (outer), `cols()` the extent along a
/// line (inner). Implemented by [`Field2D`] (rows = `nx`) and
/// [`Transposed`] (rows = `ny`). `Sync` is required so views can be read
/// concurrently from parallel line tasks.
pub trait GridView: Sync {
    /// Number of lines, boundary lines included.
    fn rows(&self) -> usize;

    /// Length of each line, boundary nodes included.
    fn cols(&self) -> usize;

    /// Value at line `i`, position `j`.
    fn at(&self, i: usize, j: usize) -> f64;
}

impl GridView for Field2D {
    fn rows(&self) -> usize {
        self.nx()
    }

    fn cols(&self) -> usize {
        self.ny()
    }

    #[inline]
    fn at(&self, i: usize, j: usize) -> f64 {
        Field2D::at(self, i, j)
    }
}

/// Zero-copy transposed view of a [`Field2D`].
///
/// `view.at(i, j) == field.at(j, i)`; no storage is duplicated.
#[derive(Clone, Copy, Debug)]
pub struct Transposed<'a> {
    field: &'a Field2D,
}

impl<'a> Transposed<'a> {
    pub(crate) fn new(field: &'a Field2D) -> Self {
        Self { field }
    }
}

impl GridView for Transposed<'_> {
    fn rows(&self) -> usize {
        self.field.ny()
    }

    fn cols(&self) -> usize {
        self.field.nx()
    }

    #[inline]
    fn at(&self, i: usize, j: usize) -> f64 {
        self.field.at(j, i)
    }
}
