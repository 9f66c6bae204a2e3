//! # Python Bindings
//!
//! PyO3 bindings for the braid-word library.
//!
//! ## Python API
//!
//! ```python
//! from artin import Braid, IllegalTransformationException
//!
//! # From an explicit generator sequence
//! braid = Braid([1, -2, 3])
//!
//! # Or from the built-in knot catalog
//! trefoil = Braid("3_1")
//!
//! n, generators = braid.values()
//!
//! # Markov moves
//! braid.stabilization()
//! braid.stabilization(inverse=True)
//! if braid.is_destabilization_performable():
//!     braid.destabilization()
//! braid.conjugation(1)
//!
//! # Relations and free reduction
//! for index in braid.braid_relation1_performable_indices():
//!     ...
//! braid.shift_left()
//! ```

use pyo3::create_exception;
use pyo3::exceptions::{PyException, PyKeyError};
use pyo3::prelude::*;

use crate::core::{BraidError, BraidWord, Generator};
use crate::engine::Atlas;
use crate::ports::LookupError;

create_exception!(
    artin,
    InvalidBraidException,
    PyException,
    "Raised when a generator sequence contains a zero entry."
);

create_exception!(
    artin,
    IllegalTransformationException,
    PyException,
    "Raised when a transformation is invoked while not performable."
);

/// Constructor argument: a catalog name or an explicit generator sequence
#[derive(FromPyObject)]
enum BraidInit {
    Name(String),
    Generators(Vec<Generator>),
}

fn braid_err(err: BraidError) -> PyErr {
    match err {
        BraidError::ZeroGenerator { .. } => InvalidBraidException::new_err(err.to_string()),
        BraidError::IllegalTransformation { .. } => {
            IllegalTransformationException::new_err(err.to_string())
        }
    }
}

fn lookup_err(err: LookupError) -> PyErr {
    match err {
        LookupError::UnknownName(_) => PyKeyError::new_err(err.to_string()),
        LookupError::InvalidRecord { .. } => InvalidBraidException::new_err(err.to_string()),
    }
}

/// Braid word over signed Artin generators
///
/// Constructible from a generator list or a knot identifier resolved
/// through the standard catalog.
#[pyclass(name = "Braid")]
pub struct PyBraid {
    inner: BraidWord,
}

#[pymethods]
impl PyBraid {
    /// Create a braid word
    ///
    /// Args:
    ///     init: Either a list of nonzero signed generators, or a knot
    ///           identifier such as "3_1"
    #[new]
    fn new(init: BraidInit) -> PyResult<Self> {
        let inner = match init {
            BraidInit::Name(name) => Atlas::new().word(&name).map_err(lookup_err)?,
            BraidInit::Generators(generators) => BraidWord::new(generators).map_err(braid_err)?,
        };

        Ok(Self { inner })
    }

    /// Strand count and generator sequence as a (n, list) pair
    fn values(&self) -> (usize, Vec<Generator>) {
        let (strands, generators) = self.inner.values();
        (strands, generators.to_vec())
    }

    /// Number of strands
    #[getter]
    fn strand_count(&self) -> usize {
        self.inner.strand_count()
    }

    /// The generator sequence
    #[getter]
    fn generators(&self) -> Vec<Generator> {
        self.inner.generators().to_vec()
    }

    /// Append a new top-strand generator and grow by one strand
    #[pyo3(signature = (inverse = false))]
    fn stabilization(&mut self, inverse: bool) {
        self.inner.stabilization(inverse);
    }

    /// Check whether destabilization applies
    fn is_destabilization_performable(&self) -> bool {
        self.inner.is_destabilization_performable()
    }

    /// Remove the trailing top-strand generator and shrink by one strand
    fn destabilization(&mut self) -> PyResult<()> {
        self.inner.destabilization().map_err(braid_err)
    }

    /// Check whether conjugation by `index` applies
    fn is_conjugation_performable(&self, index: Generator) -> bool {
        self.inner.is_conjugation_performable(index)
    }

    /// Surround the word with `index` and its inverse
    fn conjugation(&mut self, index: Generator) -> PyResult<()> {
        self.inner.conjugation(index).map_err(braid_err)
    }

    /// Check whether the Artin relation applies at `index`
    fn is_braid_relation1_performable(&self, index: usize) -> bool {
        self.inner.is_braid_relation1_performable(index)
    }

    /// All indices where the Artin relation applies
    fn braid_relation1_performable_indices(&self) -> Vec<usize> {
        self.inner.braid_relation1_performable_indices()
    }

    /// Rewrite the three-letter window at `index` by the Artin relation
    fn braid_relation1(&mut self, index: usize) -> PyResult<()> {
        self.inner.braid_relation1(index).map_err(braid_err)
    }

    /// Check whether far commutation applies at `index`
    fn is_braid_relation2_performable(&self, index: usize) -> bool {
        self.inner.is_braid_relation2_performable(index)
    }

    /// All indices where far commutation applies
    fn braid_relation2_performable_indices(&self) -> Vec<usize> {
        self.inner.braid_relation2_performable_indices()
    }

    /// Swap the two commuting letters at `index` and `index + 1`
    fn braid_relation2(&mut self, index: usize) -> PyResult<()> {
        self.inner.braid_relation2(index).map_err(braid_err)
    }

    /// Rotate the word one position left
    fn shift_left(&mut self) {
        self.inner.shift_left();
    }

    /// Rotate the word one position right
    fn shift_right(&mut self) {
        self.inner.shift_right();
    }

    /// Rotate the word `amount` positions left
    fn shift_left_with_amount(&mut self, amount: usize) {
        self.inner.shift_left_with_amount(amount);
    }

    /// Rotate the word `amount` positions right
    fn shift_right_with_amount(&mut self, amount: usize) {
        self.inner.shift_right_with_amount(amount);
    }

    /// Check whether free reduction applies at `index`
    fn is_remove_sigma_inverse_pair_performable(&self, index: usize) -> bool {
        self.inner.is_remove_sigma_inverse_pair_performable(index)
    }

    /// All indices where free reduction applies
    fn remove_sigma_inverse_pair_performable_indices(&self) -> Vec<usize> {
        self.inner.remove_sigma_inverse_pair_performable_indices()
    }

    /// Delete the inverse pair at `index` and `index + 1`
    fn remove_sigma_inverse_pair(&mut self, index: usize) -> PyResult<()> {
        self.inner.remove_sigma_inverse_pair(index).map_err(braid_err)
    }

    /// Number of generators in the word
    fn __len__(&self) -> usize {
        self.inner.len()
    }

    fn __repr__(&self) -> String {
        format!(
            "Braid(strands={}, generators={:?})",
            self.inner.strand_count(),
            self.inner.generators()
        )
    }
}

/// Braid-word Python module
#[pymodule]
fn artin(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyBraid>()?;

    m.add(
        "InvalidBraidException",
        m.py().get_type_bound::<InvalidBraidException>(),
    )?;
    m.add(
        "IllegalTransformationException",
        m.py().get_type_bound::<IllegalTransformationException>(),
    )?;

    // Add module docstring
    m.add(
        "__doc__",
        "Braid words over signed Artin generators: Markov moves, braid relations, free reduction",
    )?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
