//! File readers for the delta analysis command line
//!
//! - [`read_param_file`]: parameter names and bounds
//! - [`load_matrix`]: the `N × D` model input sample
//! - [`load_vector`]: one column of model outputs
//!
//! # Example
//!
//! ```rust,no_run
//! use sensitivity_io::{load_matrix, load_vector, read_param_file, Delimiter};
//!
//! let problem = read_param_file("params.txt")?;
//! let x = load_matrix("model_input.txt", Delimiter::Whitespace, None)?;
//! let y = load_vector("model_output.txt", Delimiter::Whitespace, 0)?;
//! assert_eq!(x.ncols(), problem.num_vars());
//! assert_eq!(x.nrows(), y.len());
//! # Ok::<(), sensitivity_io::LoadError>(())
//! ```

mod error;
mod loader;
mod param_file;

pub use error::{LoadError, Result};
pub use loader::{load_matrix, load_vector, read_rows, Delimiter};
pub use param_file::{parse_params, read_param_file, read_param_file_with};
