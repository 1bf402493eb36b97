//! Crate-wide `Result` alias and re-exports of the `failure` helpers used
//! throughout. These are for internal-invariant violations (a malformed
//! `AST` the compiler should never have produced); runtime errors visible
//! to the interpreted program travel as `Value::Exception` instead, see
//! `errtype`.

use failure::Error;

pub use failure::err_msg;
pub use failure::ResultExt;

pub type Result<T> = ::std::result::Result<T, Error>;
