pub mod config;
pub mod logging;

pub mod convert;
pub mod diagnostics;
pub mod error;
pub mod export;
pub mod index;
pub mod netscape;
pub mod tree;

pub use convert::{convert, convert_str, Conversion, ConversionStats};
pub use error::ConvertError;
