//! Constellation construction
//!
//! One builder serves every square order:
//! - QPSK (2 bits/symbol)
//! - 16-QAM (4 bits/symbol)
//! - 64-QAM (6 bits/symbol)

mod gray;
mod square_qam;

pub use gray::{amplitude_level, binary_to_gray, gray_ordered_levels};
pub use square_qam::{build_constellation, SquareQam, MAX_BITS_PER_SYMBOL, MIN_NORMALIZATION};
