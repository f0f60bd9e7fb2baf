pub mod mul_div;
pub mod time;

pub use mul_div::*;
pub use time::*;
