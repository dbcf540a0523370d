pub mod io;
pub mod rgba;
pub mod traits;

pub use self::rgba::{ImageRgba8, CHANNELS};
pub use self::traits::{ImageView, Rows};
