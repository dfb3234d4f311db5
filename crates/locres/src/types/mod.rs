mod culture;
mod value;

pub use culture::{Ancestors, Culture};
pub use value::Value;
