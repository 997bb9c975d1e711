pub mod align;
pub mod export;
pub mod method;
pub mod model;
