pub mod lifecycle;
pub mod rate;
