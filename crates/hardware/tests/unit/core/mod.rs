pub mod gpr;
pub mod lifecycle;
