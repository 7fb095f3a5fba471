pub mod bfi2;
pub mod mws;
pub mod programming_anxiety;
pub mod psq20;
pub mod statistics;
