pub mod config;
pub mod consts;
pub mod error;
pub mod fingers;
pub mod layouts;
pub mod remap;
pub mod symbol;
pub mod timing;

pub use crate::timing::{Accumulator, Estimator, KeyingTable, Stroke};
