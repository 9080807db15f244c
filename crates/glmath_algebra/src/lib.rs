#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod matrix;
pub mod number_traits;
pub mod quaternion;
pub mod vector;
