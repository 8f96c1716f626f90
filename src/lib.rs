pub mod cli;
pub mod pordego;
