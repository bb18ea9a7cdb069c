// Service module exports

pub mod clock;
pub mod config;
pub mod countdown;
