//! Core configuration types shared by every operation

pub mod config;
