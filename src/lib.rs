pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod pages;
pub mod storage;
pub mod ui;
