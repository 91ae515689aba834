mod config;
mod up;
