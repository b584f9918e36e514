mod config;
mod driver;
mod session;
