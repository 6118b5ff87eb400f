mod app;
mod controller;
mod dom;
mod persistence;
mod surface;
mod swatches;

pub use app::run;
