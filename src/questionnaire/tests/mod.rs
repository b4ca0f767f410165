mod analysis;
mod common;
mod tags;
