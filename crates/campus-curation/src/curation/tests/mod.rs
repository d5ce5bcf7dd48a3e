mod common;
mod diff;
