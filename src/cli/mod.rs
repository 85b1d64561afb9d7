mod args;

pub use args::{CliArgs, Command, CommonArgs, PivotRule};
