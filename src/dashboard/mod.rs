pub mod animation;
pub mod render;
pub mod shell;

pub use shell::{run_shell, ShellCommand, ShellOptions};
