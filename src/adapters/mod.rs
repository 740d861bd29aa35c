pub mod dialoguer_prompter;
pub mod distribution_filesystem;
pub mod kubectl_command;
pub mod minijinja_renderer;
