pub mod task;

pub use task::{launch_command, LaunchController, LaunchHandle};
