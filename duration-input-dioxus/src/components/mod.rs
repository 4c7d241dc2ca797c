mod duration_input;

pub use duration_input::DurationInput;
