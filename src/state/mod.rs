pub mod touch;

pub use touch::{GestureStart, TouchPhase, TouchState};
