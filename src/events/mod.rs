mod pointer;
mod viewport;

pub use pointer::wire_pointer;
pub use viewport::wire_viewport;
