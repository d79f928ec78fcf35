/// System adapters backed by the runtime
mod system_clock;

pub use system_clock::SystemClock;
