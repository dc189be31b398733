mod fixtures;
mod test_app;

pub use fixtures::*;
pub use test_app::{TestApp, TestAppBuilder};
