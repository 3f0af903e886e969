#[cfg(feature = "test-controller")]
mod live;
