// libtwn4/src/device/mod.rs

//! Reader front ends over a transport session.

#[cfg(feature = "async")]
pub mod async_reader;
pub mod builder;
pub mod reader;

#[cfg(feature = "async")]
pub use async_reader::AsyncReader;
pub use builder::ReaderBuilder;
pub use reader::Reader;
