//! Общие примитивы, не зависящие от конкретного формата кода.

pub mod error;
pub mod pad;
pub mod random;
pub mod types;
