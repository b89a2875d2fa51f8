#![allow(dead_code)]

pub mod app;
pub mod asserts;
pub mod builders;
pub mod headers;
