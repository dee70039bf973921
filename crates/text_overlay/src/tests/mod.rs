//! Label scenario tests
//!
//! Exercise [`TextLabel`](crate::TextLabel) end to end against scripted
//! collaborators and the recording backend.

mod support;
