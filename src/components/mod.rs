//! UI components shared by the pages.

pub mod diagram;
pub mod layout;
