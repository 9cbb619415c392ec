//! Data transfer types shared by the HTTP surface.

pub mod api;
pub mod war;
