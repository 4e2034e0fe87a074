//! Desktop lab directory for the Rede Fab Lab network.
//!
//! This crate provides a Dioxus desktop application that shows the lab
//! directory as a filterable list beside a Leaflet map.

pub mod bridge;
pub mod components;
pub mod state;
pub mod theme;
