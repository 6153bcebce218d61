//! London rail journey planner server.
//!
//! A web service that answers: "how do I get between these two stations
//! by Tube, DLR, Elizabeth line or Overground, and which stops will I pass
//! through on the way?"

pub mod cache;
pub mod config;
pub mod domain;
pub mod planner;
pub mod tfl;
pub mod web;
