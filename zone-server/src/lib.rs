//! London fare-zone finder server.
//!
//! A web application that answers: "I have a London postcode,
//! which TfL fare zone is it in?"

pub mod controller;
pub mod lookup;
pub mod web;
