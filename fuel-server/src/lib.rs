//! Fuel route optimizer server.
//!
//! A web service that answers: "driving from A to B in the USA,
//! where should I buy fuel to spend the least?"

pub mod cache;
pub mod domain;
pub mod mapquest;
pub mod planner;
pub mod stations;
pub mod web;
