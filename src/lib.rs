//! Hotel Booking Availability Engine
//!
//! This crate decides room availability for inclusive date ranges: which
//! room a new booking should get, whether any room is free at all, and which
//! dates are fully occupied across the hotel. Storage is reached through the
//! traits in [`repository`]; [`api`] exposes the engine over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod availability;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
