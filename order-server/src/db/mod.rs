//! Storage Module
//!
//! In-memory storage behind repository traits. Swapping in a durable
//! backend means implementing the traits in [`repository`].

pub mod repository;
