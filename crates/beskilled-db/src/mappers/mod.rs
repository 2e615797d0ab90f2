//! Entity ↔ model mappers

mod message;
mod rating;
mod report;
mod skill;
mod swap;
mod user;
