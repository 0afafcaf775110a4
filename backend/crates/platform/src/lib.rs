//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (bcrypt, salted with a fixed work factor)
//! - Access token signing and verification (JWT, HS256)

pub mod password;
pub mod token;
