/// API route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `health`: Health check endpoint
/// - `auth`: Registration and login
/// - `todos`: Task list operations
/// - `users`: Public user info and the profile aggregate

pub mod auth;
pub mod health;
pub mod todos;
pub mod users;
