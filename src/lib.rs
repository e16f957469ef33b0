// ABOUTME: Library crate for classroom-notify exposing the notification center and dashboard UI

pub mod app;
pub mod components;
pub mod config;
pub mod models;
pub mod notification;
