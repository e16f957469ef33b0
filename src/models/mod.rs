// ABOUTME: Core data models for the classroom dashboard

pub mod course;

pub use course::Course;
