pub mod controller;
pub mod dtos;
