pub mod entities;
pub mod matcher;
pub mod policies;
pub mod ports;
pub mod services;
pub mod value_objects;
