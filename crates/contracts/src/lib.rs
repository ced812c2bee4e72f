//! Общие DTO панели управления недвижимостью: сущности и состояние списков.

pub mod domain;
pub mod enums;
pub mod shared;
pub mod system;
