//! Геометрия на плоскости арены
//!
//! Чистые функции без состояния. Векторы это `Vec2` из Bevy (сложение/вычитание
//! покомпонентно через операторы).

pub mod angle;
pub mod orientation;


pub use angle::{bearing, correction_to, planar_distance};
pub use orientation::facing_vector;
