pub mod analyze;
pub mod badges;
pub mod validate;
