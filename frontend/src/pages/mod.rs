pub mod admin;
pub mod childcare;
pub mod helper;
pub mod meal_times;
pub mod recipes;
pub mod schedule_editor;
pub mod shopping;
pub mod zones;
