pub mod alert;
pub mod badge;
pub mod button;
pub mod card;
pub mod empty_state;
pub mod form;
pub mod list_item;
pub mod loading;
pub mod markdown;
pub mod modal;
pub mod navbar;
pub mod recipe_modal;
pub mod schedule_task;
pub mod star_rating;
pub mod tabs;
pub mod task_associations_modal;
pub mod zone_modal;
