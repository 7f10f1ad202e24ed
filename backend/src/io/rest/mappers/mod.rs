//! Conversions between domain types and the `shared` DTOs.

pub mod calendar_mapper;
pub mod goal_mapper;
pub mod smart_guide_mapper;

pub use calendar_mapper::CalendarMapper;
pub use goal_mapper::GoalMapper;
pub use smart_guide_mapper::SmartGuideMapper;
