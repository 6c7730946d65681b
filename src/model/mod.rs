mod application;
mod controller;
mod position;
mod skill;
mod summary;
mod validation;

#[cfg(test)]
mod arbitrary;

pub use application::{Application, Field, ParseFieldError, TextField};
pub use controller::{FieldEdit, FormController};
pub use position::{ParsePositionError, Position};
pub use skill::{ParseSkillError, Skill, Skills};
pub use summary::{Summary, SummaryRow, format_interview_time};
pub use validation::{
    ErrorMap, ExperienceRule, ValidationError, Validator, parse_number, validate,
};
