pub mod about;
pub mod browse;
pub mod check;
pub mod contact;
pub mod experience;
pub mod project;
pub mod projects;
pub mod skills;
