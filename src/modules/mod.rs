pub mod applications;
pub mod auth;
pub mod catalog;
pub mod companies;
pub mod contact;
pub mod jobs;
pub mod profiles;
