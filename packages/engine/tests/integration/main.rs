
mod auth;
mod catalog;
