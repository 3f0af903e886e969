mod auth;
mod collections;
mod files;
mod retry;
