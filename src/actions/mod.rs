pub mod exec;
pub mod folders;
pub mod shell;
pub mod svn;
pub mod web;
