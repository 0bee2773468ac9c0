pub mod notice;
pub mod pager;
pub mod query_bar;
pub mod sentinel;
