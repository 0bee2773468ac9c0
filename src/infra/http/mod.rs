pub mod rest_source;
