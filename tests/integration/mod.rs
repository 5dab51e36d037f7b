//! Integration tests for the depgraph binary

mod helpers;
mod test_export;
mod test_queries;
mod test_summary;
