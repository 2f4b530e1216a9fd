pub mod reporting;
